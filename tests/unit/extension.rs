//! Extension engine behavior: score accumulation, X-drop termination,
//! boundary handling.

use crate::helpers::seq;
use seedext::core::extend::{extend_one_hit, extend_two_hit};
use seedext::scoring::{Pssm, SubstMatrix};

#[test]
fn test_score_is_analytic_sum() {
    // q and s differ at exactly one flanking position left of the seed;
    // with +1/-1 scoring the best segment is the whole overlap:
    // 10 matches - 1 mismatch = 9
    let q = seq(b"GAWTMKVWERT");
    let s = seq(b"GACTMKVWERT");
    let m = SubstMatrix::match_mismatch(1, -1);
    let ext = extend_one_hit(&m, q.as_slice(), s.as_slice(), 4, 4, 3, 20);
    assert_eq!(ext.score, 9);
    assert_eq!(ext.q_start, 0);
    assert_eq!(ext.s_start, 0);
    assert_eq!(ext.length, 11);
}

#[test]
fn test_x_drop_stops_at_known_offset() {
    // one match after the seed word, then mismatches forever; with
    // x_dropoff 2 the walk must stop after the third mismatch, having
    // examined subject offsets 3..7
    let q = seq(b"MKVAGGGGGGGG");
    let s = seq(b"MKVACCCCCCCC");
    let m = SubstMatrix::match_mismatch(1, -1);
    let ext = extend_one_hit(&m, q.as_slice(), s.as_slice(), 0, 0, 3, 2);
    assert_eq!(ext.score, 4);
    assert_eq!(ext.length, 4);
    assert_eq!(ext.s_last_off, 7);
}

#[test]
fn test_drop_equal_to_x_keeps_walking() {
    // the running score dips exactly x_dropoff below the best, then
    // recovers past it; termination is strict, so the walk survives
    let q = seq(b"MKVAGGAAAA");
    let s = seq(b"MKVACCAAAA");
    let m = SubstMatrix::match_mismatch(1, -1);
    let ext = extend_one_hit(&m, q.as_slice(), s.as_slice(), 0, 0, 3, 2);
    // 4 (seed+match), dip to 2 over two mismatches, then 4 matches: 6
    assert_eq!(ext.score, 6);
    assert_eq!(ext.length, 10);
}

#[test]
fn test_extension_bounded_by_sequence_start() {
    let q = seq(b"MKVLAT");
    let s = seq(b"MKVLAT");
    let m = SubstMatrix::match_mismatch(1, -1);
    let ext = extend_one_hit(&m, q.as_slice(), s.as_slice(), 0, 0, 3, 10);
    assert_eq!(ext.q_start, 0);
    assert_eq!(ext.length, 6);
    assert_eq!(ext.s_last_off, 6);
}

#[test]
fn test_two_hit_requires_bridge() {
    // identical flanking words nine apart, hostile middle: the left walk
    // cannot reach back to the first hit, so no right extension runs
    let q = seq(b"CATFFFFFFCAT");
    let s = seq(b"CATYYYYYYCAT");
    let m = SubstMatrix::match_mismatch(1, -1);
    let r = extend_two_hit(&m, q.as_slice(), s.as_slice(), 3, 9, 9, 3, 10);
    assert!(!r.right_extended);
    assert_eq!(r.ext.score, 3);
    assert_eq!(r.ext.length, 3);
    assert_eq!(r.ext.s_last_off, 12);
}

#[test]
fn test_two_hit_bridged_extension_covers_both_words() {
    let q = seq(b"CATWERCAT");
    let s = seq(b"CATWERCAT");
    let m = SubstMatrix::match_mismatch(1, -1);
    let r = extend_two_hit(&m, q.as_slice(), s.as_slice(), 3, 6, 6, 3, 10);
    assert!(r.right_extended);
    assert_eq!(r.ext.q_start, 0);
    assert_eq!(r.ext.s_start, 0);
    assert_eq!(r.ext.length, 9);
    assert_eq!(r.ext.score, 9);
}

#[test]
fn test_pssm_and_matrix_walks_agree() {
    let q = seq(b"GAWTMKVWERT");
    let s = seq(b"GACTMKVWERT");
    let m = SubstMatrix::blosum62();
    let p = Pssm::from_matrix(&m, &q);
    let a = extend_one_hit(&m, q.as_slice(), s.as_slice(), 4, 4, 3, 15);
    let b = extend_one_hit(&p, q.as_slice(), s.as_slice(), 4, 4, 3, 15);
    assert_eq!(a, b);
    let a2 = extend_two_hit(&m, q.as_slice(), s.as_slice(), 3, 7, 7, 3, 15);
    let b2 = extend_two_hit(&p, q.as_slice(), s.as_slice(), 3, 7, 7, 3, 15);
    assert_eq!(a2, b2);
}
