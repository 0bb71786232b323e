//! Word finder driver: end-to-end scans, counters, setup validation.

use crate::helpers::{scan_one, seq};
use seedext::core::hsp::HspList;
use seedext::core::word_finder::SearchContext;
use seedext::error::SetupError;
use seedext::params::{HitMode, WordParams};
use seedext::scoring::{Pssm, SubstMatrix};
use seedext::seed::lookup::LookupTable;

fn one_hit_params(x_dropoff: i32, cutoff: i32) -> WordParams {
    WordParams {
        word_size: 3,
        x_dropoff,
        cutoff_score: cutoff,
        hit_mode: HitMode::OneHit,
    }
}

#[test]
fn test_round_trip_identity_match() {
    // identity scoring +5/0: the full alignment of MKVLAT inside the
    // subject scores 30 and is reported exactly once
    let query = seq(b"MKVLAT");
    let subject = seq(b"XXMKVLATXX");
    let m = SubstMatrix::match_mismatch(5, 0);
    let (hsps, stats) = scan_one(&query, &subject, &m, one_hit_params(10, 15), None);

    assert_eq!(hsps.len(), 1);
    let h = &hsps.as_slice()[0];
    assert_eq!(h.q_start, 0);
    assert_eq!(h.s_start, 2);
    assert_eq!(h.length, 6);
    assert_eq!(h.score, 30);

    // the three following seeds on the same diagonal are inside the
    // examined range and never re-extend
    assert_eq!(stats.extensions_triggered, 1);
    assert_eq!(stats.extensions_succeeded, 1);
    assert_eq!(stats.hits_suppressed, 3);
    // only the four unmasked windows were ever looked up
    assert_eq!(stats.words_examined, 4);
}

#[test]
fn test_no_shared_words_is_empty_not_error() {
    let query = seq(b"MKVLAT");
    let subject = seq(b"GGGGGGGG");
    let m = SubstMatrix::match_mismatch(5, 0);
    let (hsps, stats) = scan_one(&query, &subject, &m, one_hit_params(10, 15), None);

    assert!(hsps.is_empty());
    assert_eq!(stats.extensions_triggered, 0);
    assert_eq!(stats.lookup_hits, 0);
    assert_eq!(stats.words_examined, 6);
}

#[test]
fn test_masked_windows_never_seed() {
    // subject windows overlapping the X are skipped: two seeds only, one
    // per clean CAT, neither anchored inside the masked region
    let query = seq(b"CAT");
    let subject = seq(b"CATXCAT");
    let m = SubstMatrix::match_mismatch(1, -1);
    let (hsps, stats) = scan_one(&query, &subject, &m, one_hit_params(5, 3), None);

    assert_eq!(stats.words_examined, 2);
    assert_eq!(hsps.len(), 2);
    assert_eq!(hsps.as_slice()[0].s_start, 0);
    assert_eq!(hsps.as_slice()[1].s_start, 4);
}

#[test]
fn test_hsps_in_subject_order() {
    let query = seq(b"CAT");
    let subject = seq(b"CATGGGGCATGGGGCAT");
    let m = SubstMatrix::match_mismatch(1, -1);
    let (hsps, _) = scan_one(&query, &subject, &m, one_hit_params(5, 3), None);

    let starts: Vec<usize> = hsps.iter().map(|h| h.s_start).collect();
    assert_eq!(starts, vec![0, 7, 14]);
}

#[test]
fn test_below_cutoff_counts_but_does_not_report() {
    let query = seq(b"MKV");
    let subject = seq(b"AAMKVAA");
    let m = SubstMatrix::match_mismatch(1, -1);
    let (hsps, stats) = scan_one(&query, &subject, &m, one_hit_params(5, 100), None);

    assert!(hsps.is_empty());
    assert_eq!(stats.extensions_triggered, 1);
    assert_eq!(stats.extensions_succeeded, 0);
}

#[test]
fn test_repeated_scans_are_deterministic() {
    let query = seq(b"MKVLATWERQCATNNDE");
    let subject = seq(b"TTMKVLATWERQCATNNDETT");
    let m = SubstMatrix::blosum62();
    let params = WordParams {
        word_size: 3,
        x_dropoff: 12,
        cutoff_score: 15,
        hit_mode: HitMode::TwoHit { window: 40 },
    };

    let lookup = LookupTable::build(&query, 3, Some(11), &m).unwrap();
    let ctx = SearchContext::new(&lookup, &query, &m, params).unwrap();

    let mut first = HspList::new();
    ctx.finder().scan(&subject, &mut first).unwrap();
    let mut second = HspList::new();
    ctx.finder().scan(&subject, &mut second).unwrap();

    assert!(!first.is_empty());
    assert_eq!(first.as_slice(), second.as_slice());
}

#[test]
fn test_finder_reuse_across_subjects() {
    // one finder, several subjects: the generation reset must keep
    // results identical to fresh finders
    let query = seq(b"MKVLATWERQ");
    let m = SubstMatrix::blosum62();
    let params = one_hit_params(10, 12);
    let lookup = LookupTable::build(&query, 3, None, &m).unwrap();
    let ctx = SearchContext::new(&lookup, &query, &m, params).unwrap();

    let subjects = [
        seq(b"GGMKVLATWERQGG"),
        seq(b"MKVLATWERQ"),
        seq(b"GGMKVLATWERQGG"),
    ];

    let mut reused = ctx.finder();
    for subject in &subjects {
        let mut from_reused = HspList::new();
        reused.scan(subject, &mut from_reused).unwrap();

        let mut fresh = ctx.finder();
        let mut from_fresh = HspList::new();
        fresh.scan(subject, &mut from_fresh).unwrap();

        assert_eq!(from_reused.as_slice(), from_fresh.as_slice());
    }
}

#[test]
fn test_pssm_run_matches_matrix_run() {
    let query = seq(b"MKVLATWERQCAT");
    let subject = seq(b"GGMKVLATWERQCATGG");
    let m = SubstMatrix::blosum62();
    let p = Pssm::from_matrix(&m, &query);
    let params = WordParams {
        word_size: 3,
        x_dropoff: 12,
        cutoff_score: 15,
        hit_mode: HitMode::TwoHit { window: 40 },
    };

    let (from_matrix, stats_m) = scan_one(&query, &subject, &m, params, None);
    let (from_pssm, stats_p) = scan_one(&query, &subject, &p, params, None);

    assert_eq!(from_matrix.as_slice(), from_pssm.as_slice());
    assert_eq!(stats_m, stats_p);
}

#[test]
fn test_setup_errors_precede_scanning() {
    let query = seq(b"MKVLAT");
    let m = SubstMatrix::blosum62();
    let lookup = LookupTable::build(&query, 3, None, &m).unwrap();

    // word size disagreement between table and parameters
    let mut params = one_hit_params(10, 15);
    params.word_size = 4;
    assert_eq!(
        SearchContext::new(&lookup, &query, &m, params).err(),
        Some(SetupError::WordSizeMismatch { lookup: 3, params: 4 })
    );

    // PSSM built for a different query length
    let other = seq(b"MKVLATQQQ");
    let p = Pssm::from_matrix(&m, &other);
    assert_eq!(
        SearchContext::new(&lookup, &query, &p, one_hit_params(10, 15)).err(),
        Some(SetupError::PssmLength {
            rows: 9,
            query_len: 6
        })
    );

    // invalid dropoff
    let mut params = one_hit_params(10, 15);
    params.x_dropoff = -3;
    assert_eq!(
        SearchContext::new(&lookup, &query, &m, params).err(),
        Some(SetupError::Dropoff(-3))
    );
}

#[test]
fn test_neighborhood_seeding_finds_inexact_words() {
    // the subject contains no exact query word, but MKI scores
    // 5 + 5 + 3 = 13 against MKV under BLOSUM62, so threshold 11 seeds it
    let query = seq(b"MKVLAT");
    let subject = seq(b"GGMKILATGG");
    let m = SubstMatrix::blosum62();
    let params = one_hit_params(16, 12);

    let (exact, _) = scan_one(&query, &subject, &m, params, None);
    let (neighbored, stats) = scan_one(&query, &subject, &m, params, Some(11));

    assert_eq!(
        exact.len(),
        1,
        "LAT is still an exact shared word: {:?}",
        exact.as_slice()
    );
    assert!(!neighbored.is_empty());
    assert!(stats.extensions_triggered >= 1);
    // the neighborhood run must find an alignment reaching back to the
    // MKI region
    assert!(neighbored.iter().any(|h| h.s_start <= 2));
}
