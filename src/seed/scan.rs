//! Rolling word-window iteration over a residue buffer.

use crate::sequence::{is_word_residue, BLASTAA_SIZE};

/// Radix used to pack a word of residues into an integer index.
pub const WORD_RADIX: u64 = BLASTAA_SIZE as u64;

/// Number of index values for a given word size.
#[inline]
pub fn index_space(word_size: usize) -> u64 {
    WORD_RADIX.pow(word_size as u32)
}

/// Iterates every full word window of a sequence, yielding
/// `(window_start, packed_index)`. The packed index is the radix-28 value
/// of the window's residues, most significant first.
///
/// Any window containing a non-word residue (gap, `X`, `U`, `O`, `*`) is
/// skipped entirely: the run counter resets on the offending residue and
/// windows resume only once a full word of clean residues has passed. This
/// is how masked and ambiguous regions stay out of both the lookup table
/// and the subject scan.
pub struct WordIter<'a> {
    seq: &'a [u8],
    word_size: usize,
    /// `WORD_RADIX^(word_size - 1)`, the modulus that drops the oldest
    /// residue from the rolling index.
    high_place: u64,
    index: u64,
    run: usize,
    pos: usize,
}

impl<'a> WordIter<'a> {
    pub fn new(seq: &'a [u8], word_size: usize) -> Self {
        debug_assert!(word_size >= 1);
        Self {
            seq,
            word_size,
            high_place: WORD_RADIX.pow(word_size as u32 - 1),
            index: 0,
            run: 0,
            pos: 0,
        }
    }
}

impl<'a> Iterator for WordIter<'a> {
    type Item = (usize, u64);

    fn next(&mut self) -> Option<(usize, u64)> {
        while self.pos < self.seq.len() {
            let r = self.seq[self.pos];
            self.pos += 1;
            if !is_word_residue(r) {
                self.run = 0;
                self.index = 0;
                continue;
            }
            self.index = (self.index % self.high_place) * WORD_RADIX + r as u64;
            self.run += 1;
            if self.run >= self.word_size {
                return Some((self.pos - self.word_size, self.index));
            }
        }
        None
    }
}

/// Pack an explicit word (e.g. during neighborhood generation) into its
/// index.
#[inline]
pub fn pack_word(word: &[u8]) -> u64 {
    word.iter().fold(0u64, |acc, &r| acc * WORD_RADIX + r as u64)
}
