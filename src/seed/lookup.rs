//! Query word lookup table.
//!
//! Maps a packed word index to the query offsets where that word occurs
//! (or, in threshold mode, to the offsets of every query word scoring at
//! least the threshold against it). Small word sizes use a direct-address
//! backbone; larger ones fall back to a hash map keyed by the packed
//! index. Chains are plain vectors and grow by the usual amortized
//! doubling.

use log::debug;
use rustc_hash::FxHashMap;

use crate::error::SetupError;
use crate::params::MAX_WORD_SIZE;
use crate::scoring::ScoreSource;
use crate::seed::scan::{index_space, WordIter, WORD_RADIX};
use crate::sequence::{ncbistdaa, SequenceBlock};

/// Largest word size served by the direct-address backbone (28^3 cells).
pub const DIRECT_BACKBONE_MAX_WORD: usize = 3;

/// The 23 residues words are built from, in code order.
const WORD_RESIDUES: [u8; 23] = [
    ncbistdaa::A,
    ncbistdaa::B,
    ncbistdaa::C,
    ncbistdaa::D,
    ncbistdaa::E,
    ncbistdaa::F,
    ncbistdaa::G,
    ncbistdaa::H,
    ncbistdaa::I,
    ncbistdaa::K,
    ncbistdaa::L,
    ncbistdaa::M,
    ncbistdaa::N,
    ncbistdaa::P,
    ncbistdaa::Q,
    ncbistdaa::R,
    ncbistdaa::S,
    ncbistdaa::T,
    ncbistdaa::V,
    ncbistdaa::W,
    ncbistdaa::Y,
    ncbistdaa::Z,
    ncbistdaa::J,
];

enum Backbone {
    Direct(Vec<Vec<u32>>),
    Hashed(FxHashMap<u64, Vec<u32>>),
}

impl Backbone {
    #[inline]
    fn insert(&mut self, index: u64, q_off: u32) {
        match self {
            Backbone::Direct(cells) => cells[index as usize].push(q_off),
            Backbone::Hashed(map) => map.entry(index).or_default().push(q_off),
        }
    }
}

/// Read-only word-to-offsets table, shared by every scan of one query.
pub struct LookupTable {
    word_size: usize,
    threshold: Option<i32>,
    backbone: Backbone,
    longest_chain: usize,
    words_indexed: usize,
}

impl LookupTable {
    /// Index every word of `query`. With `threshold: Some(t)`, a query
    /// word is registered under each word scoring `>= t` against it; the
    /// exact word itself is subject to the same bar, so low-scoring words
    /// can drop out entirely. With `None` the table is exact-match only.
    pub fn build<S: ScoreSource>(
        query: &SequenceBlock,
        word_size: usize,
        threshold: Option<i32>,
        scorer: &S,
    ) -> Result<Self, SetupError> {
        if word_size == 0 || word_size > MAX_WORD_SIZE {
            return Err(SetupError::WordSize(word_size));
        }
        if let Some(rows) = scorer.query_rows() {
            if rows != query.len() {
                return Err(SetupError::PssmLength {
                    rows,
                    query_len: query.len(),
                });
            }
        }

        let mut backbone = if word_size <= DIRECT_BACKBONE_MAX_WORD {
            Backbone::Direct(vec![Vec::new(); index_space(word_size) as usize])
        } else {
            Backbone::Hashed(FxHashMap::default())
        };

        for (q_off, index) in WordIter::new(query.as_slice(), word_size) {
            match threshold {
                None => backbone.insert(index, q_off as u32),
                Some(t) => {
                    let word = &query.as_slice()[q_off..q_off + word_size];
                    add_neighbor_words(&mut backbone, scorer, q_off, word, t);
                }
            }
        }

        let (longest_chain, words_indexed) = match &backbone {
            Backbone::Direct(cells) => {
                let longest = cells.iter().map(Vec::len).max().unwrap_or(0);
                let total = cells.iter().map(Vec::len).sum();
                (longest, total)
            }
            Backbone::Hashed(map) => {
                let longest = map.values().map(Vec::len).max().unwrap_or(0);
                let total = map.values().map(Vec::len).sum();
                (longest, total)
            }
        };

        debug!(
            "lookup table built: word_size={} threshold={:?} words_indexed={} longest_chain={}",
            word_size, threshold, words_indexed, longest_chain
        );

        Ok(Self {
            word_size,
            threshold,
            backbone,
            longest_chain,
            words_indexed,
        })
    }

    /// Query offsets registered under the packed word `index`.
    #[inline(always)]
    pub fn hits(&self, index: u64) -> &[u32] {
        match &self.backbone {
            Backbone::Direct(cells) => &cells[index as usize],
            Backbone::Hashed(map) => map.get(&index).map_or(&[], Vec::as_slice),
        }
    }

    #[inline]
    pub fn word_size(&self) -> usize {
        self.word_size
    }

    #[inline]
    pub fn threshold(&self) -> Option<i32> {
        self.threshold
    }

    /// Length of the longest offset chain, useful for scan-buffer sizing
    /// and tuning.
    #[inline]
    pub fn longest_chain(&self) -> usize {
        self.longest_chain
    }

    /// Total (word, offset) registrations in the table.
    #[inline]
    pub fn words_indexed(&self) -> usize {
        self.words_indexed
    }
}

/// Register `q_off` under every word scoring `>= threshold` against the
/// query word, by branch-and-bound over the word alphabet: a branch is
/// taken only while the partial score plus the best possible remainder can
/// still reach the threshold.
fn add_neighbor_words<S: ScoreSource>(
    backbone: &mut Backbone,
    scorer: &S,
    q_off: usize,
    word: &[u8],
    threshold: i32,
) {
    let w = word.len();
    // suffix_max[i] = best achievable score over positions i..w
    let mut suffix_max = vec![0i32; w + 1];
    for i in (0..w).rev() {
        let best = WORD_RESIDUES
            .iter()
            .map(|&b| scorer.score(q_off + i, word[i], b))
            .max()
            .unwrap_or(0);
        suffix_max[i] = suffix_max[i + 1] + best;
    }
    descend(backbone, scorer, q_off, word, threshold, 0, 0, 0, &suffix_max);
}

#[allow(clippy::too_many_arguments)]
fn descend<S: ScoreSource>(
    backbone: &mut Backbone,
    scorer: &S,
    q_off: usize,
    word: &[u8],
    threshold: i32,
    pos: usize,
    index: u64,
    partial: i32,
    suffix_max: &[i32],
) {
    if pos == word.len() {
        if partial >= threshold {
            backbone.insert(index, q_off as u32);
        }
        return;
    }
    for &b in WORD_RESIDUES.iter() {
        let s = scorer.score(q_off + pos, word[pos], b);
        if partial + s + suffix_max[pos + 1] >= threshold {
            descend(
                backbone,
                scorer,
                q_off,
                word,
                threshold,
                pos + 1,
                index * WORD_RADIX + b as u64,
                partial + s,
                suffix_max,
            );
        }
    }
}
