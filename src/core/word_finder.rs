//! The word-finder driver.
//!
//! [`SearchContext`] validates a (lookup, query, scorer, parameters)
//! quartet once; [`WordFinder`] then scans subjects against it. A finder
//! owns the mutable per-scan state (diagonal table, counters) and must be
//! private to one thread; the context and everything it borrows are
//! read-only and safely shared.

use log::debug;

use crate::core::diag::{DiagOutcome, DiagTable};
use crate::core::extend::{extend_one_hit, extend_two_hit};
use crate::core::hsp::{Hsp, HspList};
use crate::error::{SearchError, SetupError};
use crate::params::{HitMode, WordParams};
use crate::scoring::ScoreSource;
use crate::seed::lookup::LookupTable;
use crate::seed::scan::WordIter;
use crate::sequence::SequenceBlock;
use crate::stats::SearchStats;

/// A validated search configuration. Construction performs every setup
/// check; afterwards [`finder`](Self::finder) hands out scan state
/// infallibly, one finder per thread.
pub struct SearchContext<'a, S: ScoreSource> {
    lookup: &'a LookupTable,
    query: &'a SequenceBlock,
    scorer: &'a S,
    params: WordParams,
}

impl<'a, S: ScoreSource> SearchContext<'a, S> {
    pub fn new(
        lookup: &'a LookupTable,
        query: &'a SequenceBlock,
        scorer: &'a S,
        params: WordParams,
    ) -> Result<Self, SetupError> {
        params.validate()?;
        if lookup.word_size() != params.word_size {
            return Err(SetupError::WordSizeMismatch {
                lookup: lookup.word_size(),
                params: params.word_size,
            });
        }
        if let Some(rows) = scorer.query_rows() {
            if rows != query.len() {
                return Err(SetupError::PssmLength {
                    rows,
                    query_len: query.len(),
                });
            }
        }
        debug!(
            "search context: word_size={} x_dropoff={} cutoff={} hit_mode={:?} pssm={}",
            params.word_size,
            params.x_dropoff,
            params.cutoff_score,
            params.hit_mode,
            scorer.uses_pssm()
        );
        Ok(Self {
            lookup,
            query,
            scorer,
            params,
        })
    }

    pub fn params(&self) -> &WordParams {
        &self.params
    }

    /// Fresh per-thread scan state bound to this context.
    pub fn finder(&self) -> WordFinder<'a, S> {
        WordFinder {
            lookup: self.lookup,
            query: self.query,
            scorer: self.scorer,
            params: self.params,
            diag: DiagTable::new(self.query.len(), self.params.diag_window()),
            stats: SearchStats::default(),
        }
    }
}

/// Scans subjects for word hits and drives extension. Reusable across
/// subjects: the diagonal table resets by generation advance between
/// scans, so consecutive calls stay cheap.
pub struct WordFinder<'a, S: ScoreSource> {
    lookup: &'a LookupTable,
    query: &'a SequenceBlock,
    scorer: &'a S,
    params: WordParams,
    diag: DiagTable,
    stats: SearchStats,
}

impl<'a, S: ScoreSource> WordFinder<'a, S> {
    /// Scan one subject, appending every extension scoring at least the
    /// cutoff to `out` in subject-offset order. Coverage is recorded from
    /// the examined range whether or not the cutoff was met, so
    /// overlapping seeds never re-extend. The only runtime failure is an
    /// allocation failure while growing `out`; an empty result is an
    /// ordinary outcome.
    pub fn scan(&mut self, subject: &SequenceBlock, out: &mut HspList) -> Result<(), SearchError> {
        let word_size = self.params.word_size;
        let x_dropoff = self.params.x_dropoff;
        let cutoff = self.params.cutoff_score;
        let query = self.query.as_slice();
        let subj = subject.as_slice();

        for (s_off, index) in WordIter::new(subj, word_size) {
            self.stats.words_examined += 1;
            let chain = self.lookup.hits(index);
            if chain.is_empty() {
                continue;
            }
            self.stats.lookup_hits += chain.len() as u64;

            for &q_off in chain {
                match self.params.hit_mode {
                    HitMode::OneHit => {
                        if !self.diag.one_hit_eligible(q_off, s_off as u32) {
                            self.stats.hits_suppressed += 1;
                            continue;
                        }
                        self.stats.extensions_triggered += 1;
                        let ext = extend_one_hit(
                            self.scorer,
                            query,
                            subj,
                            q_off as usize,
                            s_off,
                            word_size,
                            x_dropoff,
                        );
                        self.diag
                            .set_watermark(q_off, s_off as u32, ext.s_last_off as u32);
                        if ext.score >= cutoff {
                            self.stats.extensions_succeeded += 1;
                            out.push(Hsp {
                                q_start: ext.q_start,
                                s_start: ext.s_start,
                                length: ext.length,
                                score: ext.score,
                            })?;
                        }
                    }
                    HitMode::TwoHit { .. } => {
                        match self.diag.observe_two_hit(q_off, s_off as u32, word_size as i32) {
                            DiagOutcome::Covered | DiagOutcome::Overlap => {
                                self.stats.hits_suppressed += 1;
                            }
                            DiagOutcome::Slid => {
                                self.stats.window_slides += 1;
                            }
                            DiagOutcome::Trigger { first_hit_end } => {
                                self.stats.extensions_triggered += 1;
                                let two = extend_two_hit(
                                    self.scorer,
                                    query,
                                    subj,
                                    first_hit_end as usize,
                                    q_off as usize,
                                    s_off,
                                    word_size,
                                    x_dropoff,
                                );
                                self.diag.mark_extended(
                                    q_off,
                                    s_off as u32,
                                    two.ext.s_last_off as u32,
                                    word_size as i32,
                                    two.right_extended,
                                );
                                if two.ext.score >= cutoff {
                                    self.stats.extensions_succeeded += 1;
                                    out.push(Hsp {
                                        q_start: two.ext.q_start,
                                        s_start: two.ext.s_start,
                                        length: two.ext.length,
                                        score: two.ext.score,
                                    })?;
                                }
                            }
                        }
                    }
                }
            }
        }

        self.diag.finish_subject(subject.len());
        debug!(
            "scan done: subject_len={} hsps={} stats={:?}",
            subject.len(),
            out.len(),
            self.stats
        );
        Ok(())
    }

    /// Counters accumulated since construction or the last
    /// [`reset_stats`](Self::reset_stats).
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Whether this search scores through a position-specific matrix.
    pub fn uses_pssm(&self) -> bool {
        self.scorer.uses_pssm()
    }
}
