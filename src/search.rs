//! Batch driver: one query against many subjects.
//!
//! Parallelism lives entirely at this layer, never inside a scan. The
//! lookup table, query and scorer are shared read-only across worker
//! threads; each worker keeps its own finder (diagonal table and
//! counters) and reuses it across the subjects it is handed, so the
//! per-subject reset stays a generation bump instead of an allocation.

use rayon::prelude::*;

use crate::core::hsp::{Hsp, HspList};
use crate::core::word_finder::SearchContext;
use crate::error::Error;
use crate::params::WordParams;
use crate::scoring::ScoreSource;
use crate::seed::lookup::LookupTable;
use crate::sequence::SequenceBlock;
use crate::stats::SearchStats;

/// Per-subject search output.
#[derive(Debug, Clone)]
pub struct SubjectHits {
    pub subject_index: usize,
    /// HSPs in subject-offset order.
    pub hsps: Vec<Hsp>,
    pub stats: SearchStats,
    /// True when the run scored through a position-specific matrix.
    pub pssm: bool,
}

/// Scan every subject against the query, in parallel, returning results
/// in subject order. Setup errors surface before any scanning begins; an
/// allocation failure in any worker aborts the whole batch.
pub fn search_subjects<S: ScoreSource + Sync>(
    lookup: &LookupTable,
    query: &SequenceBlock,
    scorer: &S,
    params: WordParams,
    subjects: &[SequenceBlock],
) -> Result<Vec<SubjectHits>, Error> {
    let ctx = SearchContext::new(lookup, query, scorer, params)?;
    let pssm = scorer.uses_pssm();

    let results: Result<Vec<SubjectHits>, Error> = subjects
        .par_iter()
        .enumerate()
        .map_init(
            || ctx.finder(),
            |finder, (subject_index, subject)| {
                finder.reset_stats();
                let mut hsps = HspList::new();
                finder.scan(subject, &mut hsps)?;
                Ok(SubjectHits {
                    subject_index,
                    hsps: hsps.into_vec(),
                    stats: *finder.stats(),
                    pssm,
                })
            },
        )
        .collect();

    results
}
