//! Shared fixtures for the unit tests.

use seedext::core::hsp::HspList;
use seedext::core::word_finder::SearchContext;
use seedext::params::WordParams;
use seedext::scoring::ScoreSource;
use seedext::seed::lookup::LookupTable;
use seedext::sequence::SequenceBlock;
use seedext::stats::SearchStats;

pub fn seq(s: &[u8]) -> SequenceBlock {
    SequenceBlock::from_protein_ascii(s).unwrap()
}

/// Build a lookup table for `query`, scan one subject, and return the
/// HSPs plus the finder's counters.
pub fn scan_one<S: ScoreSource>(
    query: &SequenceBlock,
    subject: &SequenceBlock,
    scorer: &S,
    params: WordParams,
    threshold: Option<i32>,
) -> (HspList, SearchStats) {
    let lookup = LookupTable::build(query, params.word_size, threshold, scorer).unwrap();
    let ctx = SearchContext::new(&lookup, query, scorer, params).unwrap();
    let mut finder = ctx.finder();
    let mut hsps = HspList::new();
    finder.scan(subject, &mut hsps).unwrap();
    (hsps, *finder.stats())
}
