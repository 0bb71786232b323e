//! Aggregate scan counters.
//!
//! Purely observational: nothing in the search consults these. One
//! instance belongs to one finder, so plain integers suffice.

/// Counters accumulated across every subject a finder has scanned.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Word windows looked up (ambiguous windows never reach the table).
    pub words_examined: u64,
    /// Query offsets returned across all lookups.
    pub lookup_hits: u64,
    /// Hits skipped because their diagonal range was already examined, or
    /// because they overlapped the recorded first hit.
    pub hits_suppressed: u64,
    /// Two-hit window slides (the new hit became the first hit).
    pub window_slides: u64,
    pub extensions_triggered: u64,
    /// Extensions whose score reached the cutoff.
    pub extensions_succeeded: u64,
}

impl SearchStats {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
