//! Per-diagonal hit tracking.
//!
//! Every candidate seed lives on the diagonal `q_off - s_off`. The table
//! records, per diagonal, the most recent hit (for the two-hit rule) or
//! the rightmost subject offset an extension has already examined (so
//! overlapping hits are never re-extended). Storage is a power-of-two
//! array indexed by the masked diagonal, and all stored positions carry a
//! per-subject generation offset: starting the next subject just advances
//! the offset instead of touching every entry, which keeps "reset for a
//! new subject" O(1) until the offset nears overflow.

/// One diagonal. `flag != 0` means the diagonal is covered: `last_hit`
/// holds an examined-range watermark rather than a hit position.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DiagEntry {
    last_hit: i32,
    flag: u8,
}

impl Default for DiagEntry {
    fn default() -> Self {
        Self { last_hit: 0, flag: 0 }
    }
}

/// What a two-hit observation decided about a fresh word hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DiagOutcome {
    /// Hit lies inside the range a previous extension already examined.
    Covered,
    /// Hit recorded as the diagonal's (new) first hit.
    Slid,
    /// Second hit closer than a word to the first; ignored.
    Overlap,
    /// Second hit within the window: extend. `first_hit_end` is the
    /// subject offset one past the first hit's word, which the left
    /// extension must reach back to.
    Trigger { first_hit_end: u32 },
}

pub(crate) struct DiagTable {
    entries: Vec<DiagEntry>,
    mask: u32,
    offset: i32,
    window: i32,
}

/// Offset ceiling before a full clear is forced.
const OFFSET_CLEAR_LIMIT: i32 = i32::MAX / 4;

impl DiagTable {
    /// Array length depends only on the query length and window: the next
    /// power of two holding `query_len + window`. Distant diagonals that
    /// alias under the mask are tolerated, as the offsets they stored
    /// quickly fall out of the window.
    pub(crate) fn new(query_len: usize, window: i32) -> Self {
        let needed = query_len as i64 + window as i64;
        let mut len: i64 = 1;
        while len < needed {
            len <<= 1;
        }
        Self {
            entries: vec![DiagEntry::default(); len as usize],
            mask: (len - 1) as u32,
            offset: window,
            window,
        }
    }

    #[inline(always)]
    fn coord(&self, q_off: u32, s_off: u32) -> usize {
        (q_off.wrapping_sub(s_off) & self.mask) as usize
    }

    /// Full clear; every diagonal forgets its state.
    pub(crate) fn reset(&mut self) {
        for e in self.entries.iter_mut() {
            e.last_hit = -self.window;
            e.flag = 0;
        }
        self.offset = self.window;
    }

    /// Called after a subject finishes: advance the generation offset so
    /// stale entries can never match the next subject's positions, or fall
    /// back to a full clear when the offset would risk overflow.
    pub(crate) fn finish_subject(&mut self, subject_len: usize) {
        if self.offset >= OFFSET_CLEAR_LIMIT {
            self.reset();
        } else {
            self.offset += subject_len as i32 + self.window;
        }
    }

    /// One-hit mode: eligible unless the hit starts inside the range a
    /// previous extension on this diagonal already examined.
    #[inline]
    pub(crate) fn one_hit_eligible(&self, q_off: u32, s_off: u32) -> bool {
        let e = &self.entries[self.coord(q_off, s_off)];
        s_off as i64 + self.offset as i64 >= e.last_hit as i64
    }

    /// One-hit mode: record the examined watermark after an extension.
    /// `s_last_off` is exclusive, so a word starting exactly there is the
    /// first eligible hit again.
    #[inline]
    pub(crate) fn set_watermark(&mut self, q_off: u32, s_off: u32, s_last_off: u32) {
        let offset = self.offset;
        let idx = self.coord(q_off, s_off);
        let e = &mut self.entries[idx];
        e.last_hit = (s_last_off as i64 + offset as i64) as i32;
    }

    /// Two-hit mode: classify a fresh hit against this diagonal's state
    /// and update the recorded first hit accordingly.
    pub(crate) fn observe_two_hit(&mut self, q_off: u32, s_off: u32, word_size: i32) -> DiagOutcome {
        let offset = self.offset;
        let window = self.window;
        let idx = self.coord(q_off, s_off);
        let e = &mut self.entries[idx];
        let biased = (s_off as i64 + offset as i64) as i32;

        if e.flag != 0 {
            // Covered diagonal: skip hits inside the examined range; a hit
            // beyond it starts a fresh first hit.
            if biased < e.last_hit {
                return DiagOutcome::Covered;
            }
            e.last_hit = biased;
            e.flag = 0;
            return DiagOutcome::Slid;
        }

        let last = e.last_hit as i64 - offset as i64;
        let diff = s_off as i64 - last;
        if diff >= window as i64 {
            e.last_hit = biased;
            return DiagOutcome::Slid;
        }
        if diff < word_size as i64 {
            return DiagOutcome::Overlap;
        }
        DiagOutcome::Trigger {
            first_hit_end: (last + word_size as i64) as u32,
        }
    }

    /// Two-hit mode: update the diagonal after an extension attempt. A
    /// right extension marks the diagonal covered up to just before the
    /// examined end, so the next hit there must start over; a left-only
    /// extension keeps the triggering hit as the first hit.
    pub(crate) fn mark_extended(
        &mut self,
        q_off: u32,
        s_off: u32,
        s_last_off: u32,
        word_size: i32,
        right_extended: bool,
    ) {
        let offset = self.offset;
        let idx = self.coord(q_off, s_off);
        let e = &mut self.entries[idx];
        if right_extended {
            e.flag = 1;
            e.last_hit = (s_last_off as i64 - (word_size as i64 - 1) + offset as i64) as i32;
        } else {
            e.last_hit = (s_off as i64 + offset as i64) as i32;
        }
    }
}
