//! Word-finding and extension parameters.

use crate::error::SetupError;

/// Largest supported word size.
pub const MAX_WORD_SIZE: usize = 7;

/// Seeding policy: extend on every lookup hit, or require two hits on one
/// diagonal within `window` before committing to an extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitMode {
    OneHit,
    /// A second hit triggers extension only when it lies at least
    /// `word_size` and less than `window` subject positions to the right
    /// of the recorded first hit; a hit at `window` or beyond slides the
    /// window and becomes the new first hit.
    TwoHit { window: i32 },
}

/// Search configuration, constructed by the caller and read-only for the
/// duration of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordParams {
    pub word_size: usize,
    /// Maximum allowed drop below the best score before a walk terminates.
    pub x_dropoff: i32,
    /// Minimum score an extension must reach to be reported as an HSP.
    pub cutoff_score: i32,
    pub hit_mode: HitMode,
}

impl Default for WordParams {
    fn default() -> Self {
        Self {
            word_size: 3,
            x_dropoff: 16,
            cutoff_score: 20,
            hit_mode: HitMode::TwoHit { window: 40 },
        }
    }
}

impl WordParams {
    /// Check the configuration once, before any scanning begins.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.word_size == 0 || self.word_size > MAX_WORD_SIZE {
            return Err(SetupError::WordSize(self.word_size));
        }
        if self.x_dropoff < 0 {
            return Err(SetupError::Dropoff(self.x_dropoff));
        }
        if self.cutoff_score < 1 {
            return Err(SetupError::Cutoff(self.cutoff_score));
        }
        if let HitMode::TwoHit { window } = self.hit_mode {
            if window < self.word_size as i32 {
                return Err(SetupError::Window {
                    window,
                    word_size: self.word_size,
                });
            }
        }
        Ok(())
    }

    /// Diagonal-table window: the two-hit gap bound, or zero when every
    /// hit is immediately eligible.
    pub(crate) fn diag_window(&self) -> i32 {
        match self.hit_mode {
            HitMode::OneHit => 0,
            HitMode::TwoHit { window } => window,
        }
    }
}
