//! Error taxonomy for the search core.
//!
//! Configuration problems are caught once, before any scanning begins;
//! the only failure a running scan can report is an allocation failure
//! while growing the output HSP list. Ambiguous residues and empty result
//! lists are not errors.

use thiserror::Error;

use crate::params::MAX_WORD_SIZE;
use crate::sequence::MAX_SEQUENCE_LEN;

/// Configuration errors, detected at setup and never retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("word size {0} is out of range (1..={MAX_WORD_SIZE})")]
    WordSize(usize),

    #[error("lookup table was built with word size {lookup}, parameters ask for {params}")]
    WordSizeMismatch { lookup: usize, params: usize },

    #[error("x-dropoff must be non-negative, got {0}")]
    Dropoff(i32),

    #[error("cutoff score must be positive, got {0}")]
    Cutoff(i32),

    #[error("two-hit window {window} must be at least the word size {word_size}")]
    Window { window: i32, word_size: usize },

    #[error("empty {0} sequence")]
    EmptySequence(&'static str),

    #[error("sequence length {len} exceeds the supported maximum {MAX_SEQUENCE_LEN}")]
    SequenceTooLong { len: usize },

    #[error("residue code {code} at offset {offset} is outside the NCBISTDAA alphabet")]
    BadResidue { code: u8, offset: usize },

    #[error("substitution matrix is {len} entries, expected {expected} for a square alphabet")]
    MatrixShape { len: usize, expected: usize },

    #[error("PSSM has {rows} rows but the query has {query_len} residues")]
    PssmLength { rows: usize, query_len: usize },
}

/// Failures that can occur mid-scan. Distinct from "no HSP cleared the
/// cutoff", which is an ordinary empty result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("failed to grow the HSP list past {len} entries")]
    HspAlloc { len: usize },
}

/// Umbrella error for drivers that perform setup and scanning in one call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error(transparent)]
    Search(#[from] SearchError),
}
