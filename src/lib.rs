//! Ungapped seed-and-extend search core.
//!
//! Scans subject sequences for word matches against a query lookup table,
//! gates seeds through per-diagonal one-hit/two-hit tracking, extends
//! eligible seeds under an X-drop threshold, and reports ungapped
//! high-scoring pairs. Gapped alignment, statistics and I/O are the
//! caller's business.

pub mod core;
pub mod error;
pub mod params;
pub mod scoring;
pub mod search;
pub mod seed;
pub mod sequence;
pub mod stats;
