//! Substitution scoring: dense matrices, PSSMs and the scoring seam.
//!
//! Extension and lookup code is generic over [`ScoreSource`], selected once
//! at setup. The dense-matrix and PSSM variants share every line of the
//! walk control flow; only the score lookup differs.

pub mod blosum62;

use crate::error::SetupError;
use crate::sequence::BLASTAA_SIZE;

pub use blosum62::{blosum62_score, DEFSCORE};

/// Per-pair score lookup used by every extension walk and by threshold
/// neighborhood generation. `q_off` is the query offset of the pair; dense
/// matrices ignore it, PSSMs ignore `q_res`.
pub trait ScoreSource {
    fn score(&self, q_off: usize, q_res: u8, s_res: u8) -> i32;

    /// Whether scores are position-specific. Reported on search output so
    /// downstream consumers can tell profile searches apart.
    fn uses_pssm(&self) -> bool {
        false
    }

    /// Number of query rows a position-specific source was built for.
    fn query_rows(&self) -> Option<usize> {
        None
    }
}

/// Dense symmetric substitution matrix over the NCBISTDAA alphabet.
#[derive(Debug, Clone)]
pub struct SubstMatrix {
    scores: Vec<i8>,
}

impl SubstMatrix {
    /// Build from a row-major 28x28 score table.
    pub fn from_scores(scores: Vec<i8>) -> Result<Self, SetupError> {
        let expected = BLASTAA_SIZE * BLASTAA_SIZE;
        if scores.len() != expected {
            return Err(SetupError::MatrixShape {
                len: scores.len(),
                expected,
            });
        }
        Ok(Self { scores })
    }

    /// BLOSUM62 expanded to the full NCBISTDAA alphabet.
    pub fn blosum62() -> Self {
        let mut scores = vec![0i8; BLASTAA_SIZE * BLASTAA_SIZE];
        for a in 0..BLASTAA_SIZE as u8 {
            for b in 0..BLASTAA_SIZE as u8 {
                scores[a as usize * BLASTAA_SIZE + b as usize] = blosum62_score(a, b);
            }
        }
        Self { scores }
    }

    /// Identity scoring: `reward` for equal residues, `penalty` otherwise.
    /// The gap code keeps [`DEFSCORE`] on both axes.
    pub fn match_mismatch(reward: i8, penalty: i8) -> Self {
        let mut scores = vec![penalty; BLASTAA_SIZE * BLASTAA_SIZE];
        for a in 0..BLASTAA_SIZE {
            scores[a * BLASTAA_SIZE + a] = reward;
        }
        for a in 0..BLASTAA_SIZE {
            scores[a * BLASTAA_SIZE] = DEFSCORE;
            scores[a] = DEFSCORE;
        }
        Self { scores }
    }

    #[inline(always)]
    pub fn get(&self, a: u8, b: u8) -> i32 {
        self.scores[a as usize * BLASTAA_SIZE + b as usize] as i32
    }
}

impl ScoreSource for SubstMatrix {
    #[inline(always)]
    fn score(&self, _q_off: usize, q_res: u8, s_res: u8) -> i32 {
        self.get(q_res, s_res)
    }
}

/// Position-specific scoring matrix: one row of 28 scores per query
/// offset. Row count must match the query length, checked when a search
/// context is set up.
#[derive(Debug, Clone)]
pub struct Pssm {
    rows: usize,
    scores: Vec<i32>,
}

impl Pssm {
    /// Build from row-major scores, `rows * 28` entries.
    pub fn from_rows(rows: usize, scores: Vec<i32>) -> Result<Self, SetupError> {
        let expected = rows * BLASTAA_SIZE;
        if rows == 0 || scores.len() != expected {
            return Err(SetupError::MatrixShape {
                len: scores.len(),
                expected,
            });
        }
        Ok(Self { rows, scores })
    }

    /// Derive a PSSM from a dense matrix and a query, row `i` being the
    /// matrix row of query residue `i`. Useful for profile bootstrapping
    /// and for checking that both scoring paths stay in lockstep.
    pub fn from_matrix(matrix: &SubstMatrix, query: &crate::sequence::SequenceBlock) -> Self {
        let rows = query.len();
        let mut scores = Vec::with_capacity(rows * BLASTAA_SIZE);
        for i in 0..rows {
            let q = query.residue(i);
            for b in 0..BLASTAA_SIZE as u8 {
                scores.push(matrix.get(q, b));
            }
        }
        Self { rows, scores }
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn get(&self, q_off: usize, s_res: u8) -> i32 {
        self.scores[q_off * BLASTAA_SIZE + s_res as usize]
    }
}

impl ScoreSource for Pssm {
    #[inline(always)]
    fn score(&self, q_off: usize, _q_res: u8, s_res: u8) -> i32 {
        self.get(q_off, s_res)
    }

    fn uses_pssm(&self) -> bool {
        true
    }

    fn query_rows(&self) -> Option<usize> {
        Some(self.rows)
    }
}
