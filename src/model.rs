//! Scoring models for pairwise alignment.
//!
//! A [`CostModel`] supplies the two numbers the DP recurrence needs: a
//! substitution score for an ordered symbol pair and a fixed per-symbol gap
//! score. The engine always *maximizes*; minimizing objectives (edit
//! distance) are expressed through the sign of the model, never by flipping
//! comparison operators.
//!
//! Gap scoring is linear: every gap symbol costs [`CostModel::gap`]
//! regardless of run length. The split-column recurrence in
//! [`crate::engine`] relies on this.

use std::collections::HashMap;

use thiserror::Error;

/// Alignment score. Integer accumulation keeps tie-breaking deterministic
/// across the linear-space and full-table passes.
pub type Score = i64;

/// Fatal configuration failures surfaced by the core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// The cost model has no substitution score for a symbol pair that
    /// occurs in the inputs. Not a recoverable runtime condition; fix the
    /// model or the inputs.
    #[error("cost model does not cover symbol pair ({a:?}, {b:?})")]
    UndefinedPair { a: char, b: char },
}

/// Pairwise substitution scores plus a linear gap score.
///
/// Implementations must be pure: the same pair always yields the same
/// score, with no retained state across calls.
pub trait CostModel {
    /// Score for aligning symbol `a` (from the first sequence) against
    /// symbol `b` (from the second). Pairs are ordered; asymmetric tables
    /// are allowed.
    ///
    /// Returns [`AlignError::UndefinedPair`] if the model does not cover
    /// the pair.
    fn substitution(&self, a: u8, b: u8) -> Result<Score, AlignError>;

    /// Score added for every symbol aligned against a gap.
    fn gap(&self) -> Score;
}

/// Match/mismatch/gap model, total over every symbol pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearModel {
    pub match_score: Score,
    pub mismatch_score: Score,
    pub gap_score: Score,
}

impl LinearModel {
    pub const fn new(match_score: Score, mismatch_score: Score, gap_score: Score) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap_score,
        }
    }
}

impl CostModel for LinearModel {
    fn substitution(&self, a: u8, b: u8) -> Result<Score, AlignError> {
        Ok(if a == b {
            self.match_score
        } else {
            self.mismatch_score
        })
    }

    fn gap(&self) -> Score {
        self.gap_score
    }
}

/// Explicit per-pair substitution table.
///
/// Looking up a pair absent from the table is a fatal
/// [`AlignError::UndefinedPair`]; the table must cover the alphabet of the
/// inputs it is used with.
#[derive(Debug, Clone, Default)]
pub struct MatrixModel {
    scores: HashMap<(u8, u8), Score>,
    gap_score: Score,
}

impl MatrixModel {
    pub fn new(gap_score: Score) -> Self {
        Self {
            scores: HashMap::new(),
            gap_score,
        }
    }

    pub fn from_pairs<I>(pairs: I, gap_score: Score) -> Self
    where
        I: IntoIterator<Item = ((u8, u8), Score)>,
    {
        Self {
            scores: pairs.into_iter().collect(),
            gap_score,
        }
    }

    /// Set the score for an ordered pair. Symmetric tables need both
    /// orderings.
    pub fn set(&mut self, a: u8, b: u8, score: Score) {
        self.scores.insert((a, b), score);
    }
}

impl CostModel for MatrixModel {
    fn substitution(&self, a: u8, b: u8) -> Result<Score, AlignError> {
        self.scores
            .get(&(a, b))
            .copied()
            .ok_or(AlignError::UndefinedPair {
                a: a as char,
                b: b as char,
            })
    }

    fn gap(&self) -> Score {
        self.gap_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_model_is_total() {
        let m = LinearModel::new(2, -1, -2);
        assert_eq!(m.substitution(b'A', b'A'), Ok(2));
        assert_eq!(m.substitution(b'A', b'T'), Ok(-1));
        assert_eq!(m.substitution(0, 255), Ok(-1));
        assert_eq!(m.gap(), -2);
    }

    #[test]
    fn matrix_model_reports_missing_pairs() {
        let mut m = MatrixModel::new(-5);
        m.set(b'A', b'A', 10);
        m.set(b'A', b'G', -1);
        assert_eq!(m.substitution(b'A', b'G'), Ok(-1));
        assert_eq!(
            m.substitution(b'G', b'A'),
            Err(AlignError::UndefinedPair { a: 'G', b: 'A' })
        );
    }

    #[test]
    fn matrix_model_from_pairs() {
        let m = MatrixModel::from_pairs([((b'A', b'A'), 10), ((b'C', b'C'), 9)], -5);
        assert_eq!(m.substitution(b'C', b'C'), Ok(9));
        assert_eq!(m.gap(), -5);
    }
}
