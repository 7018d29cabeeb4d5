//! The alignment result type.

use std::fmt;

use crate::model::{AlignError, CostModel, Score};

/// Gap symbol used in aligned output rows.
pub const GAP: u8 = b'-';

/// A global alignment: the optimal score and the two gapped rows.
///
/// Invariant: `seq_a.len() == seq_b.len()`, and no column holds a gap on
/// both sides. Summing the per-column model scores reproduces `score`
/// exactly (see [`Alignment::rescore`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    pub score: Score,
    pub seq_a: Vec<u8>,
    pub seq_b: Vec<u8>,
}

impl Alignment {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.seq_a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq_a.is_empty()
    }

    /// Iterate over aligned symbol pairs, left to right.
    pub fn columns(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.seq_a
            .iter()
            .copied()
            .zip(self.seq_b.iter().copied())
    }

    /// Recompute the score column by column under `model`.
    ///
    /// Equals `self.score` for any alignment produced by this crate with
    /// the same model; tests use this to pin the cost-decomposition
    /// invariant.
    pub fn rescore<M: CostModel + ?Sized>(&self, model: &M) -> Result<Score, AlignError> {
        let mut total = 0;
        for (x, y) in self.columns() {
            total += if x == GAP || y == GAP {
                model.gap()
            } else {
                model.substitution(x, y)?
            };
        }
        Ok(total)
    }
}

/// Three-line rendering: row A, match bars, row B.
impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = |bytes: &[u8]| String::from_utf8_lossy(bytes).into_owned();
        let bars: String = self
            .columns()
            .map(|(x, y)| if x == y { '|' } else { ' ' })
            .collect();
        writeln!(f, "{}", row(&self.seq_a))?;
        writeln!(f, "{bars}")?;
        write!(f, "{}", row(&self.seq_b))
    }
}
