//! Algorithms derived from global alignment.
//!
//! Each of these is a specific [`LinearModel`](crate::model::LinearModel)
//! fed through the linear-space driver, plus a thin read-out of the
//! aligned columns. The engine always maximizes; minimizing objectives
//! are encoded through the sign of the model.
//!
//! - [`lcs`]         : longest common subsequence (match 1, everything else 0).
//! - [`levenshtein`] : edit distance and edit script (match 0, mismatch and
//!   gap -1; distance is the negated score).

pub mod lcs;
pub mod levenshtein;
