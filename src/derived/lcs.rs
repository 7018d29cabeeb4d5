//! Longest common subsequence via the alignment driver.

use crate::engine::Aligner;
use crate::model::{AlignError, LinearModel};

/// Model under which the alignment score equals the LCS length.
const LCS_MODEL: LinearModel = LinearModel::new(1, 0, 0);

/// A longest common subsequence of `a` and `b`.
///
/// The symbols of columns where both rows agree. Under ties several
/// subsequences are optimal; the tie-break conventions of the driver pick
/// one deterministically, but only the *length* is canonical.
pub fn lcs(a: &[u8], b: &[u8]) -> Result<Vec<u8>, AlignError> {
    let aln = Aligner::new(a, b, &LCS_MODEL).run()?;
    Ok(aln
        .columns()
        .filter_map(|(x, y)| (x == y).then_some(x))
        .collect())
}

/// Length of the longest common subsequence of `a` and `b`.
pub fn lcs_len(a: &[u8], b: &[u8]) -> Result<usize, AlignError> {
    lcs(a, b).map(|s| s.len())
}
