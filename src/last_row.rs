//! Linear-space scoring passes.
//!
//! These compute only the *final row* of the full maximizing DP table,
//! using two rolling rows of length `b.len() + 1`. They are the workhorse
//! of the split-column search in [`crate::engine`] and the only piece of
//! the driver that touches every cell of a sub-problem.

use crate::model::{AlignError, CostModel, Score};

/// Final row of the maximizing DP table for `a` against `b`.
///
/// Entry `j` is the best score of aligning all of `a` against the first
/// `j` symbols of `b`. O(b.len()) space, O(a.len() * b.len()) time; pure.
pub fn last_row<M: CostModel + ?Sized>(
    a: &[u8],
    b: &[u8],
    model: &M,
) -> Result<Vec<Score>, AlignError> {
    let m = b.len();
    let gap = model.gap();

    // Row 0: pure-gap prefix of b.
    let mut prev = Vec::with_capacity(m + 1);
    prev.push(0);
    for j in 1..=m {
        prev.push(prev[j - 1] + gap);
    }
    let mut curr = vec![0 as Score; m + 1];

    for &ca in a {
        curr[0] = prev[0] + gap;
        for j in 1..=m {
            let diag = prev[j - 1] + model.substitution(ca, b[j - 1])?;
            let up = prev[j] + gap;
            let left = curr[j - 1] + gap;
            curr[j] = diag.max(up).max(left);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    Ok(prev)
}

/// Final row for `reverse(a)` against `reverse(b)`, walking both slices
/// backward in place.
///
/// Entry `j` is the best score of aligning all of `a` against the *last*
/// `j` symbols of `b`, which is exactly the suffix score the split search
/// needs. Equivalent to reversing both inputs and calling [`last_row`],
/// without materializing reversed copies.
pub fn last_row_rev<M: CostModel + ?Sized>(
    a: &[u8],
    b: &[u8],
    model: &M,
) -> Result<Vec<Score>, AlignError> {
    let m = b.len();
    let gap = model.gap();

    let mut prev = Vec::with_capacity(m + 1);
    prev.push(0);
    for j in 1..=m {
        prev.push(prev[j - 1] + gap);
    }
    let mut curr = vec![0 as Score; m + 1];

    for &ca in a.iter().rev() {
        curr[0] = prev[0] + gap;
        for j in 1..=m {
            let diag = prev[j - 1] + model.substitution(ca, b[m - j])?;
            let up = prev[j] + gap;
            let left = curr[j - 1] + gap;
            curr[j] = diag.max(up).max(left);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    Ok(prev)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LinearModel;

    const MODEL: LinearModel = LinearModel::new(1, -1, -1);

    #[test]
    fn empty_cases() {
        assert_eq!(last_row(b"", b"", &MODEL).unwrap(), vec![0]);
        assert_eq!(last_row(b"A", b"", &MODEL).unwrap(), vec![-1]);
        assert_eq!(last_row(b"", b"AC", &MODEL).unwrap(), vec![0, -1, -2]);
    }

    #[test]
    fn single_pair() {
        // Against "AC": gap-gap, match A, then one extra gap.
        assert_eq!(last_row(b"A", b"AC", &MODEL).unwrap(), vec![-1, 1, 0]);
    }

    #[test]
    fn rev_matches_materialized_reversal() {
        let a = b"AGTACGCA";
        let b = b"TATGC";
        let ar: Vec<u8> = a.iter().rev().copied().collect();
        let br: Vec<u8> = b.iter().rev().copied().collect();
        assert_eq!(
            last_row_rev(a, b, &MODEL).unwrap(),
            last_row(&ar, &br, &MODEL).unwrap()
        );
    }

    #[test]
    fn last_entry_is_global_score() {
        // GATTACA vs GCATGCU at +1/-1/-1 scores 0.
        let row = last_row(b"GATTACA", b"GCATGCU", &MODEL).unwrap();
        assert_eq!(*row.last().unwrap(), 0);
    }
}
