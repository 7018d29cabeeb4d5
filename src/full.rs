//! Full-table global alignment with traceback.
//!
//! Classic O(mn) time and space DP. The driver in [`crate::engine`] calls
//! this only when one side has length ≤ 1, where the quadratic table is a
//! single row or column; it also serves as the ground truth the
//! linear-space driver is tested against.

use crate::alignment::{Alignment, GAP};
use crate::model::{AlignError, CostModel, Score};

/// Predecessor direction stored per cell; fixes both the predecessor
/// coordinate and the emitted symbol pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// From (i-1, j-1): emit (a[i-1], b[j-1]).
    Diag,
    /// From (i-1, j): emit (a[i-1], gap).
    Up,
    /// From (i, j-1): emit (gap, b[j-1]).
    Left,
}

/// Optimal global alignment of `a` against `b` via the full DP table.
///
/// Tie-break: candidates are taken in the order diagonal, up, left, and a
/// later candidate wins only when strictly greater. This pins down *which*
/// of several equal-score alignments is returned; the score itself is
/// tie-break independent.
pub fn full_align<M: CostModel + ?Sized>(
    a: &[u8],
    b: &[u8],
    model: &M,
) -> Result<Alignment, AlignError> {
    let n = a.len();
    let m = b.len();
    let gap = model.gap();

    let mut score = vec![vec![0 as Score; m + 1]; n + 1];
    let mut step = vec![vec![Step::Diag; m + 1]; n + 1];

    for i in 1..=n {
        score[i][0] = score[i - 1][0] + gap;
        step[i][0] = Step::Up;
    }
    for j in 1..=m {
        score[0][j] = score[0][j - 1] + gap;
        step[0][j] = Step::Left;
    }

    for i in 1..=n {
        for j in 1..=m {
            let diag = score[i - 1][j - 1] + model.substitution(a[i - 1], b[j - 1])?;
            let up = score[i - 1][j] + gap;
            let left = score[i][j - 1] + gap;

            let mut best = diag;
            let mut dir = Step::Diag;
            if up > best {
                best = up;
                dir = Step::Up;
            }
            if left > best {
                best = left;
                dir = Step::Left;
            }
            score[i][j] = best;
            step[i][j] = dir;
        }
    }

    // Traceback from (n, m); reversing at the end restores left-to-right
    // column order.
    let mut seq_a = Vec::with_capacity(n + m);
    let mut seq_b = Vec::with_capacity(n + m);
    let (mut i, mut j) = (n, m);
    while i > 0 || j > 0 {
        match step[i][j] {
            Step::Diag => {
                seq_a.push(a[i - 1]);
                seq_b.push(b[j - 1]);
                i -= 1;
                j -= 1;
            }
            Step::Up => {
                seq_a.push(a[i - 1]);
                seq_b.push(GAP);
                i -= 1;
            }
            Step::Left => {
                seq_a.push(GAP);
                seq_b.push(b[j - 1]);
                j -= 1;
            }
        }
    }
    seq_a.reverse();
    seq_b.reverse();

    Ok(Alignment {
        score: score[n][m],
        seq_a,
        seq_b,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LinearModel;

    const MODEL: LinearModel = LinearModel::new(2, -1, -2);

    #[test]
    fn empty_inputs() {
        let aln = full_align(b"", b"", &MODEL).unwrap();
        assert_eq!(aln.score, 0);
        assert!(aln.is_empty());

        let aln = full_align(b"", b"ACG", &MODEL).unwrap();
        assert_eq!(aln.score, -6);
        assert_eq!(aln.seq_a, b"---");
        assert_eq!(aln.seq_b, b"ACG");
    }

    #[test]
    fn identity_alignment_has_no_gaps() {
        let aln = full_align(b"AGTACGCA", b"AGTACGCA", &MODEL).unwrap();
        assert_eq!(aln.score, 16);
        assert_eq!(aln.seq_a, b"AGTACGCA");
        assert_eq!(aln.seq_b, b"AGTACGCA");
    }

    #[test]
    fn golden_scenario() {
        let aln = full_align(b"AGTACGCA", b"TATGC", &MODEL).unwrap();
        assert_eq!(aln.score, 1);
        assert_eq!(aln.rescore(&MODEL).unwrap(), 1);
        assert_eq!(aln.seq_a.len(), aln.seq_b.len());
    }

    #[test]
    fn diagonal_wins_ties() {
        // match 0 / mismatch 0 / gap 0: everything ties, so the traceback
        // must take the diagonal at every interior cell.
        let model = LinearModel::new(0, 0, 0);
        let aln = full_align(b"AC", b"GT", &model).unwrap();
        assert_eq!(aln.seq_a, b"AC");
        assert_eq!(aln.seq_b, b"GT");
    }

    #[test]
    fn up_beats_left_on_ties() {
        // A vs G with mismatch -3 and gap -1: the double-gap alignments
        // both score -2 and tie; the up move must win over left.
        let model = LinearModel::new(1, -3, -1);
        let aln = full_align(b"A", b"G", &model).unwrap();
        assert_eq!(aln.score, -2);
        assert_eq!(aln.seq_a, b"-A");
        assert_eq!(aln.seq_b, b"G-");
    }
}
