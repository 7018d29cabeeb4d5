//! Levenshtein distance and edit script via the alignment driver.

use crate::alignment::GAP;
use crate::engine::Aligner;
use crate::model::{AlignError, LinearModel};

/// Model under which the alignment score equals the negated edit distance.
const EDIT_MODEL: LinearModel = LinearModel::new(0, -1, -1);

/// One column of an edit script transforming `a` into `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    /// Equal symbols; no edit.
    Copy,
    /// Replace a symbol of `a` with a symbol of `b`.
    Substitute,
    /// Gap in `a`: a symbol of `b` is inserted.
    Insert,
    /// Gap in `b`: a symbol of `a` is deleted.
    Delete,
}

/// Levenshtein distance between `a` and `b`, with an optimal edit script.
///
/// The distance is unique; the script is one of possibly several optimal
/// scripts, picked by the driver's tie-break conventions.
pub fn levenshtein(a: &[u8], b: &[u8]) -> Result<(u64, Vec<EditOp>), AlignError> {
    let aln = Aligner::new(a, b, &EDIT_MODEL).run()?;
    let script = aln
        .columns()
        .map(|(x, y)| {
            if x == GAP {
                EditOp::Insert
            } else if y == GAP {
                EditOp::Delete
            } else if x == y {
                EditOp::Copy
            } else {
                EditOp::Substitute
            }
        })
        .collect();
    Ok(((-aln.score) as u64, script))
}

/// Levenshtein distance between `a` and `b`.
pub fn distance(a: &[u8], b: &[u8]) -> Result<u64, AlignError> {
    levenshtein(a, b).map(|(d, _)| d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_pair() {
        assert_eq!(distance(b"sitting", b"kitten").unwrap(), 3);
    }

    #[test]
    fn script_cost_matches_distance() {
        let (d, script) = levenshtein(b"sitting", b"kitten").unwrap();
        let edits = script.iter().filter(|op| **op != EditOp::Copy).count() as u64;
        assert_eq!(edits, d);
    }

    #[test]
    fn identical_inputs_are_all_copies() {
        let (d, script) = levenshtein(b"kitten", b"kitten").unwrap();
        assert_eq!(d, 0);
        assert!(script.iter().all(|op| *op == EditOp::Copy));
    }

    #[test]
    fn empty_to_word_is_all_inserts() {
        let (d, script) = levenshtein(b"", b"abc").unwrap();
        assert_eq!(d, 3);
        assert_eq!(script, vec![EditOp::Insert; 3]);
    }

    #[test]
    fn word_to_empty_is_all_deletes() {
        let (d, script) = levenshtein(b"abc", b"").unwrap();
        assert_eq!(d, 3);
        assert_eq!(script, vec![EditOp::Delete; 3]);
    }
}
