//! Property tests against a from-scratch full-table DP baseline.

use halign::{align, full_align, CostModel, LinearModel, Score};
use proptest::prelude::*;

/// Independent score-only DP, written without reference to the crate's
/// aligners.
fn baseline_score<M: CostModel>(s: &[u8], t: &[u8], model: &M) -> Score {
    let n = s.len();
    let m = t.len();
    let gap = model.gap();
    let mut dp = vec![vec![0 as Score; m + 1]; n + 1];
    for i in 1..=n {
        dp[i][0] = dp[i - 1][0] + gap;
    }
    for j in 1..=m {
        dp[0][j] = dp[0][j - 1] + gap;
    }
    for i in 1..=n {
        for j in 1..=m {
            let diag = dp[i - 1][j - 1] + model.substitution(s[i - 1], t[j - 1]).unwrap();
            let up = dp[i - 1][j] + gap;
            let left = dp[i][j - 1] + gap;
            dp[i][j] = diag.max(up).max(left);
        }
    }
    dp[n][m]
}

proptest! {
    #[test]
    fn hirschberg_matches_baseline(a in "[ACGT]{0,40}", b in "[ACGT]{0,40}") {
        let model = LinearModel::new(2, -1, -2);
        let aln = align(a.as_bytes(), b.as_bytes(), &model).unwrap();
        prop_assert_eq!(aln.score, baseline_score(a.as_bytes(), b.as_bytes(), &model));
    }

    #[test]
    fn full_aligner_matches_baseline(a in "[ACGT]{0,25}", b in "[ACGT]{0,25}") {
        let model = LinearModel::new(1, -1, -1);
        let aln = full_align(a.as_bytes(), b.as_bytes(), &model).unwrap();
        prop_assert_eq!(aln.score, baseline_score(a.as_bytes(), b.as_bytes(), &model));
    }

    #[test]
    fn hirschberg_equals_full_aligner(a in "[ACGT]{0,30}", b in "[ACGT]{0,30}") {
        let model = LinearModel::new(2, -1, -2);
        let linear = align(a.as_bytes(), b.as_bytes(), &model).unwrap();
        let full = full_align(a.as_bytes(), b.as_bytes(), &model).unwrap();
        prop_assert_eq!(linear.score, full.score);
    }

    #[test]
    fn alignment_rescores_to_its_score(a in "[ACGT]{0,30}", b in "[ACGT]{0,30}") {
        let model = LinearModel::new(2, -1, -2);
        let aln = align(a.as_bytes(), b.as_bytes(), &model).unwrap();
        prop_assert_eq!(aln.rescore(&model).unwrap(), aln.score);
        prop_assert_eq!(aln.seq_a.len(), aln.seq_b.len());
    }

    #[test]
    fn cost_is_symmetric(a in "[ACGT]{0,30}", b in "[ACGT]{0,30}") {
        let model = LinearModel::new(2, -1, -2);
        let ab = align(a.as_bytes(), b.as_bytes(), &model).unwrap();
        let ba = align(b.as_bytes(), a.as_bytes(), &model).unwrap();
        prop_assert_eq!(ab.score, ba.score);
    }

    #[test]
    fn reinvocation_is_idempotent(a in "[ACGT]{0,30}", b in "[ACGT]{0,30}") {
        let model = LinearModel::new(2, -1, -2);
        let first = align(a.as_bytes(), b.as_bytes(), &model).unwrap();
        let second = align(a.as_bytes(), b.as_bytes(), &model).unwrap();
        prop_assert_eq!(first, second);
    }
}
