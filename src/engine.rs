//! Hirschberg divide-and-conquer driver.
//!
//! Computes the same score as [`crate::full::full_align`] in O(min(m,n))
//! auxiliary space and O(mn) total time. Each non-trivial step runs two
//! linear-space passes — [`last_row`] over the left half of `a` and
//! [`last_row_rev`] over the right half — and picks the column of `b`
//! where the optimal path crosses the midpoint of `a`.
//!
//! The driver is iterative: pending sub-problems live on an explicit stack
//! of index ranges into the original slices, and alignment columns are
//! appended to a single pair of output buffers in left-to-right order.
//! Naive recursion can reach depth O(len(a)) on pathological splits, and
//! per-level substring copies would defeat the space bound the algorithm
//! exists to provide, so neither appears here.
//!
//! With the `parallel` feature the two passes of a split run on separate
//! threads via `rayon::join`; they read disjoint, immutable views of the
//! inputs, and correctness does not depend on the feature.

use std::ops::Range;

use crate::alignment::{Alignment, GAP};
use crate::full::full_align;
use crate::last_row::{last_row, last_row_rev};
use crate::model::{AlignError, CostModel, Score};

/// Linear-space global aligner for a fixed pair of sequences and model.
///
/// ```
/// use halign::{Aligner, LinearModel};
///
/// let model = LinearModel::new(2, -1, -2);
/// let aln = Aligner::new(b"AGTACGCA", b"TATGC", &model).run().unwrap();
/// assert_eq!(aln.score, 1);
/// ```
pub struct Aligner<'a, M: CostModel + ?Sized> {
    a: &'a [u8],
    b: &'a [u8],
    model: &'a M,
}

impl<'a, M: CostModel + ?Sized> Aligner<'a, M> {
    pub fn new(a: &'a [u8], b: &'a [u8], model: &'a M) -> Self {
        Self { a, b, model }
    }

    pub fn model(&self) -> &M {
        self.model
    }

    /// Lowest column of the sub-problem's `b` range where an optimal path
    /// crosses the midpoint row, given the forward row of the left half
    /// and the reversed row of the right half. First maximum wins over
    /// left-to-right enumeration.
    fn split_column(left: &[Score], rev_right: &[Score]) -> usize {
        let n = left.len() - 1;
        let mut best_j = 0;
        let mut best = Score::MIN;
        for j in 0..=n {
            let v = left[j] + rev_right[n - j];
            if v > best {
                best = v;
                best_j = j;
            }
        }
        best_j
    }
}

#[cfg(not(feature = "parallel"))]
impl<'a, M: CostModel + ?Sized> Aligner<'a, M> {
    /// Run the alignment (serial execution).
    pub fn run(&self) -> Result<Alignment, AlignError> {
        #[cfg(feature = "tracing")]
        let span =
            tracing::info_span!("hirschberg_run", len_a = self.a.len(), len_b = self.b.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let cap = self.a.len() + self.b.len();
        let mut out_a = Vec::with_capacity(cap);
        let mut out_b = Vec::with_capacity(cap);
        let mut score: Score = 0;

        let mut stack: Vec<(Range<usize>, Range<usize>)> =
            vec![(0..self.a.len(), 0..self.b.len())];

        while let Some((ra, rb)) = stack.pop() {
            let sub_a = &self.a[ra.clone()];
            let sub_b = &self.b[rb.clone()];

            if sub_a.is_empty() {
                score += self.model.gap() * sub_b.len() as Score;
                out_a.extend(std::iter::repeat(GAP).take(sub_b.len()));
                out_b.extend_from_slice(sub_b);
            } else if sub_b.is_empty() {
                score += self.model.gap() * sub_a.len() as Score;
                out_a.extend_from_slice(sub_a);
                out_b.extend(std::iter::repeat(GAP).take(sub_a.len()));
            } else if sub_a.len() == 1 || sub_b.len() == 1 {
                // One dimension is 1, so the full table is a single row or
                // column and the quadratic base case keeps the space bound.
                let aln = full_align(sub_a, sub_b, self.model)?;
                score += aln.score;
                out_a.extend_from_slice(&aln.seq_a);
                out_b.extend_from_slice(&aln.seq_b);
            } else {
                let mid = sub_a.len() / 2;
                let fwd = last_row(&sub_a[..mid], sub_b, self.model)?;
                let bwd = last_row_rev(&sub_a[mid..], sub_b, self.model)?;
                let k = Self::split_column(&fwd, &bwd);

                #[cfg(feature = "tracing")]
                tracing::trace!(
                    a_start = ra.start,
                    a_mid = ra.start + mid,
                    a_end = ra.end,
                    split_col = rb.start + k,
                    "split"
                );

                // Right half first, so the left half is popped and emitted
                // before it.
                stack.push((ra.start + mid..ra.end, rb.start + k..rb.end));
                stack.push((ra.start..ra.start + mid, rb.start..rb.start + k));
            }
        }

        Ok(Alignment {
            score,
            seq_a: out_a,
            seq_b: out_b,
        })
    }
}

#[cfg(feature = "parallel")]
impl<'a, M: CostModel + Sync + ?Sized> Aligner<'a, M> {
    /// Run the alignment, computing the two passes of each split on
    /// separate threads.
    pub fn run(&self) -> Result<Alignment, AlignError> {
        #[cfg(feature = "tracing")]
        let span =
            tracing::info_span!("hirschberg_run", len_a = self.a.len(), len_b = self.b.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let cap = self.a.len() + self.b.len();
        let mut out_a = Vec::with_capacity(cap);
        let mut out_b = Vec::with_capacity(cap);
        let mut score: Score = 0;

        let mut stack: Vec<(Range<usize>, Range<usize>)> =
            vec![(0..self.a.len(), 0..self.b.len())];

        while let Some((ra, rb)) = stack.pop() {
            let sub_a = &self.a[ra.clone()];
            let sub_b = &self.b[rb.clone()];

            if sub_a.is_empty() {
                score += self.model.gap() * sub_b.len() as Score;
                out_a.extend(std::iter::repeat(GAP).take(sub_b.len()));
                out_b.extend_from_slice(sub_b);
            } else if sub_b.is_empty() {
                score += self.model.gap() * sub_a.len() as Score;
                out_a.extend_from_slice(sub_a);
                out_b.extend(std::iter::repeat(GAP).take(sub_a.len()));
            } else if sub_a.len() == 1 || sub_b.len() == 1 {
                // One dimension is 1, so the full table is a single row or
                // column and the quadratic base case keeps the space bound.
                let aln = full_align(sub_a, sub_b, self.model)?;
                score += aln.score;
                out_a.extend_from_slice(&aln.seq_a);
                out_b.extend_from_slice(&aln.seq_b);
            } else {
                let mid = sub_a.len() / 2;
                let (fwd, bwd) = rayon::join(
                    || last_row(&sub_a[..mid], sub_b, self.model),
                    || last_row_rev(&sub_a[mid..], sub_b, self.model),
                );
                let (fwd, bwd) = (fwd?, bwd?);
                let k = Self::split_column(&fwd, &bwd);

                #[cfg(feature = "tracing")]
                tracing::trace!(
                    a_start = ra.start,
                    a_mid = ra.start + mid,
                    a_end = ra.end,
                    split_col = rb.start + k,
                    "split"
                );

                // Right half first, so the left half is popped and emitted
                // before it.
                stack.push((ra.start + mid..ra.end, rb.start + k..rb.end));
                stack.push((ra.start..ra.start + mid, rb.start..rb.start + k));
            }
        }

        Ok(Alignment {
            score,
            seq_a: out_a,
            seq_b: out_b,
        })
    }
}

/// Align `a` against `b` under `model` in linear auxiliary space.
#[cfg(not(feature = "parallel"))]
pub fn align<M: CostModel + ?Sized>(
    a: &[u8],
    b: &[u8],
    model: &M,
) -> Result<Alignment, AlignError> {
    Aligner::new(a, b, model).run()
}

/// Align `a` against `b` under `model` in linear auxiliary space.
#[cfg(feature = "parallel")]
pub fn align<M: CostModel + Sync + ?Sized>(
    a: &[u8],
    b: &[u8],
    model: &M,
) -> Result<Alignment, AlignError> {
    Aligner::new(a, b, model).run()
}
