//! Linear-space global sequence alignment.
//!
//! This crate computes optimal global alignments of byte sequences under a
//! pluggable substitution model with a linear gap penalty, using
//! Hirschberg's divide-and-conquer scheme: two linear-space scoring passes
//! locate the column where an optimal path crosses the midpoint, and the
//! problem splits into two independent halves. Total time stays O(mn)
//! while auxiliary space drops to O(min(m,n)).
//!
//! ## Quick start
//! ```
//! use halign::{align, LinearModel};
//!
//! let model = LinearModel::new(2, -1, -2);
//! let aln = align(b"AGTACGCA", b"TATGC", &model).unwrap();
//! assert_eq!(aln.score, 1);
//! assert_eq!(aln.seq_a.len(), aln.seq_b.len());
//! ```
//!
//! ## Pieces
//! - [`model`]     : the [`CostModel`] trait plus match/mismatch and
//!   matrix-table implementations. The engine always maximizes; edit
//!   distance is expressed through negative scores.
//! - [mod@last_row]: linear-space pass producing the final DP row.
//! - [`full`]      : quadratic full-table aligner with traceback, used as
//!   the base case and as ground truth in tests.
//! - [`engine`]    : the iterative Hirschberg driver.
//! - [`derived`]   : longest common subsequence and Levenshtein distance
//!   as thin layers over the driver.
//! - [`dataset`], [`utils`]: benchmark-pair loading and timing for the
//!   comparison binary; the core never depends on them.
//!
//! ## Features
//! - `parallel`: run the two scoring passes of each split via `rayon::join`.
//! - `tracing`: emit spans around driver runs and split decisions.
//! - `heavy`: enable long-running stress tests.

pub mod alignment;
pub mod dataset;
pub mod derived;
pub mod engine;
pub mod full;
pub mod last_row;
pub mod model;
pub mod utils;

pub use crate::alignment::{Alignment, GAP};
pub use crate::engine::{align, Aligner};
pub use crate::full::full_align;
pub use crate::last_row::{last_row, last_row_rev};
pub use crate::model::{AlignError, CostModel, LinearModel, MatrixModel, Score};
