//! Pure diff transforms: compute, fold, split projection, stats.
//! Everything here is synchronous and deterministic; the loader in
//! `infra` orchestrates these over many files.

pub mod compute;
pub mod fold;
pub mod split;
pub mod stats;

pub use compute::{DiffAlgorithm, compute_diff};
pub use fold::{FoldOptions, fold_unchanged_runs};
pub use split::project_split;
pub use stats::{diff_stats, split_stats};
