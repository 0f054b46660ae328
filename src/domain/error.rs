//! Error types for the diff-loading pipeline.
//!
//! The pure engine transforms never fail on well-formed input, so the only
//! errors live at the loader boundary. Per-file failures are recorded in the
//! load report instead of aborting the batch.

use thiserror::Error;

/// Errors raised while loading diffs for a batch of files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Caller asked for a worker pool of size zero.
    #[error("concurrency must be at least 1, got {0}")]
    InvalidConcurrency(usize),

    /// The run was superseded and its partial results discarded.
    #[error("diff load cancelled")]
    Cancelled,

    /// The file's extension marks it as binary; no diff is computed.
    #[error("binary file not diffed: {0}")]
    BinaryFile(String),

    /// The content source failed for this file only.
    #[error("failed to fetch content for {path}")]
    Fetch {
        path: String,
        #[source]
        source: anyhow::Error,
    },
}
