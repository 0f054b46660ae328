use std::sync::Arc;

use futures::StreamExt;
use tokio_util::sync::CancellationToken;

use crate::domain::{FileDiffRequest, FileDiffResult, LoadError, LoadReport, ViewMode};
use crate::engine::{
    DiffAlgorithm, FoldOptions, compute_diff, fold_unchanged_runs, project_split,
};

use super::content::ContentSource;
use super::language::is_binary_path;

/// Worker pool size used when callers do not configure one.
pub const DEFAULT_CONCURRENCY: usize = 4;

#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// Maximum fetch+compute operations in flight at once. Must be >= 1.
    pub concurrency: usize,
    pub algorithm: DiffAlgorithm,
    pub fold: FoldOptions,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            algorithm: DiffAlgorithm::default(),
            fold: FoldOptions::default(),
        }
    }
}

/// Fans diff loading out over many files with a bounded worker pool.
///
/// Per file: fetch both text versions from the content source, then compute
/// only the requested view. Fetch failures are isolated to their file; a
/// cancelled token abandons the whole run without merging partial results.
pub struct DiffLoader {
    source: Arc<dyn ContentSource>,
    options: LoaderOptions,
}

impl DiffLoader {
    pub fn new(source: Arc<dyn ContentSource>, options: LoaderOptions) -> Self {
        Self { source, options }
    }

    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Loads diffs for every requested file. Resolves once each file has
    /// either produced a result or failed; completion order between files is
    /// unspecified and does not affect the report.
    ///
    /// Duplicate `file_path` entries are a caller error; the last completed
    /// one wins.
    pub async fn load_all(
        &self,
        session: Option<&str>,
        files: &[FileDiffRequest],
        view_mode: ViewMode,
        cancel: &CancellationToken,
    ) -> Result<LoadReport, LoadError> {
        if self.options.concurrency == 0 {
            return Err(LoadError::InvalidConcurrency(0));
        }

        let mut report = LoadReport::default();

        let mut pending = Vec::with_capacity(files.len());
        for request in files {
            if is_binary_path(&request.file_path) {
                report.failures.insert(
                    request.file_path.clone(),
                    LoadError::BinaryFile(request.file_path.clone()),
                );
            } else {
                pending.push(request.clone());
            }
        }

        let mut outcomes = futures::stream::iter(pending.into_iter().map(|request| {
            let source = Arc::clone(&self.source);
            let options = self.options.clone();
            let cancel = cancel.clone();
            async move {
                let outcome =
                    load_one(source, session, &request, view_mode, &options, &cancel).await;
                (request, outcome)
            }
        }))
        .buffer_unordered(self.options.concurrency);

        while let Some((request, outcome)) = outcomes.next().await {
            if cancel.is_cancelled() {
                return Err(LoadError::Cancelled);
            }
            match outcome {
                Ok(result) => {
                    log::debug!(
                        "loaded {:?} diff for {} ({:?})",
                        view_mode,
                        request.file_path,
                        request.change_kind
                    );
                    report.diffs.insert(request.file_path, result);
                }
                Err(LoadError::Cancelled) => return Err(LoadError::Cancelled),
                Err(err) => {
                    log::warn!("diff load failed for {}: {err}", request.file_path);
                    report.failures.insert(request.file_path, err);
                }
            }
        }

        Ok(report)
    }
}

async fn load_one(
    source: Arc<dyn ContentSource>,
    session: Option<&str>,
    request: &FileDiffRequest,
    view_mode: ViewMode,
    options: &LoaderOptions,
    cancel: &CancellationToken,
) -> Result<FileDiffResult, LoadError> {
    let content = tokio::select! {
        _ = cancel.cancelled() => return Err(LoadError::Cancelled),
        fetched = source.file_content(session, &request.file_path) => {
            fetched.map_err(|source| LoadError::Fetch {
                path: request.file_path.clone(),
                source,
            })?
        }
    };

    // Absent content is an empty side, never an error.
    let old_text = content.old_text.unwrap_or_default();
    let new_text = content.new_text.unwrap_or_default();

    let lines = compute_diff(&old_text, &new_text, options.algorithm);
    let result = match view_mode {
        ViewMode::Unified => FileDiffResult::Unified(fold_unchanged_runs(lines, &options.fold)),
        ViewMode::Split => FileDiffResult::Split(project_split(&lines)),
    };
    Ok(result)
}
