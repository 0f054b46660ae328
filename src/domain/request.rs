use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::diff::{DiffLine, SplitDiff};
use super::error::LoadError;

/// How a file changed between the two versions being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Modified,
    Deleted,
}

/// One file to diff. `file_path` keys the loader's output map and must be
/// unique within a single load call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDiffRequest {
    pub file_path: String,
    pub change_kind: ChangeKind,
}

impl FileDiffRequest {
    pub fn new(file_path: impl Into<String>, change_kind: ChangeKind) -> Self {
        Self {
            file_path: file_path.into(),
            change_kind,
        }
    }
}

/// Which diff projection the caller wants. Exactly one is computed per file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Unified,
    Split,
}

/// The computed diff for one file, in the requested view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "view", content = "lines")]
pub enum FileDiffResult {
    Unified(Vec<DiffLine>),
    Split(SplitDiff),
}

/// Outcome of one loader run. Successful files land in `diffs`, failed ones
/// in `failures`, so a single bad fetch never hides its siblings.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub diffs: HashMap<String, FileDiffResult>,
    pub failures: HashMap<String, LoadError>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
