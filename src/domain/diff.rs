use serde::{Deserialize, Serialize};

/// How a single row relates the old and new version of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Added,
    Removed,
    Unchanged,
}

/// One row of a computed diff.
///
/// Line numbers are 1-based. An `Added` row carries only a new-side number,
/// a `Removed` row only an old-side number, an `Unchanged` row both. Numbers
/// are strictly increasing across the rows that carry them.
///
/// A fold marker (`is_fold == true`) stands in for a run of hidden unchanged
/// rows: `folded_lines` holds them in order and `folded_count` equals their
/// length, so expanding the marker in place reconstructs the original run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    pub content: String,
    pub kind: LineKind,
    #[serde(rename = "oldLineNumber", skip_serializing_if = "Option::is_none")]
    pub old_line_number: Option<usize>,
    #[serde(rename = "newLineNumber", skip_serializing_if = "Option::is_none")]
    pub new_line_number: Option<usize>,
    #[serde(rename = "isFold", default, skip_serializing_if = "std::ops::Not::not")]
    pub is_fold: bool,
    #[serde(rename = "foldedCount", skip_serializing_if = "Option::is_none")]
    pub folded_count: Option<usize>,
    #[serde(rename = "foldedLines", skip_serializing_if = "Option::is_none")]
    pub folded_lines: Option<Vec<DiffLine>>,
}

impl DiffLine {
    pub fn unchanged(content: impl Into<String>, old: usize, new: usize) -> Self {
        Self {
            content: content.into(),
            kind: LineKind::Unchanged,
            old_line_number: Some(old),
            new_line_number: Some(new),
            is_fold: false,
            folded_count: None,
            folded_lines: None,
        }
    }

    pub fn added(content: impl Into<String>, new: usize) -> Self {
        Self {
            content: content.into(),
            kind: LineKind::Added,
            old_line_number: None,
            new_line_number: Some(new),
            is_fold: false,
            folded_count: None,
            folded_lines: None,
        }
    }

    pub fn removed(content: impl Into<String>, old: usize) -> Self {
        Self {
            content: content.into(),
            kind: LineKind::Removed,
            old_line_number: Some(old),
            new_line_number: None,
            is_fold: false,
            folded_count: None,
            folded_lines: None,
        }
    }

    /// Fold marker replacing `hidden` unchanged rows. The marker borrows the
    /// line numbers of the first hidden row so sorted ordering is preserved.
    pub fn fold(hidden: Vec<DiffLine>) -> Self {
        let old = hidden.first().and_then(|l| l.old_line_number);
        let new = hidden.first().and_then(|l| l.new_line_number);
        Self {
            content: String::new(),
            kind: LineKind::Unchanged,
            old_line_number: old,
            new_line_number: new,
            is_fold: true,
            folded_count: Some(hidden.len()),
            folded_lines: Some(hidden),
        }
    }
}

/// Two-column alignment of a unified diff for side-by-side rendering.
/// `None` is a blank placeholder cell; both columns have the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitDiff {
    #[serde(rename = "leftLines")]
    pub left: Vec<Option<DiffLine>>,
    #[serde(rename = "rightLines")]
    pub right: Vec<Option<DiffLine>>,
}

/// Added/removed line counts for a diff, folded rows included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub additions: usize,
    pub deletions: usize,
}
