use serde::{Deserialize, Serialize};
use similar::{Algorithm, ChangeTag, TextDiff};

use crate::domain::DiffLine;

/// How far the two-cursor walk scans for a resynchronization point.
const LOOKAHEAD_WINDOW: usize = 2;

/// Which line-diff algorithm to run.
///
/// `Lookahead` is a linear-time walk with a small resync window; changes that
/// cluster (the typical source-code edit) diff well, heavily reordered edits
/// may produce more rows than necessary. `Myers` trades a little speed for
/// minimal output on those inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffAlgorithm {
    #[default]
    Lookahead,
    Myers,
}

/// Computes the line-level diff between two texts.
///
/// Degenerate inputs have a fixed contract regardless of algorithm: two empty
/// texts produce no rows; an empty old side produces a single `Added` row
/// carrying the whole new text at line 1, and symmetrically for an empty new
/// side. Callers must normalize absent content to `""` before calling.
pub fn compute_diff(old_text: &str, new_text: &str, algorithm: DiffAlgorithm) -> Vec<DiffLine> {
    match (old_text.is_empty(), new_text.is_empty()) {
        (true, true) => return Vec::new(),
        (true, false) => return vec![DiffLine::added(new_text, 1)],
        (false, true) => return vec![DiffLine::removed(old_text, 1)],
        (false, false) => {}
    }

    match algorithm {
        DiffAlgorithm::Lookahead => lookahead_diff(old_text, new_text),
        DiffAlgorithm::Myers => myers_diff(old_text, new_text),
    }
}

fn lookahead_diff(old_text: &str, new_text: &str) -> Vec<DiffLine> {
    let old: Vec<&str> = old_text.lines().collect();
    let new: Vec<&str> = new_text.lines().collect();

    let mut lines = Vec::with_capacity(old.len().max(new.len()));
    let mut i = 0;
    let mut j = 0;
    let mut old_num = 1;
    let mut new_num = 1;

    while i < old.len() && j < new.len() {
        if old[i] == new[j] {
            lines.push(DiffLine::unchanged(old[i], old_num, new_num));
            i += 1;
            j += 1;
            old_num += 1;
            new_num += 1;
            continue;
        }

        // old[i] may reappear a couple of lines ahead on the new side; if so
        // the lines skipped over are insertions.
        if let Some(k) = find_ahead(&new, j, old[i]) {
            for line in &new[j..k] {
                lines.push(DiffLine::added(*line, new_num));
                new_num += 1;
            }
            j = k;
            continue;
        }

        if let Some(k) = find_ahead(&old, i, new[j]) {
            for line in &old[i..k] {
                lines.push(DiffLine::removed(*line, old_num));
                old_num += 1;
            }
            i = k;
            continue;
        }

        // No resync point in the window: substitution.
        lines.push(DiffLine::removed(old[i], old_num));
        lines.push(DiffLine::added(new[j], new_num));
        i += 1;
        j += 1;
        old_num += 1;
        new_num += 1;
    }

    for line in &old[i..] {
        lines.push(DiffLine::removed(*line, old_num));
        old_num += 1;
    }
    for line in &new[j..] {
        lines.push(DiffLine::added(*line, new_num));
        new_num += 1;
    }

    lines
}

fn find_ahead(haystack: &[&str], from: usize, needle: &str) -> Option<usize> {
    let end = (from + 1 + LOOKAHEAD_WINDOW).min(haystack.len());
    (from + 1..end).find(|&k| haystack[k] == needle)
}

fn myers_diff(old_text: &str, new_text: &str) -> Vec<DiffLine> {
    let old = ensure_trailing_newline(old_text);
    let new = ensure_trailing_newline(new_text);

    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_lines(&old, &new);

    let mut lines = Vec::with_capacity(old.lines().count().max(new.lines().count()));
    let mut old_num = 1;
    let mut new_num = 1;

    for change in diff.iter_all_changes() {
        let value = change.value();
        let content = value.strip_suffix('\n').unwrap_or(value);
        match change.tag() {
            ChangeTag::Equal => {
                lines.push(DiffLine::unchanged(content, old_num, new_num));
                old_num += 1;
                new_num += 1;
            }
            ChangeTag::Delete => {
                lines.push(DiffLine::removed(content, old_num));
                old_num += 1;
            }
            ChangeTag::Insert => {
                lines.push(DiffLine::added(content, new_num));
                new_num += 1;
            }
        }
    }

    lines
}

// Without this a missing final newline shows up as a phantom change.
fn ensure_trailing_newline(content: &str) -> String {
    if content.ends_with('\n') {
        content.to_string()
    } else {
        format!("{content}\n")
    }
}
