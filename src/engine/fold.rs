use serde::{Deserialize, Serialize};

use crate::domain::{DiffLine, LineKind};

/// Tuning for collapsible sections. A maximal unchanged run is folded only
/// when it is longer than `collapse_threshold + 2 * context_lines`, so the
/// fold always hides at least `collapse_threshold + 1` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FoldOptions {
    pub collapse_threshold: usize,
    pub context_lines: usize,
}

impl Default for FoldOptions {
    fn default() -> Self {
        Self {
            collapse_threshold: 4,
            context_lines: 3,
        }
    }
}

/// Replaces long unchanged runs with a single fold marker, keeping
/// `context_lines` visible rows on each side. Added/Removed rows pass
/// through untouched and reset the run.
pub fn fold_unchanged_runs(lines: Vec<DiffLine>, opts: &FoldOptions) -> Vec<DiffLine> {
    if lines.is_empty() {
        return lines;
    }

    let mut out = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        if lines[i].kind != LineKind::Unchanged {
            out.push(lines[i].clone());
            i += 1;
            continue;
        }

        let mut j = i;
        while j < lines.len() && lines[j].kind == LineKind::Unchanged {
            j += 1;
        }

        let run = j - i;
        let limit = opts.collapse_threshold.saturating_add(2 * opts.context_lines);
        if run > limit {
            let hidden_start = i + opts.context_lines;
            let hidden_end = j - opts.context_lines;
            out.extend_from_slice(&lines[i..hidden_start]);
            out.push(DiffLine::fold(lines[hidden_start..hidden_end].to_vec()));
            out.extend_from_slice(&lines[hidden_end..j]);
        } else {
            out.extend_from_slice(&lines[i..j]);
        }

        i = j;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unchanged_run(count: usize) -> Vec<DiffLine> {
        (1..=count).map(|i| DiffLine::unchanged(format!("line {i}"), i, i)).collect()
    }

    #[test]
    fn test_empty_input_passes_through() {
        assert!(fold_unchanged_runs(Vec::new(), &FoldOptions::default()).is_empty());
    }

    #[test]
    fn test_run_at_threshold_is_not_folded() {
        let opts = FoldOptions::default();
        let limit = opts.collapse_threshold + 2 * opts.context_lines;
        let lines = unchanged_run(limit);
        let result = fold_unchanged_runs(lines.clone(), &opts);
        assert_eq!(result, lines);
    }

    #[test]
    fn test_run_above_threshold_is_folded_with_context() {
        let opts = FoldOptions::default();
        let total = opts.collapse_threshold + 2 * opts.context_lines + 5;
        let lines = unchanged_run(total);
        let result = fold_unchanged_runs(lines.clone(), &opts);

        // context + marker + context
        assert_eq!(result.len(), 2 * opts.context_lines + 1);
        let marker = &result[opts.context_lines];
        assert!(marker.is_fold);

        let hidden = marker.folded_lines.as_ref().unwrap();
        assert_eq!(marker.folded_count, Some(hidden.len()));
        assert_eq!(hidden.len(), total - 2 * opts.context_lines);

        // context-before ++ hidden ++ context-after reconstructs the run
        let mut rebuilt: Vec<DiffLine> = result[..opts.context_lines].to_vec();
        rebuilt.extend(hidden.clone());
        rebuilt.extend(result[opts.context_lines + 1..].iter().cloned());
        assert_eq!(rebuilt, lines);
    }

    #[test]
    fn test_changed_rows_pass_through_and_split_runs() {
        let opts = FoldOptions::default();
        let big = opts.collapse_threshold + 2 * opts.context_lines + 3;

        let mut lines = unchanged_run(big);
        lines.push(DiffLine::added("new line", big + 1));
        lines.extend((1..=3).map(|i| DiffLine::unchanged(format!("tail {i}"), big + i, big + 1 + i)));

        let result = fold_unchanged_runs(lines, &opts);

        let fold_count = result.iter().filter(|l| l.is_fold).count();
        assert_eq!(fold_count, 1);
        // the added row and the short tail run survive verbatim
        assert!(result.iter().any(|l| l.kind == LineKind::Added));
        assert_eq!(
            result.iter().filter(|l| l.content.starts_with("tail")).count(),
            3
        );
    }

    #[test]
    fn test_multiple_long_runs_fold_independently() {
        let opts = FoldOptions::default();
        let big = opts.collapse_threshold + 2 * opts.context_lines + 2;

        let mut lines = Vec::new();
        for block in 0..3 {
            let base = block * 100;
            lines.push(DiffLine::removed(format!("gone {block}"), base + 1));
            lines.extend(
                (1..=big).map(|i| DiffLine::unchanged(format!("ctx {block}-{i}"), base + 1 + i, base + i)),
            );
        }

        let result = fold_unchanged_runs(lines, &opts);
        assert_eq!(result.iter().filter(|l| l.is_fold).count(), 3);
    }

    #[test]
    fn test_custom_options_respected() {
        let opts = FoldOptions {
            collapse_threshold: 0,
            context_lines: 1,
        };
        let lines = unchanged_run(3);
        let result = fold_unchanged_runs(lines, &opts);
        assert_eq!(result.len(), 3);
        assert!(result[1].is_fold);
        assert_eq!(result[1].folded_count, Some(1));
    }
}
