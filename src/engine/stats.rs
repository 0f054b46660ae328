use crate::domain::{DiffLine, DiffStats, LineKind, SplitDiff};

/// Counts additions and deletions over a unified sequence, descending into
/// folded rows so folding never changes the totals.
pub fn diff_stats(lines: &[DiffLine]) -> DiffStats {
    let mut stats = DiffStats::default();
    for line in lines {
        match line.kind {
            LineKind::Added => stats.additions += 1,
            LineKind::Removed => stats.deletions += 1,
            LineKind::Unchanged => {
                if let Some(folded) = &line.folded_lines {
                    let inner = diff_stats(folded);
                    stats.additions += inner.additions;
                    stats.deletions += inner.deletions;
                }
            }
        }
    }
    stats
}

/// Same totals computed from a split projection.
pub fn split_stats(split: &SplitDiff) -> DiffStats {
    let mut stats = DiffStats::default();
    for line in split.left.iter().flatten() {
        if line.kind == LineKind::Removed {
            stats.deletions += 1;
        }
    }
    for line in split.right.iter().flatten() {
        if line.kind == LineKind::Added {
            stats.additions += 1;
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute::{DiffAlgorithm, compute_diff};
    use crate::engine::fold::{FoldOptions, fold_unchanged_runs};
    use crate::engine::split::project_split;

    #[test]
    fn test_empty_sequence_has_zero_stats() {
        assert_eq!(diff_stats(&[]), DiffStats::default());
    }

    #[test]
    fn test_counts_added_and_removed() {
        let lines = compute_diff("a\nb\nc", "a\nB\nc\nd", DiffAlgorithm::Lookahead);
        let stats = diff_stats(&lines);
        assert_eq!(stats.additions, 2);
        assert_eq!(stats.deletions, 1);
    }

    #[test]
    fn test_folding_preserves_stats() {
        let opts = FoldOptions::default();
        let body: String = (0..20).map(|i| format!("same {i}\n")).collect();
        let old = format!("removed\n{body}");
        let new = format!("{body}added\n");

        let lines = compute_diff(&old, &new, DiffAlgorithm::Myers);
        let before = diff_stats(&lines);
        let after = diff_stats(&fold_unchanged_runs(lines, &opts));
        assert_eq!(before, after);
    }

    #[test]
    fn test_unified_and_split_stats_agree() {
        let old = "line 1\nline 2\nline 3\nline 4";
        let new = "line 1\nline 2 modified\nline 3\nline 4\nline 5";
        let lines = compute_diff(old, new, DiffAlgorithm::Lookahead);
        assert_eq!(diff_stats(&lines), split_stats(&project_split(&lines)));
    }
}
