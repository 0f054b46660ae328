use crate::domain::{DiffLine, LineKind, SplitDiff};

/// Projects a unified line sequence into two aligned columns for
/// side-by-side rendering. Unchanged rows (fold markers included) land in
/// both columns at the same index, Removed rows in the left column with a
/// blank on the right, Added rows the other way around.
///
/// Accepts folded or unfolded input; both columns always end up the same
/// length.
pub fn project_split(lines: &[DiffLine]) -> SplitDiff {
    let mut left = Vec::with_capacity(lines.len());
    let mut right = Vec::with_capacity(lines.len());

    for line in lines {
        match line.kind {
            LineKind::Unchanged => {
                left.push(Some(line.clone()));
                right.push(Some(line.clone()));
            }
            LineKind::Removed => {
                left.push(Some(line.clone()));
                right.push(None);
            }
            LineKind::Added => {
                left.push(None);
                right.push(Some(line.clone()));
            }
        }
    }

    SplitDiff { left, right }
}
