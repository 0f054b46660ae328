use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;

/// The two text versions of one file. A missing side (new file, deleted
/// file) is `None`; the loader normalizes it to an empty string before
/// diffing rather than treating it as an error.
#[derive(Debug, Clone, Default)]
pub struct FileContent {
    pub old_text: Option<String>,
    pub new_text: Option<String>,
}

/// Provider of the base and head version of a file's text.
///
/// `session` is an opaque reference for providers that scope content to a
/// review session or worktree; file-system backed sources ignore it.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn file_content(&self, session: Option<&str>, path: &str) -> Result<FileContent>;
}

/// Content source reading both versions of a relative path from two
/// directory roots.
pub struct DirContentSource {
    old_root: PathBuf,
    new_root: PathBuf,
}

impl DirContentSource {
    pub fn new(old_root: impl Into<PathBuf>, new_root: impl Into<PathBuf>) -> Self {
        Self {
            old_root: old_root.into(),
            new_root: new_root.into(),
        }
    }
}

#[async_trait]
impl ContentSource for DirContentSource {
    async fn file_content(&self, _session: Option<&str>, path: &str) -> Result<FileContent> {
        let old_text = read_optional(&self.old_root.join(path)).await?;
        let new_text = read_optional(&self.new_root.join(path)).await?;
        Ok(FileContent { old_text, new_text })
    }
}

async fn read_optional(path: &Path) -> Result<Option<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err).with_context(|| format!("reading {}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dir_source_reads_both_sides() {
        let old_dir = tempfile::tempdir().unwrap();
        let new_dir = tempfile::tempdir().unwrap();
        std::fs::write(old_dir.path().join("a.txt"), "old").unwrap();
        std::fs::write(new_dir.path().join("a.txt"), "new").unwrap();

        let source = DirContentSource::new(old_dir.path(), new_dir.path());
        let content = source.file_content(None, "a.txt").await.unwrap();
        assert_eq!(content.old_text.as_deref(), Some("old"));
        assert_eq!(content.new_text.as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn test_missing_side_is_none_not_error() {
        let old_dir = tempfile::tempdir().unwrap();
        let new_dir = tempfile::tempdir().unwrap();
        std::fs::write(new_dir.path().join("fresh.txt"), "hello").unwrap();

        let source = DirContentSource::new(old_dir.path(), new_dir.path());
        let content = source.file_content(None, "fresh.txt").await.unwrap();
        assert!(content.old_text.is_none());
        assert_eq!(content.new_text.as_deref(), Some("hello"));
    }
}
