//! File-type helpers: extension-based language lookup and binary detection.

const BINARY_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "ico", "bmp", "pdf", "zip", "gz", "bz2", "xz", "tar",
    "7z", "exe", "dll", "so", "dylib", "a", "o", "class", "jar", "wasm", "woff", "woff2", "ttf",
    "otf", "eot", "mp3", "mp4", "mov", "avi", "sqlite", "db",
];

/// Display language for a file path, by extension.
pub fn detect_language(file_path: &str) -> Option<&'static str> {
    let ext = extension(file_path)?;
    let language = match ext.as_str() {
        "ts" | "tsx" => "typescript",
        "js" | "jsx" => "javascript",
        "rs" => "rust",
        "py" => "python",
        "go" => "go",
        "java" => "java",
        "kt" => "kotlin",
        "swift" => "swift",
        "c" | "h" => "c",
        "cpp" | "cc" | "cxx" | "hpp" => "cpp",
        "cs" => "csharp",
        "rb" => "ruby",
        "php" => "php",
        "sh" | "bash" | "zsh" => "bash",
        "json" => "json",
        "yml" | "yaml" => "yaml",
        "toml" => "toml",
        "md" => "markdown",
        "css" => "css",
        "scss" => "scss",
        "html" | "htm" => "html",
        "sql" => "sql",
        _ => return None,
    };
    Some(language)
}

/// True when the extension marks the file as binary; such files are flagged
/// by the loader without fetching content.
pub fn is_binary_path(file_path: &str) -> bool {
    extension(file_path).is_some_and(|ext| BINARY_EXTENSIONS.contains(&ext.as_str()))
}

fn extension(file_path: &str) -> Option<String> {
    if file_path.is_empty() {
        return None;
    }
    let name = file_path.rsplit('/').next()?;
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() {
        // dotfiles like .gitignore have no extension
        return None;
    }
    Some(ext.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_common_languages() {
        assert_eq!(detect_language("src/main.rs"), Some("rust"));
        assert_eq!(detect_language("app/Component.TSX"), Some("typescript"));
        assert_eq!(detect_language("Cargo.toml"), Some("toml"));
        assert_eq!(detect_language("test.min.js"), Some("javascript"));
    }

    #[test]
    fn test_unknown_or_missing_extension() {
        assert_eq!(detect_language(""), None);
        assert_eq!(detect_language("Makefile"), None);
        assert_eq!(detect_language(".gitignore"), None);
        assert_eq!(detect_language("archive.xyz"), None);
    }

    #[test]
    fn test_binary_detection() {
        assert!(is_binary_path("assets/logo.png"));
        assert!(is_binary_path("build/app.EXE"));
        assert!(!is_binary_path("src/lib.rs"));
        assert!(!is_binary_path("README"));
    }
}
