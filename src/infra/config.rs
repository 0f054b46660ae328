use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::{DiffAlgorithm, FoldOptions};

use super::loader::{DEFAULT_CONCURRENCY, LoaderOptions};

/// Engine tunables, loadable from a TOML file. Every field has a default so
/// a partial or missing file still yields a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub collapse_threshold: usize,
    pub context_lines: usize,
    pub concurrency: usize,
    pub algorithm: DiffAlgorithm,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let fold = FoldOptions::default();
        Self {
            collapse_threshold: fold.collapse_threshold,
            context_lines: fold.context_lines,
            concurrency: DEFAULT_CONCURRENCY,
            algorithm: DiffAlgorithm::default(),
        }
    }
}

impl EngineConfig {
    pub fn fold_options(&self) -> FoldOptions {
        FoldOptions {
            collapse_threshold: self.collapse_threshold,
            context_lines: self.context_lines,
        }
    }

    pub fn loader_options(&self) -> LoaderOptions {
        LoaderOptions {
            concurrency: self.concurrency,
            algorithm: self.algorithm,
            fold: self.fold_options(),
        }
    }
}

/// Loads configuration from `DIFFDECK_CONFIG_PATH`, falling back to
/// `diffdeck.toml` in the working directory, falling back to defaults.
pub fn load_config() -> EngineConfig {
    load_config_from(&config_path())
}

fn load_config_from(path: &Path) -> EngineConfig {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return EngineConfig::default();
    };
    match toml::from_str(&contents) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring invalid config at {}: {err}", path.display());
            EngineConfig::default()
        }
    }
}

fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("DIFFDECK_CONFIG_PATH") {
        return PathBuf::from(path);
    }
    PathBuf::from("diffdeck.toml")
}
