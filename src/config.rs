// Copyright (c) 2025, TheByteSlayer, Confgen
// Per-node cluster configuration generator, written in Rust

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

type ConfigResult<T> = Result<T, ConfigError>;

/// Where node files go and how they are named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    pub output_dir: PathBuf,
    pub file_prefix: String,
    pub extension: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            file_prefix: "node".to_string(),
            extension: "conf".to_string(),
        }
    }
}

impl GeneratorSettings {
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        let settings: Self = toml::from_str(&content)?;
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn file_name(&self, idx: usize) -> String {
        format!("{}{}.{}", self.file_prefix, idx, self.extension)
    }

    pub fn node_file_path(&self, idx: usize) -> PathBuf {
        self.output_dir.join(self.file_name(idx))
    }

    /// Matches `*.<extension>` the way a shell glob does: hidden names are skipped.
    pub fn is_stale_config(&self, file_name: &str) -> bool {
        if file_name.starts_with('.') {
            return false;
        }
        file_name
            .strip_suffix(&self.extension)
            .is_some_and(|stem| stem.ends_with('.'))
    }
}
