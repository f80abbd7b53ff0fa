use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Optional TOML configuration. Every field present here overrides the CLI.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    pub playlists_path: Option<String>,
    pub port: Option<u16>,
    pub logging_level: Option<String>,
    pub default_top_n: Option<usize>,
    pub cache_age_sec: Option<usize>,
    pub frontend_dir_path: Option<String>,

    pub index: Option<IndexConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct IndexConfig {
    /// Matrix layout: "dense" or "sparse"
    pub matrix: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
