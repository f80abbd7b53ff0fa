mod file_config;

pub use file_config::{FileConfig, IndexConfig};

use crate::cooccurrence::MatrixKind;
use crate::recommend::DEFAULT_TOP_N;
use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_CACHE_AGE_SEC: usize = 3600;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub playlists_path: Option<PathBuf>,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub default_top_n: usize,
    pub matrix: MatrixKind,
    pub cache_age_sec: usize,
    pub frontend_dir_path: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            playlists_path: None,
            port: DEFAULT_PORT,
            logging_level: RequestsLoggingLevel::default(),
            default_top_n: DEFAULT_TOP_N,
            matrix: MatrixKind::default(),
            cache_age_sec: DEFAULT_CACHE_AGE_SEC,
            frontend_dir_path: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub playlists_path: PathBuf,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub default_top_n: usize,
    pub matrix: MatrixKind,
    pub cache_age_sec: usize,
    pub frontend_dir_path: Option<String>,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let playlists_path = file
            .playlists_path
            .map(PathBuf::from)
            .or_else(|| cli.playlists_path.clone())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "playlists_path must be specified on the command line or in config file"
                )
            })?;

        if !playlists_path.exists() {
            bail!("Playlists file does not exist: {:?}", playlists_path);
        }
        if !playlists_path.is_file() {
            bail!("playlists_path is not a file: {:?}", playlists_path);
        }

        let logging_level = match file.logging_level {
            Some(s) => match parse_logging_level(&s) {
                Some(level) => level,
                None => bail!("Invalid logging_level in config file: {:?}", s),
            },
            None => cli.logging_level.clone(),
        };

        let matrix = match file.index.and_then(|index| index.matrix) {
            Some(s) => match parse_matrix_kind(&s) {
                Some(kind) => kind,
                None => bail!("Invalid index.matrix in config file: {:?}", s),
            },
            None => cli.matrix,
        };

        Ok(Self {
            playlists_path,
            port: file.port.unwrap_or(cli.port),
            logging_level,
            default_top_n: file.default_top_n.unwrap_or(cli.default_top_n),
            matrix,
            cache_age_sec: file.cache_age_sec.unwrap_or(cli.cache_age_sec),
            frontend_dir_path: file
                .frontend_dir_path
                .or_else(|| cli.frontend_dir_path.clone()),
        })
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}

fn parse_matrix_kind(s: &str) -> Option<MatrixKind> {
    MatrixKind::from_str(s, true).ok()
}
