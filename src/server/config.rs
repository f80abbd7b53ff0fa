use super::RequestsLoggingLevel;
use crate::config::{AppConfig, DEFAULT_CACHE_AGE_SEC, DEFAULT_PORT};
use crate::recommend::DEFAULT_TOP_N;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub port: u16,
    /// max-age of recommendation responses
    pub cache_age_sec: usize,
    pub frontend_dir_path: Option<String>,
    /// Used when a request does not carry its own top_n.
    pub default_top_n: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            port: DEFAULT_PORT,
            cache_age_sec: DEFAULT_CACHE_AGE_SEC,
            frontend_dir_path: None,
            default_top_n: DEFAULT_TOP_N,
        }
    }
}

impl From<&AppConfig> for ServerConfig {
    fn from(config: &AppConfig) -> Self {
        ServerConfig {
            requests_logging_level: config.logging_level.clone(),
            port: config.port,
            cache_age_sec: config.cache_age_sec,
            frontend_dir_path: config.frontend_dir_path.clone(),
            default_top_n: config.default_top_n,
        }
    }
}
