use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use std::{fmt::Debug, path::PathBuf};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use playlist_recommender::config::{
    AppConfig, CliConfig, FileConfig, DEFAULT_CACHE_AGE_SEC, DEFAULT_PORT,
};
use playlist_recommender::recommend::DEFAULT_TOP_N;
use playlist_recommender::server::{run_server, RequestsLoggingLevel, ServerConfig};
use playlist_recommender::{load_playlists, CoOccurrenceIndex, MatrixKind};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the JSON playlists file.
    #[clap(value_parser = parse_path)]
    pub playlists_path: Option<PathBuf>,

    /// Path to a TOML config file, its values override the command line.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Number of recommendations returned when a request does not ask for a count.
    #[clap(long, default_value_t = DEFAULT_TOP_N)]
    pub default_top_n: usize,

    /// Layout of the co-occurrence matrix.
    #[clap(long, value_enum, default_value_t = MatrixKind::Dense)]
    pub matrix: MatrixKind,

    /// The max-age of recommendation responses in seconds.
    #[clap(long, default_value_t = DEFAULT_CACHE_AGE_SEC)]
    pub cache_age_sec: usize,

    /// Path to the frontend directory to be statically served.
    #[clap(long)]
    pub frontend_dir_path: Option<String>,
}

impl From<&CliArgs> for CliConfig {
    fn from(args: &CliArgs) -> Self {
        CliConfig {
            playlists_path: args.playlists_path.clone(),
            port: args.port,
            logging_level: args.logging_level.clone(),
            default_top_n: args.default_top_n,
            matrix: args.matrix,
            cache_age_sec: args.cache_age_sec,
            frontend_dir_path: args.frontend_dir_path.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Reading config file {:?}...", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let config = AppConfig::resolve(&CliConfig::from(&cli_args), file_config)?;

    let playlists = load_playlists(&config.playlists_path)
        .with_context(|| format!("Could not load playlists from {:?}", config.playlists_path))?;

    let index = CoOccurrenceIndex::build_with_kind(&playlists, config.matrix);
    let stats = index.stats();
    info!(
        "Index ready: {} songs from {} playlists, {} nonzero entries ({} matrix)",
        stats.songs, stats.playlists, stats.nonzero_entries, stats.matrix
    );
    drop(playlists);

    run_server(Arc::new(index), ServerConfig::from(&config)).await
}
