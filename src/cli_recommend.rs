use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use playlist_recommender::recommend::{recommend, RecommendError, Recommendation, DEFAULT_TOP_N};
use playlist_recommender::{load_playlists, CoOccurrenceIndex, MatrixKind};

fn parse_playlists_path(s: &str) -> Result<PathBuf> {
    PathBuf::from(s)
        .canonicalize()
        .with_context(|| format!("Error resolving path: {}", s))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the JSON playlists file.
    #[clap(value_parser = parse_playlists_path)]
    pub playlists_path: PathBuf,

    /// Song to recommend for. Without it, queries are read from stdin.
    #[clap(long)]
    pub song: Option<String>,

    /// Maximum number of recommendations, zero or less prints nothing.
    #[clap(short = 'n', long, default_value_t = DEFAULT_TOP_N as i64, allow_negative_numbers = true)]
    pub top_n: i64,

    /// Layout of the co-occurrence matrix.
    #[clap(long, value_enum, default_value_t = MatrixKind::Dense)]
    pub matrix: MatrixKind,
}

fn print_results(song: &str, results: &Result<Vec<Recommendation>, RecommendError>) {
    match results {
        Err(err) => println!("{}", err),
        Ok(results) if results.is_empty() => {
            println!("No recommendations for \"{}\".", song)
        }
        Ok(results) => {
            println!("Top {} songs similar to \"{}\":\n", results.len(), song);
            for (position, result) in results.iter().enumerate() {
                println!("{:>3}. {} ({:.4})", position + 1, result.song, result.score);
            }
        }
    }
}

fn query(index: &CoOccurrenceIndex, song: &str, top_n: i64) {
    let song = song.trim();
    let top_n = usize::try_from(top_n).unwrap_or(0);
    print_results(song, &recommend(index, song, top_n));
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    println!(
        "Cli Recommend loading playlists at {}...",
        cli_args.playlists_path.display()
    );
    let playlists = load_playlists(&cli_args.playlists_path)?;
    let index = CoOccurrenceIndex::build_with_kind(&playlists, cli_args.matrix);
    println!("Done! {} songs indexed.", index.len());

    if let Some(song) = cli_args.song.as_deref() {
        query(&index, song, cli_args.top_n);
        return Ok(());
    }

    let stdin = io::stdin();
    loop {
        print!("\nPlease enter a song id: ");
        io::stdout().flush()?;

        let mut user_input = String::new();
        if stdin.lock().read_line(&mut user_input)? == 0 {
            break;
        }
        if user_input.trim().is_empty() {
            continue;
        }
        query(&index, &user_input, cli_args.top_n);
    }
    Ok(())
}
