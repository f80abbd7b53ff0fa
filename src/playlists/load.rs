//! Playlist corpus loading
//!
//! The corpus is a JSON array of records, each with a `tracks` array of
//! song identifiers. Any other shape is rejected as a whole: callers never
//! see a partially parsed corpus.

use super::Playlist;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum PlaylistsError {
    #[error("Could not read playlists file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed playlists data: {0}")]
    DataFormat(#[from] serde_json::Error),

    #[error("Playlist #{playlist} contains an empty song identifier")]
    EmptySongId { playlist: usize },
}

pub fn parse_playlists(json: &str) -> Result<Vec<Playlist>, PlaylistsError> {
    let playlists: Vec<Playlist> = serde_json::from_str(json)?;

    if let Some(position) = playlists
        .iter()
        .position(|p| p.tracks.iter().any(|t| t.is_empty()))
    {
        return Err(PlaylistsError::EmptySongId { playlist: position });
    }

    Ok(playlists)
}

pub fn load_playlists<P: AsRef<Path>>(path: P) -> Result<Vec<Playlist>, PlaylistsError> {
    let path = path.as_ref();
    info!("Loading playlists from {:?}...", path);

    let content = std::fs::read_to_string(path).map_err(|source| PlaylistsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let playlists = parse_playlists(&content)?;

    info!("Loaded {} playlists.", playlists.len());
    Ok(playlists)
}
