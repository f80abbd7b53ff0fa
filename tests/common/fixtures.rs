//! Test fixture creation for the playlist corpus

use super::constants::*;
use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Writes `json` to `playlists.json` in a fresh temp dir.
/// Returns (temp_dir, playlists_path)
pub fn write_playlists_file(json: &str) -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join("playlists.json");
    fs::write(&path, json)?;
    Ok((dir, path))
}

/// Creates the standard corpus: 5 playlists, 6 songs.
///
/// A appears with B in three playlists and with C in two, D and E only
/// appear together with A, the lonely song has a playlist of its own.
pub fn write_test_playlists() -> Result<(TempDir, PathBuf)> {
    let corpus = serde_json::json!([
        { "name": "morning", "tracks": [SONG_A, SONG_B, SONG_C] },
        { "name": "evening", "tracks": [SONG_A, SONG_B, SONG_B] },
        { "name": "night", "tracks": [SONG_C, SONG_A, SONG_B] },
        { "name": "road trip", "tracks": [SONG_D, SONG_E, SONG_A] },
        { "name": "alone", "tracks": [SONG_LONELY] },
    ]);
    write_playlists_file(&corpus.to_string())
}
