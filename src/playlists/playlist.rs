use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Opaque track identifier, compared by exact string equality.
pub type SongId = String;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Playlist {
    pub tracks: Vec<SongId>,
}

impl Playlist {
    pub fn new<I, S>(tracks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SongId>,
    {
        Playlist {
            tracks: tracks.into_iter().map(Into::into).collect(),
        }
    }

    /// Distinct tracks of this playlist, in order of first appearance.
    pub fn unique_tracks(&self) -> Vec<&str> {
        let mut seen = HashSet::with_capacity(self.tracks.len());
        self.tracks
            .iter()
            .map(String::as_str)
            .filter(|track| seen.insert(*track))
            .collect()
    }
}
