use super::matrix::{create_co_matrix, CoMatrix, MatrixKind, PairCounts, SongIndex};
use crate::playlists::{Playlist, SongId};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Pair counting is quadratic in the number of unique tracks of a playlist,
/// playlists above this size get a warning while building.
pub const LARGE_PLAYLIST_WARN_THRESHOLD: usize = 500;

/// Song index mapping plus co-occurrence matrix, built once from a corpus
/// and read-only afterwards.
pub struct CoOccurrenceIndex {
    song_to_index: HashMap<SongId, SongIndex>,
    index_to_song: Vec<SongId>,
    /// Number of playlists each song appears in.
    occurrences: Vec<u32>,
    co_matrix: Box<dyn CoMatrix>,
    row_norms: Vec<f64>,
    /// Off-diagonal cells with a nonzero count, fixed once built.
    nonzero_entries: usize,
    playlists_count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct IndexStats {
    pub songs: usize,
    pub playlists: usize,
    pub nonzero_entries: usize,
    pub matrix: MatrixKind,
}

#[derive(Default)]
struct SongInterner {
    song_to_index: HashMap<SongId, SongIndex>,
    index_to_song: Vec<SongId>,
    occurrences: Vec<u32>,
}

impl SongInterner {
    /// Returns the song's index, assigning the next free one on first sight.
    fn intern(&mut self, song: &str) -> SongIndex {
        if let Some(&index) = self.song_to_index.get(song) {
            return index;
        }
        let index = self.index_to_song.len();
        self.song_to_index.insert(song.to_string(), index);
        self.index_to_song.push(song.to_string());
        self.occurrences.push(0);
        index
    }
}

/// Build an index with the default (dense) matrix layout.
pub fn build_index(playlists: &[Playlist]) -> CoOccurrenceIndex {
    CoOccurrenceIndex::build(playlists)
}

impl CoOccurrenceIndex {
    pub fn build(playlists: &[Playlist]) -> Self {
        Self::build_with_kind(playlists, MatrixKind::default())
    }

    pub fn build_with_kind(playlists: &[Playlist], kind: MatrixKind) -> Self {
        info!(
            "Building co-occurrence matrix from {} playlists...",
            playlists.len()
        );

        let mut interner = SongInterner::default();
        let mut pairs = PairCounts::new();

        for (position, playlist) in playlists.iter().enumerate() {
            let unique: Vec<SongIndex> = playlist
                .unique_tracks()
                .into_iter()
                .map(|song| interner.intern(song))
                .collect();

            if unique.len() > LARGE_PLAYLIST_WARN_THRESHOLD {
                warn!(
                    "Playlist #{} has {} unique tracks, counting {} pairs",
                    position,
                    unique.len(),
                    unique.len() * (unique.len() - 1)
                );
            }

            for &a in unique.iter() {
                for &b in unique.iter() {
                    if a != b {
                        *pairs.entry((a, b)).or_insert(0) += 1;
                    }
                }
                interner.occurrences[a] += 1;
            }
        }

        let size = interner.index_to_song.len();
        debug!("Counted {} distinct ordered pairs", pairs.len());

        let co_matrix = create_co_matrix(kind, size, &pairs);
        let row_norms = (0..size)
            .map(|i| (co_matrix.dot(i, i) as f64).sqrt())
            .collect();

        info!("Matrix built for {} songs.", size);

        CoOccurrenceIndex {
            song_to_index: interner.song_to_index,
            index_to_song: interner.index_to_song,
            occurrences: interner.occurrences,
            co_matrix,
            row_norms,
            nonzero_entries: pairs.len(),
            playlists_count: playlists.len(),
        }
    }

    /// N, the number of distinct songs.
    pub fn len(&self) -> usize {
        self.index_to_song.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index_to_song.is_empty()
    }

    pub fn index_of(&self, song: &str) -> Option<SongIndex> {
        self.song_to_index.get(song).copied()
    }

    pub fn song_at(&self, index: SongIndex) -> Option<&str> {
        self.index_to_song.get(index).map(String::as_str)
    }

    pub fn song_to_index(&self) -> &HashMap<SongId, SongIndex> {
        &self.song_to_index
    }

    pub fn index_to_song(&self) -> &[SongId] {
        &self.index_to_song
    }

    pub fn co_matrix(&self) -> &dyn CoMatrix {
        self.co_matrix.as_ref()
    }

    /// Euclidean norm of a song's co-occurrence row.
    pub fn row_norm(&self, index: SongIndex) -> f64 {
        self.row_norms[index]
    }

    /// Number of playlists `song` appears in.
    pub fn occurrences(&self, song: &str) -> Option<u32> {
        self.index_of(song).map(|i| self.occurrences[i])
    }

    /// Number of playlists containing both songs, `None` if either is unknown.
    pub fn co_occurrences(&self, a: &str, b: &str) -> Option<u32> {
        let (i, j) = (self.index_of(a)?, self.index_of(b)?);
        Some(self.co_matrix.get(i, j))
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            songs: self.len(),
            playlists: self.playlists_count,
            nonzero_entries: self.nonzero_entries,
            matrix: self.co_matrix.kind(),
        }
    }
}
