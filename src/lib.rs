//! Playlist Recommender Library
//!
//! Builds a song co-occurrence index from a playlist corpus and ranks songs
//! by cosine similarity of their co-occurrence rows.

pub mod config;
pub mod cooccurrence;
pub mod playlists;
pub mod recommend;
pub mod server;

// Re-export commonly used types for convenience
pub use cooccurrence::{build_index, CoOccurrenceIndex, MatrixKind};
pub use playlists::{load_playlists, Playlist, PlaylistsError};
pub use recommend::{recommend, RecommendError, Recommendation};
pub use server::{run_server, RequestsLoggingLevel};
