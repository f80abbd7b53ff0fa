mod load;
mod playlist;

pub use load::{load_playlists, parse_playlists, PlaylistsError};
pub use playlist::{Playlist, SongId};
