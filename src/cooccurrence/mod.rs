mod index;
mod matrix;

pub use index::{build_index, CoOccurrenceIndex, IndexStats, LARGE_PLAYLIST_WARN_THRESHOLD};
pub use matrix::{
    create_co_matrix, CoMatrix, DenseCoMatrix, MatrixKind, PairCounts, SongIndex, SparseCoMatrix,
};
