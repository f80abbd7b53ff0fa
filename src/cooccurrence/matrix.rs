//! Co-occurrence matrix storage
//!
//! Two interchangeable layouts sit behind [`CoMatrix`]: a dense row-major
//! table, which is the default, and a sparse per-row list for catalogs where
//! N² cells would not fit in memory. Both hold exactly the same counts.

use serde::Serialize;
use std::collections::HashMap;
use tracing::info;

/// Dense position of a song in the index, in `[0, N)`.
pub type SongIndex = usize;

/// Ordered pair `(a, b)` to the number of playlists containing both songs.
pub type PairCounts = HashMap<(SongIndex, SongIndex), u32>;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MatrixKind {
    #[default]
    Dense,
    Sparse,
}

impl std::fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixKind::Dense => write!(f, "dense"),
            MatrixKind::Sparse => write!(f, "sparse"),
        }
    }
}

/// Read-only N×N table of co-occurrence counts.
pub trait CoMatrix: Send + Sync {
    fn kind(&self) -> MatrixKind;

    /// N, the number of rows (and columns).
    fn size(&self) -> usize;

    fn get(&self, row: SongIndex, col: SongIndex) -> u32;

    /// Full row as a dense vector of length N.
    fn row(&self, row: SongIndex) -> Vec<u32>;

    /// Exact dot product of two rows.
    fn dot(&self, a: SongIndex, b: SongIndex) -> u64;
}

/// Create a matrix of the requested layout from counted pairs.
///
/// Every key of `pairs` must lie in `[0, size)` on both axes.
pub fn create_co_matrix(kind: MatrixKind, size: usize, pairs: &PairCounts) -> Box<dyn CoMatrix> {
    match kind {
        MatrixKind::Dense => {
            info!("Allocating dense {}x{} co-occurrence matrix", size, size);
            Box::new(DenseCoMatrix::from_pair_counts(size, pairs))
        }
        MatrixKind::Sparse => {
            info!(
                "Allocating sparse {}x{} co-occurrence matrix ({} entries)",
                size,
                size,
                pairs.len()
            );
            Box::new(SparseCoMatrix::from_pair_counts(size, pairs))
        }
    }
}

pub struct DenseCoMatrix {
    size: usize,
    cells: Vec<u32>,
}

impl DenseCoMatrix {
    pub fn from_pair_counts(size: usize, pairs: &PairCounts) -> Self {
        let mut cells = vec![0u32; size * size];
        for (&(row, col), &count) in pairs.iter() {
            cells[row * size + col] = count;
        }
        DenseCoMatrix { size, cells }
    }

    fn row_slice(&self, row: SongIndex) -> &[u32] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }
}

impl CoMatrix for DenseCoMatrix {
    fn kind(&self) -> MatrixKind {
        MatrixKind::Dense
    }

    fn size(&self) -> usize {
        self.size
    }

    fn get(&self, row: SongIndex, col: SongIndex) -> u32 {
        self.cells[row * self.size + col]
    }

    fn row(&self, row: SongIndex) -> Vec<u32> {
        self.row_slice(row).to_vec()
    }

    fn dot(&self, a: SongIndex, b: SongIndex) -> u64 {
        self.row_slice(a)
            .iter()
            .zip(self.row_slice(b))
            .map(|(&x, &y)| x as u64 * y as u64)
            .sum()
    }
}

pub struct SparseCoMatrix {
    /// Per row, `(column, count)` sorted by column.
    rows: Vec<Vec<(SongIndex, u32)>>,
}

impl SparseCoMatrix {
    pub fn from_pair_counts(size: usize, pairs: &PairCounts) -> Self {
        let mut rows: Vec<Vec<(SongIndex, u32)>> = vec![Vec::new(); size];
        for (&(row, col), &count) in pairs.iter() {
            if count != 0 {
                rows[row].push((col, count));
            }
        }
        for row in rows.iter_mut() {
            row.sort_unstable_by_key(|&(col, _)| col);
        }
        SparseCoMatrix { rows }
    }
}

impl CoMatrix for SparseCoMatrix {
    fn kind(&self) -> MatrixKind {
        MatrixKind::Sparse
    }

    fn size(&self) -> usize {
        self.rows.len()
    }

    fn get(&self, row: SongIndex, col: SongIndex) -> u32 {
        let entries = &self.rows[row];
        match entries.binary_search_by_key(&col, |&(c, _)| c) {
            Ok(pos) => entries[pos].1,
            Err(_) => 0,
        }
    }

    fn row(&self, row: SongIndex) -> Vec<u32> {
        let mut dense = vec![0u32; self.rows.len()];
        for &(col, count) in self.rows[row].iter() {
            dense[col] = count;
        }
        dense
    }

    fn dot(&self, a: SongIndex, b: SongIndex) -> u64 {
        let (left, right) = (&self.rows[a], &self.rows[b]);
        let (mut i, mut j) = (0, 0);
        let mut sum = 0u64;
        while i < left.len() && j < right.len() {
            let (col_a, count_a) = left[i];
            let (col_b, count_b) = right[j];
            match col_a.cmp(&col_b) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += count_a as u64 * count_b as u64;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}
