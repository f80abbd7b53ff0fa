//! Ranking of songs by co-occurrence similarity to a query song

use super::similarity::cosine_from_parts;
use crate::cooccurrence::{CoOccurrenceIndex, SongIndex};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub song: String,
    pub score: f64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecommendError {
    #[error("Song '{0}' not found in database.")]
    SongNotFound(String),
}

/// Cosine similarity of `query`'s row against every row of the matrix,
/// itself included, in index order.
pub fn similarity_scores(index: &CoOccurrenceIndex, query: SongIndex) -> Vec<f64> {
    let matrix = index.co_matrix();
    let query_norm = index.row_norm(query);
    (0..index.len())
        .into_par_iter()
        .map(|other| {
            cosine_from_parts(
                matrix.dot(query, other) as f64,
                query_norm,
                index.row_norm(other),
            )
        })
        .collect()
}

/// Up to `top_n` songs most similar to `query`, best first.
///
/// Equal scores keep index (first discovery) order. The query song is never
/// part of the result, whatever its score.
pub fn recommend(
    index: &CoOccurrenceIndex,
    query: &str,
    top_n: usize,
) -> Result<Vec<Recommendation>, RecommendError> {
    let query_index = index
        .index_of(query)
        .ok_or_else(|| RecommendError::SongNotFound(query.to_string()))?;

    if top_n == 0 {
        return Ok(vec![]);
    }

    let mut ranked: Vec<(SongIndex, f64)> = similarity_scores(index, query_index)
        .into_iter()
        .enumerate()
        .filter(|&(other, _)| other != query_index)
        .collect();

    // sort_by is stable, ties stay in index order
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(top_n);

    debug!(
        "Ranked {} songs for '{}', returning {}",
        index.len().saturating_sub(1),
        query,
        ranked.len()
    );

    Ok(ranked
        .into_iter()
        .map(|(other, score)| Recommendation {
            song: index.index_to_song()[other].clone(),
            score,
        })
        .collect())
}
