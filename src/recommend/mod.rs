//! Similarity ranking over a built co-occurrence index.

mod ranker;
mod similarity;

pub use ranker::{recommend, similarity_scores, RecommendError, Recommendation, DEFAULT_TOP_N};
pub use similarity::{cosine_from_parts, cosine_similarity};
