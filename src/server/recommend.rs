//! Recommendation API routes

use crate::recommend::{recommend, RecommendError, Recommendation};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::http_cache;
use super::state::ServerState;

#[derive(Deserialize, Debug)]
struct RecommendBody {
    pub song: String,

    /// Maximum number of results, the server default when absent.
    /// Zero or negative values give an empty list.
    pub top_n: Option<i64>,
}

#[derive(Deserialize, Debug)]
struct SimilarQuery {
    pub top_n: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}

fn resolve_top_n(requested: Option<i64>, default: usize) -> usize {
    match requested {
        None => default,
        Some(n) if n <= 0 => 0,
        Some(n) => usize::try_from(n).unwrap_or(usize::MAX),
    }
}

enum RecommendResponse {
    Found(Json<Vec<Recommendation>>),
    NotFound(Json<ErrorBody>),
}

impl IntoResponse for RecommendResponse {
    fn into_response(self) -> Response {
        match self {
            RecommendResponse::Found(results) => results.into_response(),
            RecommendResponse::NotFound(body) => (StatusCode::NOT_FOUND, body).into_response(),
        }
    }
}

fn run_recommend(state: &ServerState, song: &str, top_n: Option<i64>) -> RecommendResponse {
    let song = song.trim();
    let top_n = resolve_top_n(top_n, state.config.default_top_n);
    match recommend(&state.index, song, top_n) {
        Ok(results) => RecommendResponse::Found(Json(results)),
        Err(err @ RecommendError::SongNotFound(_)) => {
            debug!("{}", err);
            RecommendResponse::NotFound(Json(ErrorBody {
                error: err.to_string(),
            }))
        }
    }
}

async fn post_recommend(
    State(state): State<ServerState>,
    Json(body): Json<RecommendBody>,
) -> impl IntoResponse {
    run_recommend(&state, &body.song, body.top_n)
}

async fn get_similar(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Query(query): Query<SimilarQuery>,
) -> impl IntoResponse {
    run_recommend(&state, &id, query.top_n)
}

pub fn make_recommend_routes(state: ServerState) -> Router {
    Router::new()
        .route("/recommend", post(post_recommend))
        .route("/song/{id}/similar", get(get_similar))
        .layer(middleware::from_fn_with_state(
            state.config.cache_age_sec,
            http_cache,
        ))
        .with_state(state)
}
