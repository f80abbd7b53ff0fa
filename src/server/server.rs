use anyhow::{Context, Result};
use std::time::Duration;

use axum::{extract::State, middleware, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use tower_http::services::ServeDir;
use tracing::info;

use super::{log_requests, make_recommend_routes, state::*, ServerConfig};
use crate::cooccurrence::IndexStats;

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
    pub index: IndexStats,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    Json(ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
        index: state.index.stats(),
    })
}

pub fn make_app(config: ServerConfig, index: GuardedIndex) -> Router {
    let state = ServerState::new(config.clone(), index);

    let api_routes: Router = make_recommend_routes(state.clone()).merge(
        Router::new()
            .route("/stats", get(home))
            .with_state(state.clone()),
    );

    let home_router: Router = match config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new()
            .route("/", get(home))
            .with_state(state.clone()),
    };

    home_router
        .nest("/v1", api_routes)
        .layer(middleware::from_fn_with_state(state, log_requests))
}

pub async fn run_server(index: GuardedIndex, config: ServerConfig) -> Result<()> {
    let port = config.port;
    let app = make_app(config, index);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;

    info!("Ready to serve at port {}!", port);
    Ok(axum::serve(listener, app).await?)
}
