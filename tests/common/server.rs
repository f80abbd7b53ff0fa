//! Test server lifecycle management
//!
//! This module manages spawning and shutting down test HTTP servers.
//! Each test gets an isolated server with its own corpus file and index.

use super::constants::*;
use super::fixtures::{write_playlists_file, write_test_playlists};
use playlist_recommender::server::{make_app, RequestsLoggingLevel, ServerConfig};
use playlist_recommender::{load_playlists, CoOccurrenceIndex, MatrixKind};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Test server instance with an isolated playlists file
///
/// When dropped, the server gracefully shuts down and temp resources are cleaned up.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    /// The index served, for direct comparisons in tests
    pub index: Arc<CoOccurrenceIndex>,

    // Private fields - keep resources alive until drop
    _temp_dir: TempDir,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

#[allow(dead_code)]
impl TestServer {
    /// Spawns a server over the standard fixture corpus with a dense matrix
    pub async fn spawn() -> Self {
        Self::spawn_with_matrix(MatrixKind::Dense).await
    }

    /// Spawns a server over the standard fixture corpus
    pub async fn spawn_with_matrix(matrix: MatrixKind) -> Self {
        let (temp_dir, path) = write_test_playlists().expect("Failed to write test playlists");
        Self::spawn_from_file(temp_dir, &path, matrix).await
    }

    /// Spawns a server over an arbitrary corpus
    pub async fn spawn_with_corpus(json: &str) -> Self {
        let (temp_dir, path) = write_playlists_file(json).expect("Failed to write playlists");
        Self::spawn_from_file(temp_dir, &path, MatrixKind::Dense).await
    }

    /// This function:
    /// 1. Loads the playlists file and builds the index
    /// 2. Binds to a random port (127.0.0.1:0)
    /// 3. Spawns the server in a background task
    /// 4. Waits for the server to be ready
    ///
    /// # Panics
    ///
    /// Panics if the corpus cannot be loaded, the port cannot be bound or
    /// the server doesn't become ready within timeout.
    async fn spawn_from_file(temp_dir: TempDir, path: &Path, matrix: MatrixKind) -> Self {
        let playlists = load_playlists(path).expect("Failed to load test playlists");
        let index = Arc::new(CoOccurrenceIndex::build_with_kind(&playlists, matrix));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            port,
            requests_logging_level: RequestsLoggingLevel::None,
            cache_age_sec: 60,
            frontend_dir_path: None,
            default_top_n: TEST_DEFAULT_TOP_N,
        };
        let app = make_app(config, index.clone());

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            port,
            index,
            _temp_dir: temp_dir,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling the / endpoint
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
