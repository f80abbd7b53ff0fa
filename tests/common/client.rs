//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per recommender endpoint.
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::json;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

#[allow(dead_code)]
impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// GET /
    pub async fn get_home(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("Home request failed")
    }

    /// GET /v1/stats
    pub async fn get_stats(&self) -> Response {
        self.client
            .get(format!("{}/v1/stats", self.base_url))
            .send()
            .await
            .expect("Stats request failed")
    }

    /// POST /v1/recommend
    pub async fn recommend(&self, song: &str, top_n: Option<i64>) -> Response {
        let body = match top_n {
            Some(top_n) => json!({ "song": song, "top_n": top_n }),
            None => json!({ "song": song }),
        };
        self.client
            .post(format!("{}/v1/recommend", self.base_url))
            .json(&body)
            .send()
            .await
            .expect("Recommend request failed")
    }

    /// GET /v1/song/{id}/similar
    pub async fn get_similar(&self, song: &str, top_n: Option<i64>) -> Response {
        let mut request = self
            .client
            .get(format!("{}/v1/song/{}/similar", self.base_url, song));
        if let Some(top_n) = top_n {
            request = request.query(&[("top_n", top_n)]);
        }
        request.send().await.expect("Similar request failed")
    }
}
