//! Startup reachability check against the blog API.
//!
//! The host never proxies API traffic; the browser talks to the API directly.
//! This probe only tells operators at boot whether the configured base answers.

#[cfg(test)]
#[path = "upstream_test.rs"]
mod upstream_test;

use std::time::Duration;

use client::net::types::PostsPage;

const REQUEST_TIMEOUT_SECS: u64 = 5;
const CONNECT_TIMEOUT_SECS: u64 = 3;

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("posts response parse failed: {0}")]
    Parse(String),
}

/// Feed endpoint used as the probe target.
pub fn probe_url(api_url: &str) -> String {
    format!("{}/api/posts", api_url.trim_end_matches('/'))
}

/// Decode a feed body so a wrong base (an HTML page, another service) is caught.
pub fn parse_feed(body: &str) -> Result<PostsPage, ProbeError> {
    serde_json::from_str(body).map_err(|e| ProbeError::Parse(e.to_string()))
}

/// Fetch the first feed page from the blog API.
///
/// # Errors
///
/// Returns a [`ProbeError`] when the API is unreachable, answers with a
/// non-success status, or does not return a posts page.
pub async fn probe(api_url: &str) -> Result<PostsPage, ProbeError> {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .build()
        .map_err(|e| ProbeError::HttpClientBuild(e.to_string()))?;

    let resp = http
        .get(probe_url(api_url))
        .send()
        .await
        .map_err(|e| ProbeError::Request(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ProbeError::Status(status.as_u16()));
    }

    let body = resp.text().await.map_err(|e| ProbeError::Request(e.to_string()))?;
    parse_feed(&body)
}

/// Run [`probe`] and log the outcome; never fails.
pub async fn report(api_url: String) {
    match probe(&api_url).await {
        Ok(page) => {
            tracing::info!(api = %api_url, posts = page.posts.len(), pages = page.pages, "blog API reachable");
        }
        Err(e) => {
            tracing::warn!(api = %api_url, error = %e, "blog API probe failed; pages will show load errors");
        }
    }
}
