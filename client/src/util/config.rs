//! API endpoint configuration and image URL resolution.
//!
//! The API base is fixed at build time through `INKWELL_API_URL`; REST calls go
//! to `<base>/api` and uploaded images are served relative to `<base>`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Base URL of the remote blog service, without a trailing slash.
pub fn api_base() -> &'static str {
    option_env!("INKWELL_API_URL")
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
}

/// Absolute URL for a REST path such as `/posts/42`.
pub fn api_url(path: &str) -> String {
    join_api(api_base(), path)
}

/// Absolute URL for an image reference returned by the server.
///
/// Returns `None` for missing or blank references so views can render a
/// placeholder instead.
pub fn image_url(path: Option<&str>) -> Option<String> {
    resolve_image(api_base(), path)
}

fn join_api(base: &str, path: &str) -> String {
    let sep = if path.starts_with('/') { "" } else { "/" };
    format!("{base}/api{sep}{path}")
}

fn resolve_image(base: &str, path: Option<&str>) -> Option<String> {
    let path = path?.trim();
    if path.is_empty() {
        return None;
    }
    if path.starts_with("http") {
        return Some(path.to_owned());
    }
    let sep = if path.starts_with('/') { "" } else { "/" };
    Some(format!("{base}{sep}{path}"))
}
