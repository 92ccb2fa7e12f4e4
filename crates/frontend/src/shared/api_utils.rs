//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Port the backend listens on during development (`trunk serve` runs elsewhere).
const API_PORT: &str = "3000";

/// Get the base URL for API requests
///
/// When the page is served by the backend itself (same port) the base is
/// empty and requests stay same-origin; otherwise it points at the backend
/// port on the current host.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    if location.port().map(|p| p == API_PORT).unwrap_or(false) {
        return String::new();
    }
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Outcome of a GET against the backend API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The server answered with a non-success status
    #[error("HTTP {0}")]
    Status(u16),
    /// Network failure or an unparsable body
    #[error("{0}")]
    Transport(String),
}

/// GET `path` and decode the JSON body.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| ApiError::Transport(format!("Request failed: {}", e)))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Transport(format!("Failed to parse response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_messages() {
        assert_eq!(ApiError::Status(503).to_string(), "HTTP 503");
        assert_eq!(
            ApiError::Transport("Request failed: offline".into()).to_string(),
            "Request failed: offline"
        );
    }
}
