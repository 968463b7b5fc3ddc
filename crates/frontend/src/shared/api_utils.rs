//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Get the base URL for API requests
///
/// Taken from the `API_URL` environment variable at build time. When the
/// variable is not set, the URL is derived from the current window location,
/// using port 8000 for the backend server.
///
/// # Returns
/// - API base URL like "https://api.example.com" or "http://localhost:8000"
/// - Empty string if neither the variable nor window is available
pub fn api_base() -> String {
    if let Some(url) = option_env!("API_URL") {
        return url.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// Example: `api_url("/recipient/recipient/")`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
