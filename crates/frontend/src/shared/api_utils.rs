//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and the period query string.

use contracts::shared::date_range::{DateRange, DateRangeQuery};

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/d400/latest_date");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// `date_from=...&date_to=...` for a period; empty for "All Data"
pub fn range_query(range: &DateRange) -> String {
    serde_qs::to_string(&DateRangeQuery::from(range)).unwrap_or_default()
}

/// Period from a location search string (`?date_from=...`)
///
/// A lone `date_from` or `date_to` is that single day; malformed or inverted
/// values fall back to "All Data".
pub fn parse_range_query(search: &str) -> DateRange {
    serde_qs::from_str::<DateRangeQuery>(search.trim_start_matches('?'))
        .map_err(anyhow::Error::from)
        .and_then(|query| query.to_range())
        .unwrap_or_else(|e| {
            log::warn!("ignoring period in query string '{}': {}", search, e);
            DateRange::all_data()
        })
}
