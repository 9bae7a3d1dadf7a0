//! HTTP calls to the documentation server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so a missing
//! manifest or a failed search degrades the page without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::SearchResult;
use crate::state::site::SiteIndex;

/// Search endpoint path.
pub const SEARCH_ENDPOINT: &str = "/api/search";

/// Path of the generated site manifest.
pub const SITE_INDEX_PATH: &str = "/assets/site-index.json";

#[cfg(any(test, feature = "hydrate"))]
fn search_request_url(query: &str) -> String {
    let params = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("q", query)
        .finish();
    format!("{SEARCH_ENDPOINT}?{params}")
}

#[cfg(any(test, feature = "hydrate"))]
fn search_request_failed_message(status: u16) -> String {
    format!("search request failed: {status}")
}

/// Run a search against `GET /api/search?q=...`.
///
/// # Errors
///
/// Returns an error string when the request cannot be sent, the server
/// responds with a non-OK status, or the body is not a valid result array.
pub async fn search(query: &str) -> Result<Vec<SearchResult>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = search_request_url(query);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(search_request_failed_message(resp.status()));
        }
        // A zero-hit response may arrive as `null` instead of `[]`; both
        // mean no results, not a failure.
        resp.json::<Option<Vec<SearchResult>>>()
            .await
            .map(|hits| hits.unwrap_or_default())
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err("not available on server".to_owned())
    }
}

/// Fetch the generated site manifest from [`SITE_INDEX_PATH`].
/// Returns `None` when it is missing or malformed; the shell then renders
/// empty navigation and catalog sections.
pub async fn fetch_site_index() -> Option<SiteIndex> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SITE_INDEX_PATH)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SiteIndex>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
