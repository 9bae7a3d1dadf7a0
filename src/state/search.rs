//! Search request lifecycle and result classification.
//!
//! DESIGN
//! ======
//! In-flight requests are never cancelled. Each submitted query bumps a
//! generation counter and hands out a token; resolution presents the token
//! back, and a stale token is dropped outright. An older slow response can
//! therefore never overwrite the pane for a newer query, whichever order
//! the responses land in.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::types::SearchResult;

/// Message shown when the endpoint returns an empty result array.
pub const NO_RESULTS_MESSAGE: &str = "No results found.";

/// Message shown when the request fails for any reason.
pub const SEARCH_FAILED_MESSAGE: &str = "Search failed. Please try again.";

/// Ties an in-flight request to the generation that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken(u64);

/// What the results pane is currently showing.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    /// Ranked hits, in received order.
    Hits(Vec<SearchResult>),
    /// The endpoint answered with an empty array.
    Empty,
    /// The request failed: network error, non-OK status, or undecodable body.
    Failed,
}

/// Results-pane state: current request generation plus the last outcome.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    generation: u64,
    /// `None` until a first query resolves; the pane renders nothing.
    pub outcome: Option<SearchOutcome>,
}

impl SearchState {
    /// Register a newly submitted query. Returns the token the eventual
    /// response must present, or `None` for the empty query, which issues
    /// nothing and leaves the pane untouched.
    pub fn begin(&mut self, query: &str) -> Option<RequestToken> {
        if query.is_empty() {
            return None;
        }
        self.generation += 1;
        Some(RequestToken(self.generation))
    }

    /// Apply a response for the request identified by `token`. Returns
    /// `false` without touching the outcome when the token is stale, i.e.
    /// a newer query began after it was issued.
    pub fn resolve(
        &mut self,
        token: RequestToken,
        response: Result<Vec<SearchResult>, String>,
    ) -> bool {
        if token.0 != self.generation {
            return false;
        }
        self.outcome = Some(match response {
            Ok(hits) if hits.is_empty() => SearchOutcome::Empty,
            Ok(hits) => SearchOutcome::Hits(hits),
            Err(_) => SearchOutcome::Failed,
        });
        true
    }
}

/// Format a relevance score for display, always with two decimal places.
pub fn format_score(score: f64) -> String {
    format!("{score:.2}")
}
