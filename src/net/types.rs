//! Wire DTOs for the search endpoint.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One search hit as returned by `GET /api/search`.
///
/// The endpoint returns a JSON array of these, already ranked; the client
/// renders them in received order and never re-sorts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Page the hit links to, relative to the site root.
    pub url: String,
    /// Heading text for the hit.
    pub title: String,
    /// Short contextual snippet.
    pub excerpt: String,
    /// Relevance score; display-only, rendered to two decimal places.
    pub score: f64,
}
