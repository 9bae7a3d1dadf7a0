//! Case-insensitive substring filtering over typed site entries.
//!
//! DESIGN
//! ======
//! The query is lowercased once at construction and compared by plain
//! unanchored containment, so one-word and multi-word queries behave the
//! same. An empty query matches everything, which restores the unfiltered
//! view the moment the user clears the box. Filtering only ever computes
//! visibility; callers keep their entry lists intact.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// An entry that exposes the text fields a filter box searches.
pub trait Filterable {
    /// The fields checked for containment, in display order.
    fn search_text(&self) -> impl Iterator<Item = &str>;
}

/// A normalized filter query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterQuery {
    lowered: String,
}

impl FilterQuery {
    /// Normalize raw input text into a query.
    pub fn new(raw: &str) -> Self {
        Self {
            lowered: raw.to_lowercase(),
        }
    }

    /// `true` when the query has no text and therefore matches everything.
    pub fn is_empty(&self) -> bool {
        self.lowered.is_empty()
    }

    /// Case-insensitive unanchored containment against a single string.
    pub fn matches_text(&self, text: &str) -> bool {
        self.is_empty() || text.to_lowercase().contains(&self.lowered)
    }

    /// `true` when any searched field of the entry contains the query.
    pub fn matches<T: Filterable>(&self, entry: &T) -> bool {
        self.is_empty() || entry.search_text().any(|text| self.matches_text(text))
    }
}
