//! Results pane for the remote search page.
//!
//! Renders whatever the most recent resolved query produced: result blocks
//! in received order, the fixed no-results message, or the fixed failure
//! message. Before the first query resolves the pane is empty.

use leptos::prelude::*;

use crate::state::search::{
    NO_RESULTS_MESSAGE, SEARCH_FAILED_MESSAGE, SearchOutcome, SearchState, format_score,
};

/// Render target for search outcomes (`#search-results`).
#[component]
pub fn SearchResults(state: RwSignal<SearchState>) -> impl IntoView {
    view! {
        <div id="search-results" class="search-results">
            {move || {
                match state.get().outcome {
                    None => ().into_any(),
                    Some(SearchOutcome::Empty) => view! { <p>{NO_RESULTS_MESSAGE}</p> }.into_any(),
                    Some(SearchOutcome::Failed) => {
                        view! { <p class="error">{SEARCH_FAILED_MESSAGE}</p> }.into_any()
                    }
                    Some(SearchOutcome::Hits(hits)) => hits
                        .into_iter()
                        .map(|hit| {
                            view! {
                                <div class="search-result">
                                    <h3>
                                        <a href=hit.url>{hit.title}</a>
                                    </h3>
                                    <p>{hit.excerpt}</p>
                                    <p class="search-meta">{format!("Score: {}", format_score(hit.score))}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any(),
                }
            }}
        </div>
    }
}
