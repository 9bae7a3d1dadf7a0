use super::*;

fn hit(url: &str, title: &str, score: f64) -> SearchResult {
    SearchResult {
        url: url.to_owned(),
        title: title.to_owned(),
        excerpt: "excerpt".to_owned(),
        score,
    }
}

// ===== begin =====

#[test]
fn empty_query_issues_no_request() {
    let mut state = SearchState::default();
    assert!(state.begin("").is_none());
    assert_eq!(state.outcome, None);
}

#[test]
fn empty_query_leaves_previous_outcome_in_place() {
    let mut state = SearchState::default();
    let token = state.begin("router").unwrap();
    assert!(state.resolve(token, Ok(vec![])));
    assert!(state.begin("").is_none());
    assert_eq!(state.outcome, Some(SearchOutcome::Empty));
}

#[test]
fn whitespace_query_is_not_empty() {
    // The guard is exact emptiness; a space is still sent to the endpoint.
    let mut state = SearchState::default();
    assert!(state.begin(" ").is_some());
}

// ===== resolve =====

#[test]
fn hits_are_stored_in_received_order() {
    let mut state = SearchState::default();
    let token = state.begin("client").unwrap();
    let hits = vec![hit("/a", "A", 2.0), hit("/b", "B", 1.0)];
    assert!(state.resolve(token, Ok(hits.clone())));
    assert_eq!(state.outcome, Some(SearchOutcome::Hits(hits)));
}

#[test]
fn empty_array_resolves_to_no_results() {
    let mut state = SearchState::default();
    let token = state.begin("zzz").unwrap();
    assert!(state.resolve(token, Ok(vec![])));
    assert_eq!(state.outcome, Some(SearchOutcome::Empty));
}

#[test]
fn null_body_resolves_to_no_results() {
    // Zero-hit responses may arrive as `null` rather than `[]`; the decoded
    // form is an empty list, never a failure.
    let mut state = SearchState::default();
    let token = state.begin("zzz").unwrap();
    let body: Option<Vec<SearchResult>> = serde_json::from_str("null").unwrap();
    assert!(state.resolve(token, Ok(body.unwrap_or_default())));
    assert_eq!(state.outcome, Some(SearchOutcome::Empty));
}

#[test]
fn error_resolves_to_failed() {
    let mut state = SearchState::default();
    let token = state.begin("client").unwrap();
    assert!(state.resolve(token, Err("search request failed: 500".to_owned())));
    assert_eq!(state.outcome, Some(SearchOutcome::Failed));
}

// ===== stale responses =====

#[test]
fn stale_response_is_dropped() {
    let mut state = SearchState::default();
    let first = state.begin("alpha").unwrap();
    let second = state.begin("beta").unwrap();

    // The older request answers after the newer one began: it must lose.
    assert!(!state.resolve(first, Ok(vec![hit("/old", "Old", 1.0)])));
    assert_eq!(state.outcome, None);

    assert!(state.resolve(second, Ok(vec![hit("/new", "New", 1.0)])));
    assert_eq!(
        state.outcome,
        Some(SearchOutcome::Hits(vec![hit("/new", "New", 1.0)]))
    );
}

#[test]
fn stale_failure_cannot_clobber_newer_results() {
    let mut state = SearchState::default();
    let first = state.begin("alpha").unwrap();
    let second = state.begin("beta").unwrap();

    assert!(state.resolve(second, Ok(vec![hit("/new", "New", 1.0)])));
    assert!(!state.resolve(first, Err("timed out".to_owned())));
    assert_eq!(
        state.outcome,
        Some(SearchOutcome::Hits(vec![hit("/new", "New", 1.0)]))
    );
}

#[test]
fn token_for_the_current_generation_can_resolve_once_outcome_already_set() {
    // Two resolves with the same current token: the later one wins, matching
    // an at-most-once fetch per begin in practice but not enforced here.
    let mut state = SearchState::default();
    let token = state.begin("alpha").unwrap();
    assert!(state.resolve(token, Err("boom".to_owned())));
    assert!(state.resolve(token, Ok(vec![])));
    assert_eq!(state.outcome, Some(SearchOutcome::Empty));
}

// ===== display formatting =====

#[test]
fn scores_render_with_two_decimals() {
    assert_eq!(format_score(0.5), "0.50");
    assert_eq!(format_score(12.3456), "12.35");
    assert_eq!(format_score(3.0), "3.00");
    assert_eq!(format_score(0.0), "0.00");
}

#[test]
fn user_facing_messages_are_fixed() {
    assert_eq!(NO_RESULTS_MESSAGE, "No results found.");
    assert_eq!(SEARCH_FAILED_MESSAGE, "Search failed. Please try again.");
}
