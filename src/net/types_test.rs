use super::*;

#[test]
fn search_result_decodes_from_endpoint_shape() {
    let json = r#"{"url": "/http-client.html", "title": "HttpClient", "excerpt": "Pooled connections", "score": 0.5}"#;
    let hit: SearchResult = serde_json::from_str(json).unwrap();
    assert_eq!(hit.url, "/http-client.html");
    assert_eq!(hit.title, "HttpClient");
    assert_eq!(hit.excerpt, "Pooled connections");
    assert!((hit.score - 0.5).abs() < f64::EPSILON);
}

#[test]
fn extra_fields_are_ignored() {
    let json = r#"{"url": "/a", "title": "A", "excerpt": "e", "score": 1.0, "rank": 1}"#;
    assert!(serde_json::from_str::<SearchResult>(json).is_ok());
}

#[test]
fn missing_field_fails_decoding() {
    let json = r#"{"url": "/a", "title": "A", "score": 1.0}"#;
    assert!(serde_json::from_str::<SearchResult>(json).is_err());
}

#[test]
fn null_body_decodes_as_absent_array() {
    let hits: Option<Vec<SearchResult>> = serde_json::from_str("null").unwrap();
    assert_eq!(hits, None);
}

#[test]
fn result_arrays_decode_in_order() {
    let json = r#"[
        {"url": "/a", "title": "A", "excerpt": "first", "score": 2.0},
        {"url": "/b", "title": "B", "excerpt": "second", "score": 1.0}
    ]"#;
    let hits: Vec<SearchResult> = serde_json::from_str(json).unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].title, "A");
    assert_eq!(hits[1].title, "B");
}
