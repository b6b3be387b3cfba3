//! Tests for the query service: listing, key resolution, and prompt
//! previews.
mod common;
use common::*;
use kaigi::prelude::*;

#[test]
fn test_listing_follows_document_order() {
    let map = DecisionMap::derive(&onboarding_document());
    let query = QueryService::new(&map);

    let listing = query.list();
    assert_eq!(listing.len(), 4);

    let rows: Vec<(usize, &str)> = listing
        .iter()
        .map(|summary| (summary.position, summary.id.as_str()))
        .collect();
    assert_eq!(rows, [(1, "q1"), (2, "q2"), (3, "q3"), (4, "done")]);
}

#[test]
fn test_numeric_key_resolves_by_position() {
    let map = DecisionMap::derive(&onboarding_document());
    let query = QueryService::new(&map);

    let (id, entry) = query.resolve("2").expect("position 2 exists");
    assert_eq!(id, "q2");
    assert_eq!(entry.node_type, "choice");
}

#[test]
fn test_literal_key_resolves_by_id() {
    let map = DecisionMap::derive(&onboarding_document());
    let query = QueryService::new(&map);

    let (id, entry) = query.resolve("q3").expect("id q3 exists");
    assert_eq!(id, "q3");
    assert_eq!(entry.node_type, "file_upload");
    assert_eq!(entry.next_nodes, ["done".to_string()]);
    assert_eq!(entry.prev_nodes, ["q2".to_string()]);
}

#[test]
fn test_unresolvable_keys_yield_not_found() {
    let map = DecisionMap::derive(&onboarding_document());
    let query = QueryService::new(&map);

    assert!(query.resolve("0").is_none());
    assert!(query.resolve("5").is_none());
    assert!(query.resolve("999999999999999999999999").is_none());
    assert!(query.resolve("unknown_id").is_none());
    assert!(query.resolve("").is_none());
}

#[test]
fn test_numeric_keys_are_positions_not_ids() {
    // A node whose id happens to be all digits can only be reached by
    // its listing position; digits always mean a position.
    let doc = document(
        "42",
        vec![
            ("42", text_node("Numeric id", None)),
            ("q2", end_node("Done")),
        ],
    );
    let map = DecisionMap::derive(&doc);
    let query = QueryService::new(&map);

    assert!(query.resolve("42").is_none());
    let (id, _) = query.resolve("1").expect("position 1 exists");
    assert_eq!(id, "42");
}

#[test]
fn test_preview_truncates_and_collapses_newlines() {
    let long_prompt = "line one\nline two that keeps going well past the fifty character mark";
    let doc = document("q1", vec![("q1", text_node(long_prompt, None))]);
    let map = DecisionMap::derive(&doc);
    let query = QueryService::new(&map);

    let listing = query.list();
    let preview = &listing[0].preview;

    assert_eq!(preview.chars().count(), 50);
    assert!(!preview.contains('\n'));
    assert!(preview.starts_with("line one line two"));
}

#[test]
fn test_whitespace_around_keys_is_ignored() {
    let map = DecisionMap::derive(&onboarding_document());
    let query = QueryService::new(&map);

    let (id, _) = query.resolve(" 2 ").expect("trimmed position resolves");
    assert_eq!(id, "q2");
}
