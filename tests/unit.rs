//! Unit tests for core kaigi types.
mod common;
use common::*;
use kaigi::prelude::*;

#[test]
fn test_response_display() {
    assert_eq!(format!("{}", Response::Text("Alice".to_string())), "Alice");
    assert_eq!(format!("{}", Response::Choice("no".to_string())), "no");
    assert_eq!(
        format!("{}", Response::File(Some("/tmp/cv.pdf".to_string()))),
        "/tmp/cv.pdf"
    );
    assert_eq!(format!("{}", Response::File(None)), "(no file selected)");
}

#[test]
fn test_node_kind_recognizes_known_types() {
    assert_eq!(text_node("p", None).kind(), NodeKind::Text);
    assert_eq!(choice_node("p", &[], &[]).kind(), NodeKind::Choice);
    assert_eq!(file_node("p", None).kind(), NodeKind::FileUpload);
    assert_eq!(end_node("p").kind(), NodeKind::End);

    let node = NodeDefinition {
        node_type: Some("send_email".to_string()),
        ..NodeDefinition::default()
    };
    assert_eq!(node.kind(), NodeKind::Unsupported("send_email".to_string()));
}

#[test]
fn test_missing_type_policies_diverge() {
    // The deriver reports a typeless node as "text"; the engine gives it
    // no default and treats it as unsupported. Both behaviors are
    // intentional and must not be unified.
    let node = NodeDefinition::default();
    assert_eq!(node.type_label(), "text");
    assert_eq!(node.kind(), NodeKind::Unsupported(String::new()));
}

#[test]
fn test_resolve_choice_input_literal_and_index() {
    let choices = vec!["yes".to_string(), "no".to_string()];

    assert_eq!(
        resolve_choice_input("yes", &choices),
        Some("yes".to_string())
    );
    assert_eq!(resolve_choice_input("2", &choices), Some("no".to_string()));
    assert_eq!(resolve_choice_input("1", &choices), Some("yes".to_string()));

    assert_eq!(resolve_choice_input("maybe", &choices), None);
    assert_eq!(resolve_choice_input("0", &choices), None);
    assert_eq!(resolve_choice_input("3", &choices), None);
    assert_eq!(resolve_choice_input("", &choices), None);
}

#[test]
fn test_choice_values_win_over_indexes() {
    // A literal match is checked before index resolution, so a choice
    // that looks like a number selects itself, not a position.
    let choices = vec!["2".to_string(), "other".to_string()];
    assert_eq!(resolve_choice_input("2", &choices), Some("2".to_string()));
}

#[test]
fn test_session_state_terminality() {
    assert!(!SessionState::Active("q1".to_string()).is_terminal());
    assert!(SessionState::Ended.is_terminal());
    assert!(SessionState::Exhausted.is_terminal());
    assert!(SessionState::Aborted.is_terminal());
    assert!(SessionState::NodeNotFound("q9".to_string()).is_terminal());
    assert!(
        SessionState::UnsupportedType {
            node_id: "q1".to_string(),
            node_type: "email".to_string(),
        }
        .is_terminal()
    );
}

#[test]
fn test_on_response_shapes() {
    let doc = onboarding_document();

    // Hook form on the builder output carries no routes.
    let hook = OnResponse::Hook("update_q1".to_string());
    assert!(hook.routes().is_none());

    let q2 = doc.node("q2").unwrap();
    let routes = q2.routes().expect("choice node has routes");
    assert_eq!(routes.get("yes"), Some(&"q3".to_string()));
    assert_eq!(routes.get("no"), Some(&"done".to_string()));
}

#[test]
fn test_error_display() {
    let err = DocumentError::Read {
        path: "missing.json".to_string(),
        message: "No such file".to_string(),
    };
    assert!(err.to_string().contains("missing.json"));
    assert!(err.to_string().contains("No such file"));

    let err = MetadataError::Malformed("expected a map".to_string());
    assert!(err.to_string().contains("expected a map"));
}

#[test]
fn test_response_log_serializes_file_absence_as_null() {
    let mut responses = ResponseLog::default();
    responses.insert("q1".to_string(), Response::Text("Alice".to_string()));
    responses.insert("q3".to_string(), Response::File(None));

    let json = serde_json::to_string(&responses).unwrap();
    assert_eq!(json, r#"{"q1":"Alice","q3":null}"#);
}
