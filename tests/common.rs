//! Common test utilities for building agenda documents and scripted I/O.
use kaigi::prelude::*;
use std::collections::VecDeque;

/// An `AgendaIo` fed from a finite script of inputs. Everything the
/// engine displays or asks is recorded in `transcript`; the script must
/// cover every request, with the last input to a choice loop being
/// valid, so sessions terminate deterministically.
pub struct ScriptedIo {
    inputs: VecDeque<String>,
    pub transcript: Vec<String>,
}

#[allow(dead_code)]
impl ScriptedIo {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            transcript: Vec::new(),
        }
    }

    fn next_input(&mut self, prompt: &str) -> String {
        self.transcript.push(prompt.to_string());
        self.inputs
            .pop_front()
            .unwrap_or_else(|| panic!("input script ran dry at prompt: '{}'", prompt))
    }
}

impl AgendaIo for ScriptedIo {
    fn say(&mut self, line: &str) {
        self.transcript.push(line.to_string());
    }

    fn ask_text(&mut self, prompt: &str) -> String {
        self.next_input(prompt)
    }

    fn ask_choice(&mut self, prompt: &str, _choices: &[String]) -> String {
        self.next_input(prompt)
    }

    fn ask_file(&mut self, prompt: &str) -> Option<String> {
        let input = self.next_input(prompt);
        if input.is_empty() { None } else { Some(input) }
    }
}

#[allow(dead_code)]
pub fn text_node(prompt: &str, next: Option<&str>) -> NodeDefinition {
    NodeDefinition {
        node_type: Some("text".to_string()),
        prompt: Some(prompt.to_string()),
        next: next.map(|n| n.to_string()),
        ..NodeDefinition::default()
    }
}

#[allow(dead_code)]
pub fn choice_node(prompt: &str, choices: &[&str], routes: &[(&str, &str)]) -> NodeDefinition {
    let mut route_map = RouteMap::default();
    for (choice, target) in routes {
        route_map.insert(choice.to_string(), target.to_string());
    }
    NodeDefinition {
        node_type: Some("choice".to_string()),
        prompt: Some(prompt.to_string()),
        choices: choices.iter().map(|c| c.to_string()).collect(),
        on_response: Some(OnResponse::Routes(route_map)),
        ..NodeDefinition::default()
    }
}

#[allow(dead_code)]
pub fn file_node(prompt: &str, next: Option<&str>) -> NodeDefinition {
    NodeDefinition {
        node_type: Some("file_upload".to_string()),
        prompt: Some(prompt.to_string()),
        next: next.map(|n| n.to_string()),
        ..NodeDefinition::default()
    }
}

#[allow(dead_code)]
pub fn end_node(prompt: &str) -> NodeDefinition {
    NodeDefinition {
        node_type: Some("end".to_string()),
        prompt: Some(prompt.to_string()),
        ..NodeDefinition::default()
    }
}

/// Assembles a document from `(id, node)` pairs, preserving order.
#[allow(dead_code)]
pub fn document(start: &str, nodes: Vec<(&str, NodeDefinition)>) -> AgendaDocument {
    let mut node_map = NodeMap::default();
    for (id, node) in nodes {
        node_map.insert(id.to_string(), node);
    }
    AgendaDocument {
        agenda_id: "test_agenda".to_string(),
        start_node: start.to_string(),
        nodes: node_map,
    }
}

/// A small onboarding-style agenda: name question, yes/no branch, a
/// file-upload leg on "yes", and a shared end node.
#[allow(dead_code)]
pub fn onboarding_document() -> AgendaDocument {
    document(
        "q1",
        vec![
            ("q1", text_node("What is your name?", Some("q2"))),
            (
                "q2",
                choice_node(
                    "Do you have a CV to attach?",
                    &["yes", "no"],
                    &[("yes", "q3"), ("no", "done")],
                ),
            ),
            ("q3", file_node("Please attach your CV.", Some("done"))),
            ("done", end_node("Thanks, you are all set.")),
        ],
    )
}

/// The onboarding agenda in its serialized authoring form, including a
/// string-valued `on_response` hook on the text node.
#[allow(dead_code)]
pub const ONBOARDING_JSON: &str = r#"{
  "agenda_id": "onboarding_questionnaire",
  "start_node": "q1",
  "nodes": {
    "q1": {
      "type": "text",
      "prompt": "What is your name?",
      "next": "q2",
      "on_response": "update_q1"
    },
    "q2": {
      "type": "choice",
      "prompt": "Do you have a CV to attach?",
      "choices": ["yes", "no"],
      "on_response": { "yes": "q3", "no": "done" },
      "timeout": 120
    },
    "q3": {
      "type": "file_upload",
      "prompt": "Please attach your CV.",
      "next": "done"
    },
    "done": {
      "type": "end",
      "prompt": "Thanks, you are all set."
    }
  }
}"#;
