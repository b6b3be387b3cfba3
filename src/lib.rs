//! # Kaigi - Agenda Graph Model and Traversal Engine
//!
//! **Kaigi** models a branching questionnaire ("agenda") as a directed
//! graph of typed nodes and drives a user through it interactively,
//! collecting responses along the way. The engine is channel-agnostic:
//! prompts and answers flow through an I/O collaborator that may be a
//! terminal, a GUI dialog, a web form, or a scripted sequence in tests.
//!
//! ## Core Workflow
//!
//! 1.  **Load a Document**: Parse an `agenda.json` definition into an
//!     [`AgendaDocument`](agenda::AgendaDocument), a read-only node
//!     graph. Dangling successor references are tolerated at this stage
//!     and only surface if a traversal actually reaches them.
//! 2.  **Derive Metadata**: Build a
//!     [`DecisionMap`](decision::DecisionMap) from the document: a
//!     forward/backward adjacency index that serializes to JSON and
//!     powers inspection tooling without re-walking the raw document.
//! 3.  **Traverse**: Create an [`Interpreter`](session::Interpreter)
//!     with the document and an [`AgendaIo`](session::AgendaIo)
//!     collaborator, then run a session from the start node to one of
//!     the terminal states. The full response log is returned no matter
//!     how the walk ended.
//! 4.  **Query**: Use a [`QueryService`](query::QueryService) over the
//!     derived map to list nodes and resolve lookups by position or id.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kaigi::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // 1. Load the authored definition.
//!     let document = AgendaDocument::from_file("agenda.json")?;
//!
//!     // 2. Derive and persist the adjacency metadata.
//!     let decision_map = DecisionMap::derive(&document);
//!     decision_map.save("decision_tree_metadata.json")?;
//!
//!     // 3. Inspect the graph without running it.
//!     let query = QueryService::new(&decision_map);
//!     for summary in query.list() {
//!         println!("{}. {} - {}", summary.position, summary.id, summary.preview);
//!     }
//!
//!     // 4. Drive one session on the terminal.
//!     let mut io = TerminalIo;
//!     let outcome = Interpreter::new(&document, &mut io).run();
//!     println!("Session {}", outcome.state);
//!     for (node_id, response) in &outcome.responses {
//!         println!("- {}: {}", node_id, response);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Custom I/O Channels
//!
//! The [`AgendaIo`](session::AgendaIo) trait is the extension point for
//! hosts that are not terminals. Implementations return raw input; the
//! engine owns validation, the choice retry loop, and the exit keyword.
//!
//! ```rust
//! use kaigi::prelude::*;
//! use std::collections::VecDeque;
//!
//! struct QueueIo {
//!     answers: VecDeque<String>,
//! }
//!
//! impl AgendaIo for QueueIo {
//!     fn say(&mut self, _line: &str) {}
//!     fn ask_text(&mut self, _prompt: &str) -> String {
//!         self.answers.pop_front().unwrap_or_default()
//!     }
//!     fn ask_choice(&mut self, _prompt: &str, _choices: &[String]) -> String {
//!         self.answers.pop_front().unwrap_or_default()
//!     }
//!     fn ask_file(&mut self, _prompt: &str) -> Option<String> {
//!         self.answers.pop_front()
//!     }
//! }
//! ```

pub mod agenda;
pub mod decision;
pub mod error;
pub mod prelude;
pub mod query;
pub mod session;
