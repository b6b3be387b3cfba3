//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the kaigi crate, so a
//! host can `use kaigi::prelude::*;` instead of importing each type
//! individually.

// Document model
pub use crate::agenda::{
    AgendaDocument, NodeDefinition, NodeKind, NodeMap, OnResponse, RouteMap,
};

// Derived metadata
pub use crate::decision::{DecisionMap, DecisionMapEntry};

// Traversal
pub use crate::session::{
    AgendaIo, EXIT_KEYWORD, Interpreter, Response, ResponseLog, SessionOutcome, SessionState,
    TerminalIo, TraversalSession, resolve_choice_input,
};

// Inspection
pub use crate::query::{NodeSummary, QueryService};

// Error types
pub use crate::error::{DocumentError, MetadataError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
