use crate::agenda::{AgendaDocument, NodeKind};
use ahash::RandomState;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

mod io;

pub use io::{AgendaIo, TerminalIo};

/// Keyword that aborts a session from any text question, matched
/// case-insensitively.
pub const EXIT_KEYWORD: &str = "exit";

/// Ordered response log: node id -> captured answer, in first-visit
/// order. Revisiting a node overwrites its answer in place.
pub type ResponseLog = IndexMap<String, Response, RandomState>;

/// A captured answer for one visited node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Text(String),
    Choice(String),
    /// A file selection; `None` when the user selected nothing, which is
    /// still recorded.
    File(Option<String>),
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Text(value) | Response::Choice(value) => write!(f, "{}", value),
            Response::File(Some(path)) => write!(f, "{}", path),
            Response::File(None) => write!(f, "(no file selected)"),
        }
    }
}

/// Where a traversal currently stands. Every variant except `Active` is
/// terminal; once a session reaches one, stepping is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// The walk is at this node and has not executed it yet.
    Active(String),
    /// An explicit `end` node was reached.
    Ended,
    /// The last executed node had no successor configured. Distinct from
    /// `Ended`: the author never placed an `end` node on this path.
    Exhausted,
    /// The user typed the exit keyword at a text question.
    Aborted,
    /// The walk advanced to an id with no node behind it: a dangling
    /// reference, or a start node that does not exist.
    NodeNotFound(String),
    /// The node's `type` is outside the recognized set. The raw value is
    /// kept for reporting; a node with no `type` at all lands here with
    /// an empty one.
    UnsupportedType { node_id: String, node_type: String },
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionState::Active(_))
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Active(id) => write!(f, "at node '{}'", id),
            SessionState::Ended => write!(f, "completed"),
            SessionState::Exhausted => write!(f, "no further node"),
            SessionState::Aborted => write!(f, "aborted by user"),
            SessionState::NodeNotFound(id) => write!(f, "node '{}' not found", id),
            SessionState::UnsupportedType { node_id, node_type } => {
                write!(f, "unsupported node type '{}' at node '{}'", node_type, node_id)
            }
        }
    }
}

/// One traversal run: the current state plus everything answered so far.
///
/// The session is a plain value threaded through [`Interpreter::step`];
/// nothing is shared or global, so several sessions can walk the same
/// document concurrently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalSession {
    pub state: SessionState,
    pub responses: ResponseLog,
}

impl TraversalSession {
    /// Starts a fresh session at the document's start node.
    pub fn start(document: &AgendaDocument) -> Self {
        Self::start_at(document.start_node.clone())
    }

    /// Starts a fresh session at an arbitrary node id.
    pub fn start_at(node_id: impl Into<String>) -> Self {
        Self {
            state: SessionState::Active(node_id.into()),
            responses: ResponseLog::default(),
        }
    }

    fn record(&mut self, node_id: &str, response: Response) {
        self.responses.insert(node_id.to_string(), response);
    }
}

/// The result handed back once a session reaches a terminal state. The
/// response log is returned whole no matter how the walk ended, so an
/// aborted or failed session still yields its partial answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub state: SessionState,
    pub responses: ResponseLog,
}

/// Drives one [`TraversalSession`] over a document, one node per step.
///
/// The interpreter holds no session state of its own: the document stays
/// read-only and all mutation lives in the session value passed through
/// [`Interpreter::step`]. Input collection is delegated to the
/// [`AgendaIo`] collaborator, one blocking request at a time.
pub struct Interpreter<'a, IO: AgendaIo> {
    document: &'a AgendaDocument,
    io: &'a mut IO,
}

impl<'a, IO: AgendaIo> Interpreter<'a, IO> {
    pub fn new(document: &'a AgendaDocument, io: &'a mut IO) -> Self {
        Self { document, io }
    }

    /// Runs from the document's start node to a terminal state.
    pub fn run(&mut self) -> SessionOutcome {
        self.resume(TraversalSession::start(self.document))
    }

    /// Runs an existing session until it reaches a terminal state.
    pub fn resume(&mut self, mut session: TraversalSession) -> SessionOutcome {
        while !session.state.is_terminal() {
            session = self.step(session);
        }
        SessionOutcome {
            state: session.state,
            responses: session.responses,
        }
    }

    /// Executes exactly one node and returns the advanced session.
    /// Stepping a terminal session returns it unchanged.
    pub fn step(&mut self, mut session: TraversalSession) -> TraversalSession {
        let SessionState::Active(node_id) = session.state.clone() else {
            return session;
        };

        let Some(node) = self.document.node(&node_id) else {
            session.state = SessionState::NodeNotFound(node_id);
            return session;
        };
        let prompt = node.prompt.as_deref().unwrap_or("");

        match node.kind() {
            NodeKind::End => {
                if !prompt.is_empty() {
                    self.io.say(prompt);
                }
                session.state = SessionState::Ended;
            }
            NodeKind::Text => {
                let input = self.io.ask_text(prompt);
                if input.eq_ignore_ascii_case(EXIT_KEYWORD) {
                    // Nothing is recorded for the aborted step itself.
                    session.state = SessionState::Aborted;
                } else {
                    session.record(&node_id, Response::Text(input));
                    session.state = advance(node.next.clone());
                }
            }
            NodeKind::Choice => {
                let selected = self.resolve_choice(prompt, &node.choices);
                let next = node
                    .routes()
                    .and_then(|routes| routes.get(&selected))
                    .cloned();
                session.record(&node_id, Response::Choice(selected));
                session.state = advance(next);
            }
            NodeKind::FileUpload => {
                let selection = self.io.ask_file(prompt);
                session.record(&node_id, Response::File(selection));
                session.state = advance(node.next.clone());
            }
            NodeKind::Unsupported(node_type) => {
                session.state = SessionState::UnsupportedType { node_id, node_type };
            }
        }

        session
    }

    /// Asks until the input names a choice, either verbatim or as a
    /// 1-based position. The loop is unbounded on purpose; a retry cap
    /// is a caller-level concern.
    fn resolve_choice(&mut self, prompt: &str, choices: &[String]) -> String {
        loop {
            let input = self.io.ask_choice(prompt, choices);
            if let Some(choice) = resolve_choice_input(&input, choices) {
                return choice;
            }
            self.io.say("Invalid input. Try again.");
        }
    }
}

/// Matches raw input against a choice list: an exact string first, then
/// a 1-based index into the list.
pub fn resolve_choice_input(input: &str, choices: &[String]) -> Option<String> {
    if choices.iter().any(|choice| choice == input) {
        return Some(input.to_string());
    }
    if !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()) {
        return input
            .parse::<usize>()
            .ok()
            .and_then(|position| position.checked_sub(1))
            .and_then(|index| choices.get(index))
            .cloned();
    }
    None
}

fn advance(next: Option<String>) -> SessionState {
    match next {
        Some(id) => SessionState::Active(id),
        None => SessionState::Exhausted,
    }
}
