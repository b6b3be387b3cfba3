use crate::decision::{DecisionMap, DecisionMapEntry};

/// How many characters of a prompt the node listing shows.
const PREVIEW_LEN: usize = 50;

/// One row of the node listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSummary {
    /// 1-based position in document order; also a valid lookup key for
    /// [`QueryService::resolve`].
    pub position: usize,
    pub id: String,
    /// Prompt preview: the first 50 characters, newlines collapsed to
    /// spaces.
    pub preview: String,
}

/// Read-only lookups over a derived decision map, for inspection
/// tooling. Independent of any active traversal; never mutates the map.
pub struct QueryService<'a> {
    map: &'a DecisionMap,
}

impl<'a> QueryService<'a> {
    pub fn new(map: &'a DecisionMap) -> Self {
        Self { map }
    }

    /// All nodes in document order, each with a truncated prompt
    /// preview.
    pub fn list(&self) -> Vec<NodeSummary> {
        self.map
            .iter()
            .enumerate()
            .map(|(index, (id, entry))| NodeSummary {
                position: index + 1,
                id: id.clone(),
                preview: preview(&entry.prompt),
            })
            .collect()
    }

    /// Resolves a lookup key that is either a 1-based listing position
    /// or a literal node id. An all-digit key is always treated as a
    /// position, never as an id. `None` is the explicit not-found
    /// result; no key panics or errors.
    pub fn resolve(&self, key: &str) -> Option<(&'a str, &'a DecisionMapEntry)> {
        let key = key.trim();
        if !key.is_empty() && key.chars().all(|c| c.is_ascii_digit()) {
            let index = key.parse::<usize>().ok()?.checked_sub(1)?;
            return self
                .map
                .get_index(index)
                .map(|(id, entry)| (id.as_str(), entry));
        }
        self.map
            .get_key_value(key)
            .map(|(id, entry)| (id.as_str(), entry))
    }
}

fn preview(prompt: &str) -> String {
    prompt
        .chars()
        .take(PREVIEW_LEN)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect()
}
