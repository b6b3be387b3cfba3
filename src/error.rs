use thiserror::Error;

/// Errors that can occur while loading or saving an agenda document.
///
/// Structural problems abort document use entirely; dangling node
/// references are *not* errors at this stage and only surface during
/// traversal, as a `NodeNotFound` terminal state.
#[derive(Error, Debug, Clone)]
pub enum DocumentError {
    #[error("Malformed agenda document: {0}")]
    Malformed(String),

    #[error("Could not read agenda file '{path}': {message}")]
    Read { path: String, message: String },

    #[error("Could not write agenda file '{path}': {message}")]
    Write { path: String, message: String },
}

/// Errors that can occur while persisting or loading the derived decision
/// map.
#[derive(Error, Debug, Clone)]
pub enum MetadataError {
    #[error("Failed to serialize decision map: {0}")]
    Serialize(String),

    #[error("Malformed decision map JSON: {0}")]
    Malformed(String),

    #[error("Could not read metadata file '{path}': {message}")]
    Read { path: String, message: String },

    #[error("Could not write metadata file '{path}': {message}")]
    Write { path: String, message: String },
}
