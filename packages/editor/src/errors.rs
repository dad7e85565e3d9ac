//! Error types for the editor

use crate::action::ActionKind;
use pagekit_document::DocumentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    /// Payload does not match the declared action type
    #[error("Malformed action: {0}")]
    MalformedAction(#[source] serde_json::Error),

    /// A tree mutator was handed an action it does not implement
    #[error("Invalid action kind: expected {expected}, found {found}")]
    InvalidActionKind {
        expected: ActionKind,
        found: ActionKind,
    },

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(String),
}
