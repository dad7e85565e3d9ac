use thiserror::Error;

pub type DocumentResult<T> = Result<T, DocumentError>;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Invalid element tree JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Element with empty id")]
    EmptyId,

    #[error("Duplicate element id: {0}")]
    DuplicateId(String),

    #[error("Tree has no root element")]
    MissingRoot,

    #[error("Tree has {0} root elements, expected exactly one")]
    MultipleRoots(usize),

    #[error("Root element {0} is not a container")]
    RootNotContainer(String),
}
