use thiserror::Error;

/// Use for mapping errors in functions that can throw multiple errors.
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("invalid request: {0}")]
    Validation(String),
    #[error("resource does not exist")]
    NotFound,
    #[error("storage failure: {0}")]
    Storage(String),
    #[error("failed to encode record")]
    Serialization(#[from] bincode::Error),
}
