use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid input '{field}': {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Unknown {kind} code '{code}'")]
    UnknownReferenceKey { kind: &'static str, code: String },

    #[error("Division by zero computing {context}")]
    DivisionByZero { context: &'static str },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ModelResult<T> = Result<T, ModelError>;
