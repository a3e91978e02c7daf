use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("missing '{0}' field")]
    MissingField(&'static str),

    #[error("'{field}' must not be empty")]
    EmptyIdentifier { field: &'static str },

    #[error("'{field}' is longer than {max} characters")]
    IdentifierTooLong { field: &'static str, max: usize },

    #[error("'{field}' may only contain a-z, 0-9 and '-', got {value:?}")]
    IdentifierCharset { field: &'static str, value: String },

    #[error("'{field}' must start and end with a letter or digit, got {value:?}")]
    IdentifierEdge { field: &'static str, value: String },

    #[error("unknown pipeline kind: {0}")]
    UnknownKind(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
