use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum HisaabError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Malformed expression at position {position}: {reason}")]
    MalformedExpression { position: usize, reason: String },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Numeric overflow in {context}")]
    Overflow { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl HisaabError {
    pub(crate) fn malformed(position: usize, reason: impl Into<String>) -> Self {
        HisaabError::MalformedExpression {
            position,
            reason: reason.into(),
        }
    }

    pub(crate) fn overflow(context: impl Into<String>) -> Self {
        HisaabError::Overflow {
            context: context.into(),
        }
    }
}

impl From<serde_json::Error> for HisaabError {
    fn from(e: serde_json::Error) -> Self {
        HisaabError::SerializationError(e.to_string())
    }
}
