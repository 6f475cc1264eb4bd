use serde_json::{Value, json};
use thiserror::Error;

/// User-facing message for a missing or empty word.
pub const REVERSE_ERROR_ENTER_A_WORD: &str = "Please enter a word to reverse.";

/// Message used when a word is inserted into the cache a second time.
pub const DUPLICATE_KEY_MESSAGE: &str = "An item with the same key has already been added.";

/// Errors surfaced by the word reversal core.
///
/// `Display` renders the bare `message`, so callers that assert on the text
/// see it unchanged.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    InvalidArgument { message: String, details: Value },
    #[error("{message}")]
    DuplicateKey { message: String, details: Value },
}

impl AppError {
    pub fn invalid_argument(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            details,
        }
    }
    pub fn duplicate_key(message: impl Into<String>, details: Value) -> Self {
        Self::DuplicateKey {
            message: message.into(),
            details,
        }
    }

    /// Shorthand for the missing-word validation failure.
    pub fn missing_word() -> Self {
        Self::invalid_argument(REVERSE_ERROR_ENTER_A_WORD, json!({}))
    }

    /// Stable machine-readable code for the variant.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidArgument { .. } => "invalid_argument",
            AppError::DuplicateKey { .. } => "duplicate_key",
        }
    }

    pub fn details(&self) -> &Value {
        match self {
            AppError::InvalidArgument { details, .. } | AppError::DuplicateKey { details, .. } => {
                details
            }
        }
    }
}
