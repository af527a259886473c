use std::io;

use thiserror::Error;

/// A command token outside the tracker's vocabulary. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized command '{token}'")]
pub struct RejectedCommand {
    /// The normalized (trimmed, uppercased) token.
    pub token: String,
}

impl RejectedCommand {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session has already ended")]
    Ended,
    #[error("console i/o failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown variant '{value}', expected 'simple' or 'detailed'")]
pub struct ParseVariantError {
    pub value: String,
}
