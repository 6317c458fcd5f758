//! Error types shared by the list and detail pages.

use thiserror::Error;

/// Anything that stops a page from rendering boss data.
/// The `Display` text is what ends up in the error row.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BossError {
    #[error("missing boss identifier (expected ?boss=...)")]
    MissingIdentifier,

    #[error("boss not found")]
    NotFound { status: u16 },

    #[error("could not load the boss list")]
    Fetch { status: u16 },

    #[error("unexpected response")]
    MalformedResponse { reason: String },

    #[error("network error: {0}")]
    Transport(String),
}

impl BossError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        BossError::MalformedResponse { reason: reason.into() }
    }
}

pub type BossResult<T> = Result<T, BossError>;
