use crate::pages::{ExtractionError, Page};
use thiserror::Error;

/// One problem found while checking a response.
///
/// All variants are local to the running journey: they abort it, get logged
/// and the goose user starts a fresh iteration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    #[error("empty response body")]
    EmptyResponse,

    #[error("response does not match any known page")]
    Classification { excerpt: String },

    #[error("expected page '{expected}' but got '{actual}'")]
    WrongPage {
        expected: Page,
        actual: Page,
        excerpt: String,
    },

    #[error("expected status {expected} but got {actual}")]
    StatusMismatch {
        expected: String,
        actual: u16,
        excerpt: String,
    },

    #[error("expected content '{expected}' not found")]
    ContentMissing { expected: String, excerpt: String },

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("request failed before a response was received: {0}")]
    Transport(String),
}

impl VerificationError {
    /// Short machine-readable kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            VerificationError::EmptyResponse => "empty_response",
            VerificationError::Classification { .. } => "classification",
            VerificationError::WrongPage { .. } => "wrong_page",
            VerificationError::StatusMismatch { .. } => "status_mismatch",
            VerificationError::ContentMissing { .. } => "content_missing",
            VerificationError::Extraction(_) => "extraction",
            VerificationError::Transport(_) => "transport",
        }
    }

    pub fn excerpt(&self) -> Option<&str> {
        match self {
            VerificationError::Classification { excerpt }
            | VerificationError::WrongPage { excerpt, .. }
            | VerificationError::StatusMismatch { excerpt, .. }
            | VerificationError::ContentMissing { excerpt, .. } => Some(excerpt),
            VerificationError::Extraction(err) => Some(&err.body),
            VerificationError::EmptyResponse | VerificationError::Transport(_) => None,
        }
    }
}
