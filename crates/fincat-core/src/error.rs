//! The domain error type.
//!
//! Every failure that reaches display-level code carries a single,
//! ready-to-display message. Collaborators convert transport failures into
//! this kind at their own boundary; anything that arrives un-normalized is
//! replaced by a fixed generic message.

use std::error::Error as StdError;

use thiserror::Error;

/// Fallback message for failures that carry nothing displayable.
pub const UNEXPECTED_ERROR_MESSAGE: &str =
    "An unexpected error occurred. Please try again later.";

/// A normalized, display-ready failure.
///
/// This is the only error kind the catalog core reasons about. The core
/// never inspects status codes or error classes; the message is the whole
/// contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DomainError {
    message: String,
}

impl DomainError {
    /// Create a domain error from a display-ready message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The fixed generic error.
    pub fn unexpected() -> Self {
        Self::new(UNEXPECTED_ERROR_MESSAGE)
    }

    /// The display-ready message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Normalize an arbitrary failure.
    ///
    /// A failure that is already a [`DomainError`] passes through unchanged;
    /// any other error type is replaced by [`DomainError::unexpected`] so
    /// display code never sees an unusable message.
    pub fn normalize(err: Box<dyn StdError + Send + Sync>) -> Self {
        match err.downcast::<DomainError>() {
            Ok(domain) => *domain,
            Err(_) => Self::unexpected(),
        }
    }
}
