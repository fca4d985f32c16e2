//! Error types surfaced to request callers.

use thiserror::Error;

/// Errors produced while performing a scheduled upstream request.
///
/// The scheduler itself introduces no error kinds: it is a pure
/// admission/ordering layer, and every variant here originates in the
/// transport that actually performed the call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Upstream replied with a non-2xx status.
    #[error("API error: {0}")]
    Status(u16),
    /// Transport-level failure (connect, timeout, body decode).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// HTTP status carried by this error, if it is a status error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            Self::Transport(_) => None,
        }
    }
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
