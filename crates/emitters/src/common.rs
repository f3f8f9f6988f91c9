//! Shared emitter error type.

use thiserror::Error;

/// Errors produced by the emitters in this crate.
///
/// The collector boxes these uniformly into its delivery error; the
/// variants exist so emitter tests and direct callers can match on the
/// failure class.
#[derive(Debug, Error)]
pub enum EmitterError {
    /// Emitter could not be constructed.
    #[error("failed to initialize emitter: {0}")]
    Init(String),

    /// I/O error while writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed before a response arrived.
    #[error("http transport error: {0}")]
    Transport(String),

    /// Server answered with a non-success status.
    #[error("server error: HTTP {status}")]
    Http {
        /// The HTTP status code returned.
        status: u16,
    },

    /// Payload could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl EmitterError {
    /// Create an initialization error.
    pub fn init(msg: impl Into<String>) -> Self {
        Self::Init(msg.into())
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            EmitterError::init("bad path").to_string(),
            "failed to initialize emitter: bad path"
        );
        assert_eq!(
            EmitterError::Http { status: 503 }.to_string(),
            "server error: HTTP 503"
        );
    }
}
