//! NNTP error types

use thiserror::Error;

/// Errors raised while reading and interpreting NNTP status lines
#[derive(Error, Debug)]
pub enum NntpError {
    /// IO error while reading a reply
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No reply arrived within the configured read timeout
    #[error("Connection timeout")]
    Timeout,

    /// Reader hit end of stream before a reply line
    #[error("Connection closed")]
    ConnectionClosed,

    /// Line does not start with a 3-digit status code
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Reply line exceeds the configured maximum length
    #[error("Response line exceeds {0} octets")]
    LineTooLong(usize),

    /// Status code outside 100-599 while strict range checking is enabled
    #[error("Status code {0} outside 100-599")]
    StatusOutOfRange(u16),

    /// Status line had the expected code but its fields could not be extracted
    #[error("Malformed {code} reply ({reason}): {message}")]
    MalformedReply {
        /// NNTP response code (e.g., 211, 223)
        code: u16,
        /// Which field was missing or invalid
        reason: &'static str,
        /// Reply text following the code
        message: String,
    },

    /// Command argument would break CRLF framing
    #[error("Invalid command argument: {0:?}")]
    InvalidCommand(String),

    /// Typed reply requested for a status code that does not carry it
    #[error("NNTP error {code}: {message}")]
    Protocol {
        /// NNTP response code (e.g., 411, 430, 502)
        code: u16,
        /// Error message from server
        message: String,
    },
}

impl NntpError {
    /// True when the server sent a line that could not be turned into a reply
    ///
    /// Covers both unparsable status lines and typed replies with bad fields.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            NntpError::InvalidResponse(_)
                | NntpError::MalformedReply { .. }
                | NntpError::LineTooLong(_)
                | NntpError::StatusOutOfRange(_)
        )
    }

    pub(crate) fn malformed(code: u16, reason: &'static str, message: &str) -> Self {
        NntpError::MalformedReply {
            code,
            reason,
            message: message.chars().take(100).collect(),
        }
    }
}

/// Result type alias using NntpError
pub type Result<T> = std::result::Result<T, NntpError>;
