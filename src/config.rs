//! Reply parser configuration

use std::time::Duration;

/// RFC 3977 §3.1: a response line is at most 512 octets including CRLF
pub const DEFAULT_MAX_LINE_LENGTH: usize = 510;

/// Default time to wait for a single status line
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(60);

/// Reply parser configuration
///
/// # Example
///
/// ```
/// use nntp_reply::ParserConfig;
/// use std::time::Duration;
///
/// // Reject codes outside 100-599 and give slow servers more time
/// let config = ParserConfig::strict().with_read_timeout(Duration::from_secs(120));
/// assert!(config.strict_status_range);
///
/// // Or construct manually
/// let config = ParserConfig {
///     max_line_length: 2048,
///     strict_status_range: false,
///     read_timeout: Duration::from_secs(30),
/// };
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParserConfig {
    /// Longest accepted status line in octets, not counting CRLF
    ///
    /// Some servers exceed the RFC limit in their greeting text; raise this
    /// if a server is known to do so.
    pub max_line_length: usize,

    /// Reject status codes outside 100-599
    ///
    /// Off by default: unknown codes are still returned as generic status
    /// responses so callers can decide what to do with them.
    pub strict_status_range: bool,

    /// How long the async reader waits for one status line
    pub read_timeout: Duration,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            strict_status_range: false,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }
}

impl ParserConfig {
    /// Create a configuration with RFC 3977 defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration that rejects status codes outside 100-599
    pub fn strict() -> Self {
        Self {
            strict_status_range: true,
            ..Self::default()
        }
    }

    /// Set the maximum status line length (excluding CRLF)
    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    /// Set the async read timeout
    pub fn with_read_timeout(mut self, read_timeout: Duration) -> Self {
        self.read_timeout = read_timeout;
        self
    }

    /// Enable or disable strict status code range checking
    pub fn with_strict_status_range(mut self, strict: bool) -> Self {
        self.strict_status_range = strict;
        self
    }
}
