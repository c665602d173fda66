//! Server greeting and MODE READER (RFC 3977 §5.1, §5.3)

use std::fmt;

use crate::error::{NntpError, Result};
use crate::response::{StatusResponse, codes};

/// Build MODE READER command
pub fn mode_reader() -> &'static str {
    "MODE READER\r\n"
}

/// Initial greeting or MODE READER reply (200 or 201)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingResponse {
    response: StatusResponse,
}

impl GreetingResponse {
    /// Build a greeting from a raw status code and reply text
    pub fn parse(status: u16, message: impl Into<String>) -> Result<Self> {
        parse_greeting_response(StatusResponse::new(status, message))
    }

    /// 3-digit NNTP response code (200 or 201)
    pub fn status(&self) -> u16 {
        self.response.status()
    }

    /// Reply text following the status code
    pub fn message(&self) -> &str {
        self.response.message()
    }

    /// Whether the server will accept POST on this connection
    pub fn posting_allowed(&self) -> bool {
        self.response.status() == codes::READY_POSTING_ALLOWED
    }

    /// Underlying status response
    pub fn as_status(&self) -> &StatusResponse {
        &self.response
    }
}

impl AsRef<StatusResponse> for GreetingResponse {
    fn as_ref(&self) -> &StatusResponse {
        &self.response
    }
}

impl From<GreetingResponse> for StatusResponse {
    fn from(response: GreetingResponse) -> Self {
        response.response
    }
}

impl TryFrom<StatusResponse> for GreetingResponse {
    type Error = NntpError;

    fn try_from(response: StatusResponse) -> Result<Self> {
        parse_greeting_response(response)
    }
}

impl fmt::Display for GreetingResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.response, f)
    }
}

/// Parse a 200/201 greeting
///
/// # Errors
///
/// - [`NntpError::Protocol`] - status is neither 200 nor 201 (e.g., 400 or 502
///   when the server refuses service)
pub fn parse_greeting_response(response: StatusResponse) -> Result<GreetingResponse> {
    match response.status() {
        codes::READY_POSTING_ALLOWED | codes::READY_NO_POSTING => {
            Ok(GreetingResponse { response })
        }
        code => Err(NntpError::Protocol {
            code,
            message: response.into_message(),
        }),
    }
}
