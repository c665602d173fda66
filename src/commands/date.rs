//! DATE command and the 111 reply (RFC 3977 §7.1)

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::{NntpError, Result};
use crate::response::{StatusResponse, codes};

const DATE_FORMAT: &str = "%Y%m%d%H%M%S";

/// Build DATE command
///
/// Response: 111 yyyymmddhhmmss
pub fn date() -> &'static str {
    "DATE\r\n"
}

/// Server date/time reply, always in UTC
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateResponse {
    response: StatusResponse,
    timestamp: DateTime<Utc>,
}

impl DateResponse {
    /// Build a date response from a raw status code and reply text
    pub fn parse(status: u16, message: impl Into<String>) -> Result<Self> {
        parse_date_response(StatusResponse::new(status, message))
    }

    /// 3-digit NNTP response code (always 111)
    pub fn status(&self) -> u16 {
        self.response.status()
    }

    /// Reply text following the status code
    pub fn message(&self) -> &str {
        self.response.message()
    }

    /// Server's current time
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Underlying status response
    pub fn as_status(&self) -> &StatusResponse {
        &self.response
    }
}

impl AsRef<StatusResponse> for DateResponse {
    fn as_ref(&self) -> &StatusResponse {
        &self.response
    }
}

impl From<DateResponse> for StatusResponse {
    fn from(response: DateResponse) -> Self {
        response.response
    }
}

impl TryFrom<StatusResponse> for DateResponse {
    type Error = NntpError;

    fn try_from(response: StatusResponse) -> Result<Self> {
        parse_date_response(response)
    }
}

impl fmt::Display for DateResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status(), self.timestamp.format(DATE_FORMAT))
    }
}

/// Parse DATE response
///
/// # Errors
///
/// - [`NntpError::Protocol`] - status is not 111
/// - [`NntpError::MalformedReply`] - timestamp is not 14 digits or not a valid date
pub fn parse_date_response(response: StatusResponse) -> Result<DateResponse> {
    let code = response.status();
    if code != codes::SERVER_DATE {
        return Err(NntpError::Protocol {
            code,
            message: response.into_message(),
        });
    }

    let message = response.message();
    let token = message.split_whitespace().next().unwrap_or_default();
    if token.len() != 14 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NntpError::malformed(code, "expected yyyymmddhhmmss", message));
    }

    let timestamp = NaiveDateTime::parse_from_str(token, DATE_FORMAT)
        .map_err(|_| NntpError::malformed(code, "invalid date", message))?
        .and_utc();

    Ok(DateResponse {
        response,
        timestamp,
    })
}
