//! Article retrieval and navigation commands and their 220-223 replies

use std::fmt;

use crate::commands::response::parse_number;
use crate::error::{NntpError, Result};
use crate::response::{StatusResponse, codes};

/// Build ARTICLE command
///
/// `id` is an article number or message-id; `None` uses the current article.
/// Arguments are not checked for CR/LF here, use
/// [`Command::to_wire`](crate::Command::to_wire) for untrusted input.
pub fn article(id: Option<&str>) -> String {
    with_optional_arg("ARTICLE", id)
}

/// Build HEAD command
pub fn head(id: Option<&str>) -> String {
    with_optional_arg("HEAD", id)
}

/// Build BODY command
pub fn body(id: Option<&str>) -> String {
    with_optional_arg("BODY", id)
}

/// Build STAT command (RFC 3977 §6.2.4)
pub fn stat(id: Option<&str>) -> String {
    with_optional_arg("STAT", id)
}

/// Build NEXT command (RFC 3977 §6.1.4)
pub fn next() -> &'static str {
    "NEXT\r\n"
}

/// Build LAST command (RFC 3977 §6.1.3)
pub fn last() -> &'static str {
    "LAST\r\n"
}

fn with_optional_arg(verb: &str, arg: Option<&str>) -> String {
    match arg {
        Some(arg) => format!("{} {}\r\n", verb, arg),
        None => format!("{}\r\n", verb),
    }
}

/// Reply to ARTICLE, HEAD, BODY, STAT, NEXT and LAST
///
/// Response format: "22x n message-id"
/// - n is the article number (0 if a message-id was used in the request)
/// - message-id is the article's message identifier, including angle brackets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleResponse {
    response: StatusResponse,
    number: u64,
    message_id: String,
}

impl ArticleResponse {
    /// Build an article response from a raw status code and reply text
    pub fn parse(status: u16, message: impl Into<String>) -> Result<Self> {
        parse_article_response(StatusResponse::new(status, message))
    }

    /// 3-digit NNTP response code (220-223)
    pub fn status(&self) -> u16 {
        self.response.status()
    }

    /// Reply text following the status code
    pub fn message(&self) -> &str {
        self.response.message()
    }

    /// Article number
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Message identifier (e.g., "<abc@example.com>")
    pub fn message_id(&self) -> &str {
        &self.message_id
    }

    /// Underlying status response
    pub fn as_status(&self) -> &StatusResponse {
        &self.response
    }
}

impl AsRef<StatusResponse> for ArticleResponse {
    fn as_ref(&self) -> &StatusResponse {
        &self.response
    }
}

impl From<ArticleResponse> for StatusResponse {
    fn from(response: ArticleResponse) -> Self {
        response.response
    }
}

impl TryFrom<StatusResponse> for ArticleResponse {
    type Error = NntpError;

    fn try_from(response: StatusResponse) -> Result<Self> {
        parse_article_response(response)
    }
}

impl fmt::Display for ArticleResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.status(), self.number, self.message_id)
    }
}

/// Parse a 220, 221, 222 or 223 reply
///
/// # Errors
///
/// - [`NntpError::Protocol`] - status is outside 220-223
/// - [`NntpError::MalformedReply`] - missing or invalid number or message-id
pub fn parse_article_response(response: StatusResponse) -> Result<ArticleResponse> {
    let code = response.status();
    if !(codes::ARTICLE_FOLLOWS..=codes::ARTICLE_STAT).contains(&code) {
        return Err(NntpError::Protocol {
            code,
            message: response.into_message(),
        });
    }

    let message = response.message();
    let mut parts = message.split_whitespace();
    let (Some(number), Some(message_id)) = (parts.next(), parts.next()) else {
        return Err(NntpError::malformed(code, "expected number message-id", message));
    };

    let number = parse_number(number, code, "non-numeric article number", message)?;
    if message_id.len() < 3 || !message_id.starts_with('<') || !message_id.ends_with('>') {
        return Err(NntpError::malformed(code, "message-id not in angle brackets", message));
    }
    let message_id = message_id.to_string();

    Ok(ArticleResponse {
        response,
        number,
        message_id,
    })
}
