//! Reply dispatch: status line + issuing command -> typed reply

use std::fmt;

use tracing::{debug, trace};

use crate::commands::{
    ArticleResponse, Command, DateResponse, GreetingResponse, GroupResponse, parse_article_response,
    parse_date_response, parse_greeting_response, parse_group_response, parse_status_line,
};
use crate::config::ParserConfig;
use crate::error::{NntpError, Result};
use crate::response::{StatusResponse, codes};

/// A parsed NNTP reply
///
/// Each variant wraps a [`StatusResponse`], so [`Reply::status`] and
/// [`Reply::message`] work whatever shape the reply turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Any reply without a more specific shape, including all errors
    Status(StatusResponse),
    /// 200/201 greeting or MODE READER reply
    Greeting(GreetingResponse),
    /// 211 reply to GROUP or LISTGROUP
    Group(GroupResponse),
    /// 220-223 reply to ARTICLE, HEAD, BODY, STAT, NEXT or LAST
    Article(ArticleResponse),
    /// 111 reply to DATE
    Date(DateResponse),
}

impl Reply {
    /// Underlying status response
    pub fn as_status(&self) -> &StatusResponse {
        match self {
            Reply::Status(response) => response,
            Reply::Greeting(response) => response.as_status(),
            Reply::Group(response) => response.as_status(),
            Reply::Article(response) => response.as_status(),
            Reply::Date(response) => response.as_status(),
        }
    }

    /// 3-digit NNTP response code
    pub fn status(&self) -> u16 {
        self.as_status().status()
    }

    /// Reply text following the status code
    pub fn message(&self) -> &str {
        self.as_status().message()
    }

    /// Check if response indicates success (2xx)
    pub fn is_success(&self) -> bool {
        self.as_status().is_success()
    }

    /// Check if response indicates error (4xx or 5xx)
    pub fn is_error(&self) -> bool {
        self.as_status().is_error()
    }

    /// Group metadata, if this is a 211 group reply
    pub fn as_group(&self) -> Option<&GroupResponse> {
        match self {
            Reply::Group(response) => Some(response),
            _ => None,
        }
    }

    /// Article number and message-id, if this is a 220-223 reply
    pub fn as_article(&self) -> Option<&ArticleResponse> {
        match self {
            Reply::Article(response) => Some(response),
            _ => None,
        }
    }

    /// Server time, if this is a 111 reply
    pub fn as_date(&self) -> Option<&DateResponse> {
        match self {
            Reply::Date(response) => Some(response),
            _ => None,
        }
    }

    /// Greeting, if this is a 200/201 reply
    pub fn as_greeting(&self) -> Option<&GreetingResponse> {
        match self {
            Reply::Greeting(response) => Some(response),
            _ => None,
        }
    }

    /// Drop any typed fields and keep the status response
    pub fn into_status(self) -> StatusResponse {
        match self {
            Reply::Status(response) => response,
            Reply::Greeting(response) => response.into(),
            Reply::Group(response) => response.into(),
            Reply::Article(response) => response.into(),
            Reply::Date(response) => response.into(),
        }
    }

    /// Turn 4xx/5xx replies into [`NntpError::Protocol`]
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_error() {
            let response = self.into_status();
            return Err(NntpError::Protocol {
                code: response.status(),
                message: response.into_message(),
            });
        }
        Ok(self)
    }
}

impl AsRef<StatusResponse> for Reply {
    fn as_ref(&self) -> &StatusResponse {
        self.as_status()
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Status(response) => fmt::Display::fmt(response, f),
            Reply::Greeting(response) => fmt::Display::fmt(response, f),
            Reply::Group(response) => fmt::Display::fmt(response, f),
            Reply::Article(response) => fmt::Display::fmt(response, f),
            Reply::Date(response) => fmt::Display::fmt(response, f),
        }
    }
}

/// Typed reply shape a command expects for a given code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Greeting,
    Group,
    Article,
    Date,
}

fn expected_shape(command: &Command, code: u16) -> Option<Shape> {
    match (command, code) {
        (Command::Group(_) | Command::ListGroup { .. }, codes::GROUP_SELECTED) => {
            Some(Shape::Group)
        }
        (Command::Article(_), codes::ARTICLE_FOLLOWS)
        | (Command::Head(_), codes::HEAD_FOLLOWS)
        | (Command::Body(_), codes::BODY_FOLLOWS)
        | (Command::Stat(_) | Command::Next | Command::Last, codes::ARTICLE_STAT) => {
            Some(Shape::Article)
        }
        (Command::Date, codes::SERVER_DATE) => Some(Shape::Date),
        (Command::ModeReader, codes::READY_POSTING_ALLOWED | codes::READY_NO_POSTING) => {
            Some(Shape::Greeting)
        }
        _ => None,
    }
}

/// Turns raw status lines into [`Reply`] values
///
/// # Example
///
/// ```
/// use nntp_reply::{Command, ParserConfig, Reply, ReplyParser};
///
/// let parser = ReplyParser::new(ParserConfig::strict());
/// let reply = parser.dispatch(&Command::group("misc.test"), "411 no such group")?;
/// assert!(matches!(reply, Reply::Status(_)));
/// assert_eq!(reply.status(), 411);
/// # Ok::<(), nntp_reply::NntpError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReplyParser {
    config: ParserConfig,
}

impl ReplyParser {
    /// Create a parser with the given configuration
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a status line into a generic [`StatusResponse`]
    ///
    /// Applies the configured line length limit and, if enabled, the
    /// 100-599 status range check.
    pub fn parse_line(&self, line: &str) -> Result<StatusResponse> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.len() > self.config.max_line_length {
            return Err(NntpError::LineTooLong(self.config.max_line_length));
        }

        let response = parse_status_line(line)?;
        if self.config.strict_status_range && !(100..=599).contains(&response.status()) {
            return Err(NntpError::StatusOutOfRange(response.status()));
        }
        Ok(response)
    }

    /// Parse a status line sent in reply to `command`
    ///
    /// Codes the command has a typed shape for are parsed into that shape;
    /// a malformed typed reply is an error, never a partially filled value.
    /// Every other code comes back as [`Reply::Status`].
    ///
    /// # Errors
    ///
    /// - [`NntpError::InvalidResponse`] - line has no 3-digit status code
    /// - [`NntpError::MalformedReply`] - expected fields missing or not numeric
    /// - [`NntpError::LineTooLong`] / [`NntpError::StatusOutOfRange`] - config limits
    pub fn dispatch(&self, command: &Command, line: &str) -> Result<Reply> {
        let response = self.parse_line(line)?;
        let code = response.status();

        let Some(shape) = expected_shape(command, code) else {
            trace!("{} reply to {} has no typed shape", code, command.name());
            return Ok(Reply::Status(response));
        };
        trace!("Dispatching {} reply to {} as {:?}", code, command.name(), shape);

        let reply = match shape {
            Shape::Greeting => parse_greeting_response(response).map(Reply::Greeting),
            Shape::Group => parse_group_response(response).map(Reply::Group),
            Shape::Article => parse_article_response(response).map(Reply::Article),
            Shape::Date => parse_date_response(response).map(Reply::Date),
        };
        if let Err(e) = &reply {
            debug!("Rejected {} reply to {}: {}", code, command.name(), e);
        }
        reply
    }

    /// Parse the greeting a server sends when the connection opens
    ///
    /// 200/201 become [`Reply::Greeting`]; anything else (400, 502) is
    /// returned as a generic status so the caller can report the refusal.
    pub fn parse_greeting(&self, line: &str) -> Result<Reply> {
        self.dispatch(&Command::ModeReader, line)
    }
}

/// Parse a reply line with the default configuration
pub fn parse_reply(command: &Command, line: &str) -> Result<Reply> {
    ReplyParser::default().dispatch(command, line)
}
