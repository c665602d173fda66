//! NNTP status responses and status codes

use std::fmt;

/// NNTP status response: a 3-digit code and the text that followed it
///
/// Every typed reply in this crate wraps one of these, so the code and
/// message are always available regardless of which variant was built.
/// Construction never fails; range checks belong to the parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatusResponse {
    status: u16,
    message: String,
}

impl StatusResponse {
    /// Create a status response from a code and message
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// 3-digit NNTP response code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Text following the status code (may be empty)
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume the response and return the message text
    pub fn into_message(self) -> String {
        self.message
    }

    /// Check if response is informational (1xx)
    pub fn is_informational(&self) -> bool {
        self.status >= 100 && self.status < 200
    }

    /// Check if response indicates success (2xx)
    pub fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Check if response indicates continuation (3xx)
    pub fn is_continuation(&self) -> bool {
        self.status >= 300 && self.status < 400
    }

    /// Check if response indicates error (4xx or 5xx)
    pub fn is_error(&self) -> bool {
        self.status >= 400
    }
}

impl fmt::Display for StatusResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.status)
        } else {
            write!(f, "{} {}", self.status, self.message)
        }
    }
}

/// NNTP response codes (RFC 3977)
pub mod codes {
    // 1xx - Informational
    /// Help text follows
    pub const HELP_TEXT_FOLLOWS: u16 = 100;
    /// Capability list follows (RFC 3977 Section 5.2)
    pub const CAPABILITY_LIST: u16 = 101;
    /// Server date/time (RFC 3977 Section 7.1)
    pub const SERVER_DATE: u16 = 111;

    // 2xx - Success
    /// Server ready, posting allowed
    pub const READY_POSTING_ALLOWED: u16 = 200;
    /// Server ready, no posting
    pub const READY_NO_POSTING: u16 = 201;
    /// Closing connection
    pub const CLOSING_CONNECTION: u16 = 205;
    /// Group selected
    pub const GROUP_SELECTED: u16 = 211;
    /// List of newsgroups follows (RFC 3977 Section 7.6)
    pub const LIST_INFORMATION_FOLLOWS: u16 = 215;
    /// Article follows
    pub const ARTICLE_FOLLOWS: u16 = 220;
    /// Head follows
    pub const HEAD_FOLLOWS: u16 = 221;
    /// Body follows
    pub const BODY_FOLLOWS: u16 = 222;
    /// Article stat
    pub const ARTICLE_STAT: u16 = 223;
    /// Overview information follows
    pub const OVERVIEW_INFO_FOLLOWS: u16 = 224;

    // 3xx - Continuation
    /// Send article to be posted
    pub const SEND_ARTICLE: u16 = 340;
    /// Continue with authentication
    pub const AUTH_CONTINUE: u16 = 381;

    // 4xx - Temporary errors
    /// Service temporarily unavailable
    pub const SERVICE_UNAVAILABLE: u16 = 400;
    /// Internal fault or server resource problem (RFC 3977)
    pub const INTERNAL_FAULT: u16 = 403;
    /// No such newsgroup
    pub const NO_SUCH_GROUP: u16 = 411;
    /// No newsgroup selected
    pub const NO_GROUP_SELECTED: u16 = 412;
    /// No current article
    pub const NO_CURRENT_ARTICLE: u16 = 420;
    /// No next article
    pub const NO_NEXT_ARTICLE: u16 = 421;
    /// No previous article
    pub const NO_PREV_ARTICLE: u16 = 422;
    /// No article with that number
    pub const NO_SUCH_ARTICLE_NUMBER: u16 = 423;
    /// No article with that message-id
    pub const NO_SUCH_ARTICLE_ID: u16 = 430;
    /// Authentication required (RFC 4643)
    pub const AUTH_REQUIRED: u16 = 480;

    // 5xx - Permanent errors
    /// Command not recognized
    pub const COMMAND_NOT_RECOGNIZED: u16 = 500;
    /// Command syntax error
    pub const COMMAND_SYNTAX_ERROR: u16 = 501;
    /// Access denied / command unavailable
    pub const ACCESS_DENIED: u16 = 502;
    /// Feature not supported / optional functionality absent (RFC 3977)
    pub const FEATURE_NOT_SUPPORTED: u16 = 503;
}
