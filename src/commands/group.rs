//! Group selection commands and the 211 reply

use std::fmt;

use crate::commands::response::parse_number;
use crate::error::{NntpError, Result};
use crate::response::{StatusResponse, codes};

/// Build GROUP command
///
/// The name is not checked for CR/LF; [`Command::to_wire`](crate::Command::to_wire)
/// rejects such arguments.
pub fn group(newsgroup: &str) -> String {
    format!("GROUP {}\r\n", newsgroup)
}

/// Build LISTGROUP command (RFC 3977 §6.1.2)
///
/// Without a newsgroup the currently selected group is listed.
pub fn listgroup(newsgroup: Option<&str>) -> String {
    match newsgroup {
        Some(name) => format!("LISTGROUP {}\r\n", name),
        None => "LISTGROUP\r\n".to_string(),
    }
}

/// Build LISTGROUP command with range (RFC 3977 §6.1.2)
pub fn listgroup_range(newsgroup: &str, range: &str) -> String {
    format!("LISTGROUP {} {}\r\n", newsgroup, range)
}

/// Reply to GROUP (and the first line of LISTGROUP)
///
/// Wire shape: `211 count first last group [text]`. All four fields are
/// extracted before the value exists, so a `GroupResponse` is never
/// partially filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupResponse {
    response: StatusResponse,
    count: u64,
    first: u64,
    last: u64,
    group: String,
}

impl GroupResponse {
    /// Build a group response from a raw status code and reply text
    pub fn parse(status: u16, message: impl Into<String>) -> Result<Self> {
        parse_group_response(StatusResponse::new(status, message))
    }

    /// 3-digit NNTP response code (always 211)
    pub fn status(&self) -> u16 {
        self.response.status()
    }

    /// Reply text following the status code
    pub fn message(&self) -> &str {
        self.response.message()
    }

    /// Estimated number of articles in the group
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Lowest article number (low water mark)
    pub fn first(&self) -> u64 {
        self.first
    }

    /// Highest article number (high water mark)
    pub fn last(&self) -> u64 {
        self.last
    }

    /// Newsgroup name as echoed by the server
    pub fn group(&self) -> &str {
        &self.group
    }

    /// True if the server reports no articles
    ///
    /// RFC 3977 allows an empty group to be reported either with a zero
    /// count or with `first > last`.
    pub fn is_empty(&self) -> bool {
        self.count == 0 || self.first > self.last
    }

    /// Underlying status response
    pub fn as_status(&self) -> &StatusResponse {
        &self.response
    }
}

impl AsRef<StatusResponse> for GroupResponse {
    fn as_ref(&self) -> &StatusResponse {
        &self.response
    }
}

impl From<GroupResponse> for StatusResponse {
    fn from(response: GroupResponse) -> Self {
        response.response
    }
}

impl TryFrom<StatusResponse> for GroupResponse {
    type Error = NntpError;

    fn try_from(response: StatusResponse) -> Result<Self> {
        parse_group_response(response)
    }
}

impl fmt::Display for GroupResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.status(),
            self.count,
            self.first,
            self.last,
            self.group
        )
    }
}

/// Parse GROUP response to extract article count, range and group name
///
/// Response format: "211 count first last group-name"
///
/// # Errors
///
/// - [`NntpError::Protocol`] - status is not 211
/// - [`NntpError::MalformedReply`] - fewer than four tokens or a non-numeric field
pub fn parse_group_response(response: StatusResponse) -> Result<GroupResponse> {
    let code = response.status();
    if code != codes::GROUP_SELECTED {
        return Err(NntpError::Protocol {
            code,
            message: response.into_message(),
        });
    }

    let message = response.message();
    let mut parts = message.split_whitespace();
    let (Some(count), Some(first), Some(last), Some(group)) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(NntpError::malformed(code, "expected count first last group", message));
    };

    let count = parse_number(count, code, "non-numeric article count", message)?;
    let first = parse_number(first, code, "non-numeric first article number", message)?;
    let last = parse_number(last, code, "non-numeric last article number", message)?;
    let group = group.to_string();

    Ok(GroupResponse {
        response,
        count,
        first,
        last,
        group,
    })
}
