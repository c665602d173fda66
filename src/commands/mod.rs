//! NNTP command builders and typed reply parsers

pub mod article;
pub mod date;
pub mod greeting;
pub mod group;
pub mod response;

pub use article::*;
pub use date::*;
pub use greeting::*;
pub use group::*;
pub use response::*;

use std::fmt;

use crate::error::{NntpError, Result};

/// Build QUIT command
pub fn quit() -> &'static str {
    "QUIT\r\n"
}

/// Command a reply is answering
///
/// The same status code means different things depending on what was sent
/// (211 after GROUP carries group metadata, 211 after ARTICLE does not), so
/// replies are always interpreted against the command that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// GROUP newsgroup
    Group(String),
    /// LISTGROUP [newsgroup [range]]
    ListGroup {
        /// Group to select; `None` lists the current group
        group: Option<String>,
        /// Article range such as "100-200"
        range: Option<String>,
    },
    /// ARTICLE [number|message-id]
    Article(Option<String>),
    /// HEAD [number|message-id]
    Head(Option<String>),
    /// BODY [number|message-id]
    Body(Option<String>),
    /// STAT [number|message-id]
    Stat(Option<String>),
    /// NEXT
    Next,
    /// LAST
    Last,
    /// DATE
    Date,
    /// MODE READER
    ModeReader,
    /// QUIT
    Quit,
    /// Any other command line, sent verbatim; replies stay generic
    Other(String),
}

impl Command {
    /// Select a newsgroup
    pub fn group(newsgroup: impl Into<String>) -> Self {
        Command::Group(newsgroup.into())
    }

    /// Command verb as sent on the wire
    pub fn name(&self) -> &str {
        match self {
            Command::Group(_) => "GROUP",
            Command::ListGroup { .. } => "LISTGROUP",
            Command::Article(_) => "ARTICLE",
            Command::Head(_) => "HEAD",
            Command::Body(_) => "BODY",
            Command::Stat(_) => "STAT",
            Command::Next => "NEXT",
            Command::Last => "LAST",
            Command::Date => "DATE",
            Command::ModeReader => "MODE READER",
            Command::Quit => "QUIT",
            Command::Other(line) => line.split_whitespace().next().unwrap_or_default(),
        }
    }

    /// CRLF-terminated command line
    ///
    /// # Errors
    ///
    /// Returns [`NntpError::InvalidCommand`] if an argument contains CR, LF
    /// or NUL, which would split or corrupt the command on the wire.
    pub fn to_wire(&self) -> Result<String> {
        if let Some(arg) = self.arguments().into_iter().find(|arg| !is_valid_argument(arg)) {
            return Err(NntpError::InvalidCommand(arg.chars().take(100).collect()));
        }
        Ok(self.render())
    }

    fn arguments(&self) -> Vec<&str> {
        match self {
            Command::Group(name) => vec![name.as_str()],
            Command::ListGroup { group, range } => group
                .iter()
                .chain(range.iter())
                .map(String::as_str)
                .collect(),
            Command::Article(id) | Command::Head(id) | Command::Body(id) | Command::Stat(id) => {
                id.iter().map(String::as_str).collect()
            }
            Command::Other(line) => vec![line.trim_end_matches(['\r', '\n'])],
            Command::Next
            | Command::Last
            | Command::Date
            | Command::ModeReader
            | Command::Quit => Vec::new(),
        }
    }

    fn render(&self) -> String {
        match self {
            Command::Group(name) => group(name),
            Command::ListGroup {
                group: Some(name),
                range: Some(range),
            } => listgroup_range(name, range),
            Command::ListGroup { group: name, .. } => listgroup(name.as_deref()),
            Command::Article(id) => article(id.as_deref()),
            Command::Head(id) => head(id.as_deref()),
            Command::Body(id) => body(id.as_deref()),
            Command::Stat(id) => stat(id.as_deref()),
            Command::Next => next().to_string(),
            Command::Last => last().to_string(),
            Command::Date => date().to_string(),
            Command::ModeReader => mode_reader().to_string(),
            Command::Quit => quit().to_string(),
            Command::Other(line) => format!("{}\r\n", line.trim_end_matches(['\r', '\n'])),
        }
    }
}

fn is_valid_argument(arg: &str) -> bool {
    !arg.contains(['\r', '\n', '\0'])
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render().trim_end())
    }
}
