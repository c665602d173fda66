#![doc = include_str!("../README.md")]

/// NNTP command builders and typed reply parsers
pub mod commands;
mod config;
mod error;
mod reader;
mod reply;
mod response;

pub use commands::{
    ArticleResponse, Command, DateResponse, GreetingResponse, GroupResponse, parse_response_line,
    parse_status_line,
};
pub use config::{DEFAULT_MAX_LINE_LENGTH, DEFAULT_READ_TIMEOUT, ParserConfig};
pub use error::{NntpError, Result};
pub use reader::ReplyReader;
pub use reply::{Reply, ReplyParser, parse_reply};
pub use response::{StatusResponse, codes};
