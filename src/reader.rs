//! Async status-line reader
//!
//! Reads one CRLF-terminated reply line at a time from any buffered tokio
//! reader and dispatches it against the command that was sent. Socket setup,
//! TLS and multi-line bodies stay with the caller.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};
use tokio::time::timeout;
use tracing::trace;

use crate::commands::Command;
use crate::config::ParserConfig;
use crate::error::{NntpError, Result};
use crate::reply::{Reply, ReplyParser};
use crate::response::StatusResponse;

/// Reads and dispatches NNTP status lines from a buffered stream
#[derive(Debug)]
pub struct ReplyReader<R> {
    reader: R,
    parser: ReplyParser,
    // Bytes of a line whose read timed out; the next read continues it
    partial: Vec<u8>,
    // Tail of an over-long line still to be skipped
    discarding: bool,
}

impl<R: AsyncBufRead + Unpin> ReplyReader<R> {
    /// Wrap a buffered reader
    pub fn new(reader: R, config: ParserConfig) -> Self {
        Self {
            reader,
            parser: ReplyParser::new(config),
            partial: Vec::with_capacity(512),
            discarding: false,
        }
    }

    /// Parser used for every line read
    pub fn parser(&self) -> &ReplyParser {
        &self.parser
    }

    /// Return the wrapped reader
    ///
    /// Bytes of a partially read line are dropped.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Read one raw line, without its CRLF terminator
    ///
    /// A read that times out keeps the bytes received so far and the next
    /// call continues the same line. An over-long line is consumed through
    /// its LF before `LineTooLong` is returned, so the following read starts
    /// at the next reply.
    ///
    /// # Errors
    ///
    /// - [`NntpError::ConnectionClosed`] - stream ended before any byte
    /// - [`NntpError::LineTooLong`] - no LF within the configured limit
    /// - [`NntpError::Timeout`] - nothing complete within the read timeout
    pub async fn read_line(&mut self) -> Result<String> {
        let config = self.parser.config();
        let max_line_length = config.max_line_length;
        let read_timeout = config.read_timeout;
        // Room for CRLF on top of the line itself
        let limit = max_line_length.saturating_add(2);

        let read_future = async {
            if self.discarding {
                self.skip_line().await?;
            }

            let remaining = limit.saturating_sub(self.partial.len());
            (&mut self.reader)
                .take(remaining as u64)
                .read_until(b'\n', &mut self.partial)
                .await?;

            if self.partial.is_empty() {
                return Err(NntpError::ConnectionClosed);
            }
            if self.partial.len() >= limit && !self.partial.ends_with(b"\n") {
                self.partial.clear();
                self.discarding = true;
                self.skip_line().await?;
                return Err(NntpError::LineTooLong(max_line_length));
            }

            let line_bytes = std::mem::take(&mut self.partial);
            // Convert to string with lossy UTF-8 conversion
            let line = String::from_utf8_lossy(&line_bytes);
            let line = line.trim_end_matches(['\r', '\n']).to_string();
            trace!("Received: {}", line);
            Ok(line)
        };

        timeout(read_timeout, read_future)
            .await
            .map_err(|_| NntpError::Timeout)?
    }

    /// Consume input up to and including the next LF (or end of stream)
    async fn skip_line(&mut self) -> Result<()> {
        loop {
            let buf = self.reader.fill_buf().await?;
            if buf.is_empty() {
                break;
            }
            match buf.iter().position(|&b| b == b'\n') {
                Some(pos) => {
                    self.reader.consume(pos + 1);
                    break;
                }
                None => {
                    let len = buf.len();
                    self.reader.consume(len);
                }
            }
        }
        trace!("Skipped remainder of over-long line");
        self.discarding = false;
        Ok(())
    }

    /// Read one line as a generic status response
    pub async fn read_status(&mut self) -> Result<StatusResponse> {
        let line = self.read_line().await?;
        self.parser.parse_line(&line)
    }

    /// Read the reply to `command`
    pub async fn read_reply(&mut self, command: &Command) -> Result<Reply> {
        let line = self.read_line().await?;
        self.parser.dispatch(command, &line)
    }

    /// Read the greeting sent when the connection opens
    pub async fn read_greeting(&mut self) -> Result<Reply> {
        let line = self.read_line().await?;
        self.parser.parse_greeting(&line)
    }
}
