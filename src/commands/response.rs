//! Core NNTP status-line parsing utilities

use crate::error::{NntpError, Result};
use crate::response::StatusResponse;

/// Parse NNTP response line into code and message
pub fn parse_response_line(line: &str) -> Result<(u16, String)> {
    // Strip UTF-8 BOM if present (some broken servers/proxies add it)
    let line = line.trim_start_matches('\u{FEFF}');
    let line = line.trim_end_matches(['\r', '\n']);

    // Check minimum length and that first 3 chars are ASCII digits
    let bytes = line.as_bytes();
    let Some(digits) = bytes.get(..3) else {
        return Err(NntpError::InvalidResponse(line.chars().take(100).collect()));
    };
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(NntpError::InvalidResponse(line.chars().take(100).collect()));
    }

    // "99999" must not be read as code 999 with message "99"
    if bytes.get(3).is_some_and(u8::is_ascii_digit) {
        return Err(NntpError::InvalidResponse(line.chars().take(100).collect()));
    }

    let code = digits
        .iter()
        .fold(0u16, |acc, d| acc * 10 + u16::from(d - b'0'));

    // "200 message" skips the space; "200message" keeps everything after the code
    let rest = &line[3..];
    let message = rest.strip_prefix(' ').unwrap_or(rest).to_string();

    Ok((code, message))
}

/// Parse a single status line into a generic [`StatusResponse`]
pub fn parse_status_line(line: &str) -> Result<StatusResponse> {
    let (code, message) = parse_response_line(line)?;
    Ok(StatusResponse::new(code, message))
}

/// Parse a decimal NNTP number field
///
/// RFC 3977 numbers are plain ASCII digits; signs and whitespace are rejected,
/// which `u64::from_str` alone would not do for a leading `+`.
pub(crate) fn parse_number(
    token: &str,
    code: u16,
    reason: &'static str,
    message: &str,
) -> Result<u64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NntpError::malformed(code, reason, message));
    }
    token
        .parse()
        .map_err(|_| NntpError::malformed(code, reason, message))
}
