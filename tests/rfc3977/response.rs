//! RFC 3977 Section 3.1 - Response Line Parsing Tests
//!
//! - Responses begin with a three-digit status code
//! - Status code is followed by optional space and message
//! - Response line must not exceed 512 octets

use nntp_reply::{
    NntpError, ParserConfig, ReplyParser, StatusResponse, codes, parse_response_line,
    parse_status_line,
};

#[test]
fn test_response_three_digit_code_with_message() {
    let (code, msg) = parse_response_line("200 server ready").unwrap();
    assert_eq!(code, 200);
    assert_eq!(msg, "server ready");
}

#[test]
fn test_response_three_digit_code_only() {
    let (code, msg) = parse_response_line("200").unwrap();
    assert_eq!(code, 200);
    assert_eq!(msg, "");
}

#[test]
fn test_response_with_empty_message_after_space() {
    let (code, msg) = parse_response_line("200 ").unwrap();
    assert_eq!(code, 200);
    assert_eq!(msg, "");
}

#[test]
fn test_response_representative_codes() {
    let test_cases = [
        ("111 20240101120000", codes::SERVER_DATE),
        ("200 posting allowed", codes::READY_POSTING_ALLOWED),
        ("201 no posting", codes::READY_NO_POSTING),
        ("205 closing connection", codes::CLOSING_CONNECTION),
        ("211 1234 5 6789 group.name", codes::GROUP_SELECTED),
        ("223 0 <msgid@x> stat", codes::ARTICLE_STAT),
        ("340 send article", codes::SEND_ARTICLE),
        ("411 no such group", codes::NO_SUCH_GROUP),
        ("430 no article with that message-id", codes::NO_SUCH_ARTICLE_ID),
        ("500 command not recognized", codes::COMMAND_NOT_RECOGNIZED),
        ("503 feature not supported", codes::FEATURE_NOT_SUPPORTED),
    ];

    for (input, expected_code) in test_cases {
        let (code, _) = parse_response_line(input).unwrap();
        assert_eq!(code, expected_code, "Failed for input: {}", input);
    }
}

#[test]
fn test_parse_status_line() {
    let response = parse_status_line("411 no such group\r\n").unwrap();
    assert_eq!(response, StatusResponse::new(411, "no such group"));
    assert!(response.is_error());
}

#[test]
fn test_message_preserves_inner_whitespace() {
    let response = parse_status_line("200  two  spaces ").unwrap();
    assert_eq!(response.message(), " two  spaces ");
}

#[test]
fn test_invalid_lines() {
    for line in ["", "20", "abc", "2a0 hi", " 200 leading space", "1234 too long"] {
        let err = parse_status_line(line).unwrap_err();
        assert!(
            matches!(err, NntpError::InvalidResponse(_)),
            "expected InvalidResponse for {line:?}"
        );
    }
}

#[test]
fn test_default_line_limit_is_rfc_512_with_crlf() {
    let parser = ReplyParser::default();
    let ok = format!("200 {}", "x".repeat(506));
    assert_eq!(ok.len(), 510);
    assert!(parser.parse_line(&format!("{ok}\r\n")).is_ok());

    let too_long = format!("{ok}x");
    assert!(matches!(
        parser.parse_line(&too_long),
        Err(NntpError::LineTooLong(510))
    ));
}

#[test]
fn test_strict_range_accepts_protocol_codes() {
    let parser = ReplyParser::new(ParserConfig::strict());
    assert_eq!(parser.parse_line("100 help follows").unwrap().status(), 100);
    assert_eq!(parser.parse_line("599 odd but in range").unwrap().status(), 599);
    assert!(parser.parse_line("600 out of range").is_err());
}
