//! RFC 3977 Section 6.1.1 - GROUP Command Response Tests
//!
//! Response: "211 number low high group"

use nntp_reply::commands::parse_group_response;
use nntp_reply::{Command, GroupResponse, NntpError, Reply, StatusResponse, parse_reply};

fn group_reply(line: &str) -> Result<Reply, NntpError> {
    parse_reply(&Command::group("misc.test"), line)
}

// Valid GROUP Response Parsing (RFC 3977 §6.1.1)

#[test]
fn test_group_response_standard_format() {
    let reply = group_reply("211 1234 3000234 3002322 misc.test").unwrap();
    let group = reply.as_group().unwrap();

    assert_eq!(group.status(), 211);
    assert_eq!(group.count(), 1234);
    assert_eq!(group.first(), 3000234);
    assert_eq!(group.last(), 3002322);
    assert_eq!(group.group(), "misc.test");
}

#[test]
fn test_group_response_zero_articles() {
    let reply = group_reply("211 0 0 0 empty.group").unwrap();
    let group = reply.as_group().unwrap();

    assert_eq!(group.status(), 211);
    assert_eq!(group.count(), 0);
    assert_eq!(group.first(), 0);
    assert_eq!(group.last(), 0);
    assert_eq!(group.group(), "empty.group");
    assert!(group.is_empty());
}

#[test]
fn test_group_response_empty_group_high_less_than_low() {
    // RFC 3977 §6.1.1: For empty groups, high water mark may be one less than low
    let group = GroupResponse::parse(211, "0 100 99 empty.group").unwrap();
    assert_eq!(group.first(), 100);
    assert_eq!(group.last(), 99);
}

#[test]
fn test_group_response_first_above_last_with_nonzero_count() {
    // Estimates may be stale; first > last is still not an error
    let group = GroupResponse::parse(211, "5 200 150 odd.group").unwrap();
    assert_eq!(group.count(), 5);
    assert!(group.is_empty());
}

#[test]
fn test_group_response_large_numbers() {
    let group = GroupResponse::parse(211, "5000000000 1 5000000000 high.volume.group").unwrap();
    assert_eq!(group.count(), 5_000_000_000);
    assert_eq!(group.last(), 5_000_000_000);
}

#[test]
fn test_group_response_leading_zeros() {
    // RFC 3977 §3.1: Numbers are base-10 and may have leading zeros
    let group = GroupResponse::parse(211, "0042 001 0100 test.group").unwrap();
    assert_eq!(group.count(), 42);
    assert_eq!(group.first(), 1);
    assert_eq!(group.last(), 100);
}

#[test]
fn test_group_response_extra_whitespace() {
    let group = GroupResponse::parse(211, "10  1\t10   spaced.group").unwrap();
    assert_eq!(group.count(), 10);
    assert_eq!(group.group(), "spaced.group");
}

#[test]
fn test_group_response_trailing_text_kept_in_message() {
    let reply = group_reply("211 3 1 3 misc.test Group selected").unwrap();
    let group = reply.as_group().unwrap();
    assert_eq!(group.group(), "misc.test");
    assert_eq!(group.message(), "3 1 3 misc.test Group selected");
}

#[test]
fn test_group_response_display_reproduces_tokens() {
    for line in [
        "211 1234 3000234 3002322 misc.test",
        "211 0 0 0 empty.group",
        "211 0 100 99 empty.group",
    ] {
        let reply = group_reply(line).unwrap();
        assert_eq!(reply.to_string(), line);
    }
}

// Invalid GROUP Response Parsing

#[test]
fn test_group_response_missing_group_name() {
    let err = group_reply("211 100 50 60").unwrap_err();
    assert!(matches!(err, NntpError::MalformedReply { code: 211, .. }));
}

#[test]
fn test_group_response_too_few_tokens() {
    for line in ["211", "211 ", "211 100", "211 100 50", "211 100 50 alt.test"] {
        let err = group_reply(line).unwrap_err();
        assert!(err.is_malformed(), "expected malformed for {line:?}, got {err:?}");
    }
}

#[test]
fn test_group_response_non_numeric_count() {
    let err = group_reply("211 abc 1 100 test.group").unwrap_err();
    assert!(matches!(err, NntpError::MalformedReply { code: 211, .. }));
}

#[test]
fn test_group_response_non_numeric_first() {
    assert!(group_reply("211 100 x 100 test.group").unwrap_err().is_malformed());
}

#[test]
fn test_group_response_non_numeric_last() {
    assert!(group_reply("211 100 1 1e3 test.group").unwrap_err().is_malformed());
}

#[test]
fn test_group_response_negative_number() {
    assert!(group_reply("211 -1 1 100 test.group").unwrap_err().is_malformed());
}

#[test]
fn test_group_response_signed_number() {
    assert!(group_reply("211 +1 1 100 test.group").unwrap_err().is_malformed());
}

#[test]
fn test_group_response_overflow() {
    assert!(
        group_reply("211 99999999999999999999999 1 100 test.group")
            .unwrap_err()
            .is_malformed()
    );
}

#[test]
fn test_parse_group_response_rejects_other_codes() {
    let err = parse_group_response(StatusResponse::new(411, "no such group")).unwrap_err();
    match err {
        NntpError::Protocol { code, message } => {
            assert_eq!(code, 411);
            assert_eq!(message, "no such group");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_try_from_status_response() {
    let group = GroupResponse::try_from(StatusResponse::new(211, "1 1 1 a.b")).unwrap();
    assert_eq!(group.as_status().message(), "1 1 1 a.b");
}
