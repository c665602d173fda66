//! RFC 3977 Sections 6.1.3, 6.1.4, 6.2 - Article Reply Tests
//!
//! Response: "22x n message-id"

use nntp_reply::{ArticleResponse, Command, NntpError, Reply, parse_reply};

#[test]
fn test_stat_reply() {
    let reply = parse_reply(
        &Command::Stat(Some("3000234".into())),
        "223 3000234 <45223423@example.com>",
    )
    .unwrap();
    let article = reply.as_article().unwrap();
    assert_eq!(article.number(), 3000234);
    assert_eq!(article.message_id(), "<45223423@example.com>");
}

#[test]
fn test_next_and_last_replies() {
    for command in [Command::Next, Command::Last] {
        let reply = parse_reply(&command, "223 3000237 <668929@example.org> retrieved").unwrap();
        assert_eq!(reply.as_article().unwrap().number(), 3000237);
    }
}

#[test]
fn test_article_head_body_codes() {
    let cases = [
        (Command::Article(None), "220 3000234 <45223423@example.com>"),
        (Command::Head(None), "221 3000234 <45223423@example.com>"),
        (Command::Body(None), "222 3000234 <45223423@example.com>"),
    ];
    for (command, line) in cases {
        let reply = parse_reply(&command, line).unwrap();
        assert!(matches!(reply, Reply::Article(_)), "{line}");
    }
}

#[test]
fn test_message_id_request_reports_zero() {
    let article = ArticleResponse::parse(220, "0 <45223423@example.com>").unwrap();
    assert_eq!(article.number(), 0);
}

#[test]
fn test_no_next_article_is_generic() {
    let reply = parse_reply(&Command::Next, "421 no next article in this group").unwrap();
    assert_eq!(reply.status(), 421);
    assert!(reply.as_article().is_none());
}

#[test]
fn test_malformed_article_replies() {
    for line in ["223", "223 12", "223 x <a@b>", "223 12 a@b", "223 12 <>"] {
        let err = parse_reply(&Command::Stat(None), line).unwrap_err();
        assert!(matches!(err, NntpError::MalformedReply { code: 223, .. }), "{line}");
    }
}
