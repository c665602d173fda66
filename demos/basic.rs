//! Read the greeting and select a group on a plain NNTP connection
//!
//! Run with: cargo run --example basic

use nntp_reply::{Command, ParserConfig, Reply, ReplyReader};
use tokio::io::{AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let host = std::env::var("NNTP_HOST").unwrap_or_else(|_| "news.example.com".to_string());
    let port: u16 = std::env::var("NNTP_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(119);
    let group = std::env::var("NNTP_GROUP").unwrap_or_else(|_| "alt.test".to_string());

    println!("Connecting to {}:{}...", host, port);
    let stream = TcpStream::connect((host.as_str(), port)).await?;
    let (read_half, mut write_half) = stream.into_split();
    let mut replies = ReplyReader::new(BufReader::new(read_half), ParserConfig::default());

    match replies.read_greeting().await? {
        Reply::Greeting(greeting) => println!(
            "Connected ({})",
            if greeting.posting_allowed() {
                "posting allowed"
            } else {
                "read only"
            }
        ),
        other => return Err(format!("server refused connection: {}", other).into()),
    }

    let command = Command::group(group.as_str());
    write_half.write_all(command.to_wire()?.as_bytes()).await?;
    match replies.read_reply(&command).await? {
        Reply::Group(info) => println!(
            "Selected group '{}': {} articles ({}-{})",
            info.group(),
            info.count(),
            info.first(),
            info.last()
        ),
        other => println!("GROUP failed: {}", other),
    }

    write_half.write_all(Command::Quit.to_wire()?.as_bytes()).await?;
    let bye = replies.read_status().await?;
    println!("\n{}", bye);

    Ok(())
}
