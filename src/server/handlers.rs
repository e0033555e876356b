use super::protocol::{parse_request, Request};
use crate::search::engine::WordSearcher;
use anyhow::Result;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

/// Serves one client connection until it disconnects.
///
/// Each recognized `get` line is answered with the result words, one per
/// line, followed by a blank line. Unrecognized lines are skipped with no
/// response. I/O errors end the connection and propagate to the accept
/// loop's logging, never to the process.
pub async fn handle_connection(stream: TcpStream, searcher: Arc<WordSearcher>) -> Result<()> {
    let (read_half, mut write_half) = stream.into_split();
    let mut lines = BufReader::new(read_half).lines();

    while let Some(line) = lines.next_line().await? {
        let Some(Request::Get(prefix)) = parse_request(&line) else {
            continue;
        };

        let found = searcher.search(&prefix);
        tracing::debug!("Query {:?} matched {} word(s)", prefix, found.len());

        // One word per line, then the terminating blank line, in a single
        // write so a reader never observes a partial response.
        let mut response = String::new();
        for word in &found {
            response.push_str(word);
            response.push('\n');
        }
        response.push('\n');
        write_half.write_all(response.as_bytes()).await?;
    }

    Ok(())
}
