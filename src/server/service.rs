use super::handlers::handle_connection;
use crate::search::engine::WordSearcher;
use anyhow::Result;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Accepts connections forever, one spawned task per client.
///
/// Every task shares the same `WordSearcher`; the engine's index is
/// read-only and its cache handles concurrent access, so no further
/// coordination happens here. A failing connection is logged and dropped
/// without affecting the others.
pub async fn serve(listener: TcpListener, searcher: Arc<WordSearcher>) -> Result<()> {
    loop {
        let (stream, peer) = listener.accept().await?;
        tracing::debug!("Accepted connection from {}", peer);

        let searcher = searcher.clone();
        tokio::spawn(async move {
            if let Err(err) = handle_connection(stream, searcher).await {
                tracing::warn!("Connection from {} ended with error: {}", peer, err);
            }
        });
    }
}
