use anyhow::Context;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use wordsearch::dictionary::loader::load_dictionary;
use wordsearch::search::engine::WordSearcher;
use wordsearch::server::service;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <dictionary-path> <port>", args[0]);
        eprintln!("Example: {} words.txt 8080", args[0]);

        std::process::exit(1);
    }

    let dict_path = &args[1];
    let port: u16 = args[2]
        .parse()
        .with_context(|| format!("invalid port number: {}", args[2]))?;

    // Dictionary load failure is fatal: the service never starts degraded.
    let dictionary = load_dictionary(Path::new(dict_path)).await?;
    tracing::info!("Dictionary path: {}", dict_path);
    tracing::info!("Loaded {} words", dictionary.len());

    let searcher = Arc::new(WordSearcher::new(dictionary));

    let bind_addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Server started on port: {}", port);

    service::serve(listener, searcher).await
}
