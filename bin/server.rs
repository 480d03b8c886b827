// Receipt Processor - Web Server

use anyhow::{Context, Result};
use receipt_processor::server::{router, AppState};
use receipt_processor::{InMemoryReceiptStore, ServerConfig, VERSION};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("🧾 Receipt Processor v{} - Web Server", VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let config = ServerConfig::from_env()?;
    let app = router(AppState::new(InMemoryReceiptStore::new()));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    println!("\n🚀 Server running on http://{}", addr);
    println!("   POST http://{}/receipts/process", addr);
    println!("   GET  http://{}/receipts/{{id}}/points", addr);
    println!("\n   Press Ctrl+C to stop\n");
    log::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}
