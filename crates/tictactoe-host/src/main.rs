//! Headless tic-tac-toe host.
//!
//! Reads client messages as JSON lines on stdin and writes server messages as
//! JSON lines on stdout. Logs go to stderr.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod driver;
mod protocol;
mod table;

use config::HostConfig;
use driver::SessionDriver;
use protocol::{ClientMessage, ServerMessage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = HostConfig::from_env()?;
    info!(
        delay = ?config.opponent_delay,
        seed = ?config.seed,
        "Starting tic-tac-toe host"
    );

    let (in_tx, in_rx) = mpsc::unbounded_channel::<ClientMessage>();
    let (out_tx, out_rx) = mpsc::unbounded_channel::<ServerMessage>();

    let driver = tokio::spawn(SessionDriver::new(config.build_session(), out_tx).run(in_rx));
    let writer = tokio::spawn(write_messages(out_rx));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<ClientMessage>(&line) {
            Ok(msg) => {
                if in_tx.send(msg).is_err() {
                    break;
                }
            }
            Err(e) => warn!("Invalid message {:?}: {}", line, e),
        }
    }

    drop(in_tx);
    driver.await?;
    writer.await??;

    info!("Host shut down");
    Ok(())
}

/// Forward server messages to stdout, one JSON document per line
async fn write_messages(mut rx: mpsc::UnboundedReceiver<ServerMessage>) -> anyhow::Result<()> {
    let mut stdout = tokio::io::stdout();
    while let Some(msg) = rx.recv().await {
        let mut text = serde_json::to_string(&msg)?;
        text.push('\n');
        stdout.write_all(text.as_bytes()).await?;
        stdout.flush().await?;
    }
    Ok(())
}
