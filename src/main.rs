//! minicon console daemon
//!
//! Serves the interpreter over TCP and over stdio. Each session frames its
//! byte stream into lines and receives one reply per command.

mod config;
mod console;
mod platform;

use std::sync::Arc;

use minicon_shared::Interpreter;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::ConsoleConfig;
use platform::HostPlatform;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = ConsoleConfig::from_env();
    let interpreter = Arc::new(Interpreter::new(HostPlatform::new()));

    info!("minicon console starting");

    if config.stdio {
        let stdio_interpreter = interpreter.clone();
        tokio::spawn(async move {
            let result = console::run_session(
                stdio_interpreter,
                tokio::io::stdin(),
                tokio::io::stdout(),
                "stdio",
            )
            .await;
            match result {
                Ok(()) => info!("Stdio session ended"),
                Err(e) => error!("Stdio session failed: {}", e),
            }
        });
    }

    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!("Console listening on {}", config.bind_addr);

    loop {
        let (socket, addr) = listener.accept().await?;
        info!("Connection from: {}", addr);

        let interpreter = interpreter.clone();
        tokio::spawn(async move {
            let peer = addr.to_string();
            let (reader, writer) = socket.into_split();
            if let Err(e) = console::run_session(interpreter, reader, writer, &peer).await {
                error!("Session {} failed: {}", peer, e);
            }
        });
    }
}
