//! HTTP server command
//!
//! Waits for the database, then serves the book API until shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use bookshelf_server::{run_server, AppState, BookRepo, ServerConfig};

use crate::config::DbArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "BOOKSHELF_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Only allow CORS requests from localhost origins
    #[arg(long)]
    pub cors_localhost: bool,

    #[command(flatten)]
    pub db: DbArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting bookshelf server on {}", args.bind);

    let pool = args.db.connect().await?;
    let state = AppState::new(Arc::new(BookRepo::new(pool)));

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_localhost: args.cors_localhost,
    };

    // Blocks until shutdown
    run_server(state, config).await.context("Server error")?;

    Ok(())
}
