//! Block until the database is reachable

use anyhow::Result;
use clap::Parser;

use crate::config::DbArgs;

/// Arguments for the wait-db command
#[derive(Parser, Debug)]
pub struct WaitDbArgs {
    #[command(flatten)]
    pub db: DbArgs,
}

pub async fn run_wait_db(args: WaitDbArgs) -> Result<()> {
    let pool = args.db.connect().await?;
    pool.close().await;
    Ok(())
}
