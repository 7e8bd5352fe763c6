//! Main application entry point (CLI binary).
//!
//! Loads `.env`, parses arguments, initializes logging and hands over to
//! the library.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use ipyard::initialization::init_logger_with;
use ipyard::{run, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format)
        .context("Failed to initialize logger")?;

    if let Err(e) = run(cli).await {
        eprintln!("ipyard error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
