//! Contact Book - Main entry point
//!
//! Runs the interactive assistant on stdin/stdout. Logs go to stderr.

use anyhow::Result;
use contact_book::{BookRepository, Config, JsonFileRepository, Session};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn prompt() -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "Enter a command: ")?;
    stdout.flush()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Using address book at {}", config.book_path.display());

    let repository =
        Arc::new(JsonFileRepository::new(config.book_path.clone())) as Arc<dyn BookRepository>;

    let mut session = match Session::start(repository, &config).await {
        Ok(session) => session,
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e.into());
        }
    };

    println!("Welcome to the assistant bot!");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt()?;

        let Some(line) = lines.next_line().await? else {
            info!("Input closed, saving and exiting");
            println!();
            break;
        };

        let outcome = session.handle_line(&line);
        println!("{}", outcome.message());
        if outcome.is_exit() {
            break;
        }
    }

    session.finish().await?;
    Ok(())
}
