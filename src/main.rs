//! Contact Book - Main entry point
//!
//! An interactive terminal contact book backed by a JSON file. User-facing
//! text goes to stdout; diagnostics go to stderr so the interactive surface
//! stays clean.

use anyhow::Result;
use contact_book::storage::{ContactStore, JsonFileStore};
use contact_book::{Config, ContactBook, MenuLoop, StdioConsole};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Configuration is loaded before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env()?;

    // Initialize logging (stderr only to keep stdout for the interactive menu)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");
    info!("Contacts file: {}", config.contacts_file.display());

    let store = Arc::new(JsonFileStore::new(&config.contacts_file)) as Arc<dyn ContactStore>;

    // Load once at startup; a broken file is reported and degrades to empty
    let mut contacts = match store.load().await {
        Ok(book) => {
            info!("Loaded {} contacts", book.len());
            book
        }
        Err(err) => {
            println!("Error: {}", err);
            warn!("Starting with an empty contact book: {}", err);
            ContactBook::new()
        }
    };

    let mut console = StdioConsole::new();
    let menu = MenuLoop::new(store);
    menu.run(&mut console, &mut contacts).await?;

    info!("Contact book shutdown complete");
    Ok(())
}
