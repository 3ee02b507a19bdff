//! Contact Book - Main entry point
//!
//! Loads configuration, opens the contact store, and serves the web
//! application until interrupted.

use anyhow::Result;
use contact_book::repositories::{
    ContactRepository, InMemoryContactRepository, JsonFileContactRepository,
};
use contact_book::services::{ContactService, ContactServiceImpl};
use contact_book::{AppState, Config, SessionStore};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging; RUST_LOG takes precedence over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Configuration loaded successfully");

    // Initialize the contact store
    let repository: Arc<dyn ContactRepository> = match &config.contacts_file {
        Some(path) => match JsonFileContactRepository::open(path).await {
            Ok(repo) => Arc::new(repo),
            Err(e) => {
                error!("Failed to open contact file {}: {}", path.display(), e);
                return Err(e.into());
            }
        },
        None => {
            info!("CONTACTS_FILE not set; contacts are kept in memory only");
            Arc::new(InMemoryContactRepository::new())
        }
    };

    let contacts =
        Arc::new(ContactServiceImpl::new(repository, config.phone_region)) as Arc<dyn ContactService>;
    let sessions = SessionStore::new(config.session_ttl_seconds);

    info!(
        "Phone region: {}, session TTL: {} seconds",
        config.phone_region, config.session_ttl_seconds
    );

    contact_book::server::run_server(AppState::new(contacts, sessions), config.socket_addr())
        .await?;

    info!("Contact book shutdown complete");
    Ok(())
}
