mod mutate;
mod query;
mod serve;
mod utils;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use serve::handle_serve;

use crate::config::AppConfig;
use crate::storage::{self, StoreArc};
use anyhow::{Context, Result};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: AppConfig,
    pub store: StoreArc,
}

impl CommandContext {
    /// Connects the configured store; a store that cannot be reached aborts
    /// the command.
    pub async fn new(config: AppConfig) -> Result<Self> {
        let store = storage::connect(&config)
            .await
            .context("Failed to connect to the document store")?;
        Ok(Self { config, store })
    }
}
