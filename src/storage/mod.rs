//! Document storage for authors and books.
//!
//! Records live in two independent collections, `authors` and `books`. A book
//! points at its author through `authorId`; nothing enforces that the
//! reference resolves.
//!
//! ## Components
//!
//! - [`Store`]: the async operations resolvers are allowed to call
//! - [`MongoStore`]: MongoDB collections, ids are `ObjectId` hex strings
//! - [`MemoryStore`]: in-process collections, used with `--store memory` and in tests
//! - [`connect`]: build the store selected by [`AppConfig`]

mod memory_store;
mod mongo_store;
mod store;

pub use memory_store::MemoryStore;
pub use mongo_store::{AUTHORS_COLLECTION, BOOKS_COLLECTION, DEFAULT_DATABASE, MongoStore};
pub use store::{Store, StoreArc};

use std::sync::Arc;

use crate::config::{AppConfig, StoreKind};
use crate::error::Result;

/// Opens the configured store. Failure here is fatal for `serve`.
pub async fn connect(config: &AppConfig) -> Result<StoreArc> {
    match config.store {
        StoreKind::Memory => {
            tracing::warn!("Using in-memory store; records are lost on exit");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreKind::Mongo => {
            let store =
                MongoStore::connect(&config.database_url, config.database.as_deref()).await?;
            Ok(Arc::new(store))
        }
    }
}
