//! # bookgraph - a GraphQL API for authors and their books
//!
//! Two entities, authors and books, stored as documents in two independent
//! collections. Every resolver is a pass-through to a single store call.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve against a local MongoDB (GraphiQL at http://127.0.0.1:5000/graphql)
//! MONGO_URI=mongodb://localhost:27017/library bookgraph serve
//!
//! # Or without a database
//! bookgraph --store memory serve
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and overrides
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP endpoint
//! - [`model`]: Data models (Author, Book)
//! - [`storage`]: Document store trait and its MongoDB / in-memory backends

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Merges defaults, an optional TOML file and CLI/environment overrides.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BookGraphError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum router serving it.
pub mod graphql;

/// Data models for authors and books.
pub mod model;

/// Document storage layer.
pub mod storage;

pub mod logging;
