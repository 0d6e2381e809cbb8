//! GraphQL schema, resolvers and HTTP endpoint.
//!
//! ## Usage
//!
//! ```bash
//! # Start the server (GraphiQL on GET /graphql)
//! bookgraph serve --port 5000
//!
//! # Execute a query from the CLI
//! bookgraph query '{ books { name author { name } } }'
//!
//! # Execute a mutation from the CLI
//! bookgraph mutate 'addAuthor(name: "Ursula", age: 88) { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `book`, `books`, `author`, `authors`
//! - **Mutations**: `addAuthor`, `addBook`
//!
//! Relationship fields (`Author.books`, `Book.author`) issue one store lookup
//! per parent object; there is no batching.

mod schema;
mod server;
mod types;

pub use schema::{BookGraphSchema, MutationRoot, QueryRoot, build_schema};
pub use server::{GRAPHQL_PATH, graphiql_html, router, run_server};
pub use types::*;
