//! Data models for bookgraph.
//!
//! - [`Author`]: a stored author record
//! - [`Book`]: a stored book record, referencing its author by id
//! - [`NewAuthor`] / [`NewBook`]: creation payloads before the store assigns an id

mod author;
mod book;

pub use author::{Author, NewAuthor};
pub use book::{Book, NewBook};
