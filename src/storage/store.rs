use std::{fmt::Debug, sync::Arc};

use async_trait::async_trait;

use crate::{
    error::Result,
    model::{Author, Book, NewAuthor, NewBook},
};

/// Document collections for authors and books.
///
/// Every method maps to exactly one store call. Lookups by id return
/// `Ok(None)` both for unknown ids and for ids the backend cannot parse.
#[async_trait]
pub trait Store: Debug {
    async fn find_author(&self, id: &str) -> Result<Option<Author>>;
    async fn list_authors(&self) -> Result<Vec<Author>>;
    async fn insert_author(&self, author: NewAuthor) -> Result<Author>;

    async fn find_book(&self, id: &str) -> Result<Option<Book>>;
    async fn list_books(&self) -> Result<Vec<Book>>;
    async fn books_by_author(&self, author_id: &str) -> Result<Vec<Book>>;
    async fn insert_book(&self, book: NewBook) -> Result<Book>;
}

pub type StoreArc = Arc<dyn Store + Send + Sync>;
