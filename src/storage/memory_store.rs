use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::Store;
use crate::{
    error::Result,
    model::{Author, Book, NewAuthor, NewBook},
};

const ID_ALPHABET: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f',
];
const ID_LENGTH: usize = 24;

/// In-process store. Records live for the lifetime of the value and keep
/// insertion order.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    authors: Arc<RwLock<Vec<Author>>>,
    books: Arc<RwLock<Vec<Book>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with records.
    pub fn with_data(authors: Vec<Author>, books: Vec<Book>) -> Self {
        Self {
            authors: Arc::new(RwLock::new(authors)),
            books: Arc::new(RwLock::new(books)),
        }
    }

    fn generate_id() -> String {
        nanoid::format(nanoid::rngs::default, &ID_ALPHABET, ID_LENGTH)
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_author(&self, id: &str) -> Result<Option<Author>> {
        let authors = self.authors.read().await;
        Ok(authors.iter().find(|a| a.id == id).cloned())
    }

    async fn list_authors(&self) -> Result<Vec<Author>> {
        Ok(self.authors.read().await.clone())
    }

    async fn insert_author(&self, author: NewAuthor) -> Result<Author> {
        let author = author.with_id(Self::generate_id());
        tracing::info!(id = %author.id, name = %author.name, "Creating author");
        self.authors.write().await.push(author.clone());
        Ok(author)
    }

    async fn find_book(&self, id: &str) -> Result<Option<Book>> {
        let books = self.books.read().await;
        Ok(books.iter().find(|b| b.id == id).cloned())
    }

    async fn list_books(&self) -> Result<Vec<Book>> {
        Ok(self.books.read().await.clone())
    }

    async fn books_by_author(&self, author_id: &str) -> Result<Vec<Book>> {
        let books = self.books.read().await;
        Ok(books
            .iter()
            .filter(|b| b.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn insert_book(&self, book: NewBook) -> Result<Book> {
        let book = book.with_id(Self::generate_id());
        tracing::info!(id = %book.id, author_id = %book.author_id, "Creating book");
        self.books.write().await.push(book.clone());
        Ok(book)
    }
}
