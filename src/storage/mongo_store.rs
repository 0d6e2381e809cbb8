use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Client, Collection, Database,
    bson::{doc, oid::ObjectId},
    options::ClientOptions,
};
use serde::{Deserialize, Serialize};

use super::store::Store;
use crate::{
    error::{BookGraphError, Result},
    model::{Author, Book, NewAuthor, NewBook},
};

pub const AUTHORS_COLLECTION: &str = "authors";
pub const BOOKS_COLLECTION: &str = "books";

/// Used when neither the config nor the connection string names a database.
pub const DEFAULT_DATABASE: &str = "library";

#[derive(Debug, Serialize, Deserialize)]
struct AuthorDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    age: i32,
}

#[derive(Debug, Serialize, Deserialize)]
struct BookDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    genre: String,
    #[serde(rename = "authorId")]
    author_id: String,
}

fn missing_id(collection: &str) -> BookGraphError {
    BookGraphError::Storage(format!("Document in '{}' has no _id", collection))
}

impl TryFrom<AuthorDocument> for Author {
    type Error = BookGraphError;

    fn try_from(doc: AuthorDocument) -> Result<Self> {
        let id = doc.id.ok_or_else(|| missing_id(AUTHORS_COLLECTION))?;
        Ok(Author {
            id: id.to_hex(),
            name: doc.name,
            age: doc.age,
        })
    }
}

impl TryFrom<BookDocument> for Book {
    type Error = BookGraphError;

    fn try_from(doc: BookDocument) -> Result<Self> {
        let id = doc.id.ok_or_else(|| missing_id(BOOKS_COLLECTION))?;
        Ok(Book {
            id: id.to_hex(),
            name: doc.name,
            genre: doc.genre,
            author_id: doc.author_id,
        })
    }
}

/// Parses a client-supplied id. Malformed ids cannot match any document.
fn parse_object_id(id: &str) -> Option<ObjectId> {
    match ObjectId::parse_str(id) {
        Ok(oid) => Some(oid),
        Err(e) => {
            tracing::debug!(id = %id, error = %e, "Not an ObjectId, treating as not found");
            None
        }
    }
}

/// MongoDB-backed store with one collection per entity.
#[derive(Debug, Clone)]
pub struct MongoStore {
    authors: Collection<AuthorDocument>,
    books: Collection<BookDocument>,
}

impl MongoStore {
    /// Connects and pings the server, so an unreachable store fails here
    /// rather than on the first request.
    pub async fn connect(connection_string: &str, database: Option<&str>) -> Result<Self> {
        let options = ClientOptions::parse(connection_string).await?;
        let client = Client::with_options(options)?;

        let db = match database {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
        };

        db.run_command(doc! { "ping": 1 }).await?;
        tracing::info!(database = %db.name(), "Connected to MongoDB");

        Ok(Self::from_database(&db))
    }

    pub fn from_database(db: &Database) -> Self {
        Self {
            authors: db.collection(AUTHORS_COLLECTION),
            books: db.collection(BOOKS_COLLECTION),
        }
    }
}

#[async_trait]
impl Store for MongoStore {
    async fn find_author(&self, id: &str) -> Result<Option<Author>> {
        let Some(oid) = parse_object_id(id) else {
            return Ok(None);
        };
        self.authors
            .find_one(doc! { "_id": oid })
            .await?
            .map(Author::try_from)
            .transpose()
    }

    async fn list_authors(&self) -> Result<Vec<Author>> {
        let docs: Vec<AuthorDocument> = self.authors.find(doc! {}).await?.try_collect().await?;
        tracing::debug!(count = docs.len(), "Listed authors");
        docs.into_iter().map(Author::try_from).collect()
    }

    async fn insert_author(&self, author: NewAuthor) -> Result<Author> {
        tracing::info!(name = %author.name, "Creating author");
        let doc = AuthorDocument {
            id: None,
            name: author.name.clone(),
            age: author.age,
        };
        let inserted = self.authors.insert_one(&doc).await?;
        let oid = inserted
            .inserted_id
            .as_object_id()
            .ok_or_else(|| missing_id(AUTHORS_COLLECTION))?;
        Ok(author.with_id(oid.to_hex()))
    }

    async fn find_book(&self, id: &str) -> Result<Option<Book>> {
        let Some(oid) = parse_object_id(id) else {
            return Ok(None);
        };
        self.books
            .find_one(doc! { "_id": oid })
            .await?
            .map(Book::try_from)
            .transpose()
    }

    async fn list_books(&self) -> Result<Vec<Book>> {
        let docs: Vec<BookDocument> = self.books.find(doc! {}).await?.try_collect().await?;
        tracing::debug!(count = docs.len(), "Listed books");
        docs.into_iter().map(Book::try_from).collect()
    }

    async fn books_by_author(&self, author_id: &str) -> Result<Vec<Book>> {
        let docs: Vec<BookDocument> = self
            .books
            .find(doc! { "authorId": author_id })
            .await?
            .try_collect()
            .await?;
        docs.into_iter().map(Book::try_from).collect()
    }

    async fn insert_book(&self, book: NewBook) -> Result<Book> {
        tracing::info!(name = %book.name, author_id = %book.author_id, "Creating book");
        let doc = BookDocument {
            id: None,
            name: book.name.clone(),
            genre: book.genre.clone(),
            author_id: book.author_id.clone(),
        };
        let inserted = self.books.insert_one(&doc).await?;
        let oid = inserted
            .inserted_id
            .as_object_id()
            .ok_or_else(|| missing_id(BOOKS_COLLECTION))?;
        Ok(book.with_id(oid.to_hex()))
    }
}
