use async_graphql::{ComplexObject, Context, ID, SimpleObject};

use crate::model;

use super::schema::{get_store, store_result};

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Author {
    pub id: ID,
    pub name: String,
    pub age: i32,
}

#[ComplexObject]
impl Author {
    /// Books whose `authorId` references this author
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Book>>> {
        let store = get_store(ctx)?;
        let books = store_result(ctx, store.books_by_author(self.id.as_str()).await);
        Ok(books.map(|books| books.into_iter().map(Into::into).collect()))
    }
}

impl From<model::Author> for Author {
    fn from(a: model::Author) -> Self {
        Self {
            id: ID(a.id),
            name: a.name,
            age: a.age,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Book {
    pub id: ID,
    pub name: String,
    pub genre: String,
    pub author_id: ID,
}

#[ComplexObject]
impl Book {
    /// The referenced author, or null if the reference dangles
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Author>> {
        let store = get_store(ctx)?;
        let author = store_result(ctx, store.find_author(self.author_id.as_str()).await);
        Ok(author.flatten().map(Into::into))
    }
}

impl From<model::Book> for Book {
    fn from(b: model::Book) -> Self {
        Self {
            id: ID(b.id),
            name: b.name,
            genre: b.genre,
            author_id: ID(b.author_id),
        }
    }
}
