use async_graphql::{Context, EmptySubscription, ID, Object, Schema};

use crate::error::Result;
use crate::model::{NewAuthor, NewBook};
use crate::storage::StoreArc;

use super::types::*;

pub type BookGraphSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: StoreArc) -> BookGraphSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

pub(super) fn get_store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a StoreArc> {
    ctx.data::<StoreArc>()
}

/// Records a failed store call as an error on the current field, which then
/// resolves to null. Returning `Err` instead would drop the key from `data`.
pub(super) fn store_result<T>(ctx: &Context<'_>, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(field = %ctx.item.node.name.node, error = %e, "Store call failed");
            let error = async_graphql::Error::new(e.to_string()).into_server_error(ctx.item.pos);
            ctx.add_error(ctx.set_error_path(error));
            None
        }
    }
}

// Fields that call the store are nullable so a failure nulls only that field.
pub struct QueryRoot;

#[Object(name = "RootQueryType")]
impl QueryRoot {
    /// Get a single book by ID
    async fn book(
        &self,
        ctx: &Context<'_>,
        id: Option<ID>,
    ) -> async_graphql::Result<Option<Book>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let store = get_store(ctx)?;
        let book = store_result(ctx, store.find_book(id.as_str()).await).flatten();
        Ok(book.map(Into::into))
    }

    /// List all books
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Book>>> {
        let store = get_store(ctx)?;
        let books = store_result(ctx, store.list_books().await);
        Ok(books.map(|books| books.into_iter().map(Into::into).collect()))
    }

    /// Get a single author by ID
    async fn author(
        &self,
        ctx: &Context<'_>,
        id: Option<ID>,
    ) -> async_graphql::Result<Option<Author>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let store = get_store(ctx)?;
        let author = store_result(ctx, store.find_author(id.as_str()).await).flatten();
        Ok(author.map(Into::into))
    }

    /// List all authors
    async fn authors(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Author>>> {
        let store = get_store(ctx)?;
        let authors = store_result(ctx, store.list_authors().await);
        Ok(authors.map(|authors| authors.into_iter().map(Into::into).collect()))
    }
}

pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Create a new author
    async fn add_author(
        &self,
        ctx: &Context<'_>,
        name: String,
        age: i32,
    ) -> async_graphql::Result<Option<Author>> {
        let store = get_store(ctx)?;
        let author = store_result(ctx, store.insert_author(NewAuthor::new(name, age)).await);
        Ok(author.map(Into::into))
    }

    /// Create a new book. `authorId` is stored as given.
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        genre: String,
        author_id: ID,
    ) -> async_graphql::Result<Option<Book>> {
        let store = get_store(ctx)?;
        let book = store_result(
            ctx,
            store.insert_book(NewBook::new(name, genre, author_id.0)).await,
        );
        Ok(book.map(Into::into))
    }
}
