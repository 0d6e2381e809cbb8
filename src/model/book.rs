use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub name: String,
    pub genre: String,

    /// Not checked against the authors collection.
    #[serde(rename = "authorId")]
    pub author_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub name: String,
    pub genre: String,
    pub author_id: String,
}

impl NewBook {
    pub fn new(
        name: impl Into<String>,
        genre: impl Into<String>,
        author_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            genre: genre.into(),
            author_id: author_id.into(),
        }
    }

    pub fn with_id(self, id: String) -> Book {
        Book {
            id,
            name: self.name,
            genre: self.genre,
            author_id: self.author_id,
        }
    }
}
