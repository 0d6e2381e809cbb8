use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub age: i32,
}

/// Fields supplied by `addAuthor`; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub name: String,
    pub age: i32,
}

impl NewAuthor {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn with_id(self, id: String) -> Author {
        Author {
            id,
            name: self.name,
            age: self.age,
        }
    }
}
