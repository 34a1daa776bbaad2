use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// Ordered genre tags, stored as a JSON array so every back-end can hold it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct Genres(pub Vec<String>);

impl From<Vec<String>> for Genres {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}

impl From<Genres> for Vec<String> {
    fn from(value: Genres) -> Self {
        value.0
    }
}
