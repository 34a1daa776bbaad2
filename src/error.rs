use sea_orm::{DbErr, SqlErr};
use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Venue,
    Artist,
    Show,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Venue => write!(f, "Venue"),
            EntityKind::Artist => write!(f, "Artist"),
            EntityKind::Show => write!(f, "Show"),
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0} {1} not found")]
    NotFound(EntityKind, i32),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    Database(DbErr),
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg))
            | Some(SqlErr::UniqueConstraintViolation(msg)) => StoreError::ConstraintViolation(msg),
            _ => StoreError::Database(err),
        }
    }
}
