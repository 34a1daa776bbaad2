use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use thiserror::Error;

use super::setting::Settings;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("No database URL configured")]
    MissingUrl,

    #[error("Error while connecting to the database: {0}")]
    Database(#[from] DbErr),
}

pub async fn open_database(settings: &Settings) -> Result<DatabaseConnection, DatabaseError> {
    let url = &settings.db;
    if url.is_empty() {
        return Err(DatabaseError::MissingUrl);
    }
    tracing::trace! {%url, "Connecting to database"};
    let timeout = Duration::from_secs(settings.pool.connect_timeout);
    let mut opt = ConnectOptions::new(url.to_owned());
    opt.max_connections(settings.pool.max_connections)
        .min_connections(settings.pool.min_connections)
        .connect_timeout(timeout)
        .acquire_timeout(timeout)
        .sqlx_logging(true);
    Database::connect(opt)
        .await
        .map_err(DatabaseError::Database)
}
