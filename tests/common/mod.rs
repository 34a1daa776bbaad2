#![allow(dead_code)]

use booking::input::VenueInput;
use booking::seed::{self, Seeded};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

/// Fresh migrated in-memory store. A single pooled connection keeps every
/// query on the same in-memory database.
pub async fn empty_store() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:".to_string());
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.expect("open in-memory store");
    migration::Migrator::up(&db, None)
        .await
        .expect("apply migrations");
    db
}

pub async fn seeded_store() -> (DatabaseConnection, Seeded) {
    let db = empty_store().await;
    let seeded = seed::populate(&db)
        .await
        .expect("load sample data")
        .expect("store starts empty");
    (db, seeded)
}

pub fn venue(name: &str, city: &str, state: &str) -> VenueInput {
    VenueInput {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: "1 Main Street".to_string(),
        phone: "555-0100".to_string(),
        genres: vec!["Jazz".to_string()],
        ..Default::default()
    }
}
