use sea_orm_migration::prelude::*;

mod m20221010_000001_init;
mod m20221017_000001_lookup_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20221010_000001_init::Migration),
            Box::new(m20221017_000001_lookup_indexes::Migration),
        ]
    }
}
