use sea_orm_migration::prelude::*;

use super::m20221010_000001_init::{Show, Venue};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx-show-artist_id")
                    .table(Show::Table)
                    .col(Show::ArtistId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx-show-venue_id")
                    .table(Show::Table)
                    .col(Show::VenueId)
                    .to_owned(),
            )
            .await?;
        // location listing groups by (state, city)
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx-venue-state-city")
                    .table(Venue::Table)
                    .col(Venue::State)
                    .col(Venue::City)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table) in [
            ("idx-venue-state-city", Venue::Table.into_iden()),
            ("idx-show-venue_id", Show::Table.into_iden()),
            ("idx-show-artist_id", Show::Table.into_iden()),
        ] {
            manager
                .drop_index(Index::drop().name(name).table(table).to_owned())
                .await?;
        }
        Ok(())
    }
}
