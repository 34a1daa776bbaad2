//! Write side. Every operation runs in its own transaction: it either commits
//! all of its writes or rolls back and reports a [`StoreError`].

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseTransaction, EntityTrait, NotSet,
    QueryFilter, Set, TransactionTrait, Unchanged,
};

use crate::error::{EntityKind, StoreError};
use crate::input::{ArtistInput, ShowInput, VenueInput};
use crate::query::{find_artist, find_venue};

/// Outcome of a delete. Deleting an absent id is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deleted {
    pub found: bool,
    pub shows: u64,
}

async fn finish<T>(
    tx: DatabaseTransaction,
    kind: EntityKind,
    operation: &'static str,
    result: Result<T, StoreError>,
) -> Result<T, StoreError> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            tracing::warn!(entity = %kind, operation, error = %err, "Rolling back transaction");
            if let Err(e) = tx.rollback().await {
                tracing::error!(entity = %kind, operation, error = %e, "Could not roll back transaction");
            }
            Err(err)
        }
    }
}

fn venue_active(input: VenueInput, id: ActiveValue<i32>) -> entity::VenueActive {
    entity::VenueActive {
        id,
        name: Set(input.name),
        city: Set(input.city),
        state: Set(input.state),
        address: Set(input.address),
        phone: Set(input.phone),
        genres: Set(input.genres.into()),
        facebook_link: Set(input.facebook_link),
        image_link: Set(input.image_link),
        website_link: Set(input.website_link),
        seeking_talent: Set(input.seeking_talent),
        seeking_description: Set(input.seeking_description),
    }
}

fn artist_active(input: ArtistInput, id: ActiveValue<i32>) -> entity::ArtistActive {
    entity::ArtistActive {
        id,
        name: Set(input.name),
        city: Set(input.city),
        state: Set(input.state),
        phone: Set(input.phone),
        genres: Set(input.genres.into()),
        image_link: Set(input.image_link),
        facebook_link: Set(input.facebook_link),
        website_link: Set(input.website_link),
        seeking_venue: Set(input.seeking_venue),
        seeking_description: Set(input.seeking_description),
    }
}

pub async fn create_venue<C>(db: &C, input: VenueInput) -> Result<entity::Venue, StoreError>
where
    C: TransactionTrait,
{
    let tx = db.begin().await?;
    let result: Result<_, StoreError> = async {
        input.validate()?;
        Ok(venue_active(input, NotSet).insert(&tx).await?)
    }
    .await;
    let venue = finish(tx, EntityKind::Venue, "create", result).await?;
    tracing::info!(id = venue.id, name = %venue.name, "Listed venue");
    Ok(venue)
}

pub async fn create_artist<C>(db: &C, input: ArtistInput) -> Result<entity::Artist, StoreError>
where
    C: TransactionTrait,
{
    let tx = db.begin().await?;
    let result: Result<_, StoreError> = async {
        input.validate()?;
        Ok(artist_active(input, NotSet).insert(&tx).await?)
    }
    .await;
    let artist = finish(tx, EntityKind::Artist, "create", result).await?;
    tracing::info!(id = artist.id, name = %artist.name, "Listed artist");
    Ok(artist)
}

pub async fn create_show<C>(db: &C, input: ShowInput) -> Result<entity::Show, StoreError>
where
    C: TransactionTrait,
{
    let tx = db.begin().await?;
    let result: Result<_, StoreError> = async {
        if entity::ArtistEntity::find_by_id(input.artist_id)
            .one(&tx)
            .await?
            .is_none()
        {
            return Err(StoreError::ConstraintViolation(format!(
                "artist {} does not exist",
                input.artist_id
            )));
        }
        if entity::VenueEntity::find_by_id(input.venue_id)
            .one(&tx)
            .await?
            .is_none()
        {
            return Err(StoreError::ConstraintViolation(format!(
                "venue {} does not exist",
                input.venue_id
            )));
        }
        let show = entity::ShowActive {
            id: NotSet,
            artist_id: Set(input.artist_id),
            venue_id: Set(input.venue_id),
            start_time: Set(input.start_time),
        };
        Ok(show.insert(&tx).await?)
    }
    .await;
    let show = finish(tx, EntityKind::Show, "create", result).await?;
    tracing::info!(
        id = show.id,
        artist = show.artist_id,
        venue = show.venue_id,
        "Listed show"
    );
    Ok(show)
}

/// Overwrites every field of the venue.
pub async fn update_venue<C>(
    db: &C,
    id: i32,
    input: VenueInput,
) -> Result<entity::Venue, StoreError>
where
    C: TransactionTrait,
{
    let tx = db.begin().await?;
    let result: Result<_, StoreError> = async {
        find_venue(&tx, id).await?;
        input.validate()?;
        Ok(venue_active(input, Unchanged(id)).update(&tx).await?)
    }
    .await;
    let venue = finish(tx, EntityKind::Venue, "update", result).await?;
    tracing::info!(id, "Updated venue");
    Ok(venue)
}

/// Overwrites every field of the artist.
pub async fn update_artist<C>(
    db: &C,
    id: i32,
    input: ArtistInput,
) -> Result<entity::Artist, StoreError>
where
    C: TransactionTrait,
{
    let tx = db.begin().await?;
    let result: Result<_, StoreError> = async {
        find_artist(&tx, id).await?;
        input.validate()?;
        Ok(artist_active(input, Unchanged(id)).update(&tx).await?)
    }
    .await;
    let artist = finish(tx, EntityKind::Artist, "update", result).await?;
    tracing::info!(id, "Updated artist");
    Ok(artist)
}

/// Removes the venue together with every show held there.
pub async fn delete_venue<C>(db: &C, id: i32) -> Result<Deleted, StoreError>
where
    C: TransactionTrait,
{
    let tx = db.begin().await?;
    let result: Result<_, StoreError> = async {
        let shows = entity::ShowEntity::delete_many()
            .filter(entity::ShowColumn::VenueId.eq(id))
            .exec(&tx)
            .await?
            .rows_affected;
        let venues = entity::VenueEntity::delete_by_id(id)
            .exec(&tx)
            .await?
            .rows_affected;
        Ok(Deleted {
            found: venues > 0,
            shows,
        })
    }
    .await;
    let deleted = finish(tx, EntityKind::Venue, "delete", result).await?;
    tracing::info!(id, found = deleted.found, shows = deleted.shows, "Deleted venue");
    Ok(deleted)
}

/// Removes the artist together with every show they play.
pub async fn delete_artist<C>(db: &C, id: i32) -> Result<Deleted, StoreError>
where
    C: TransactionTrait,
{
    let tx = db.begin().await?;
    let result: Result<_, StoreError> = async {
        let shows = entity::ShowEntity::delete_many()
            .filter(entity::ShowColumn::ArtistId.eq(id))
            .exec(&tx)
            .await?
            .rows_affected;
        let artists = entity::ArtistEntity::delete_by_id(id)
            .exec(&tx)
            .await?
            .rows_affected;
        Ok(Deleted {
            found: artists > 0,
            shows,
        })
    }
    .await;
    let deleted = finish(tx, EntityKind::Artist, "delete", result).await?;
    tracing::info!(id, found = deleted.found, shows = deleted.shows, "Deleted artist");
    Ok(deleted)
}
