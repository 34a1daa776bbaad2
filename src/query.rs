//! Read side: derives view-models from the stored venues, artists and shows.

use itertools::Itertools;
use sea_orm::{ConnectionTrait, EntityTrait, LoaderTrait, ModelTrait, QueryOrder, QuerySelect};
use time::PrimitiveDateTime;

use crate::error::{EntityKind, StoreError};
use crate::input::{ArtistInput, VenueInput};
use crate::view::{
    self, ArtistDetail, Editable, LocationGroup, SearchResults, ShowListing, Summary, VenueDetail,
};

pub async fn find_venue<C>(db: &C, id: i32) -> Result<entity::Venue, StoreError>
where
    C: ConnectionTrait,
{
    entity::VenueEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(StoreError::NotFound(EntityKind::Venue, id))
}

pub async fn find_artist<C>(db: &C, id: i32) -> Result<entity::Artist, StoreError>
where
    C: ConnectionTrait,
{
    entity::ArtistEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(StoreError::NotFound(EntityKind::Artist, id))
}

pub async fn find_show<C>(db: &C, id: i32) -> Result<entity::Show, StoreError>
where
    C: ConnectionTrait,
{
    entity::ShowEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(StoreError::NotFound(EntityKind::Show, id))
}

/// Shows held at a venue, earliest first.
pub async fn venue_shows<C>(db: &C, venue: &entity::Venue) -> Result<Vec<entity::Show>, StoreError>
where
    C: ConnectionTrait,
{
    Ok(venue
        .find_related(entity::ShowEntity)
        .order_by_asc(entity::ShowColumn::StartTime)
        .order_by_asc(entity::ShowColumn::Id)
        .all(db)
        .await?)
}

/// Shows played by an artist, earliest first.
pub async fn artist_shows<C>(
    db: &C,
    artist: &entity::Artist,
) -> Result<Vec<entity::Show>, StoreError>
where
    C: ConnectionTrait,
{
    Ok(artist
        .find_related(entity::ShowEntity)
        .order_by_asc(entity::ShowColumn::StartTime)
        .order_by_asc(entity::ShowColumn::Id)
        .all(db)
        .await?)
}

pub async fn venues_by_location<C>(db: &C) -> Result<Vec<LocationGroup>, StoreError>
where
    C: ConnectionTrait,
{
    let venues = entity::VenueEntity::find()
        .select_only()
        .column(entity::VenueColumn::Id)
        .column(entity::VenueColumn::Name)
        .column(entity::VenueColumn::City)
        .column(entity::VenueColumn::State)
        .order_by_asc(entity::VenueColumn::State)
        .order_by_asc(entity::VenueColumn::City)
        .order_by_asc(entity::VenueColumn::Id)
        .into_tuple::<(i32, String, String, String)>()
        .all(db)
        .await?;

    // rows are sorted by (state, city) so each location is one contiguous run
    let locations = venues
        .into_iter()
        .group_by(|(_, _, city, state)| (city.to_owned(), state.to_owned()));
    let groups = locations
        .into_iter()
        .map(|((city, state), members)| LocationGroup {
            city,
            state,
            venues: members
                .map(|(id, name, _, _)| Summary { id, name })
                .collect(),
        })
        .collect::<Vec<_>>();
    tracing::trace!(groups = groups.len(), "Grouped venues by location");
    Ok(groups)
}

/// Unicode case-insensitive substring match. Folding happens here rather than
/// in SQL, where `lower()` only folds ASCII on SQLite.
fn name_matches(term: &str) -> impl Fn(&(i32, String)) -> bool {
    let term = term.to_lowercase();
    move |(_, name)| name.to_lowercase().contains(&term)
}

pub async fn search_venues<C>(db: &C, term: &str) -> Result<SearchResults, StoreError>
where
    C: ConnectionTrait,
{
    let venues = entity::VenueEntity::find()
        .select_only()
        .column(entity::VenueColumn::Id)
        .column(entity::VenueColumn::Name)
        .order_by_asc(entity::VenueColumn::Id)
        .into_tuple::<(i32, String)>()
        .all(db)
        .await?;
    let matches = venues
        .into_iter()
        .filter(name_matches(term))
        .map(|(id, name)| Summary { id, name })
        .collect::<Vec<_>>();
    tracing::debug!(%term, count = matches.len(), "Searched venues");
    Ok(matches.into())
}

pub async fn search_artists<C>(db: &C, term: &str) -> Result<SearchResults, StoreError>
where
    C: ConnectionTrait,
{
    let artists = entity::ArtistEntity::find()
        .select_only()
        .column(entity::ArtistColumn::Id)
        .column(entity::ArtistColumn::Name)
        .order_by_asc(entity::ArtistColumn::Id)
        .into_tuple::<(i32, String)>()
        .all(db)
        .await?;
    let matches = artists
        .into_iter()
        .filter(name_matches(term))
        .map(|(id, name)| Summary { id, name })
        .collect::<Vec<_>>();
    tracing::debug!(%term, count = matches.len(), "Searched artists");
    Ok(matches.into())
}

pub async fn artists<C>(db: &C) -> Result<Vec<Summary>, StoreError>
where
    C: ConnectionTrait,
{
    let artists = entity::ArtistEntity::find()
        .select_only()
        .column(entity::ArtistColumn::Id)
        .column(entity::ArtistColumn::Name)
        .order_by_asc(entity::ArtistColumn::Id)
        .into_tuple::<(i32, String)>()
        .all(db)
        .await?;
    Ok(artists
        .into_iter()
        .map(|(id, name)| Summary { id, name })
        .collect())
}

pub async fn venue_detail<C>(
    db: &C,
    id: i32,
    now: PrimitiveDateTime,
) -> Result<VenueDetail, StoreError>
where
    C: ConnectionTrait,
{
    let venue = find_venue(db, id).await?;
    let shows = venue_shows(db, &venue).await?;
    let artists = shows.load_one(entity::ArtistEntity, db).await?;
    let (past, upcoming) = view::partition(
        shows
            .iter()
            .zip(artists.iter())
            .filter_map(|(show, artist)| {
                artist
                    .as_ref()
                    .map(|artist| (show.start_time, view::venue_show(show, artist)))
            }),
        now,
    );
    Ok(view::venue_detail(venue, past, upcoming))
}

pub async fn artist_detail<C>(
    db: &C,
    id: i32,
    now: PrimitiveDateTime,
) -> Result<ArtistDetail, StoreError>
where
    C: ConnectionTrait,
{
    let artist = find_artist(db, id).await?;
    let shows = artist_shows(db, &artist).await?;
    let venues = shows.load_one(entity::VenueEntity, db).await?;
    let (past, upcoming) = view::partition(
        shows
            .iter()
            .zip(venues.iter())
            .filter_map(|(show, venue)| {
                venue
                    .as_ref()
                    .map(|venue| (show.start_time, view::artist_show(show, venue)))
            }),
        now,
    );
    Ok(view::artist_detail(artist, past, upcoming))
}

pub async fn shows<C>(db: &C) -> Result<Vec<ShowListing>, StoreError>
where
    C: ConnectionTrait,
{
    let shows = entity::ShowEntity::find()
        .order_by_asc(entity::ShowColumn::StartTime)
        .order_by_asc(entity::ShowColumn::Id)
        .all(db)
        .await?;
    let venues = shows.load_one(entity::VenueEntity, db).await?;
    let artists = shows.load_one(entity::ArtistEntity, db).await?;

    let mut listing = Vec::with_capacity(shows.len());
    for ((show, venue), artist) in shows.iter().zip(venues).zip(artists) {
        match (venue, artist) {
            (Some(venue), Some(artist)) => listing.push(ShowListing {
                venue_id: venue.id,
                venue_name: venue.name,
                artist_id: artist.id,
                artist_name: artist.name,
                artist_image_link: artist.image_link,
                start_time: view::listing_time(show.start_time),
            }),
            _ => tracing::warn!(show = show.id, "Show references a missing artist or venue"),
        }
    }
    Ok(listing)
}

pub async fn venue_form<C>(db: &C, id: i32) -> Result<Editable<VenueInput>, StoreError>
where
    C: ConnectionTrait,
{
    Ok(view::venue_fields(find_venue(db, id).await?))
}

pub async fn artist_form<C>(db: &C, id: i32) -> Result<Editable<ArtistInput>, StoreError>
where
    C: ConnectionTrait,
{
    Ok(view::artist_fields(find_artist(db, id).await?))
}
