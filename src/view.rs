//! Plain structures handed to the presentation layer.
//!
//! Every entity is converted by an explicit function that lists the exposed
//! fields one by one, so adding a column never leaks it into a response.

use serde::Serialize;
use time::{
    format_description::FormatItem, macros::format_description, OffsetDateTime,
    PrimitiveDateTime,
};

use crate::input::{ArtistInput, VenueInput};

static SHOW_TIME: &[FormatItem<'static>] =
    format_description!("[month]/[day]/[year], [hour]:[minute]");
static LISTING_TIME: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<Summary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<Summary>,
}

impl From<Vec<Summary>> for SearchResults {
    fn from(data: Vec<Summary>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// A show as seen from a venue page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueShow {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

/// A show as seen from an artist page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistShow {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: String,
    pub start_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueDetail {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website_link: String,
    pub facebook_link: String,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: String,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistDetail {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowListing {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

/// Stored values of a record, used to pre-fill its edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Editable<T> {
    pub id: i32,
    #[serde(flatten)]
    pub fields: T,
}

/// Past shows first, upcoming second. A show starting exactly at `now` is past.
pub fn partition<T>(
    shows: impl IntoIterator<Item = (PrimitiveDateTime, T)>,
    now: PrimitiveDateTime,
) -> (Vec<T>, Vec<T>) {
    let mut past = Vec::new();
    let mut upcoming = Vec::new();
    for (start, show) in shows {
        if start <= now {
            past.push(show);
        } else {
            upcoming.push(show);
        }
    }
    (past, upcoming)
}

pub fn show_time(at: PrimitiveDateTime) -> String {
    at.format(SHOW_TIME).unwrap_or_else(|_| at.to_string())
}

pub fn listing_time(at: PrimitiveDateTime) -> String {
    at.format(LISTING_TIME).unwrap_or_else(|_| at.to_string())
}

/// Wall-clock time used as the past/upcoming boundary.
pub fn local_now() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    PrimitiveDateTime::new(now.date(), now.time())
}

pub fn venue_show(show: &entity::Show, artist: &entity::Artist) -> VenueShow {
    VenueShow {
        artist_id: artist.id,
        artist_name: artist.name.to_owned(),
        artist_image_link: artist.image_link.to_owned(),
        start_time: show_time(show.start_time),
    }
}

pub fn artist_show(show: &entity::Show, venue: &entity::Venue) -> ArtistShow {
    ArtistShow {
        venue_id: venue.id,
        venue_name: venue.name.to_owned(),
        venue_image_link: venue.image_link.to_owned(),
        start_time: show_time(show.start_time),
    }
}

pub fn venue_detail(
    venue: entity::Venue,
    past_shows: Vec<VenueShow>,
    upcoming_shows: Vec<VenueShow>,
) -> VenueDetail {
    VenueDetail {
        id: venue.id,
        name: venue.name,
        genres: venue.genres.into(),
        address: venue.address,
        city: venue.city,
        state: venue.state,
        phone: venue.phone,
        website_link: venue.website_link,
        facebook_link: venue.facebook_link,
        seeking_talent: venue.seeking_talent,
        seeking_description: venue.seeking_description,
        image_link: venue.image_link,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    }
}

pub fn artist_detail(
    artist: entity::Artist,
    past_shows: Vec<ArtistShow>,
    upcoming_shows: Vec<ArtistShow>,
) -> ArtistDetail {
    ArtistDetail {
        id: artist.id,
        name: artist.name,
        genres: artist.genres.into(),
        city: artist.city,
        state: artist.state,
        phone: artist.phone,
        website_link: artist.website_link,
        facebook_link: artist.facebook_link,
        seeking_venue: artist.seeking_venue,
        seeking_description: artist.seeking_description,
        image_link: artist.image_link,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    }
}

pub fn venue_fields(venue: entity::Venue) -> Editable<VenueInput> {
    Editable {
        id: venue.id,
        fields: VenueInput {
            name: venue.name,
            city: venue.city,
            state: venue.state,
            address: venue.address,
            phone: venue.phone,
            genres: venue.genres.into(),
            facebook_link: venue.facebook_link,
            image_link: venue.image_link,
            website_link: venue.website_link,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
        },
    }
}

pub fn artist_fields(artist: entity::Artist) -> Editable<ArtistInput> {
    Editable {
        id: artist.id,
        fields: ArtistInput {
            name: artist.name,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            genres: artist.genres.into(),
            image_link: artist.image_link,
            facebook_link: artist.facebook_link,
            website_link: artist.website_link,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
        },
    }
}
