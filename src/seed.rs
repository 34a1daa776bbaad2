//! Sample directory used by the `seed` command and by the test-suite.

use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait, TransactionTrait};
use time::macros::datetime;

use crate::error::StoreError;
use crate::input::{ArtistInput, ShowInput, VenueInput};
use crate::mutation;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Seeded {
    pub venues: Vec<i32>,
    pub artists: Vec<i32>,
    pub shows: Vec<i32>,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn venues() -> Vec<VenueInput> {
    vec![
        VenueInput {
            name: "The Musical Hop".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: "123-123-1234".to_string(),
            genres: strings(&["Jazz", "Reggae", "Swing", "Classical", "Folk"]),
            facebook_link: "https://www.facebook.com/TheMusicalHop".to_string(),
            image_link: "https://images.unsplash.com/photo-1543900694-133f37abaaa5".to_string(),
            website_link: "https://www.themusicalhop.com".to_string(),
            seeking_talent: true,
            seeking_description: Some(
                "We are on the lookout for a local artist to play every two weeks. Please call us."
                    .to_string(),
            ),
        },
        VenueInput {
            name: "The Dueling Pianos Bar".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            address: "335 Delancey Street".to_string(),
            phone: "914-003-1132".to_string(),
            genres: strings(&["Classical", "R&B", "Hip-Hop"]),
            facebook_link: "https://www.facebook.com/theduelingpianos".to_string(),
            image_link: "https://images.unsplash.com/photo-1497032205916-ac775f0649ae".to_string(),
            website_link: "https://www.theduelingpianos.com".to_string(),
            seeking_talent: false,
            seeking_description: None,
        },
        VenueInput {
            name: "Park Square Live Music & Coffee".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "34 Whiskey Moore Ave".to_string(),
            phone: "415-000-1234".to_string(),
            genres: strings(&["Rock n Roll", "Jazz", "Classical", "Folk"]),
            facebook_link: "https://www.facebook.com/ParkSquareLiveMusicAndCoffee".to_string(),
            image_link: "https://images.unsplash.com/photo-1485686531765-ba63b07845a7".to_string(),
            website_link: "https://www.parksquarelivemusicandcoffee.com".to_string(),
            seeking_talent: false,
            seeking_description: None,
        },
    ]
}

pub fn artists() -> Vec<ArtistInput> {
    vec![
        ArtistInput {
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "326-123-5000".to_string(),
            genres: strings(&["Rock n Roll"]),
            image_link: Some(
                "https://images.unsplash.com/photo-1549213783-8284d0336c4f".to_string(),
            ),
            facebook_link: Some("https://www.facebook.com/GunsNPetals".to_string()),
            website_link: Some("https://www.gunsnpetalsband.com".to_string()),
            seeking_venue: true,
            seeking_description: Some(
                "Looking for shows to perform at in the San Francisco Bay Area!".to_string(),
            ),
        },
        ArtistInput {
            name: "Matt Quevado".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            phone: "300-400-5000".to_string(),
            genres: strings(&["Jazz"]),
            image_link: Some(
                "https://images.unsplash.com/photo-1495223153807-b916f75de8c5".to_string(),
            ),
            facebook_link: Some("https://www.facebook.com/mattquevedo923251523".to_string()),
            website_link: None,
            seeking_venue: false,
            seeking_description: None,
        },
        ArtistInput {
            name: "The Wild Sax Band".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "432-325-5432".to_string(),
            genres: strings(&["Jazz", "Classical"]),
            image_link: Some(
                "https://images.unsplash.com/photo-1558369981-f9ca78462e61".to_string(),
            ),
            facebook_link: None,
            website_link: None,
            seeking_venue: false,
            seeking_description: None,
        },
    ]
}

/// Loads the sample directory. Does nothing when any venue already exists.
pub async fn populate<C>(db: &C) -> Result<Option<Seeded>, StoreError>
where
    C: ConnectionTrait + TransactionTrait,
{
    if entity::VenueEntity::find().count(db).await? > 0 {
        tracing::info!("Store already holds venues, skipping sample data");
        return Ok(None);
    }

    let mut seeded = Seeded::default();
    for venue in venues() {
        seeded.venues.push(mutation::create_venue(db, venue).await?.id);
    }
    for artist in artists() {
        seeded.artists.push(mutation::create_artist(db, artist).await?.id);
    }

    // (artist, venue, start) by position in the lists above
    let shows = [
        (0, 0, datetime!(2019-05-21 21:30)),
        (1, 2, datetime!(2019-06-15 23:00)),
        (2, 2, datetime!(2035-04-01 20:00)),
        (2, 2, datetime!(2035-04-08 20:00)),
        (2, 2, datetime!(2035-04-15 20:00)),
    ];
    for (artist, venue, start_time) in shows {
        let show = ShowInput {
            artist_id: seeded.artists[artist],
            venue_id: seeded.venues[venue],
            start_time,
        };
        seeded.shows.push(mutation::create_show(db, show).await?.id);
    }
    tracing::info!(
        venues = seeded.venues.len(),
        artists = seeded.artists.len(),
        shows = seeded.shows.len(),
        "Loaded sample data"
    );
    Ok(Some(seeded))
}
