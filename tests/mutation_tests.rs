mod common;

use booking::{
    input::{ShowInput, VenueInput},
    mutation::{self, Deleted},
    query, seed, EntityKind, StoreError,
};
use time::macros::datetime;

fn musical_hop() -> VenueInput {
    VenueInput {
        name: "The Musical Hop".to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        address: "1015 Folsom St".to_string(),
        phone: "123-123-1234".to_string(),
        genres: vec!["Jazz".to_string(), "Reggae".to_string()],
        facebook_link: "https://www.facebook.com/TheMusicalHop".to_string(),
        image_link: "https://images.unsplash.com/photo-1543900694".to_string(),
        website_link: "https://www.themusicalhop.com".to_string(),
        seeking_talent: true,
        seeking_description: Some("Looking for a local artist".to_string()),
    }
}

#[tokio::test]
async fn created_venue_reads_back() {
    let db = common::empty_store().await;
    let venue = mutation::create_venue(&db, musical_hop()).await.unwrap();

    let detail = query::venue_detail(&db, venue.id, datetime!(2024-01-01 00:00))
        .await
        .unwrap();
    assert_eq!(detail.id, venue.id);
    assert_eq!(detail.name, "The Musical Hop");
    assert_eq!(detail.address, "1015 Folsom St");
    assert_eq!(detail.genres, vec!["Jazz", "Reggae"]);
    assert!(detail.seeking_talent);
    assert_eq!(
        detail.seeking_description.as_deref(),
        Some("Looking for a local artist")
    );
    assert!(detail.past_shows.is_empty());
    assert!(detail.upcoming_shows.is_empty());
}

#[tokio::test]
async fn invalid_venue_is_not_stored() {
    let db = common::empty_store().await;
    let mut input = musical_hop();
    input.genres.clear();

    assert!(matches!(
        mutation::create_venue(&db, input).await,
        Err(StoreError::ConstraintViolation(_))
    ));
    assert!(query::venues_by_location(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn update_overwrites_every_field() {
    let (db, seeded) = common::seeded_store().await;
    let id = seeded.venues[1];
    let mut input = query::venue_form(&db, id).await.unwrap().fields;
    input.name = "The Dueling Pianos".to_string();
    input.seeking_talent = true;
    input.seeking_description = None;

    let updated = mutation::update_venue(&db, id, input.clone()).await.unwrap();
    assert_eq!(updated.id, id);
    assert_eq!(query::venue_form(&db, id).await.unwrap().fields, input);
}

#[tokio::test]
async fn update_of_absent_venue_is_not_found() {
    let db = common::empty_store().await;
    assert!(matches!(
        mutation::update_venue(&db, 42, musical_hop()).await,
        Err(StoreError::NotFound(EntityKind::Venue, 42))
    ));
}

#[tokio::test]
async fn rejected_update_keeps_stored_fields() {
    let (db, seeded) = common::seeded_store().await;
    let id = seeded.artists[0];
    let before = query::artist_form(&db, id).await.unwrap();
    let mut input = before.fields.clone();
    input.name = "  ".to_string();

    assert!(matches!(
        mutation::update_artist(&db, id, input).await,
        Err(StoreError::ConstraintViolation(_))
    ));
    assert_eq!(query::artist_form(&db, id).await.unwrap(), before);
}

#[tokio::test]
async fn deleting_a_venue_removes_its_shows() {
    let (db, seeded) = common::seeded_store().await;
    let deleted = mutation::delete_venue(&db, seeded.venues[2]).await.unwrap();
    assert_eq!(
        deleted,
        Deleted {
            found: true,
            shows: 4
        }
    );

    assert!(matches!(
        query::find_show(&db, seeded.shows[1]).await,
        Err(StoreError::NotFound(EntityKind::Show, _))
    ));
    assert_eq!(query::shows(&db).await.unwrap().len(), 1);
    let sax = query::artist_detail(&db, seeded.artists[2], datetime!(2024-01-01 00:00))
        .await
        .unwrap();
    assert_eq!(sax.upcoming_shows_count, 0);
}

#[tokio::test]
async fn deleting_an_artist_removes_their_shows() {
    let (db, seeded) = common::seeded_store().await;
    let deleted = mutation::delete_artist(&db, seeded.artists[0]).await.unwrap();
    assert_eq!(deleted.shows, 1);
    assert!(deleted.found);

    let hop = query::venue_detail(&db, seeded.venues[0], datetime!(2024-01-01 00:00))
        .await
        .unwrap();
    assert_eq!(hop.past_shows_count, 0);
    assert_eq!(query::shows(&db).await.unwrap().len(), 4);
}

#[tokio::test]
async fn deleting_twice_is_harmless() {
    let (db, seeded) = common::seeded_store().await;
    let id = seeded.venues[1];
    assert!(mutation::delete_venue(&db, id).await.unwrap().found);
    assert_eq!(
        mutation::delete_venue(&db, id).await.unwrap(),
        Deleted {
            found: false,
            shows: 0
        }
    );
    assert_eq!(query::venues_by_location(&db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn show_with_missing_artist_is_rejected() {
    let (db, seeded) = common::seeded_store().await;
    let input = ShowInput {
        artist_id: 9999,
        venue_id: seeded.venues[0],
        start_time: datetime!(2036-01-01 20:00),
    };

    match mutation::create_show(&db, input).await {
        Err(StoreError::ConstraintViolation(msg)) => assert!(msg.contains("artist 9999")),
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(query::shows(&db).await.unwrap().len(), 5);
}

#[tokio::test]
async fn show_with_missing_venue_is_rejected() {
    let (db, seeded) = common::seeded_store().await;
    let input = ShowInput {
        artist_id: seeded.artists[0],
        venue_id: 9999,
        start_time: datetime!(2036-01-01 20:00),
    };

    match mutation::create_show(&db, input).await {
        Err(StoreError::ConstraintViolation(msg)) => assert!(msg.contains("venue 9999")),
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(query::shows(&db).await.unwrap().len(), 5);
}

#[tokio::test]
async fn new_show_joins_the_listing() {
    let (db, seeded) = common::seeded_store().await;
    let show = mutation::create_show(
        &db,
        ShowInput {
            artist_id: seeded.artists[1],
            venue_id: seeded.venues[1],
            start_time: datetime!(2036-01-01 20:00),
        },
    )
    .await
    .unwrap();

    assert_eq!(query::find_show(&db, show.id).await.unwrap(), show);
    let shows = query::shows(&db).await.unwrap();
    assert_eq!(shows.len(), 6);
    assert_eq!(shows[5].venue_name, "The Dueling Pianos Bar");
    assert_eq!(shows[5].artist_name, "Matt Quevado");
}

#[tokio::test]
async fn sample_data_loads_once() {
    let (db, _) = common::seeded_store().await;
    assert!(seed::populate(&db).await.unwrap().is_none());
    assert_eq!(query::artists(&db).await.unwrap().len(), 3);
}
