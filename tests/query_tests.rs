mod common;

use booking::{mutation, query, EntityKind, StoreError};
use time::macros::datetime;

#[tokio::test]
async fn venues_are_grouped_by_location() {
    let (db, seeded) = common::seeded_store().await;
    let groups = query::venues_by_location(&db).await.unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].city, "San Francisco");
    assert_eq!(groups[0].state, "CA");
    let ids: Vec<i32> = groups[0].venues.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![seeded.venues[0], seeded.venues[2]]);

    assert_eq!(groups[1].city, "New York");
    assert_eq!(groups[1].state, "NY");
    assert_eq!(groups[1].venues.len(), 1);
    assert_eq!(groups[1].venues[0].name, "The Dueling Pianos Bar");
}

#[tokio::test]
async fn empty_store_has_no_groups() {
    let db = common::empty_store().await;
    assert!(query::venues_by_location(&db).await.unwrap().is_empty());
    assert!(query::artists(&db).await.unwrap().is_empty());
    assert!(query::shows(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn venue_search_is_case_insensitive_substring() {
    let (db, _) = common::seeded_store().await;

    let hop = query::search_venues(&db, "Hop").await.unwrap();
    assert_eq!(hop.count, 1);
    assert_eq!(hop.data[0].name, "The Musical Hop");

    let music = query::search_venues(&db, "Music").await.unwrap();
    let names: Vec<&str> = music.data.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["The Musical Hop", "Park Square Live Music & Coffee"]);
    assert_eq!(music.count, 2);

    let coffee = query::search_venues(&db, "MUSIC & coffee").await.unwrap();
    assert_eq!(coffee.count, 1);
}

#[tokio::test]
async fn artist_search_examples() {
    let (db, _) = common::seeded_store().await;

    let a = query::search_artists(&db, "A").await.unwrap();
    let names: Vec<&str> = a.data.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Guns N Petals", "Matt Quevado", "The Wild Sax Band"]);

    let band = query::search_artists(&db, "band").await.unwrap();
    assert_eq!(band.count, 1);
    assert_eq!(band.data[0].name, "The Wild Sax Band");

    let none = query::search_artists(&db, "zzz").await.unwrap();
    assert_eq!(none.count, 0);
    assert!(none.data.is_empty());
}

#[tokio::test]
async fn empty_term_matches_everything() {
    let (db, _) = common::seeded_store().await;
    assert_eq!(query::search_venues(&db, "").await.unwrap().count, 3);
    assert_eq!(query::search_artists(&db, "").await.unwrap().count, 3);
}

#[tokio::test]
async fn wildcards_in_the_term_match_literally() {
    let (db, _) = common::seeded_store().await;
    assert_eq!(query::search_venues(&db, "%").await.unwrap().count, 0);
    assert_eq!(query::search_venues(&db, "_").await.unwrap().count, 0);
    assert_eq!(query::search_artists(&db, "!").await.unwrap().count, 0);
}

#[tokio::test]
async fn venue_detail_partitions_shows() {
    let (db, seeded) = common::seeded_store().await;
    let now = datetime!(2024-01-01 00:00);
    let park_square = query::venue_detail(&db, seeded.venues[2], now)
        .await
        .unwrap();

    assert_eq!(park_square.name, "Park Square Live Music & Coffee");
    assert_eq!(park_square.past_shows_count, 1);
    assert_eq!(park_square.upcoming_shows_count, 3);
    assert_eq!(park_square.past_shows[0].artist_name, "Matt Quevado");
    assert_eq!(park_square.past_shows[0].start_time, "06/15/2019, 23:00");
    let upcoming: Vec<&str> = park_square
        .upcoming_shows
        .iter()
        .map(|s| s.start_time.as_str())
        .collect();
    assert_eq!(
        upcoming,
        vec!["04/01/2035, 20:00", "04/08/2035, 20:00", "04/15/2035, 20:00"]
    );
    assert!(park_square
        .upcoming_shows
        .iter()
        .all(|s| s.artist_id == seeded.artists[2]));
}

#[tokio::test]
async fn show_at_now_is_past() {
    let (db, seeded) = common::seeded_store().await;
    let hop = query::venue_detail(&db, seeded.venues[0], datetime!(2019-05-21 21:30))
        .await
        .unwrap();
    assert_eq!(hop.past_shows_count, 1);
    assert_eq!(hop.upcoming_shows_count, 0);
}

#[tokio::test]
async fn venue_without_shows_has_empty_lists() {
    let (db, seeded) = common::seeded_store().await;
    let pianos = query::venue_detail(&db, seeded.venues[1], datetime!(2024-01-01 00:00))
        .await
        .unwrap();
    assert!(pianos.past_shows.is_empty());
    assert!(pianos.upcoming_shows.is_empty());
    assert_eq!(pianos.genres, vec!["Classical", "R&B", "Hip-Hop"]);
    assert!(!pianos.seeking_talent);
}

#[tokio::test]
async fn artist_detail_uses_the_venue_as_counterpart() {
    let (db, seeded) = common::seeded_store().await;
    let sax = query::artist_detail(&db, seeded.artists[2], datetime!(2024-01-01 00:00))
        .await
        .unwrap();

    assert_eq!(sax.name, "The Wild Sax Band");
    assert_eq!(sax.past_shows_count, 0);
    assert_eq!(sax.upcoming_shows_count, 3);
    let show = &sax.upcoming_shows[0];
    assert_eq!(show.venue_id, seeded.venues[2]);
    assert_eq!(show.venue_name, "Park Square Live Music & Coffee");
    assert!(show.venue_image_link.starts_with("https://"));
}

#[tokio::test]
async fn every_show_is_listed() {
    let (db, seeded) = common::seeded_store().await;
    let shows = query::shows(&db).await.unwrap();

    assert_eq!(shows.len(), 5);
    assert_eq!(shows[0].venue_name, "The Musical Hop");
    assert_eq!(shows[0].artist_name, "Guns N Petals");
    assert_eq!(shows[0].start_time, "2019-05-21 21:30:00");
    assert_eq!(shows[4].artist_id, seeded.artists[2]);
    assert_eq!(shows[4].start_time, "2035-04-15 20:00:00");
}

#[tokio::test]
async fn absent_ids_are_not_found() {
    let (db, _) = common::seeded_store().await;
    let now = datetime!(2024-01-01 00:00);

    assert!(matches!(
        query::venue_detail(&db, 9999, now).await,
        Err(StoreError::NotFound(EntityKind::Venue, 9999))
    ));
    assert!(matches!(
        query::artist_detail(&db, 9999, now).await,
        Err(StoreError::NotFound(EntityKind::Artist, 9999))
    ));
    assert!(matches!(
        query::artist_form(&db, 9999).await,
        Err(StoreError::NotFound(EntityKind::Artist, 9999))
    ));
}

#[tokio::test]
async fn edit_form_holds_stored_fields() {
    let (db, seeded) = common::seeded_store().await;
    let form = query::venue_form(&db, seeded.venues[0]).await.unwrap();
    assert_eq!(form.id, seeded.venues[0]);
    assert_eq!(form.fields.name, "The Musical Hop");
    assert_eq!(form.fields.address, "1015 Folsom Street");
    assert!(form.fields.seeking_talent);
    assert_eq!(
        form.fields.genres,
        vec!["Jazz", "Reggae", "Swing", "Classical", "Folk"]
    );
}

#[tokio::test]
async fn location_keys_are_case_sensitive_pairs() {
    let db = common::empty_store().await;
    for (name, city, state) in [
        ("Upper", "San Francisco", "CA"),
        ("Lower", "san francisco", "CA"),
        ("Illinois Hall", "Springfield", "IL"),
        ("Bay State Room", "Springfield", "MA"),
        ("Upper Annex", "San Francisco", "CA"),
    ] {
        mutation::create_venue(&db, common::venue(name, city, state))
            .await
            .unwrap();
    }

    let groups = query::venues_by_location(&db).await.unwrap();
    let keys: Vec<(&str, &str)> = groups
        .iter()
        .map(|g| (g.city.as_str(), g.state.as_str()))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("San Francisco", "CA"),
            ("san francisco", "CA"),
            ("Springfield", "IL"),
            ("Springfield", "MA"),
        ]
    );
    let names: Vec<&str> = groups[0].venues.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Upper", "Upper Annex"]);
    let total: usize = groups.iter().map(|g| g.venues.len()).sum();
    assert_eq!(total, 5);
}

#[tokio::test]
async fn search_folds_non_ascii_letters() {
    let db = common::empty_store().await;
    for (name, city) in [("Ébène Club", "Paris"), ("Ölhafen", "Hamburg")] {
        mutation::create_venue(&db, common::venue(name, city, "XX"))
            .await
            .unwrap();
    }

    for term in ["Ébène Club", "Ébène", "ÉBÈNE", "ébène", "bène"] {
        let found = query::search_venues(&db, term).await.unwrap();
        assert_eq!(found.count, 1, "term {:?}", term);
        assert_eq!(found.data[0].name, "Ébène Club");
    }
    let found = query::search_venues(&db, "ölhafen").await.unwrap();
    assert_eq!(found.count, 1);
    assert_eq!(found.data[0].name, "Ölhafen");
}
