//! Database integration tests
//!
//! Exercises the repositories against a migrated in-memory SQLite database:
//! - Transactional create/edit/delete with genre reconciliation
//! - Cascading deletes through shows and genre rows
//! - Show booking with reference and duplicate checks
//! - Name search and the grouped venue listing

use fake::{faker::company::en::CompanyName, Fake};
use pretty_assertions::assert_eq;
use sea_orm::{ConnectionTrait, EntityTrait, Set};

use fyyur::db::{
    attributes::{ArtistAttributes, VenueAttributes},
    entities::{artist, artist_genre, show, venue, venue_genre},
    enums::Tense,
};
use fyyur::error::AppError;
use fyyur::services::schedule;
use fyyur::state::AppState;
use fyyur::test_utils::*;

fn venue_attributes(name: &str) -> VenueAttributes {
    VenueAttributes {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: Some("123-123-1234".to_string()),
        seeking_talent: true,
        seeking_description: Some("We are on the lookout for a local artist.".to_string()),
        ..Default::default()
    }
}

fn artist_attributes(name: &str) -> ArtistAttributes {
    ArtistAttributes {
        name: name.to_string(),
        city: "New York".to_string(),
        state: "NY".to_string(),
        ..Default::default()
    }
}

fn genres(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

async fn seeded_state() -> (AppState, SampleDirectory) {
    let state = setup_test_app_state().await;
    let sample = seed_sample_directory(&state.db).await;
    (state, sample)
}

// ============================================================================
// Venues
// ============================================================================

#[tokio::test]
async fn test_create_venue_collapses_duplicate_genres() {
    let state = setup_test_app_state().await;

    let id = state
        .venues()
        .create(venue_attributes("The Musical Hop"), &genres(&["Jazz", "Jazz", "Reggae"]))
        .await
        .unwrap();

    let rows = venue_genre::Entity::find().all(&state.db).await.unwrap();
    assert_eq!(rows.len(), 2);

    let record = state.venues().find(id).await.unwrap();
    assert_eq!(record.get_genres(), vec!["Jazz", "Reggae"]);
    assert_eq!(record.venue.name, "The Musical Hop");
    assert!(record.venue.seeking_talent);
}

#[tokio::test]
async fn test_create_venue_with_generated_name() {
    let state = setup_test_app_state().await;
    let name: String = CompanyName().fake();

    let id = state
        .venues()
        .create(venue_attributes(&name), &[])
        .await
        .unwrap();

    let view = state
        .venues()
        .find(id)
        .await
        .unwrap()
        .format_all(schedule::now())
        .unwrap();
    assert_eq!(view.name, name);
    assert!(view.genres.is_empty());
    assert_eq!(view.past_shows_count, 0);
    assert_eq!(view.upcoming_shows_count, 0);
}

#[tokio::test]
async fn test_invalid_venue_writes_nothing() {
    let state = setup_test_app_state().await;

    let mut attributes = venue_attributes("The Musical Hop");
    attributes.city = String::new();
    let err = state
        .venues()
        .create(attributes, &genres(&["Jazz"]))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let too_long = "x".repeat(31);
    let err = state
        .venues()
        .create(venue_attributes("The Musical Hop"), &[too_long])
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    assert!(venue::Entity::find().all(&state.db).await.unwrap().is_empty());
    assert!(venue_genre::Entity::find().all(&state.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_find_missing_venue_is_not_found() {
    let state = setup_test_app_state().await;

    let err = state.venues().find(42).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_format_all_counts_past_and_upcoming() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;

    for hours in [-48, -24, 24, 48, 72] {
        create_test_show(&state.db, venue.id, artist.id, hours_from_now(hours)).await;
    }

    let view = state
        .venues()
        .find(venue.id)
        .await
        .unwrap()
        .format_all(schedule::now())
        .unwrap();

    assert_eq!(view.past_shows_count, 2);
    assert_eq!(view.upcoming_shows_count, 3);
    assert_eq!(view.past_shows.len(), 2);
    assert_eq!(view.upcoming_shows.len(), 3);
    assert_eq!(view.upcoming_shows[0].artist_name, "Guns N Petals");
}

#[tokio::test]
async fn test_show_starting_now_is_neither_past_nor_upcoming() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;
    let now = hours_from_now(0);
    create_test_show(&state.db, venue.id, artist.id, now).await;

    let record = state.venues().find(venue.id).await.unwrap();
    assert_eq!(record.shows.len(), 1);

    let view = record.format_all(now).unwrap();
    assert_eq!(view.past_shows_count, 0);
    assert_eq!(view.upcoming_shows_count, 0);
    assert!(record.get_shows(Tense::Past, now).unwrap().is_empty());
    assert!(record.get_shows(Tense::Future, now).unwrap().is_empty());
}

#[tokio::test]
async fn test_edit_venue_reconciles_genres() {
    let state = setup_test_app_state().await;
    let repo = state.venues();
    let id = repo
        .create(venue_attributes("The Musical Hop"), &genres(&["Rock", "Jazz"]))
        .await
        .unwrap();

    let mut attributes = venue_attributes("The Musical Hop");
    attributes.phone = Some("415-000-0000".to_string());
    let delta = repo
        .edit(id, attributes, &genres(&["Jazz", "Blues"]))
        .await
        .unwrap();

    assert_eq!(delta.to_keep.len(), 1);
    assert!(delta.to_keep.contains("Jazz"));
    assert_eq!(delta.to_remove.len(), 1);
    assert!(delta.to_remove.contains("Rock"));
    assert_eq!(delta.to_add.len(), 1);
    assert!(delta.to_add.contains("Blues"));

    let record = repo.find(id).await.unwrap();
    assert_eq!(record.get_genres(), vec!["Blues", "Jazz"]);
    assert_eq!(record.venue.phone.as_deref(), Some("415-000-0000"));
}

#[tokio::test]
async fn test_edit_venue_twice_is_a_noop() {
    let state = setup_test_app_state().await;
    let repo = state.venues();
    let id = repo
        .create(venue_attributes("The Musical Hop"), &genres(&["Rock"]))
        .await
        .unwrap();

    let desired = genres(&["Jazz", "Swing"]);
    let first = repo
        .edit(id, venue_attributes("The Musical Hop"), &desired)
        .await
        .unwrap();
    assert!(!first.is_noop());

    let second = repo
        .edit(id, venue_attributes("The Musical Hop"), &desired)
        .await
        .unwrap();
    assert!(second.is_noop());
    assert_eq!(second.to_keep.len(), 2);
}

#[tokio::test]
async fn test_invalid_edit_leaves_venue_untouched() {
    let state = setup_test_app_state().await;
    let repo = state.venues();
    let id = repo
        .create(venue_attributes("The Musical Hop"), &genres(&["Jazz"]))
        .await
        .unwrap();

    let err = repo
        .edit(id, venue_attributes("The Musical Hop"), &genres(&["Jazz", ""]))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = repo
        .edit(999, venue_attributes("Nowhere"), &[])
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    assert_eq!(repo.find(id).await.unwrap().get_genres(), vec!["Jazz"]);
}

#[tokio::test]
async fn test_failed_genre_insert_rolls_back_created_venue() {
    let state = setup_test_app_state().await;
    state
        .db
        .execute_unprepared("DROP TABLE venuegenre")
        .await
        .unwrap();

    let err = state
        .venues()
        .create(venue_attributes("The Musical Hop"), &genres(&["Jazz"]))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Persistence(_)));

    // The venue row was written before the genre insert failed
    assert!(venue::Entity::find().all(&state.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_genre_update_rolls_back_attribute_change() {
    let state = setup_test_app_state().await;
    let repo = state.venues();
    let id = repo
        .create(venue_attributes("The Musical Hop"), &genres(&["Jazz"]))
        .await
        .unwrap();
    state
        .db
        .execute_unprepared("DROP TABLE venuegenre")
        .await
        .unwrap();

    let mut moved = venue_attributes("The Musical Hop");
    moved.city = "Oakland".to_string();
    let err = repo
        .edit(id, moved, &genres(&["Blues"]))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Persistence(_)));

    let stored = venue::Entity::find_by_id(id)
        .one(&state.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.city, "San Francisco");
}

#[tokio::test]
async fn test_failed_artist_genre_insert_rolls_back_created_artist() {
    let state = setup_test_app_state().await;
    state
        .db
        .execute_unprepared("DROP TABLE artistgenre")
        .await
        .unwrap();

    let err = state
        .artists()
        .create(artist_attributes("Guns N Petals"), &genres(&["Rock n Roll"]))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Persistence(_)));
    assert!(artist::Entity::find().all(&state.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_venue_cascades() {
    let (state, sample) = seeded_state().await;

    let name = state.venues().delete(sample.park_square).await.unwrap();
    assert_eq!(name, "Park Square Live Music & Coffee");

    let err = state.venues().find(sample.park_square).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let shows = show::Entity::find().all(&state.db).await.unwrap();
    assert!(shows.iter().all(|s| s.venue_id != sample.park_square));
    assert_eq!(shows.len(), 1);

    // Artists that played there are untouched
    assert_eq!(artist::Entity::find().all(&state.db).await.unwrap().len(), 3);

    let err = state.venues().delete(sample.park_square).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_delete_venue_removes_genre_rows() {
    let (state, sample) = seeded_state().await;

    state.venues().delete(sample.musical_hop).await.unwrap();

    let rows = venue_genre::Entity::find().all(&state.db).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_list_grouped_venues() {
    let (state, sample) = seeded_state().await;

    let areas = state.venues().list_grouped(schedule::now()).await.unwrap();

    assert_eq!(areas.len(), 2);
    assert_eq!((areas[0].city.as_str(), areas[0].state.as_str()), ("New York", "NY"));
    assert_eq!(areas[0].venues[0].id, sample.dueling_pianos);

    let sf = &areas[1];
    assert_eq!(sf.city, "San Francisco");
    let ids: Vec<i32> = sf.venues.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![sample.musical_hop, sample.park_square]);
    assert_eq!(sf.venues[0].num_upcoming_shows, 0);
    assert_eq!(sf.venues[1].num_upcoming_shows, 3);
}

#[tokio::test]
async fn test_search_venues() {
    let (state, sample) = seeded_state().await;
    let repo = state.venues();
    let now = schedule::now();

    let hop = repo.search("Hop", now).await.unwrap();
    assert_eq!(hop.count, 1);
    assert_eq!(hop.data[0].id, sample.musical_hop);

    let music = repo.search("Music", now).await.unwrap();
    assert_eq!(music.count, 2);
    let ids: Vec<i32> = music.data.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![sample.musical_hop, sample.park_square]);
    assert_eq!(music.data[1].num_upcoming_shows, 3);

    assert_eq!(repo.search("hOP", now).await.unwrap().count, 1);
    assert_eq!(repo.search("", now).await.unwrap().count, 3);

    let none = repo.search("%", now).await.unwrap();
    assert_eq!(none.count, 0);
    assert!(none.data.is_empty());
}

#[tokio::test]
async fn test_search_folds_non_ascii_case() {
    let state = setup_test_app_state().await;
    let eclair = create_test_venue(&state.db, "ÉCLAIR Hall", "Montréal", "QC").await;
    create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    create_test_artist(&state.db, "Ólafur Arnalds").await;

    let results = state.venues().search("éclair", schedule::now()).await.unwrap();
    assert_eq!(results.count, 1);
    assert_eq!(results.data[0].id, eclair.id);

    let results = state.artists().search("óLAFUR", schedule::now()).await.unwrap();
    assert_eq!(results.count, 1);
    assert_eq!(results.data[0].name, "Ólafur Arnalds");
}

// ============================================================================
// Artists
// ============================================================================

#[tokio::test]
async fn test_artist_lifecycle() {
    let state = setup_test_app_state().await;
    let repo = state.artists();

    let id = repo
        .create(artist_attributes("Guns N Petals"), &genres(&["Rock n Roll"]))
        .await
        .unwrap();

    let mut attributes = artist_attributes("Guns N Petals");
    attributes.seeking_venue = true;
    let delta = repo
        .edit(id, attributes, &genres(&["Rock n Roll", "Blues"]))
        .await
        .unwrap();
    assert!(delta.to_remove.is_empty());
    assert!(delta.to_add.contains("Blues"));

    let record = repo.find(id).await.unwrap();
    assert!(record.artist.seeking_venue);
    assert_eq!(record.get_genres(), vec!["Blues", "Rock n Roll"]);

    assert_eq!(repo.delete(id).await.unwrap(), "Guns N Petals");
    assert!(artist_genre::Entity::find().all(&state.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_artist_detail_shows_venues() {
    let (state, sample) = seeded_state().await;

    let view = state
        .artists()
        .find(sample.wild_sax_band)
        .await
        .unwrap()
        .format_all(schedule::now())
        .unwrap();

    assert_eq!(view.upcoming_shows_count, 3);
    assert_eq!(view.past_shows_count, 0);
    assert!(view
        .upcoming_shows
        .iter()
        .all(|s| s.venue_name == "Park Square Live Music & Coffee"));
}

#[tokio::test]
async fn test_delete_artist_cascades_shows() {
    let (state, sample) = seeded_state().await;

    state.artists().delete(sample.wild_sax_band).await.unwrap();

    let view = state
        .venues()
        .find(sample.park_square)
        .await
        .unwrap()
        .format_all(schedule::now())
        .unwrap();
    assert_eq!(view.upcoming_shows_count, 0);
    assert_eq!(view.past_shows_count, 1);
}

#[tokio::test]
async fn test_list_and_search_artists() {
    let (state, sample) = seeded_state().await;
    let repo = state.artists();

    let artists = repo.list().await.unwrap();
    let names: Vec<&str> = artists.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Guns N Petals", "Matt Quevedo", "The Wild Sax Band"]);

    let now = schedule::now();
    assert_eq!(repo.search("A", now).await.unwrap().count, 3);

    let band = repo.search("band", now).await.unwrap();
    assert_eq!(band.count, 1);
    assert_eq!(band.data[0].id, sample.wild_sax_band);
    assert_eq!(band.data[0].num_upcoming_shows, 3);
}

// ============================================================================
// Shows
// ============================================================================

#[tokio::test]
async fn test_create_show_and_list() {
    let (state, sample) = seeded_state().await;

    state
        .shows()
        .create(sample.dueling_pianos, sample.matt_quevedo, hours_from_now(-24 * 365))
        .await
        .unwrap();

    let shows = state.shows().list().await.unwrap();
    assert_eq!(shows.len(), 6);

    // Earliest first
    assert_eq!(shows[0].venue_name, "The Dueling Pianos Bar");
    assert_eq!(shows[0].artist_name, "Matt Quevedo");
    let times: Vec<&str> = shows.iter().map(|s| s.start_time.as_str()).collect();
    let mut sorted = times.clone();
    sorted.sort();
    assert_eq!(times, sorted);
}

#[tokio::test]
async fn test_list_shows_ignores_artists_without_bookings() {
    let (state, sample) = seeded_state().await;
    for n in 0..5 {
        create_test_artist(&state.db, &format!("Session Player {}", n)).await;
    }

    let shows = state.shows().list().await.unwrap();

    assert_eq!(shows.len(), 5);
    let sax: Vec<_> = shows
        .iter()
        .filter(|s| s.artist_id == sample.wild_sax_band)
        .collect();
    assert_eq!(sax.len(), 3);
    assert!(sax.iter().all(|s| s.artist_name == "The Wild Sax Band"));
    assert!(sax
        .iter()
        .all(|s| s.artist_image_link.as_deref() == Some("https://images.example.com/the-wild-sax-band.jpg")));
}

#[tokio::test]
async fn test_duplicate_show_is_rejected() {
    let (state, sample) = seeded_state().await;
    let start = hours_from_now(24 * 100);

    state
        .shows()
        .create(sample.musical_hop, sample.matt_quevedo, start)
        .await
        .unwrap();
    let err = state
        .shows()
        .create(sample.musical_hop, sample.matt_quevedo, start)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Duplicate(_)));
    assert_eq!(show::Entity::find().all(&state.db).await.unwrap().len(), 6);
}

#[tokio::test]
async fn test_show_with_missing_parent_is_a_reference_error() {
    let (state, sample) = seeded_state().await;

    let err = state
        .shows()
        .create(999, sample.matt_quevedo, hours_from_now(1))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Reference(_)));

    let err = state
        .shows()
        .create(sample.musical_hop, 999, hours_from_now(1))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Reference(_)));

    assert_eq!(show::Entity::find().all(&state.db).await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_storage_constraint_violations_are_classified() {
    let (state, sample) = seeded_state().await;
    let start = hours_from_now(5);
    create_test_show(&state.db, sample.musical_hop, sample.wild_sax_band, start).await;

    let duplicate = show::Entity::insert(show::ActiveModel {
        venue_id: Set(sample.musical_hop),
        artist_id: Set(sample.wild_sax_band),
        start_time: Set(start),
    })
    .exec_without_returning(&state.db)
    .await
    .unwrap_err();
    assert!(matches!(AppError::from(duplicate), AppError::Duplicate(_)));

    let dangling = show::Entity::insert(show::ActiveModel {
        venue_id: Set(999),
        artist_id: Set(sample.wild_sax_band),
        start_time: Set(start),
    })
    .exec_without_returning(&state.db)
    .await
    .unwrap_err();
    assert!(matches!(AppError::from(dangling), AppError::Reference(_)));
}
