//! Test utilities for Fyyur
//!
//! Provides helpers for creating isolated test environments with:
//! - In-memory SQLite databases (one per test)
//! - AppState factories
//! - Test data generators, including the classic sample directory

use chrono::Duration;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, EntityTrait, Set};

use crate::{
    config::{Config, LogFormat},
    db::entities::{artist, artist_genre, show, venue, venue_genre},
    services::schedule,
    state::AppState,
};

/// Setup an in-memory SQLite database with all migrations applied
///
/// Each call creates a fresh, isolated database, so tests can run in parallel
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create a test configuration with sensible defaults
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 5000,
        log_format: LogFormat::Pretty,
    }
}

/// Create a complete test AppState with an isolated database
pub async fn setup_test_app_state() -> AppState {
    AppState::new(setup_test_db().await, test_config())
}

/// A timestamp `hours` away from the current instant (negative for the past)
pub fn hours_from_now(hours: i64) -> sea_orm::prelude::DateTime {
    schedule::now() + Duration::hours(hours)
}

// ============================================================================
// Test Data Factories
// ============================================================================

/// Create a test venue in the database
pub async fn create_test_venue(
    db: &DatabaseConnection,
    name: &str,
    city: &str,
    state: &str,
) -> venue::Model {
    let venue = venue::ActiveModel {
        name: Set(name.to_string()),
        city: Set(city.to_string()),
        state: Set(state.to_string()),
        address: Set("1015 Folsom Street".to_string()),
        phone: Set(None),
        image_link: Set(None),
        facebook_link: Set(None),
        website_link: Set(None),
        seeking_talent: Set(false),
        seeking_description: Set(None),
        ..Default::default()
    };

    venue.insert(db).await.expect("Failed to insert test venue")
}

/// Create a test artist in the database
pub async fn create_test_artist(db: &DatabaseConnection, name: &str) -> artist::Model {
    let artist = artist::ActiveModel {
        name: Set(name.to_string()),
        city: Set("San Francisco".to_string()),
        state: Set("CA".to_string()),
        phone: Set(None),
        image_link: Set(Some(format!(
            "https://images.example.com/{}.jpg",
            name.to_lowercase().replace(' ', "-")
        ))),
        facebook_link: Set(None),
        website_link: Set(None),
        seeking_venue: Set(false),
        seeking_description: Set(None),
        ..Default::default()
    };

    artist.insert(db).await.expect("Failed to insert test artist")
}

/// Create a test show in the database
pub async fn create_test_show(
    db: &DatabaseConnection,
    venue_id: i32,
    artist_id: i32,
    start_time: sea_orm::prelude::DateTime,
) -> show::Model {
    let model = show::Model {
        venue_id,
        artist_id,
        start_time,
    };
    show::Entity::insert(show::ActiveModel {
        venue_id: Set(venue_id),
        artist_id: Set(artist_id),
        start_time: Set(start_time),
    })
    .exec_without_returning(db)
    .await
    .expect("Failed to insert test show");

    model
}

/// Attach genre rows to a venue directly, bypassing the repository
pub async fn add_test_venue_genres(db: &DatabaseConnection, venue_id: i32, names: &[&str]) {
    for name in names {
        venue_genre::Entity::insert(venue_genre::ActiveModel {
            venue_id: Set(venue_id),
            name: Set(name.to_string()),
        })
        .exec_without_returning(db)
        .await
        .expect("Failed to insert test venue genre");
    }
}

/// Attach genre rows to an artist directly, bypassing the repository
pub async fn add_test_artist_genres(db: &DatabaseConnection, artist_id: i32, names: &[&str]) {
    for name in names {
        artist_genre::Entity::insert(artist_genre::ActiveModel {
            artist_id: Set(artist_id),
            name: Set(name.to_string()),
        })
        .exec_without_returning(db)
        .await
        .expect("Failed to insert test artist genre");
    }
}

/// Ids of the sample directory created by [`seed_sample_directory`]
pub struct SampleDirectory {
    pub musical_hop: i32,
    pub dueling_pianos: i32,
    pub park_square: i32,
    pub guns_n_petals: i32,
    pub matt_quevedo: i32,
    pub wild_sax_band: i32,
}

/// Seed three venues, three artists and their shows
///
/// - The Musical Hop (San Francisco, CA): one past show by Guns N Petals
/// - The Dueling Pianos Bar (New York, NY): no shows
/// - Park Square Live Music & Coffee (San Francisco, CA): one past show by
///   Matt Quevedo and three upcoming shows by The Wild Sax Band
pub async fn seed_sample_directory(db: &DatabaseConnection) -> SampleDirectory {
    let musical_hop = create_test_venue(db, "The Musical Hop", "San Francisco", "CA").await;
    let dueling_pianos = create_test_venue(db, "The Dueling Pianos Bar", "New York", "NY").await;
    let park_square =
        create_test_venue(db, "Park Square Live Music & Coffee", "San Francisco", "CA").await;

    let guns_n_petals = create_test_artist(db, "Guns N Petals").await;
    let matt_quevedo = create_test_artist(db, "Matt Quevedo").await;
    let wild_sax_band = create_test_artist(db, "The Wild Sax Band").await;

    add_test_venue_genres(db, musical_hop.id, &["Jazz", "Reggae", "Swing", "Classical", "Folk"]).await;
    add_test_artist_genres(db, guns_n_petals.id, &["Rock n Roll"]).await;

    create_test_show(db, musical_hop.id, guns_n_petals.id, hours_from_now(-24 * 30)).await;
    create_test_show(db, park_square.id, matt_quevedo.id, hours_from_now(-24 * 7)).await;
    for week in 1..=3 {
        create_test_show(db, park_square.id, wild_sax_band.id, hours_from_now(24 * 7 * week)).await;
    }

    SampleDirectory {
        musical_hop: musical_hop.id,
        dueling_pianos: dueling_pianos.id,
        park_square: park_square.id,
        guns_n_petals: guns_n_petals.id,
        matt_quevedo: matt_quevedo.id,
        wild_sax_band: wild_sax_band.id,
    }
}
