pub mod artists;
pub mod forms;
pub mod health;
pub mod html;
pub mod shows;
pub mod venues;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Venue endpoints
        .route("/venues", get(venues::list_venues).post(venues::create_venue))
        .route("/venues/search", post(venues::search_venues))
        .route(
            "/venues/:id",
            get(venues::get_venue)
                .put(venues::update_venue)
                .delete(venues::delete_venue),
        )
        .route("/venues/:id/shows", get(venues::get_venue_shows))

        // Artist endpoints
        .route("/artists", get(artists::list_artists).post(artists::create_artist))
        .route("/artists/search", post(artists::search_artists))
        .route(
            "/artists/:id",
            get(artists::get_artist)
                .put(artists::update_artist)
                .delete(artists::delete_artist),
        )
        .route("/artists/:id/shows", get(artists::get_artist_shows))

        // Show endpoints
        .route("/shows", get(shows::list_shows).post(shows::create_show))
}

pub fn html_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(html::index))

        .route("/venues", get(html::venues))
        .route("/venues/search", post(html::search_venues))
        .route(
            "/venues/create",
            get(html::create_venue_form).post(html::create_venue_submission),
        )
        .route("/venues/:id", get(html::show_venue).delete(html::delete_venue))
        .route(
            "/venues/:id/edit",
            get(html::edit_venue).post(html::edit_venue_submission),
        )

        .route("/artists", get(html::artists))
        .route("/artists/search", post(html::search_artists))
        .route(
            "/artists/create",
            get(html::create_artist_form).post(html::create_artist_submission),
        )
        .route("/artists/:id", get(html::show_artist).delete(html::delete_artist))
        .route(
            "/artists/:id/edit",
            get(html::edit_artist).post(html::edit_artist_submission),
        )

        .route("/shows", get(html::shows))
        .route(
            "/shows/create",
            get(html::create_show_form).post(html::create_show_submission),
        )
}

/// The full application: health check, JSON API under `/api` and the HTML
/// site, with request tracing, compression and CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes())
        .merge(html_routes())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
