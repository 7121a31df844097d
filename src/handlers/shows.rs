use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::json;

use crate::{
    db::attributes::parse_start_time,
    error::Result,
    services::{schedule, ShowView},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateShowRequest {
    pub venue_id: i32,
    pub artist_id: i32,
    pub start_time: String,
}

pub async fn list_shows(State(state): State<AppState>) -> Result<Json<Vec<ShowView>>> {
    Ok(Json(state.shows().list().await?))
}

pub async fn create_show(
    State(state): State<AppState>,
    Json(payload): Json<CreateShowRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let start_time = parse_start_time(&payload.start_time)?;
    state
        .shows()
        .create(payload.venue_id, payload.artist_id, start_time)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "venue_id": payload.venue_id,
            "artist_id": payload.artist_id,
            "start_time": schedule::iso8601(start_time)
        })),
    ))
}
