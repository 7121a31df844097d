use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    db::attributes::ArtistAttributes,
    error::Result,
    services::{schedule, ArtistDetailView, ArtistShowView, ArtistSummary, SearchResults},
    state::AppState,
};

use super::venues::{SearchRequest, ShowsQuery};

#[derive(Debug, Deserialize)]
pub struct ArtistPayload {
    #[serde(flatten)]
    pub attributes: ArtistAttributes,
    #[serde(default)]
    pub genres: Vec<String>,
}

pub async fn list_artists(State(state): State<AppState>) -> Result<Json<Vec<ArtistSummary>>> {
    Ok(Json(state.artists().list().await?))
}

pub async fn search_artists(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResults>> {
    let results = state
        .artists()
        .search(&request.search_term, schedule::now())
        .await?;
    Ok(Json(results))
}

pub async fn get_artist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ArtistDetailView>> {
    let record = state.artists().find(id).await?;
    Ok(Json(record.format_all(schedule::now())?))
}

pub async fn get_artist_shows(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<ShowsQuery>,
) -> Result<Json<Vec<ArtistShowView>>> {
    let record = state.artists().find(id).await?;
    Ok(Json(record.get_shows(query.tense, schedule::now())?))
}

pub async fn create_artist(
    State(state): State<AppState>,
    Json(payload): Json<ArtistPayload>,
) -> Result<(StatusCode, Json<ArtistDetailView>)> {
    let repo = state.artists();
    let id = repo.create(payload.attributes, &payload.genres).await?;
    let view = repo.find(id).await?.format_all(schedule::now())?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn update_artist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ArtistPayload>,
) -> Result<Json<ArtistDetailView>> {
    let repo = state.artists();
    repo.edit(id, payload.attributes, &payload.genres).await?;
    let view = repo.find(id).await?.format_all(schedule::now())?;
    Ok(Json(view))
}

pub async fn delete_artist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>> {
    let name = state.artists().delete(id).await?;
    Ok(Json(json!({
        "id": id,
        "name": name,
        "deleted": true
    })))
}
