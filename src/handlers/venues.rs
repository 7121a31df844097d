use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    db::{attributes::VenueAttributes, enums::Tense},
    error::Result,
    services::{schedule, GroupedVenueView, SearchResults, VenueDetailView, VenueShowView},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct VenuePayload {
    #[serde(flatten)]
    pub attributes: VenueAttributes,
    #[serde(default)]
    pub genres: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub search_term: String,
}

#[derive(Debug, Deserialize)]
pub struct ShowsQuery {
    pub tense: Tense,
}

pub async fn list_venues(State(state): State<AppState>) -> Result<Json<Vec<GroupedVenueView>>> {
    let areas = state.venues().list_grouped(schedule::now()).await?;
    Ok(Json(areas))
}

pub async fn search_venues(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResults>> {
    let results = state
        .venues()
        .search(&request.search_term, schedule::now())
        .await?;
    Ok(Json(results))
}

pub async fn get_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<VenueDetailView>> {
    let record = state.venues().find(id).await?;
    Ok(Json(record.format_all(schedule::now())?))
}

pub async fn get_venue_shows(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<ShowsQuery>,
) -> Result<Json<Vec<VenueShowView>>> {
    let record = state.venues().find(id).await?;
    Ok(Json(record.get_shows(query.tense, schedule::now())?))
}

pub async fn create_venue(
    State(state): State<AppState>,
    Json(payload): Json<VenuePayload>,
) -> Result<(StatusCode, Json<VenueDetailView>)> {
    let repo = state.venues();
    let id = repo.create(payload.attributes, &payload.genres).await?;
    let view = repo.find(id).await?.format_all(schedule::now())?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn update_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<VenuePayload>,
) -> Result<Json<VenueDetailView>> {
    let repo = state.venues();
    repo.edit(id, payload.attributes, &payload.genres).await?;
    let view = repo.find(id).await?.format_all(schedule::now())?;
    Ok(Json(view))
}

pub async fn delete_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>> {
    let name = state.venues().delete(id).await?;
    Ok(Json(json!({
        "id": id,
        "name": name,
        "deleted": true
    })))
}
