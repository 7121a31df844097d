use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;

use crate::{
    db::attributes::{parse_start_time, ArtistAttributes, VenueAttributes},
    error::AppError,
    services::schedule,
    state::AppState,
    templates::{
        artist_detail_page, artist_form_page, artists_page, home_page, not_found_page,
        search_page, server_error_page, show_form_page, shows_page, venue_detail_page,
        venue_form_page, venues_page, FormMode,
    },
};

use super::forms::{ArtistForm, SearchForm, ShowForm, VenueForm};

/// An error on the HTML side of the site, rendered as the 404 or 500 page.
/// Failed submissions carry the flash message shown on the error page.
#[derive(Debug)]
pub struct PageError {
    error: AppError,
    flash: Option<String>,
}

impl PageError {
    pub fn with_flash(error: AppError, flash: impl Into<String>) -> Self {
        Self {
            error,
            flash: Some(flash.into()),
        }
    }
}

impl From<AppError> for PageError {
    fn from(error: AppError) -> Self {
        Self { error, flash: None }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self.error.status_code() {
            StatusCode::NOT_FOUND => {
                tracing::debug!("{}", self.error);
                (StatusCode::NOT_FOUND, Html(not_found_page().into_string())).into_response()
            }
            status => {
                tracing::error!("{} ({})", self.error, self.error.kind());
                let page = server_error_page(self.flash.as_deref());
                (status, Html(page.into_string())).into_response()
            }
        }
    }
}

type PageResult<T> = std::result::Result<T, PageError>;

pub async fn index() -> Html<String> {
    Html(home_page(None).into_string())
}

//  Venues

pub async fn venues(State(state): State<AppState>) -> PageResult<Html<String>> {
    let areas = state.venues().list_grouped(schedule::now()).await?;
    Ok(Html(venues_page(&areas).into_string()))
}

pub async fn search_venues(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> PageResult<Html<String>> {
    let results = state
        .venues()
        .search(&form.search_term, schedule::now())
        .await?;
    Ok(Html(search_page("/venues", &form.search_term, &results).into_string()))
}

pub async fn show_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> PageResult<Html<String>> {
    let venue = state.venues().find(id).await?.format_all(schedule::now())?;
    Ok(Html(venue_detail_page(&venue).into_string()))
}

pub async fn create_venue_form() -> Html<String> {
    Html(venue_form_page(FormMode::Create, &VenueAttributes::default(), &[]).into_string())
}

pub async fn create_venue_submission(
    State(state): State<AppState>,
    Form(form): Form<VenueForm>,
) -> PageResult<Html<String>> {
    let (attributes, genres) = form.into_parts();
    let name = attributes.name.clone();

    state
        .venues()
        .create(attributes, &genres)
        .await
        .map_err(|e| {
            PageError::with_flash(e, format!("An error occurred. Venue {} could not be listed.", name))
        })?;

    let flash = format!("Venue {} was successfully listed!", name);
    Ok(Html(home_page(Some(&flash)).into_string()))
}

pub async fn edit_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> PageResult<Html<String>> {
    let record = state.venues().find(id).await?;
    let genres = record.get_genres();
    let attributes = VenueAttributes::from(record.venue);
    Ok(Html(venue_form_page(FormMode::Edit(id), &attributes, &genres).into_string()))
}

pub async fn edit_venue_submission(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<VenueForm>,
) -> PageResult<Redirect> {
    let (attributes, genres) = form.into_parts();
    let name = attributes.name.clone();

    state
        .venues()
        .edit(id, attributes, &genres)
        .await
        .map_err(|e| match e {
            AppError::NotFound(_) => PageError::from(e),
            e => PageError::with_flash(
                e,
                format!("An error occurred. Venue {} could not be updated.", name),
            ),
        })?;

    Ok(Redirect::to(&format!("/venues/{}", id)))
}

pub async fn delete_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> PageResult<Html<String>> {
    let name = state.venues().delete(id).await.map_err(|e| match e {
        AppError::NotFound(_) => PageError::from(e),
        e => PageError::with_flash(e, format!("An error occurred. Venue {} could not be deleted.", id)),
    })?;

    let flash = format!("Venue {} was successfully deleted.", name);
    Ok(Html(home_page(Some(&flash)).into_string()))
}

//  Artists

pub async fn artists(State(state): State<AppState>) -> PageResult<Html<String>> {
    let artists = state.artists().list().await?;
    Ok(Html(artists_page(&artists).into_string()))
}

pub async fn search_artists(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> PageResult<Html<String>> {
    let results = state
        .artists()
        .search(&form.search_term, schedule::now())
        .await?;
    Ok(Html(search_page("/artists", &form.search_term, &results).into_string()))
}

pub async fn show_artist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> PageResult<Html<String>> {
    let artist = state.artists().find(id).await?.format_all(schedule::now())?;
    Ok(Html(artist_detail_page(&artist).into_string()))
}

pub async fn create_artist_form() -> Html<String> {
    Html(artist_form_page(FormMode::Create, &ArtistAttributes::default(), &[]).into_string())
}

pub async fn create_artist_submission(
    State(state): State<AppState>,
    Form(form): Form<ArtistForm>,
) -> PageResult<Html<String>> {
    let (attributes, genres) = form.into_parts();
    let name = attributes.name.clone();

    state
        .artists()
        .create(attributes, &genres)
        .await
        .map_err(|e| {
            PageError::with_flash(e, format!("An error occurred. Artist {} could not be listed.", name))
        })?;

    let flash = format!("Artist {} was successfully listed!", name);
    Ok(Html(home_page(Some(&flash)).into_string()))
}

pub async fn edit_artist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> PageResult<Html<String>> {
    let record = state.artists().find(id).await?;
    let genres = record.get_genres();
    let attributes = ArtistAttributes::from(record.artist);
    Ok(Html(artist_form_page(FormMode::Edit(id), &attributes, &genres).into_string()))
}

pub async fn edit_artist_submission(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<ArtistForm>,
) -> PageResult<Redirect> {
    let (attributes, genres) = form.into_parts();
    let name = attributes.name.clone();

    state
        .artists()
        .edit(id, attributes, &genres)
        .await
        .map_err(|e| match e {
            AppError::NotFound(_) => PageError::from(e),
            e => PageError::with_flash(
                e,
                format!("An error occurred. Artist {} could not be updated.", name),
            ),
        })?;

    Ok(Redirect::to(&format!("/artists/{}", id)))
}

pub async fn delete_artist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> PageResult<Html<String>> {
    let name = state.artists().delete(id).await.map_err(|e| match e {
        AppError::NotFound(_) => PageError::from(e),
        e => PageError::with_flash(e, format!("An error occurred. Artist {} could not be deleted.", id)),
    })?;

    let flash = format!("Artist {} was successfully deleted.", name);
    Ok(Html(home_page(Some(&flash)).into_string()))
}

//  Shows

pub async fn shows(State(state): State<AppState>) -> PageResult<Html<String>> {
    let shows = state.shows().list().await?;
    Ok(Html(shows_page(&shows).into_string()))
}

pub async fn create_show_form() -> Html<String> {
    Html(show_form_page().into_string())
}

pub async fn create_show_submission(
    State(state): State<AppState>,
    Form(form): Form<ShowForm>,
) -> PageResult<Html<String>> {
    book_show(&state, &form)
        .await
        .map_err(|e| PageError::with_flash(e, "An error occurred. Show could not be listed."))?;

    Ok(Html(home_page(Some("Show was successfully listed!")).into_string()))
}

async fn book_show(state: &AppState, form: &ShowForm) -> crate::error::Result<()> {
    let venue_id = parse_id("venue_id", &form.venue_id)?;
    let artist_id = parse_id("artist_id", &form.artist_id)?;
    let start_time = parse_start_time(&form.start_time)?;
    state.shows().create(venue_id, artist_id, start_time).await
}

fn parse_id(field: &str, raw: &str) -> crate::error::Result<i32> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("{} must be a number, got '{}'", field, raw)))
}
