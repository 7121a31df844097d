//! Display-ready records handed to the JSON API and the HTML templates.

use serde::Serialize;

use crate::{
    db::entities::{artist, show, venue},
    error::{AppError, Result},
};

use super::schedule::iso8601;

/// A venue's show, seen from the venue: who is playing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueShowView {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

/// An artist's show, seen from the artist: where they are playing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistShowView {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowView {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

impl ShowView {
    /// Project a show through both of its parents.
    ///
    /// A parent that failed to load is reported as a broken reference rather
    /// than assumed away: foreign keys should prevent it, but the projection
    /// does not rely on that.
    pub fn from_parts(
        show: &show::Model,
        venue: Option<&venue::Model>,
        artist: Option<&artist::Model>,
    ) -> Result<Self> {
        let venue = venue.ok_or_else(|| missing_venue(show))?;
        let artist = artist.ok_or_else(|| missing_artist(show))?;

        Ok(Self {
            venue_id: show.venue_id,
            venue_name: venue.name.clone(),
            artist_id: show.artist_id,
            artist_name: artist.name.clone(),
            artist_image_link: artist.image_link.clone(),
            start_time: iso8601(show.start_time),
        })
    }
}

impl VenueShowView {
    pub fn from_parts(show: &show::Model, artist: Option<&artist::Model>) -> Result<Self> {
        let artist = artist.ok_or_else(|| missing_artist(show))?;
        Ok(Self {
            artist_id: artist.id,
            artist_name: artist.name.clone(),
            artist_image_link: artist.image_link.clone(),
            start_time: iso8601(show.start_time),
        })
    }
}

impl ArtistShowView {
    pub fn from_parts(show: &show::Model, venue: Option<&venue::Model>) -> Result<Self> {
        let venue = venue.ok_or_else(|| missing_venue(show))?;
        Ok(Self {
            venue_id: venue.id,
            venue_name: venue.name.clone(),
            venue_image_link: venue.image_link.clone(),
            start_time: iso8601(show.start_time),
        })
    }
}

fn missing_venue(show: &show::Model) -> AppError {
    AppError::BrokenReference(format!(
        "show at {} references missing venue {}",
        iso8601(show.start_time),
        show.venue_id
    ))
}

fn missing_artist(show: &show::Model) -> AppError {
    AppError::BrokenReference(format!(
        "show at {} references missing artist {}",
        iso8601(show.start_time),
        show.artist_id
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueDetailView {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<VenueShowView>,
    pub upcoming_shows: Vec<VenueShowView>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistDetailView {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<ArtistShowView>,
    pub upcoming_shows: Vec<ArtistShowView>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// One row in a listing: the venue or artist plus how many shows are ahead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingEntry {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupedVenueView {
    pub city: String,
    pub state: String,
    pub venues: Vec<ListingEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<ListingEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistSummary {
    pub id: i32,
    pub name: String,
}
