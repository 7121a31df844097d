//! Browser form submissions.
//!
//! Forms arrive as `application/x-www-form-urlencoded` with `genres` repeated
//! once per selected option, so they are extracted with
//! `axum_extra::extract::Form` rather than axum's built-in one.

use serde::Deserialize;

use crate::db::attributes::{ArtistAttributes, VenueAttributes};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub seeking_talent: Option<String>,
    pub seeking_description: String,
    pub genres: Vec<String>,
}

impl VenueForm {
    pub fn into_parts(self) -> (VenueAttributes, Vec<String>) {
        let attributes = VenueAttributes {
            name: self.name,
            city: self.city,
            state: self.state,
            address: self.address,
            phone: Some(self.phone),
            image_link: Some(self.image_link),
            facebook_link: Some(self.facebook_link),
            website_link: Some(self.website_link),
            seeking_talent: checked(self.seeking_talent.as_deref()),
            seeking_description: Some(self.seeking_description),
        };
        (attributes, self.genres)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub seeking_venue: Option<String>,
    pub seeking_description: String,
    pub genres: Vec<String>,
}

impl ArtistForm {
    pub fn into_parts(self) -> (ArtistAttributes, Vec<String>) {
        let attributes = ArtistAttributes {
            name: self.name,
            city: self.city,
            state: self.state,
            phone: Some(self.phone),
            image_link: Some(self.image_link),
            facebook_link: Some(self.facebook_link),
            website_link: Some(self.website_link),
            seeking_venue: checked(self.seeking_venue.as_deref()),
            seeking_description: Some(self.seeking_description),
        };
        (attributes, self.genres)
    }
}

/// Ids stay as text so a malformed value is reported like any other invalid
/// input instead of being rejected by the extractor.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    pub search_term: String,
}

/// Checkbox and select values browsers send for "yes".
fn checked(value: Option<&str>) -> bool {
    matches!(
        value.map(str::to_ascii_lowercase).as_deref(),
        Some("true" | "y" | "yes" | "on" | "1")
    )
}
