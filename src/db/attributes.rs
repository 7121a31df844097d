//! Scalar attributes accepted when creating or editing venues and artists,
//! and the checks they must pass before anything is written.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use sea_orm::{prelude::DateTime, ActiveValue::Set};
use serde::Deserialize;

use crate::{
    db::entities::{artist, venue},
    error::{AppError, Result},
    services::genres,
};

pub const MAX_LOCATION_LEN: usize = 120;
pub const MAX_LINK_LEN: usize = 120;
pub const MAX_IMAGE_LINK_LEN: usize = 500;
pub const MAX_SEEKING_DESCRIPTION_LEN: usize = 200;
pub const MAX_GENRE_LEN: usize = 30;

const START_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VenueAttributes {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ArtistAttributes {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl VenueAttributes {
    pub fn validate(&self) -> Result<()> {
        required("name", &self.name)?;
        required("city", &self.city)?;
        required("state", &self.state)?;
        required("address", &self.address)?;
        max_len("city", &self.city, MAX_LOCATION_LEN)?;
        max_len("state", &self.state, MAX_LOCATION_LEN)?;
        max_len("address", &self.address, MAX_LOCATION_LEN)?;
        optional_max_len("phone", &self.phone, MAX_LOCATION_LEN)?;
        optional_max_len("image_link", &self.image_link, MAX_IMAGE_LINK_LEN)?;
        optional_max_len("facebook_link", &self.facebook_link, MAX_LINK_LEN)?;
        optional_max_len("website_link", &self.website_link, MAX_LINK_LEN)?;
        optional_max_len(
            "seeking_description",
            &self.seeking_description,
            MAX_SEEKING_DESCRIPTION_LEN,
        )
    }

    /// Overwrite every scalar column of `model` with these attributes.
    pub fn apply(self, model: &mut venue::ActiveModel) {
        model.name = Set(self.name);
        model.city = Set(self.city);
        model.state = Set(self.state);
        model.address = Set(self.address);
        model.phone = Set(blank_to_none(self.phone));
        model.image_link = Set(blank_to_none(self.image_link));
        model.facebook_link = Set(blank_to_none(self.facebook_link));
        model.website_link = Set(blank_to_none(self.website_link));
        model.seeking_talent = Set(self.seeking_talent);
        model.seeking_description = Set(blank_to_none(self.seeking_description));
    }

    pub fn into_active_model(self) -> venue::ActiveModel {
        let mut model = venue::ActiveModel {
            ..Default::default()
        };
        self.apply(&mut model);
        model
    }
}

impl From<venue::Model> for VenueAttributes {
    fn from(model: venue::Model) -> Self {
        Self {
            name: model.name,
            city: model.city,
            state: model.state,
            address: model.address,
            phone: model.phone,
            image_link: model.image_link,
            facebook_link: model.facebook_link,
            website_link: model.website_link,
            seeking_talent: model.seeking_talent,
            seeking_description: model.seeking_description,
        }
    }
}

impl ArtistAttributes {
    pub fn validate(&self) -> Result<()> {
        required("name", &self.name)?;
        required("city", &self.city)?;
        required("state", &self.state)?;
        max_len("city", &self.city, MAX_LOCATION_LEN)?;
        max_len("state", &self.state, MAX_LOCATION_LEN)?;
        optional_max_len("phone", &self.phone, MAX_LOCATION_LEN)?;
        optional_max_len("image_link", &self.image_link, MAX_IMAGE_LINK_LEN)?;
        optional_max_len("facebook_link", &self.facebook_link, MAX_LINK_LEN)?;
        optional_max_len("website_link", &self.website_link, MAX_LINK_LEN)?;
        optional_max_len(
            "seeking_description",
            &self.seeking_description,
            MAX_SEEKING_DESCRIPTION_LEN,
        )
    }

    pub fn apply(self, model: &mut artist::ActiveModel) {
        model.name = Set(self.name);
        model.city = Set(self.city);
        model.state = Set(self.state);
        model.phone = Set(blank_to_none(self.phone));
        model.image_link = Set(blank_to_none(self.image_link));
        model.facebook_link = Set(blank_to_none(self.facebook_link));
        model.website_link = Set(blank_to_none(self.website_link));
        model.seeking_venue = Set(self.seeking_venue);
        model.seeking_description = Set(blank_to_none(self.seeking_description));
    }

    pub fn into_active_model(self) -> artist::ActiveModel {
        let mut model = artist::ActiveModel {
            ..Default::default()
        };
        self.apply(&mut model);
        model
    }
}

impl From<artist::Model> for ArtistAttributes {
    fn from(model: artist::Model) -> Self {
        Self {
            name: model.name,
            city: model.city,
            state: model.state,
            phone: model.phone,
            image_link: model.image_link,
            facebook_link: model.facebook_link,
            website_link: model.website_link,
            seeking_venue: model.seeking_venue,
            seeking_description: model.seeking_description,
        }
    }
}

/// Check submitted genre names and collapse duplicates.
pub fn validate_genres(names: &[String]) -> Result<BTreeSet<String>> {
    for name in names {
        if name.trim().is_empty() {
            return Err(AppError::Validation("genre names cannot be blank".to_string()));
        }
        if name.chars().count() > MAX_GENRE_LEN {
            return Err(AppError::Validation(format!(
                "genre '{}' is longer than {} characters",
                name, MAX_GENRE_LEN
            )));
        }
    }
    Ok(genres::distinct(names.iter().cloned()))
}

pub fn parse_start_time(raw: &str) -> Result<DateTime> {
    let raw = raw.trim();
    START_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| {
            AppError::Validation(format!(
                "start_time '{}' is not a valid date and time (expected YYYY-MM-DD HH:MM)",
                raw
            ))
        })
}

fn required(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

fn max_len(field: &str, value: &str, max: usize) -> Result<()> {
    if value.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

fn optional_max_len(field: &str, value: &Option<String>, max: usize) -> Result<()> {
    match value {
        Some(v) => max_len(field, v, max),
        None => Ok(()),
    }
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
