//! Loaded venue/artist aggregates and their detail-page projections.
//!
//! Repositories load everything a detail page needs in one go; the records
//! here only reshape it. The counterpart of each show is optional because it
//! comes from a join that is not assumed to succeed.

use sea_orm::prelude::DateTime;

use crate::{
    db::{
        entities::{artist, artist_genre, show, venue, venue_genre},
        enums::Tense,
    },
    error::Result,
};

use super::{
    schedule,
    views::{ArtistDetailView, ArtistShowView, VenueDetailView, VenueShowView},
};

#[derive(Debug, Clone)]
pub struct VenueRecord {
    pub venue: venue::Model,
    pub genres: Vec<venue_genre::Model>,
    pub shows: Vec<(show::Model, Option<artist::Model>)>,
}

impl VenueRecord {
    pub fn get_genres(&self) -> Vec<String> {
        self.genres.iter().map(|g| g.name.clone()).collect()
    }

    pub fn get_shows(&self, tense: Tense, now: DateTime) -> Result<Vec<VenueShowView>> {
        schedule::select(&self.shows, tense, now)
            .map(|(show, artist)| VenueShowView::from_parts(show, artist.as_ref()))
            .collect()
    }

    pub fn format_all(&self, now: DateTime) -> Result<VenueDetailView> {
        let upcoming_shows = self.get_shows(Tense::Future, now)?;
        let past_shows = self.get_shows(Tense::Past, now)?;
        let venue = &self.venue;

        Ok(VenueDetailView {
            id: venue.id,
            name: venue.name.clone(),
            genres: self.get_genres(),
            address: venue.address.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            phone: venue.phone.clone(),
            website: venue.website_link.clone(),
            facebook_link: venue.facebook_link.clone(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone(),
            image_link: venue.image_link.clone(),
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ArtistRecord {
    pub artist: artist::Model,
    pub genres: Vec<artist_genre::Model>,
    pub shows: Vec<(show::Model, Option<venue::Model>)>,
}

impl ArtistRecord {
    pub fn get_genres(&self) -> Vec<String> {
        self.genres.iter().map(|g| g.name.clone()).collect()
    }

    pub fn get_shows(&self, tense: Tense, now: DateTime) -> Result<Vec<ArtistShowView>> {
        schedule::select(&self.shows, tense, now)
            .map(|(show, venue)| ArtistShowView::from_parts(show, venue.as_ref()))
            .collect()
    }

    pub fn format_all(&self, now: DateTime) -> Result<ArtistDetailView> {
        let upcoming_shows = self.get_shows(Tense::Future, now)?;
        let past_shows = self.get_shows(Tense::Past, now)?;
        let artist = &self.artist;

        Ok(ArtistDetailView {
            id: artist.id,
            name: artist.name.clone(),
            genres: self.get_genres(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone(),
            website: artist.website_link.clone(),
            facebook_link: artist.facebook_link.clone(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone(),
            image_link: artist.image_link.clone(),
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        })
    }
}
