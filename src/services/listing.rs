use std::collections::BTreeMap;

use sea_orm::prelude::DateTime;

use crate::db::{
    entities::{artist, show, venue},
    enums::Tense,
};

use super::{
    schedule,
    views::{GroupedVenueView, ListingEntry, SearchResults},
};

/// Something that can appear as a row in a listing.
pub trait Listed {
    fn id(&self) -> i32;
    fn name(&self) -> &str;
}

impl Listed for venue::Model {
    fn id(&self) -> i32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Listed for artist::Model {
    fn id(&self) -> i32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn entry<E: Listed>(item: &E, shows: &[show::Model], now: DateTime) -> ListingEntry {
    ListingEntry {
        id: item.id(),
        name: item.name().to_string(),
        num_upcoming_shows: schedule::count(shows, Tense::Future, now),
    }
}

/// Group venues by the exact `(city, state)` pair they report.
///
/// Groups come out ordered by city then state; venues inside a group keep
/// ascending id order.
pub fn group_by_location(
    rows: &[(venue::Model, Vec<show::Model>)],
    now: DateTime,
) -> Vec<GroupedVenueView> {
    let mut groups: BTreeMap<(&str, &str), Vec<ListingEntry>> = BTreeMap::new();

    let mut ordered: Vec<&(venue::Model, Vec<show::Model>)> = rows.iter().collect();
    ordered.sort_by_key(|(venue, _)| venue.id);

    for (venue, shows) in ordered {
        groups
            .entry((venue.city.as_str(), venue.state.as_str()))
            .or_default()
            .push(entry(venue, shows, now));
    }

    groups
        .into_iter()
        .map(|((city, state), venues)| GroupedVenueView {
            city: city.to_string(),
            state: state.to_string(),
            venues,
        })
        .collect()
}

pub fn search_results<E: Listed>(rows: &[(E, Vec<show::Model>)], now: DateTime) -> SearchResults {
    let mut data: Vec<ListingEntry> = rows
        .iter()
        .map(|(item, shows)| entry(item, shows, now))
        .collect();
    data.sort_by_key(|e| e.id);

    SearchResults {
        count: data.len(),
        data,
    }
}

/// Case-insensitive substring match on a name. Both sides are folded with
/// Unicode lowercasing, so accented capitals match too. An empty term matches
/// every name.
pub fn name_matches(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}
