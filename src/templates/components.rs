use chrono::NaiveDateTime;
use maud::{html, Markup};

use crate::services::{ArtistShowView, ListingEntry, ShowView, VenueShowView};

pub const GENRE_CHOICES: [&str; 19] = [
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

pub const STATE_CHOICES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x300/1a1a1a/ffffff?text=Fyyur";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    Full,
    Medium,
}

impl DateFormat {
    fn pattern(self) -> &'static str {
        match self {
            Self::Full => "%A %B, %-d, %Y at %-I:%M%p",
            Self::Medium => "%a %m, %d, %Y %-I:%M%p",
        }
    }
}

/// Render an ISO 8601 start time for display. Input that does not parse is
/// shown as-is.
pub fn format_datetime(value: &str, format: DateFormat) -> String {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|ts| ts.format(format.pattern()).to_string())
        .unwrap_or_else(|_| value.to_string())
}

pub fn flash_message(message: &str) -> Markup {
    html! {
        div class="p-4 mb-6 rounded-md bg-blue-50 text-blue-800" role="alert" {
            (message)
        }
    }
}

pub fn genre_chips(genres: &[String]) -> Markup {
    html! {
        div class="flex flex-wrap gap-2" {
            @for genre in genres {
                span class="px-3 py-1 text-xs font-semibold rounded-full bg-gray-200 text-gray-800" {
                    (genre)
                }
            }
        }
    }
}

/// One venue or artist in an index or search listing.
pub fn listing_row(base_url: &str, entry: &ListingEntry) -> Markup {
    html! {
        li class="py-3 flex justify-between items-center" {
            a href=(format!("{}/{}", base_url, entry.id)) class="text-primary hover:underline font-medium" {
                (entry.name)
            }
            span class="text-xs text-gray-500" {
                (entry.num_upcoming_shows) " upcoming"
            }
        }
    }
}

fn show_card(href: String, title: &str, image_link: Option<&str>, start_time: &str) -> Markup {
    html! {
        a href=(href) class="block bg-white rounded-lg shadow-md overflow-hidden hover:shadow-lg transition-shadow" {
            img
                src=(image_link.unwrap_or(PLACEHOLDER_IMAGE))
                alt=(title)
                class="w-full h-40 object-cover"
                loading="lazy";
            div class="p-4" {
                h5 class="font-semibold text-gray-900 truncate" { (title) }
                p class="text-sm text-gray-600" { (format_datetime(start_time, DateFormat::Full)) }
            }
        }
    }
}

pub fn venue_show_card(show: &VenueShowView) -> Markup {
    show_card(
        format!("/artists/{}", show.artist_id),
        &show.artist_name,
        show.artist_image_link.as_deref(),
        &show.start_time,
    )
}

pub fn artist_show_card(show: &ArtistShowView) -> Markup {
    show_card(
        format!("/venues/{}", show.venue_id),
        &show.venue_name,
        show.venue_image_link.as_deref(),
        &show.start_time,
    )
}

pub fn show_row(show: &ShowView) -> Markup {
    html! {
        div class="flex items-center gap-4 bg-white rounded-lg shadow-sm p-4" {
            img
                src=(show.artist_image_link.as_deref().unwrap_or(PLACEHOLDER_IMAGE))
                alt=(show.artist_name)
                class="w-16 h-16 rounded-full object-cover";
            div {
                p class="text-sm text-gray-500" { (format_datetime(&show.start_time, DateFormat::Medium)) }
                p class="font-semibold" {
                    a href=(format!("/artists/{}", show.artist_id)) class="hover:underline" { (show.artist_name) }
                    " playing at "
                    a href=(format!("/venues/{}", show.venue_id)) class="hover:underline" { (show.venue_name) }
                }
            }
        }
    }
}

pub fn shows_section(title: &str, count: usize, cards: Vec<Markup>) -> Markup {
    html! {
        section class="mt-8" {
            h2 class="text-xl font-semibold text-gray-900 mb-4" {
                (count) " " (title) " " @if count == 1 { "Show" } @else { "Shows" }
            }
            div class="grid grid-cols-1 md:grid-cols-3 gap-6" {
                @for card in cards {
                    (card)
                }
            }
        }
    }
}

pub fn text_input(label: &str, name: &str, value: &str, required: bool) -> Markup {
    html! {
        div class="mb-4" {
            label for=(name) class="block text-sm font-medium text-gray-700 mb-2" { (label) }
            input
                type="text"
                id=(name)
                name=(name)
                value=(value)
                required[required]
                class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary";
        }
    }
}

pub fn state_select(selected: &str) -> Markup {
    html! {
        div class="mb-4" {
            label for="state" class="block text-sm font-medium text-gray-700 mb-2" { "State" }
            select id="state" name="state" required class="w-full px-3 py-2 border border-gray-300 rounded-md" {
                @for state in STATE_CHOICES {
                    option value=(state) selected[state == selected] { (state) }
                }
            }
        }
    }
}

pub fn genres_select(selected: &[String]) -> Markup {
    html! {
        div class="mb-4" {
            label for="genres" class="block text-sm font-medium text-gray-700 mb-2" { "Genres" }
            select id="genres" name="genres" multiple class="w-full px-3 py-2 border border-gray-300 rounded-md h-40" {
                @for genre in GENRE_CHOICES {
                    option value=(genre) selected[selected.iter().any(|g| g == genre)] { (genre) }
                }
            }
        }
    }
}

pub fn seeking_checkbox(label: &str, name: &str, checked: bool) -> Markup {
    html! {
        div class="mb-4 flex items-center" {
            input type="checkbox" id=(name) name=(name) value="y" checked[checked] class="mr-2";
            label for=(name) class="text-sm font-medium text-gray-700" { (label) }
        }
    }
}

pub fn search_form(action: &str, placeholder: &str, term: &str) -> Markup {
    html! {
        form method="post" action=(action) class="flex gap-2" {
            input
                type="search"
                name="search_term"
                value=(term)
                placeholder=(placeholder)
                class="px-3 py-2 border border-gray-300 rounded-md";
            button type="submit" class="bg-primary text-white px-4 py-2 rounded-md" { "Search" }
        }
    }
}
