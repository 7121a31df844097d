use maud::{html, Markup};

use crate::{
    db::attributes::{ArtistAttributes, VenueAttributes},
    services::{
        ArtistDetailView, ArtistSummary, GroupedVenueView, SearchResults, ShowView,
        VenueDetailView,
    },
};

use super::components::{
    artist_show_card, genre_chips, genres_select, listing_row, search_form, seeking_checkbox,
    show_row, shows_section, state_select, text_input, venue_show_card,
};
use super::layout::base_layout;

/// Whether a form page creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i32),
}

pub fn home_page(flash: Option<&str>) -> Markup {
    base_layout(
        "Home",
        flash,
        html! {
            div class="text-center py-12" {
                h1 class="text-4xl font-bold text-gray-900" { "Fyyur" }
                p class="mt-4 text-gray-600" { "Find local venues and artists, and book the next show." }
                div class="mt-8 flex justify-center gap-4" {
                    a href="/venues/create" class="bg-primary text-white px-4 py-2 rounded-md" { "Post a venue" }
                    a href="/artists/create" class="bg-primary text-white px-4 py-2 rounded-md" { "Post an artist" }
                    a href="/shows/create" class="bg-primary text-white px-4 py-2 rounded-md" { "Post a show" }
                }
            }
        },
    )
}

pub fn venues_page(areas: &[GroupedVenueView]) -> Markup {
    base_layout(
        "Venues",
        None,
        html! {
            div class="flex justify-between items-center mb-6" {
                h1 class="text-2xl font-bold text-gray-900" { "Venues" }
                (search_form("/venues/search", "Find a venue", ""))
            }
            @if areas.is_empty() {
                p class="text-gray-600" { "No venues listed yet." }
            }
            @for area in areas {
                section class="mb-8" {
                    h2 class="text-lg font-semibold text-gray-800" { (area.city) ", " (area.state) }
                    ul class="divide-y divide-gray-200" {
                        @for venue in &area.venues {
                            (listing_row("/venues", venue))
                        }
                    }
                }
            }
        },
    )
}

pub fn artists_page(artists: &[ArtistSummary]) -> Markup {
    base_layout(
        "Artists",
        None,
        html! {
            div class="flex justify-between items-center mb-6" {
                h1 class="text-2xl font-bold text-gray-900" { "Artists" }
                (search_form("/artists/search", "Find an artist", ""))
            }
            ul class="divide-y divide-gray-200" {
                @for artist in artists {
                    li class="py-3" {
                        a href=(format!("/artists/{}", artist.id)) class="text-primary hover:underline font-medium" {
                            (artist.name)
                        }
                    }
                }
            }
        },
    )
}

/// Search results for either venues (`/venues`) or artists (`/artists`).
pub fn search_page(base_url: &str, term: &str, results: &SearchResults) -> Markup {
    let action = format!("{}/search", base_url);
    base_layout(
        "Search",
        None,
        html! {
            (search_form(&action, "Search", term))
            h1 class="text-2xl font-bold text-gray-900 my-6" {
                "Number of search results for \"" (term) "\": " (results.count)
            }
            ul class="divide-y divide-gray-200" {
                @for entry in &results.data {
                    (listing_row(base_url, entry))
                }
            }
        },
    )
}

fn contact_details(
    address: Option<&str>,
    city: &str,
    state: &str,
    phone: Option<&str>,
    website: Option<&str>,
    facebook_link: Option<&str>,
) -> Markup {
    html! {
        dl class="space-y-2 text-gray-700" {
            @if let Some(address) = address {
                div { dt class="inline font-medium" { "Address: " } dd class="inline" { (address) } }
            }
            div { dt class="inline font-medium" { "Location: " } dd class="inline" { (city) ", " (state) } }
            @if let Some(phone) = phone {
                div { dt class="inline font-medium" { "Phone: " } dd class="inline" { (phone) } }
            }
            @if let Some(website) = website {
                div { dt class="inline font-medium" { "Website: " } dd class="inline" { a href=(website) { (website) } } }
            }
            @if let Some(facebook) = facebook_link {
                div { dt class="inline font-medium" { "Facebook: " } dd class="inline" { a href=(facebook) { (facebook) } } }
            }
        }
    }
}

fn seeking_banner(seeking: bool, seeking_what: &str, description: Option<&str>) -> Markup {
    html! {
        @if seeking {
            div class="mt-4 p-4 rounded-md bg-green-50 text-green-800" {
                p class="font-semibold" { "Currently seeking " (seeking_what) }
                @if let Some(description) = description {
                    p class="text-sm mt-1" { (description) }
                }
            }
        } @else {
            p class="mt-4 text-gray-500" { "Not currently seeking " (seeking_what) }
        }
    }
}

pub fn venue_detail_page(venue: &VenueDetailView) -> Markup {
    base_layout(
        &venue.name,
        None,
        html! {
            div class="flex flex-col md:flex-row gap-8" {
                div class="flex-grow" {
                    h1 class="text-3xl font-bold text-gray-900" { (venue.name) }
                    p class="text-sm text-gray-500 mb-4" { "ID: " (venue.id) }
                    (genre_chips(&venue.genres))
                    div class="mt-4" {
                        (contact_details(
                            Some(venue.address.as_str()),
                            &venue.city,
                            &venue.state,
                            venue.phone.as_deref(),
                            venue.website.as_deref(),
                            venue.facebook_link.as_deref(),
                        ))
                    }
                    (seeking_banner(venue.seeking_talent, "talent", venue.seeking_description.as_deref()))
                    div class="mt-6 flex gap-4" {
                        a href=(format!("/venues/{}/edit", venue.id)) class="px-4 py-2 border rounded-md" { "Edit" }
                        button
                            class="px-4 py-2 bg-red-600 text-white rounded-md"
                            hx-delete=(format!("/venues/{}", venue.id))
                            hx-confirm=(format!("Delete {}?", venue.name))
                            hx-target="body"
                            hx-push-url="/" {
                            "Delete"
                        }
                    }
                }
                @if let Some(image) = &venue.image_link {
                    img src=(image) alt=(venue.name) class="w-full md:w-80 rounded-lg shadow-md";
                }
            }

            (shows_section(
                "Upcoming",
                venue.upcoming_shows_count,
                venue.upcoming_shows.iter().map(venue_show_card).collect(),
            ))
            (shows_section(
                "Past",
                venue.past_shows_count,
                venue.past_shows.iter().map(venue_show_card).collect(),
            ))
        },
    )
}

pub fn artist_detail_page(artist: &ArtistDetailView) -> Markup {
    base_layout(
        &artist.name,
        None,
        html! {
            div class="flex flex-col md:flex-row gap-8" {
                div class="flex-grow" {
                    h1 class="text-3xl font-bold text-gray-900" { (artist.name) }
                    p class="text-sm text-gray-500 mb-4" { "ID: " (artist.id) }
                    (genre_chips(&artist.genres))
                    div class="mt-4" {
                        (contact_details(
                            None,
                            &artist.city,
                            &artist.state,
                            artist.phone.as_deref(),
                            artist.website.as_deref(),
                            artist.facebook_link.as_deref(),
                        ))
                    }
                    (seeking_banner(artist.seeking_venue, "performance venues", artist.seeking_description.as_deref()))
                    div class="mt-6 flex gap-4" {
                        a href=(format!("/artists/{}/edit", artist.id)) class="px-4 py-2 border rounded-md" { "Edit" }
                        button
                            class="px-4 py-2 bg-red-600 text-white rounded-md"
                            hx-delete=(format!("/artists/{}", artist.id))
                            hx-confirm=(format!("Delete {}?", artist.name))
                            hx-target="body"
                            hx-push-url="/" {
                            "Delete"
                        }
                    }
                }
                @if let Some(image) = &artist.image_link {
                    img src=(image) alt=(artist.name) class="w-full md:w-80 rounded-lg shadow-md";
                }
            }

            (shows_section(
                "Upcoming",
                artist.upcoming_shows_count,
                artist.upcoming_shows.iter().map(artist_show_card).collect(),
            ))
            (shows_section(
                "Past",
                artist.past_shows_count,
                artist.past_shows.iter().map(artist_show_card).collect(),
            ))
        },
    )
}

pub fn shows_page(shows: &[ShowView]) -> Markup {
    base_layout(
        "Shows",
        None,
        html! {
            h1 class="text-2xl font-bold text-gray-900 mb-6" { "Shows" }
            div class="space-y-4" {
                @for show in shows {
                    (show_row(show))
                }
            }
        },
    )
}

fn form_heading(mode: FormMode, noun: &str) -> String {
    match mode {
        FormMode::Create => format!("List a new {}", noun),
        FormMode::Edit(_) => format!("Edit {}", noun),
    }
}

fn form_action(mode: FormMode, base_url: &str) -> String {
    match mode {
        FormMode::Create => format!("{}/create", base_url),
        FormMode::Edit(id) => format!("{}/{}/edit", base_url, id),
    }
}

pub fn venue_form_page(mode: FormMode, venue: &VenueAttributes, genres: &[String]) -> Markup {
    let heading = form_heading(mode, "venue");
    base_layout(
        &heading,
        None,
        html! {
            h1 class="text-2xl font-bold text-gray-900 mb-6" { (heading) }
            form method="post" action=(form_action(mode, "/venues")) class="max-w-xl" {
                (text_input("Name", "name", &venue.name, true))
                (text_input("City", "city", &venue.city, true))
                (state_select(&venue.state))
                (text_input("Address", "address", &venue.address, true))
                (text_input("Phone", "phone", venue.phone.as_deref().unwrap_or_default(), false))
                (text_input("Image Link", "image_link", venue.image_link.as_deref().unwrap_or_default(), false))
                (genres_select(genres))
                (text_input("Facebook Link", "facebook_link", venue.facebook_link.as_deref().unwrap_or_default(), false))
                (text_input("Website Link", "website_link", venue.website_link.as_deref().unwrap_or_default(), false))
                (seeking_checkbox("Looking for Talent", "seeking_talent", venue.seeking_talent))
                (text_input("Seeking Description", "seeking_description", venue.seeking_description.as_deref().unwrap_or_default(), false))
                button type="submit" class="bg-primary text-white px-4 py-2 rounded-md" { "Save Venue" }
            }
        },
    )
}

pub fn artist_form_page(mode: FormMode, artist: &ArtistAttributes, genres: &[String]) -> Markup {
    let heading = form_heading(mode, "artist");
    base_layout(
        &heading,
        None,
        html! {
            h1 class="text-2xl font-bold text-gray-900 mb-6" { (heading) }
            form method="post" action=(form_action(mode, "/artists")) class="max-w-xl" {
                (text_input("Name", "name", &artist.name, true))
                (text_input("City", "city", &artist.city, true))
                (state_select(&artist.state))
                (text_input("Phone", "phone", artist.phone.as_deref().unwrap_or_default(), false))
                (text_input("Image Link", "image_link", artist.image_link.as_deref().unwrap_or_default(), false))
                (genres_select(genres))
                (text_input("Facebook Link", "facebook_link", artist.facebook_link.as_deref().unwrap_or_default(), false))
                (text_input("Website Link", "website_link", artist.website_link.as_deref().unwrap_or_default(), false))
                (seeking_checkbox("Looking for Venues", "seeking_venue", artist.seeking_venue))
                (text_input("Seeking Description", "seeking_description", artist.seeking_description.as_deref().unwrap_or_default(), false))
                button type="submit" class="bg-primary text-white px-4 py-2 rounded-md" { "Save Artist" }
            }
        },
    )
}

pub fn show_form_page() -> Markup {
    base_layout(
        "New show",
        None,
        html! {
            h1 class="text-2xl font-bold text-gray-900 mb-6" { "List a new show" }
            form method="post" action="/shows/create" class="max-w-xl" {
                (text_input("Artist ID", "artist_id", "", true))
                (text_input("Venue ID", "venue_id", "", true))
                div class="mb-4" {
                    label for="start_time" class="block text-sm font-medium text-gray-700 mb-2" { "Start Time" }
                    input
                        type="datetime-local"
                        id="start_time"
                        name="start_time"
                        required
                        class="w-full px-3 py-2 border border-gray-300 rounded-md";
                }
                button type="submit" class="bg-primary text-white px-4 py-2 rounded-md" { "Create Show" }
            }
        },
    )
}

pub fn not_found_page() -> Markup {
    base_layout(
        "Not Found",
        None,
        html! {
            div class="text-center py-12" {
                h1 class="text-4xl font-bold text-gray-900" { "404" }
                p class="mt-4 text-gray-600" { "Not found" }
                a href="/" class="mt-6 inline-block text-primary hover:underline" { "Back home" }
            }
        },
    )
}

pub fn server_error_page(flash: Option<&str>) -> Markup {
    base_layout(
        "Server Error",
        flash,
        html! {
            div class="text-center py-12" {
                h1 class="text-4xl font-bold text-gray-900" { "500" }
                p class="mt-4 text-gray-600" { "Something went wrong" }
                a href="/" class="mt-6 inline-block text-primary hover:underline" { "Back home" }
            }
        },
    )
}
