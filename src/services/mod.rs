pub mod detail;
pub mod genres;
pub mod listing;
pub mod schedule;
pub mod views;

pub use detail::{ArtistRecord, VenueRecord};
pub use genres::GenreDelta;
pub use views::{
    ArtistDetailView, ArtistShowView, ArtistSummary, GroupedVenueView, ListingEntry,
    SearchResults, ShowView, VenueDetailView, VenueShowView,
};
