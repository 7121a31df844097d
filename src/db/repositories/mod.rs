mod artists;
mod shows;
mod venues;

pub use artists::ArtistRepository;
pub use shows::ShowRepository;
pub use venues::VenueRepository;
