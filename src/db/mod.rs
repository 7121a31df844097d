pub mod attributes;
pub mod entities;
pub mod enums;
pub mod repositories;

pub use attributes::{ArtistAttributes, VenueAttributes};
pub use entities::*;
pub use enums::*;
