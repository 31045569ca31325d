//! Domain model for the classifieds marketplace.

pub mod listing;
pub mod user;

pub use listing::{Category, City, Listing, ListingFilters, NewListing};
pub use user::UserProfile;
