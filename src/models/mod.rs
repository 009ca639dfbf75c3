// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AbilitySlot, DetailRecord, ListingEntry, ListingPage, NamedResource, Sprites, StatEntry, StatRef, TypeSlot};
pub use requests::DetailPath;
pub use responses::{ErrorResponse, HealthResponse};
