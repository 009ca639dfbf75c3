//! Pokedex Relay - thin backend in front of PokeAPI for the catalog viewer
//!
//! Exposes the listing and detail endpoints, validates client input before
//! any upstream call, and translates upstream failures into a small JSON
//! error contract. Also ships the typed consumer side of that contract.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use config::Settings;
pub use self::core::{filter_listing, PokemonName, ViewState};
pub use models::{DetailRecord, ErrorResponse, ListingEntry};
pub use routes::{configure_routes, AppState, RelayError};
pub use services::{CatalogClient, PokeApiClient, PokeApiError};
