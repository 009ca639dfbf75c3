// Service exports
pub mod catalog;
pub mod pokeapi;

pub use catalog::{CatalogClient, CatalogError};
pub use pokeapi::{PokeApiClient, PokeApiError};
