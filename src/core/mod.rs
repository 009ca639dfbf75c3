// Core exports
pub mod filter;
pub mod name;
pub mod presentation;
pub mod view_state;

pub use filter::filter_listing;
pub use name::{normalize_name, NameError, PokemonName, MAX_NAME_LEN};
pub use view_state::ViewState;
