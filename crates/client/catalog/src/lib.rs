//! Species catalog backed by the public PokéAPI.
//!
//! Provides the paginated species listing used for the gallery page and for
//! the duel deck, plus the sprite URL derivation shared by both.

pub mod client;
pub mod error;
pub mod types;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use types::{Species, SpeciesPage, SpeciesRecord};

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default sprite directory; sprites live at `<base>/<id>.svg`.
pub const DEFAULT_SPRITE_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/dream-world";

/// Page size of the gallery and of the default deck.
pub const DEFAULT_PAGE_SIZE: usize = 20;
