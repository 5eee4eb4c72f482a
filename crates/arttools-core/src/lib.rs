// Core domain logic for the art-tool storefront browser
pub mod catalog;
pub mod config;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod models;
pub mod provider;
pub mod providers;

pub use config::Config;
pub use error::Error;
pub use favorites::{FavoritesService, FavoritesStore, FAVORITES_KEY};
pub use provider::FavoritesProvider;

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;
