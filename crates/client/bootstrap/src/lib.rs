//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading, catalog and deck loading, and runtime
//! setup (including the optional bot opponent) that can be reused by the
//! terminal front-end or any other.
pub mod builder;
pub mod config;
pub mod deck;

pub use builder::{RuntimeBuilder, RuntimeSetup};
pub use config::{BotSettings, CatalogConfig, ChannelConfig, ClientConfig};
pub use deck::{CatalogStatus, deck_from_species, load_catalog};
