//! Species loading for the gallery and the duel deck.
use client_catalog::{CatalogClient, DEFAULT_PAGE_SIZE, Species};
use game_core::CardFace;

use crate::config::CatalogConfig;

/// Outcome of the startup catalog fetch.
///
/// A failure is kept as display text: the gallery shows it and the duel
/// stays in setup. There is no retry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogStatus {
    Loaded(Vec<Species>),
    Failed(String),
}

impl CatalogStatus {
    pub fn species(&self) -> &[Species] {
        match self {
            CatalogStatus::Loaded(species) => species,
            CatalogStatus::Failed(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            CatalogStatus::Loaded(_) => None,
            CatalogStatus::Failed(error) => Some(error),
        }
    }
}

/// Fetches the first page of species (at least a full deck).
pub async fn load_catalog(config: &CatalogConfig) -> CatalogStatus {
    let client = CatalogClient::new(config.base_url.clone(), config.sprite_base_url.clone());
    let limit = config.deck_size.max(DEFAULT_PAGE_SIZE);

    match client.fetch_species(limit).await {
        Ok(species) => {
            tracing::info!(count = species.len(), "species catalog loaded");
            CatalogStatus::Loaded(species)
        }
        Err(error) => {
            tracing::warn!(error = %error, "species catalog unavailable");
            CatalogStatus::Failed(error.to_string())
        }
    }
}

/// Card faces for the first `size` species.
pub fn deck_from_species(species: &[Species], size: usize) -> Vec<CardFace> {
    species
        .iter()
        .take(size)
        .map(|s| CardFace::new(s.name.clone(), s.sprite_url.clone()))
        .collect()
}
