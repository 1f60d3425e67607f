//! Catalog type definitions.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Position of the id in a detail URL split on `/`:
/// `https:`, ``, host, `api`, `v2`, `pokemon`, **id**.
const ID_SEGMENT: usize = 6;

/// One entry of a listing, as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SpeciesRecord {
    pub name: String,
    /// Detail URL, e.g. `https://pokeapi.co/api/v2/pokemon/25/`.
    pub url: String,
}

/// A page of the species listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SpeciesPage {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<SpeciesRecord>,
}

impl SpeciesPage {
    /// Resolves every record on the page. Fails on the first record without
    /// an id.
    pub fn species(&self, sprite_base_url: &str) -> Result<Vec<Species>> {
        self.results
            .iter()
            .map(|record| Species::from_record(record, sprite_base_url))
            .collect()
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// A species with its derived id and sprite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    pub id: String,
    pub name: String,
    pub detail_url: String,
    pub sprite_url: String,
}

impl Species {
    pub fn from_record(record: &SpeciesRecord, sprite_base_url: &str) -> Result<Self> {
        let id = species_id(&record.url)?;
        Ok(Self {
            sprite_url: sprite_url(sprite_base_url, id),
            id: id.to_owned(),
            name: record.name.clone(),
            detail_url: record.url.clone(),
        })
    }
}

/// Extracts the species id from a detail URL.
pub fn species_id(detail_url: &str) -> Result<&str> {
    detail_url
        .split('/')
        .nth(ID_SEGMENT)
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| CatalogError::MissingId(detail_url.to_owned()))
}

pub fn sprite_url(sprite_base_url: &str, id: &str) -> String {
    format!("{}/{}.svg", sprite_base_url.trim_end_matches('/'), id)
}
