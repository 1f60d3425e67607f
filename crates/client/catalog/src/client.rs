//! HTTP client for the species listing.

use crate::error::{CatalogError, Result};
use crate::types::{Species, SpeciesPage};
use crate::{DEFAULT_BASE_URL, DEFAULT_SPRITE_BASE_URL};

/// Species catalog client using the PokéAPI REST endpoints.
///
/// Failures are returned as-is; there is no retry.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    /// API root, e.g. `https://pokeapi.co/api/v2`
    base_url: String,

    /// Directory holding `<id>.svg` sprites
    sprite_base_url: String,

    /// HTTP client
    http_client: reqwest::Client,
}

impl CatalogClient {
    /// Create client for the public PokéAPI.
    pub fn pokeapi() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_SPRITE_BASE_URL)
    }

    pub fn new(base_url: impl Into<String>, sprite_base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, sprite_base_url, reqwest::Client::new())
    }

    /// Create client sharing an existing HTTP client.
    pub fn with_http_client(
        base_url: impl Into<String>,
        sprite_base_url: impl Into<String>,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            sprite_base_url: sprite_base_url.into(),
            http_client,
        }
    }

    pub fn sprite_base_url(&self) -> &str {
        &self.sprite_base_url
    }

    /// URL of the listing page starting at `offset`.
    pub fn page_url(&self, limit: usize, offset: usize) -> String {
        format!(
            "{}/pokemon/?limit={}&offset={}",
            self.base_url, limit, offset
        )
    }

    /// Fetch one page of the species listing.
    pub async fn fetch_page(&self, limit: usize, offset: usize) -> Result<SpeciesPage> {
        let url = self.page_url(limit, offset);
        self.get_page(url).await
    }

    /// Follow the `next` link of `page`, if any.
    pub async fn fetch_next(&self, page: &SpeciesPage) -> Result<Option<SpeciesPage>> {
        match &page.next {
            Some(next) => self.get_page(next.clone()).await.map(Some),
            None => Ok(None),
        }
    }

    /// Fetch the first `limit` species with their sprite URLs resolved.
    pub async fn fetch_species(&self, limit: usize) -> Result<Vec<Species>> {
        self.fetch_page(limit, 0)
            .await?
            .species(&self.sprite_base_url)
    }

    async fn get_page(&self, url: String) -> Result<SpeciesPage> {
        tracing::debug!(target: "catalog", %url, "fetching species page");

        let response = match self.http_client.get(&url).send().await {
            Ok(response) => response,
            Err(source) => return Err(CatalogError::Request { url, source }),
        };

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CatalogError::Status { url, status, body });
        }

        // Read the text first so decode errors can point at the URL.
        let text = match response.text().await {
            Ok(text) => text,
            Err(source) => return Err(CatalogError::Request { url, source }),
        };

        let page: SpeciesPage = match serde_json::from_str(&text) {
            Ok(page) => page,
            Err(source) => return Err(CatalogError::Decode { url, source }),
        };

        tracing::debug!(
            target: "catalog",
            count = page.count,
            received = page.results.len(),
            "species page fetched"
        );
        Ok(page)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::pokeapi()
    }
}
