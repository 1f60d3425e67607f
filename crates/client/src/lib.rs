//! Top-level client orchestrating the runtime setup and a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ RuntimeSetup (local runtime, optional bot runtime, species catalog)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The frontend only ever sees a `RuntimeHandle`; the client owns the
//! runtimes and shuts them down once the frontend returns.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use client_bootstrap::{CatalogStatus, RuntimeSetup};
use client_frontend_core::view_model::GalleryView;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. Client::builder() receives the setup and the frontend
/// 2. Client::run() transfers control to the frontend (blocking)
/// 3. On frontend exit, the bot and local runtimes are shut down
pub struct Client {
    setup: RuntimeSetup,
    frontend: Box<dyn Frontend>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the frontend until the user quits, then stop the runtimes.
    ///
    /// A frontend error is returned in preference to a shutdown error.
    pub async fn run(self) -> Result<()> {
        let Client {
            setup,
            mut frontend,
        } = self;

        let frontend_result = frontend.run(setup.runtime.handle()).await;
        if let Err(error) = &frontend_result {
            tracing::error!("Frontend error: {:#}", error);
        }

        let shutdown_result = setup.shutdown().await;
        frontend_result.and(shutdown_result)
    }
}

/// Gallery contents for the catalog fetched at startup.
pub fn gallery_view(catalog: &CatalogStatus) -> GalleryView {
    match catalog {
        CatalogStatus::Loaded(species) => GalleryView::from_species(species),
        CatalogStatus::Failed(error) => GalleryView::failed(error.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::ensure;
    use async_trait::async_trait;
    use client_bootstrap::{ClientConfig, RuntimeBuilder};
    use client_catalog::Species;
    use game_core::{Lifecycle, Status};
    use runtime::RuntimeHandle;

    fn species(n: usize) -> Vec<Species> {
        (1..=n)
            .map(|id| Species {
                id: id.to_string(),
                name: format!("species-{id}"),
                detail_url: format!("https://pokeapi.co/api/v2/pokemon/{id}/"),
                sprite_url: format!("https://sprites.test/{id}.svg"),
            })
            .collect()
    }

    async fn setup() -> RuntimeSetup {
        let mut config = ClientConfig::default();
        config.catalog.deck_size = 4;
        config.game.deck_size = 4;
        RuntimeBuilder::new(config)
            .species(species(4))
            .build()
            .await
            .unwrap()
    }

    /// Flips one card against the bot and quits.
    struct FlipOnce;

    #[async_trait]
    impl Frontend for FlipOnce {
        async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
            let state = handle.query_state().await?;
            ensure!(state.lifecycle == Lifecycle::Playing, "game not dealt");

            let card = state.cards[0].id.clone();
            let reconciliation = handle.flip_card(card).await?;
            ensure!(
                reconciliation.status == Some(Status::CardFlipped),
                "unexpected status {:?}",
                reconciliation.status
            );
            Ok(())
        }
    }

    struct Fails;

    #[async_trait]
    impl Frontend for Fails {
        async fn run(&mut self, _handle: RuntimeHandle) -> Result<()> {
            anyhow::bail!("terminal unavailable")
        }
    }

    #[tokio::test]
    async fn runs_frontend_against_the_bot_then_shuts_down() {
        let client = Client::builder()
            .runtime(setup().await)
            .frontend(FlipOnce)
            .build()
            .unwrap();

        client.run().await.unwrap();
    }

    #[tokio::test]
    async fn frontend_errors_are_returned() {
        let client = Client::builder()
            .runtime(setup().await)
            .frontend(Fails)
            .build()
            .unwrap();

        let error = client.run().await.unwrap_err();
        assert_eq!(error.to_string(), "terminal unavailable");
    }

    #[test]
    fn builder_requires_a_frontend() {
        assert!(Client::builder().build().is_err());
    }

    #[test]
    fn failed_catalog_becomes_gallery_error() {
        let gallery = gallery_view(&CatalogStatus::Failed("offline".into()));
        assert_eq!(gallery.error.as_deref(), Some("offline"));

        let gallery = gallery_view(&CatalogStatus::Loaded(species(3)));
        assert_eq!(gallery.entries.len(), 3);
    }
}
