//! Builds the hub, runtimes and catalog bundle used by front-ends.
use anyhow::{Context, Result};
use client_catalog::Species;
use runtime::{MemoryHub, Runtime};

use crate::config::ClientConfig;
use crate::deck::{CatalogStatus, deck_from_species, load_catalog};

/// Builder that assembles the local runtime, the optional bot opponent and
/// the species catalog for clients.
pub struct RuntimeBuilder {
    config: ClientConfig,
    species: Option<Vec<Species>>,
    seed: Option<u64>,
}

impl RuntimeBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            species: None,
            seed: None,
        }
    }

    /// Use these species instead of fetching the catalog.
    pub fn species(mut self, species: Vec<Species>) -> Self {
        self.species = Some(species);
        self
    }

    /// Fix the local shuffle seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub async fn build(self) -> Result<RuntimeSetup> {
        let catalog = match self.species {
            Some(species) => CatalogStatus::Loaded(species),
            None => load_catalog(&self.config.catalog).await,
        };
        let deck = deck_from_species(catalog.species(), self.config.catalog.deck_size);

        let hub = MemoryHub::with_capacity(self.config.channels.event_buffer);

        let mut runtime_config = self.config.runtime_config();
        runtime_config.seed = self.seed;

        let runtime = Runtime::builder()
            .config(runtime_config)
            .transport(hub.register().await)
            .deck(deck.clone())
            .build()
            .await
            .context("failed to start local runtime")?;

        let bot = if self.config.bot.enabled && !deck.is_empty() {
            let mut bot = Runtime::builder()
                .config(self.config.runtime_config())
                .transport(hub.register().await)
                .deck(deck)
                .build()
                .await
                .context("failed to start bot runtime")?;

            // Deal the local table before the bot can reach it.
            runtime
                .handle()
                .connect(bot.token())
                .await
                .context("failed to connect to bot")?;
            bot.spawn_bot(self.config.bot.bot_config(runtime.token()));

            tracing::info!(bot = bot.token(), "bot opponent ready");
            Some(bot)
        } else {
            None
        };

        Ok(RuntimeSetup {
            config: self.config,
            hub,
            runtime,
            bot,
            catalog,
        })
    }
}

pub struct RuntimeSetup {
    pub config: ClientConfig,
    pub hub: MemoryHub,
    pub runtime: Runtime,
    pub bot: Option<Runtime>,
    pub catalog: CatalogStatus,
}

impl RuntimeSetup {
    /// Token of the bot opponent, if one is running.
    pub fn bot_token(&self) -> Option<&str> {
        self.bot.as_ref().map(Runtime::token)
    }

    /// Stop the bot first so the local worker can drain. Each endpoint is
    /// removed from the hub once its runtime has stopped.
    pub async fn shutdown(self) -> Result<()> {
        if let Some(bot) = self.bot {
            let token = bot.token().to_owned();
            bot.shutdown().await.context("bot runtime shutdown failed")?;
            self.hub.unregister(&token).await;
        }

        let token = self.runtime.token().to_owned();
        self.runtime
            .shutdown()
            .await
            .context("runtime shutdown failed")?;
        self.hub.unregister(&token).await;
        tracing::debug!(%token, "hub endpoints released");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Lifecycle;

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

    fn config(bot: bool) -> ClientConfig {
        let mut config = ClientConfig::default();
        config.catalog.deck_size = 6;
        config.game.deck_size = 6;
        config.bot.enabled = bot;
        config
    }

    #[tokio::test]
    async fn bot_setup_deals_the_local_table() {
        let setup = RuntimeBuilder::new(config(true))
            .species(species(10))
            .seed(5)
            .build()
            .await
            .unwrap();

        let handle = setup.runtime.handle();
        let session = handle.query_session().await.unwrap();
        assert_eq!(session.peer_token.as_deref(), setup.bot_token());

        let state = handle.query_state().await.unwrap();
        assert_eq!(state.lifecycle, Lifecycle::Playing);
        assert_eq!(state.cards.len(), 6);
        assert_eq!(setup.catalog.species().len(), 10);

        drop(handle);
        setup.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn shutdown_releases_hub_endpoints() {
        let setup = RuntimeBuilder::new(config(true))
            .species(species(6))
            .build()
            .await
            .unwrap();
        let hub = setup.hub.clone();
        let local = setup.runtime.token().to_owned();
        let bot = setup.bot_token().map(str::to_owned).unwrap();
        assert!(hub.is_registered(&local).await);
        assert!(hub.is_registered(&bot).await);

        setup.shutdown().await.unwrap();

        assert!(!hub.is_registered(&local).await);
        assert!(!hub.is_registered(&bot).await);
    }

    #[tokio::test]
    async fn without_bot_the_table_waits_for_a_peer() {
        let setup = RuntimeBuilder::new(config(false))
            .species(species(6))
            .build()
            .await
            .unwrap();

        assert!(setup.bot.is_none());
        let state = setup.runtime.handle().query_state().await.unwrap();
        assert_eq!(state.lifecycle, Lifecycle::Setup);
    }

    #[tokio::test]
    async fn empty_catalog_skips_the_bot() {
        let setup = RuntimeBuilder::new(config(true))
            .species(Vec::new())
            .build()
            .await
            .unwrap();
        assert!(setup.bot_token().is_none());
    }
}
