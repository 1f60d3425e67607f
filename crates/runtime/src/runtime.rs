//! High-level runtime orchestrator.
//!
//! The runtime owns background workers, wires up command/event channels, and
//! exposes a builder-based API for clients to drive a duel.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use game_core::{CardFace, GameConfig, GameState};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::clock::{Clock, SystemClock};
use crate::events::EventBus;
use crate::providers::{BotConfig, BotPlayer};
use crate::transport::Transport;
use crate::workers::{Command, GameWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Shuffle seed; fresh entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
            seed: None,
        }
    }
}

/// Main runtime that hosts one peer of a duel
///
/// Design: Runtime owns workers and coordinates execution.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    // Shared handle (can be cloned for clients)
    handle: RuntimeHandle,

    // Background workers
    game_worker_handle: JoinHandle<()>,
    bot_handle: Option<JoinHandle<()>>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Token this runtime is reachable under.
    pub fn token(&self) -> &str {
        self.handle.token()
    }

    /// Whether a bot is playing this runtime.
    pub fn has_bot(&self) -> bool {
        self.bot_handle.is_some()
    }

    /// Attach an automated player to this runtime.
    ///
    /// Replaces (and stops) any bot already attached.
    pub fn spawn_bot(&mut self, config: BotConfig) {
        if let Some(previous) = self.bot_handle.take() {
            previous.abort();
        }
        let bot = BotPlayer::new(self.handle.clone(), config);
        self.bot_handle = Some(tokio::spawn(bot.run()));
    }

    /// Shutdown the runtime gracefully
    ///
    /// Waits for the game worker to drain, which happens once every other
    /// clone of the handle is dropped as well.
    pub async fn shutdown(self) -> Result<()> {
        if let Some(bot) = self.bot_handle {
            bot.abort();
            // An aborted task reports a cancellation error.
            let _ = bot.await;
        }

        drop(self.handle);

        self.game_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    deck: Vec<CardFace>,
    transport: Option<Arc<dyn Transport>>,
    clock: Option<Arc<dyn Clock>>,
    bot: Option<BotConfig>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            deck: Vec::new(),
            transport: None,
            clock: None,
            bot: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Species dealt into every game. Without a deck the runtime connects
    /// but never leaves setup.
    pub fn deck(mut self, deck: Vec<CardFace>) -> Self {
        self.deck = deck;
        self
    }

    /// Set required notification transport
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Set a shared transport (optional alternative to [`Self::transport`])
    pub fn shared_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Override the reveal clock (defaults to the wall clock)
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Fix the shuffle seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Let a bot play this runtime once built
    pub fn bot(mut self, config: BotConfig) -> Self {
        self.bot = Some(config);
        self
    }

    /// Build the runtime
    pub async fn build(self) -> Result<Runtime> {
        let transport = self.transport.ok_or(RuntimeError::MissingTransport)?;
        if transport.token().is_empty() {
            return Err(RuntimeError::MissingLocalToken);
        }

        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let seed = self.config.seed.unwrap_or_else(rand::random);

        let mut deck = self.deck;
        deck.truncate(self.config.game_config.deck_size);
        let initial_state = GameState::with_seed(seed, deck);

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone(), transport.token());

        let game_worker = GameWorker::new(
            initial_state,
            self.config.game_config,
            transport,
            command_rx,
            event_bus,
            clock,
        );

        let game_worker_handle = tokio::spawn(async move {
            game_worker.run().await;
        });

        let mut runtime = Runtime {
            handle,
            game_worker_handle,
            bot_handle: None,
        };

        if let Some(bot) = self.bot {
            runtime.spawn_bot(bot);
        }

        Ok(runtime)
    }
}
