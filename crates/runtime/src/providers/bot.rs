//! Automated opponent.
//!
//! The bot drives its own runtime through a [`RuntimeHandle`] exactly like a
//! human would: it connects to the opponent's token, flips a random face-down
//! card on every tick while a game is running, and asks for a rematch some
//! time after the game ends. By default it lets the opponent open each game
//! and only starts flipping once their first reveal has arrived.

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use game_core::{CardId, GameState, Lifecycle, Revealer};

use crate::api::{RuntimeError, RuntimeHandle};

/// Tunables for [`BotPlayer`].
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Token of the runtime the bot plays against.
    pub opponent_token: String,
    pub flip_interval: Duration,
    /// Pause between a finished game and the rematch request.
    pub rematch_delay: Duration,
    /// Fixed seed for card picks; fresh entropy when `None`.
    pub seed: Option<u64>,
    /// Hold back until the opponent has revealed a card in the current game.
    pub wait_for_opening: bool,
}

impl BotConfig {
    pub const DEFAULT_FLIP_INTERVAL: Duration = Duration::from_millis(1500);
    pub const DEFAULT_REMATCH_DELAY: Duration = Duration::from_secs(3);

    pub fn new(opponent_token: impl Into<String>) -> Self {
        Self {
            opponent_token: opponent_token.into(),
            flip_interval: Self::DEFAULT_FLIP_INTERVAL,
            rematch_delay: Self::DEFAULT_REMATCH_DELAY,
            seed: None,
            wait_for_opening: true,
        }
    }

    pub fn with_flip_interval(mut self, interval: Duration) -> Self {
        self.flip_interval = interval;
        self
    }

    pub fn with_rematch_delay(mut self, delay: Duration) -> Self {
        self.rematch_delay = delay;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn wait_for_opening(mut self, wait: bool) -> Self {
        self.wait_for_opening = wait;
        self
    }
}

pub struct BotPlayer {
    handle: RuntimeHandle,
    config: BotConfig,
    rng: StdRng,
    /// When the current game was first seen over.
    over_since: Option<Instant>,
}

impl BotPlayer {
    pub fn new(handle: RuntimeHandle, config: BotConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            handle,
            config,
            rng,
            over_since: None,
        }
    }

    /// Plays until the runtime shuts down.
    pub async fn run(mut self) {
        if let Err(error) = self.handle.connect(self.config.opponent_token.clone()).await {
            warn!(target: "runtime::bot", error = %error, "bot could not connect");
            return;
        }
        info!(
            target: "runtime::bot",
            token = self.handle.token(),
            opponent = %self.config.opponent_token,
            "bot joined"
        );

        let mut ticker = tokio::time::interval(self.config.flip_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;

            let state = match self.handle.query_state().await {
                Ok(state) => state,
                Err(_) => break,
            };

            if let Err(error) = self.step(&state).await {
                match error {
                    RuntimeError::CommandChannelClosed | RuntimeError::ReplyChannelClosed(_) => {
                        break;
                    }
                    // The table can change between the query and the flip.
                    error if error.is_rejection() => {
                        debug!(target: "runtime::bot", error = %error, "bot move refused");
                    }
                    error => warn!(target: "runtime::bot", error = %error, "bot move failed"),
                }
            }
        }

        debug!(target: "runtime::bot", "bot stopped");
    }

    async fn step(&mut self, state: &GameState) -> Result<(), RuntimeError> {
        match state.lifecycle {
            Lifecycle::Setup => Ok(()),
            Lifecycle::Playing => {
                self.over_since = None;
                if self.config.wait_for_opening && state.revealed_by(Revealer::Remote) == 0 {
                    return Ok(());
                }
                let Some(card_id) = self.pick(state) else {
                    return Ok(());
                };
                self.handle.flip_card(card_id).await.map(|_| ())
            }
            Lifecycle::GameOver => {
                let now = Instant::now();
                let since = *self.over_since.get_or_insert(now);
                if now.duration_since(since) < self.config.rematch_delay {
                    return Ok(());
                }
                // Ask again after another delay if the opponent never confirms.
                self.over_since = Some(now);
                self.handle.play_again().await
            }
        }
    }

    fn pick(&mut self, state: &GameState) -> Option<CardId> {
        let candidates: Vec<_> = state.face_down().map(|card| card.id.clone()).collect();
        candidates.choose(&mut self.rng).cloned()
    }
}
