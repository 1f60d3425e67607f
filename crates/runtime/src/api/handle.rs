//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! playing the game or streaming events from specific topics.
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{CardId, GameState, Reconciliation};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::session::Session;
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
    token: Arc<str>,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus, token: &str) -> Self {
        Self {
            command_tx,
            event_bus,
            token: Arc::from(token),
        }
    }

    /// Token other peers use to reach this runtime.
    pub fn token(&self) -> &str {
        &self.token
    }

    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(command(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Connect to the opponent's token. Deals the first game when the deck
    /// is loaded and no game has started yet.
    pub async fn connect(&self, peer_token: impl Into<String>) -> Result<Session> {
        let peer_token = peer_token.into();
        self.request(|reply| Command::Connect { peer_token, reply })
            .await?
    }

    /// Flip a card locally. The reveal is stamped with the runtime's clock
    /// and forwarded to the peer.
    pub async fn flip_card(&self, card_id: impl Into<CardId>) -> Result<Reconciliation> {
        let card_id = card_id.into();
        self.request(|reply| Command::FlipCard { card_id, reply })
            .await?
    }

    /// Request a rematch. The local table resets when the peer confirms.
    pub async fn play_again(&self) -> Result<()> {
        self.request(|reply| Command::PlayAgain { reply }).await?
    }

    /// Send the `Hello` / `Hello world` greeting to any token.
    pub async fn send_hello(&self, peer_token: impl Into<String>) -> Result<()> {
        let peer_token = peer_token.into();
        self.request(|reply| Command::SendHello { peer_token, reply })
            .await?
    }

    /// Query the current game state (read-only snapshot)
    pub async fn query_state(&self) -> Result<GameState> {
        self.request(|reply| Command::QueryState { reply }).await
    }

    /// Query the current session (read-only snapshot)
    pub async fn query_session(&self) -> Result<Session> {
        self.request(|reply| Command::QuerySession { reply }).await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Game` - Table snapshots and rejected inputs
    /// - `Topic::Session` - Peer connection changes
    /// - `Topic::Notification` - Raw notifications sent and received
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use runtime::Topic;
    ///
    /// let mut game_rx = handle.subscribe(Topic::Game);
    /// while let Ok(event) = game_rx.recv().await {
    ///     // Redraw the table
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    ///
    /// Returns a map of topic to receiver for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> std::collections::HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
