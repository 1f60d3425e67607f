//! Game worker that owns the authoritative [`game_core::GameState`].
//!
//! Receives commands from [`crate::RuntimeHandle`] and notifications from the
//! transport, reconciles both through [`game_core::GameEngine`], forwards the
//! engine's outgoing events to the peer, and publishes snapshots to the
//! EventBus. Both sources are serialized through one `select!` loop, so the
//! state needs no lock.

use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, error, info, warn};

use game_core::{
    CardId, GameConfig, GameEngine, GameState, Input, Lifecycle, PeerEvent, ReconcileError,
    Reconciliation,
};

use crate::api::{Result, RuntimeError};
use crate::clock::Clock;
use crate::codec;
use crate::events::{Event, EventBus, GameEvent, InputSource, NotificationEvent, SessionEvent};
use crate::session::Session;
use crate::transport::{Notification, Transport};

/// Commands that can be sent to the game worker
pub enum Command {
    /// Record the peer token and deal the first game if possible.
    Connect {
        peer_token: String,
        reply: oneshot::Sender<Result<Session>>,
    },
    /// Flip a card locally, stamped with the worker's clock.
    FlipCard {
        card_id: CardId,
        reply: oneshot::Sender<Result<Reconciliation>>,
    },
    /// Ask the peer for a rematch. The table resets once they confirm.
    PlayAgain { reply: oneshot::Sender<Result<()>> },
    /// Send the token page greeting to an arbitrary token.
    SendHello {
        peer_token: String,
        reply: oneshot::Sender<Result<()>>,
    },
    /// Query the current game state (read-only).
    QueryState { reply: oneshot::Sender<GameState> },
    /// Query the current session (read-only).
    QuerySession { reply: oneshot::Sender<Session> },
}

/// Background task that processes local commands and peer notifications.
pub struct GameWorker {
    state: GameState,
    config: GameConfig,
    session: Session,
    transport: Arc<dyn Transport>,
    inbox: broadcast::Receiver<Notification>,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    clock: Arc<dyn Clock>,
}

impl GameWorker {
    pub fn new(
        state: GameState,
        config: GameConfig,
        transport: Arc<dyn Transport>,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let session = Session::new(transport.token());
        let inbox = transport.subscribe();

        info!(
            target: "runtime::worker",
            token = %session.local_token,
            deck = state.deck().len(),
            "GameWorker initialized"
        );

        Self {
            state,
            config,
            session,
            transport,
            inbox,
            command_rx,
            event_bus,
            clock,
        }
    }

    /// Main worker loop. Ends once every handle is dropped.
    pub async fn run(mut self) {
        let mut inbox_open = true;

        loop {
            tokio::select! {
                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => self.handle_command(cmd).await,
                    None => break,
                },
                incoming = self.inbox.recv(), if inbox_open => match incoming {
                    Ok(notification) => self.handle_notification(notification).await,
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(target: "runtime::worker", skipped, "inbox lagged, notifications lost");
                    }
                    Err(RecvError::Closed) => {
                        warn!(target: "runtime::worker", "transport inbox closed");
                        inbox_open = false;
                    }
                },
            }
        }

        debug!(target: "runtime::worker", "GameWorker stopped");
    }

    async fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Connect { peer_token, reply } => {
                let result = self.handle_connect(&peer_token).await;
                if reply.send(result).is_err() {
                    debug!("Connect reply channel closed (caller dropped)");
                }
            }
            Command::FlipCard { card_id, reply } => {
                let result = self.handle_local_flip(card_id).await;
                if reply.send(result).is_err() {
                    debug!("FlipCard reply channel closed (caller dropped)");
                }
            }
            Command::PlayAgain { reply } => {
                let result = self.handle_play_again().await;
                if reply.send(result).is_err() {
                    debug!("PlayAgain reply channel closed (caller dropped)");
                }
            }
            Command::SendHello { peer_token, reply } => {
                let result = self
                    .send_notification(peer_token.trim(), Notification::hello())
                    .await;
                if reply.send(result).is_err() {
                    debug!("SendHello reply channel closed (caller dropped)");
                }
            }
            Command::QueryState { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
            Command::QuerySession { reply } => {
                if reply.send(self.session.clone()).is_err() {
                    debug!("QuerySession reply channel closed (caller dropped)");
                }
            }
        }
    }

    async fn handle_connect(&mut self, peer_token: &str) -> Result<Session> {
        self.session.connect(peer_token)?;
        info!(
            target: "runtime::worker",
            peer = ?self.session.peer_token,
            "connected to peer"
        );
        self.event_bus
            .publish(Event::Session(SessionEvent::Connected(self.session.clone())));

        if self.state.lifecycle == Lifecycle::Setup && self.state.has_deck() {
            self.reconcile(Input::Start, InputSource::Local).await?;
        }

        Ok(self.session.clone())
    }

    async fn handle_local_flip(&mut self, card_id: CardId) -> Result<Reconciliation> {
        self.session.require_peer()?;
        let timestamp = self.clock.now_ms();
        self.reconcile(Input::LocalFlip { card_id, timestamp }, InputSource::Local)
            .await
    }

    async fn handle_play_again(&mut self) -> Result<()> {
        let peer = self.session.require_peer()?.to_owned();
        self.send_notification(&peer, codec::encode(&PeerEvent::ResetGameRequest))
            .await
    }

    async fn handle_notification(&mut self, notification: Notification) {
        self.event_bus.publish(Event::Notification(NotificationEvent::Received(
            notification.clone(),
        )));

        let event = match codec::decode(&notification) {
            Ok(event) => event,
            Err(error) if error.is_foreign() => {
                debug!(
                    target: "runtime::worker",
                    title = %notification.title,
                    "ignoring non-game notification"
                );
                return;
            }
            Err(error) => {
                warn!(
                    target: "runtime::worker",
                    title = %notification.title,
                    body = %notification.body,
                    error = %error,
                    "dropping malformed game event"
                );
                return;
            }
        };

        debug!(target: "runtime::worker", kind = %event.kind(), "peer event received");
        if let Err(error) = self.reconcile(Input::Remote(event), InputSource::Remote).await {
            error!(target: "runtime::worker", error = %error, "peer event failed to reconcile");
        }
    }

    /// Runs one input through the engine on a working copy, committing only
    /// on success, then forwards outgoing events and publishes the result.
    ///
    /// This is the only method that calls `GameEngine::execute()`.
    async fn reconcile(&mut self, input: Input, source: InputSource) -> Result<Reconciliation> {
        let mut working = self.state.clone();
        let reconciliation = match GameEngine::new(&mut working, &self.config).execute(input) {
            Ok(reconciliation) => reconciliation,
            Err(error) => {
                self.publish_rejection(source, &error);
                return Err(error.into());
            }
        };
        self.state = working;

        if reconciliation.ignored {
            debug!(target: "runtime::worker", ?source, "input ignored");
            return Ok(reconciliation);
        }

        if let Some(outcome) = reconciliation.outcome {
            info!(target: "runtime::worker", ?outcome, "game decided");
        }

        self.event_bus.publish(Event::Game(GameEvent::StateChanged {
            state: Box::new(self.state.clone()),
            status: reconciliation.status.clone(),
            outcome: reconciliation.outcome,
        }));

        self.forward(&reconciliation.outgoing).await;
        Ok(reconciliation)
    }

    /// Sends engine output to the peer. Delivery failures are logged and
    /// published; the local state has already moved on.
    async fn forward(&mut self, outgoing: &[PeerEvent]) {
        if outgoing.is_empty() {
            return;
        }
        let Some(peer) = self.session.peer().map(str::to_owned) else {
            warn!(
                target: "runtime::worker",
                count = outgoing.len(),
                "no peer connected, outgoing events dropped"
            );
            return;
        };

        for event in outgoing {
            if let Err(error) = self.send_notification(&peer, codec::encode(event)).await {
                warn!(
                    target: "runtime::worker",
                    kind = %event.kind(),
                    error = %error,
                    "failed to forward event to peer"
                );
            }
        }
    }

    async fn send_notification(&self, peer: &str, notification: Notification) -> Result<()> {
        match self.transport.send(peer, notification.clone()).await {
            Ok(()) => {
                self.event_bus
                    .publish(Event::Notification(NotificationEvent::Sent {
                        peer: peer.to_owned(),
                        notification,
                    }));
                Ok(())
            }
            Err(error) => {
                self.event_bus
                    .publish(Event::Notification(NotificationEvent::SendFailed {
                        peer: peer.to_owned(),
                        title: notification.title,
                        error: error.to_string(),
                    }));
                Err(RuntimeError::Transport(error))
            }
        }
    }

    fn publish_rejection(&self, source: InputSource, error: &ReconcileError) {
        debug!(
            target: "runtime::worker",
            ?source,
            phase = error.phase().as_str(),
            error = %error,
            "input rejected"
        );
        self.event_bus.publish(Event::Game(GameEvent::InputRejected {
            source,
            phase: error.phase(),
            error: error.to_string(),
        }));
    }
}
