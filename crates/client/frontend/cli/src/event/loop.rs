//! Event loop orchestrating runtime events, user input, and rendering.
//!
//! This module coordinates three main concerns:
//! - Runtime event consumption and view-model updates
//! - Keyboard input processing (page navigation, token entry, card flips)
//! - Rendering the current page

use std::collections::HashMap;

use anyhow::{Context, Result};
use game_core::GameState;
use runtime::{
    Event as RuntimeEvent, GameEvent, NotificationEvent, RuntimeHandle, SessionEvent, Topic,
};
use tokio::{
    sync::{broadcast, broadcast::error::RecvError},
    time::{self, Duration},
};

use crate::{config::CliConfig, input::InputHandler, presentation::terminal::Tui, state::AppState};
use client_frontend_core::{
    EventConsumer,
    view_model::{BoardView, GalleryView, text},
};

const FRAME_INTERVAL_MS: u64 = 16;

/// Event loop owning the view models and coordinating UI updates.
///
/// This is the main orchestrator that:
/// - Rebuilds the board from each published game snapshot
/// - Lets the consumer log runtime events
/// - Handles user input and forwards commands to the runtime
pub struct EventLoop<C>
where
    C: EventConsumer,
{
    pub(crate) handle: RuntimeHandle,
    pub(crate) game_rx: broadcast::Receiver<RuntimeEvent>,
    pub(crate) session_rx: broadcast::Receiver<RuntimeEvent>,
    pub(crate) notification_rx: broadcast::Receiver<RuntimeEvent>,
    pub(crate) input: InputHandler,
    pub(crate) consumer: C,
    pub(crate) app_state: AppState,
    pub(crate) board: BoardView,
    pub(crate) gallery: GalleryView,
    pub(crate) cli_config: CliConfig,
}

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    pub fn new(
        handle: RuntimeHandle,
        mut subscriptions: HashMap<Topic, broadcast::Receiver<RuntimeEvent>>,
        consumer: C,
        app_state: AppState,
        initial_state: &GameState,
        gallery: GalleryView,
        cli_config: CliConfig,
    ) -> Result<Self> {
        let mut take = |topic: Topic| {
            subscriptions
                .remove(&topic)
                .with_context(|| format!("missing {topic:?} subscription"))
        };
        let game_rx = take(Topic::Game)?;
        let session_rx = take(Topic::Session)?;
        let notification_rx = take(Topic::Notification)?;

        let board = BoardView::from_state(initial_state, app_state.status.clone());

        Ok(Self {
            handle,
            game_rx,
            session_rx,
            notification_rx,
            input: InputHandler::new(),
            consumer,
            app_state,
            board,
            gallery,
            cli_config,
        })
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<C> {
        self.render(terminal)?;

        loop {
            let quit = tokio::select! {
                result = self.game_rx.recv() => {
                    self.handle_runtime_event(result, terminal).await?
                }
                result = self.session_rx.recv() => {
                    self.handle_runtime_event(result, terminal).await?
                }
                result = self.notification_rx.recv() => {
                    self.handle_runtime_event(result, terminal).await?
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    self.handle_input_tick(terminal).await?
                }
            };

            if quit {
                break;
            }
        }

        Ok(self.consumer)
    }

    /// Handle runtime event and refresh the affected view models.
    async fn handle_runtime_event(
        &mut self,
        result: Result<RuntimeEvent, RecvError>,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match result {
            Ok(event) => {
                self.apply_event(&event);

                let impact = self.consumer.on_event(&event);
                if impact.requires_redraw {
                    self.render(terminal)?;
                }
                Ok(false)
            }
            Err(RecvError::Closed) => {
                tracing::warn!("Event stream closed");
                Ok(true)
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("Dropped {} stale events", skipped);
                // A skipped snapshot may have been the latest one.
                let state = self.handle.query_state().await?;
                self.board = BoardView::from_state(&state, self.app_state.status.clone());
                self.app_state.clamp_cursor(self.board.cards.len());
                self.render(terminal)?;
                Ok(false)
            }
        }
    }

    fn apply_event(&mut self, event: &RuntimeEvent) {
        match event {
            RuntimeEvent::Game(GameEvent::StateChanged { state, status, .. }) => {
                if let Some(status) = status {
                    self.app_state.status = status.to_string();
                }
                self.board = BoardView::from_state(state, self.app_state.status.clone());
                self.app_state.clamp_cursor(self.board.cards.len());
            }
            RuntimeEvent::Session(SessionEvent::Connected(session)) => {
                if self.app_state.peer_draft.trim().is_empty() {
                    if let Some(peer) = session.peer() {
                        self.app_state.peer_draft = peer.to_owned();
                    }
                }
                // Topics are polled independently; keep a newer game status.
                if self.board.is_setup() {
                    self.set_status(self.connected_status());
                }
            }
            RuntimeEvent::Notification(NotificationEvent::Received(notification)) => {
                self.app_state.receive(notification.clone());
            }
            RuntimeEvent::Game(GameEvent::InputRejected { .. })
            | RuntimeEvent::Notification(_) => {}
        }
    }

    /// Status after a successful connect. Without a deck the game never
    /// starts, so the catalog error stays visible.
    pub(crate) fn connected_status(&self) -> &'static str {
        if self.gallery.error.is_some() {
            text::CATALOG_FAILED
        } else {
            text::CONNECTED
        }
    }

    pub(crate) fn set_status(&mut self, status: impl Into<String>) {
        let status = status.into();
        self.board.status = status.clone();
        self.app_state.status = status;
    }
}
