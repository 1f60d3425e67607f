//! Glue code tying the runtime handle and the terminal UI together.
use anyhow::{Context, Result};
use async_trait::async_trait;

use runtime::{RuntimeHandle, Topic};

use crate::config::CliConfig;
use crate::event::{CliEventConsumer, EventLoop};
use crate::presentation::terminal;
use crate::state::AppState;
use client_frontend_core::{
    Frontend, FrontendConfig,
    message::MessageLog,
    view_model::{GalleryView, initial_status},
};

/// Terminal frontend for the token demo, the duel and the gallery.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
    gallery: GalleryView,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig, gallery: GalleryView) -> Self {
        Self {
            frontend_config,
            cli_config,
            gallery,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        tracing::info!("CLI frontend starting...");

        // Subscribe before querying so no update falls in between.
        let subscriptions = handle.subscribe_multiple(&Topic::ALL);
        let initial_state = handle
            .query_state()
            .await
            .context("failed to query initial state")?;
        let session = handle
            .query_session()
            .await
            .context("failed to query session")?;

        let status = if initial_state.is_playing() {
            game_core::Status::GameStarted.to_string()
        } else {
            initial_status(Some(handle.token()), self.gallery.error.as_deref()).to_owned()
        };

        let capacity = self.frontend_config.messages.capacity;
        let mut app_state = AppState::new(status, capacity);
        if let Some(peer) = session.peer() {
            app_state.peer_draft = peer.to_owned();
        }

        let mut messages = MessageLog::new(capacity);
        messages.push_text("Welcome to PokéFlip! [Tab] switches pages.");

        let consumer = CliEventConsumer::new(
            messages,
            self.frontend_config.messages.visibility.clone(),
        );

        let event_loop = EventLoop::new(
            handle,
            subscriptions,
            consumer,
            app_state,
            &initial_state,
            self.gallery.clone(),
            self.cli_config.clone(),
        )?;

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let _consumer = event_loop.run(&mut terminal).await?;

        terminal::restore()?;
        tracing::info!("CLI frontend exiting");

        Ok(())
    }
}
