//! Input handling (keyboard and the runtime commands it triggers).

use anyhow::Result;
use client_frontend_core::{
    EventConsumer,
    format::short_token,
    message::MessageEntry,
    view_model::text,
};
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use runtime::RuntimeError;
use tokio::time::Duration;

use super::super::EventLoop;
use crate::{input::KeyAction, presentation::terminal::Tui, state::Page};

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Poll for keyboard input and handle UI interactions.
    pub(in crate::event) async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal).await
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    /// Handle key press and dispatch to appropriate handler.
    pub(in crate::event) async fn handle_key_press(
        &mut self,
        key: KeyEvent,
        terminal: &mut Tui,
    ) -> Result<bool> {
        let mode = self.app_state.input_mode(self.board.lifecycle);

        let quit = match self.input.handle_key(key, mode) {
            KeyAction::Quit => {
                self.consumer.message_log_mut().push_text("Quitting...");
                self.render(terminal)?;
                return Ok(true);
            }
            KeyAction::NextPage => {
                self.app_state.page = self.app_state.page.next();
                false
            }
            KeyAction::PrevPage => {
                self.app_state.page = self.app_state.page.prev();
                false
            }
            KeyAction::Type(ch) => {
                self.app_state.draft_mut().push(ch);
                false
            }
            KeyAction::Erase => {
                self.app_state.draft_mut().pop();
                false
            }
            KeyAction::Submit => match self.app_state.page {
                Page::Token => self.send_hello().await,
                Page::Duel => self.connect().await,
                Page::Gallery => false,
            },
            KeyAction::Move(direction) => {
                match self.app_state.page {
                    Page::Duel => self.app_state.move_cursor(
                        direction,
                        self.cli_config.ui.board_columns,
                        self.board.cards.len(),
                    ),
                    Page::Gallery => self
                        .app_state
                        .scroll(direction, self.gallery.entries.len()),
                    Page::Token => {}
                }
                false
            }
            KeyAction::Flip => self.flip_selected().await,
            KeyAction::PlayAgain => self.play_again().await,
            KeyAction::None => return Ok(false),
        };

        self.render(terminal)?;
        Ok(quit)
    }

    async fn send_hello(&mut self) -> bool {
        let peer = self.app_state.hello_draft.trim().to_owned();
        if peer.is_empty() {
            self.push(MessageEntry::warning("Enter a token to send to."));
            return false;
        }

        match self.handle.send_hello(peer.as_str()).await {
            Ok(()) => {
                self.push(MessageEntry::info(format!(
                    "Sent Hello to {}",
                    short_token(&peer)
                )));
                false
            }
            Err(error) => self.command_failed(error),
        }
    }

    async fn connect(&mut self) -> bool {
        let peer = self.app_state.peer_draft.trim().to_owned();

        match self.handle.connect(peer).await {
            Ok(_) => {
                self.set_status(self.connected_status());
                false
            }
            Err(RuntimeError::EmptyPeerToken | RuntimeError::MissingLocalToken) => {
                self.set_status(text::MISSING_TOKENS);
                false
            }
            Err(error) => self.command_failed(error),
        }
    }

    async fn flip_selected(&mut self) -> bool {
        let Some(card) = self.board.card(self.app_state.cursor) else {
            return false;
        };
        let card_id = card.id.clone();

        match self.handle.flip_card(card_id).await {
            Ok(_) => false,
            // Published as InputRejected and logged by the consumer.
            Err(RuntimeError::Reconcile(error)) => {
                tracing::debug!(error = %error, "flip refused");
                false
            }
            Err(error) => self.command_failed(error),
        }
    }

    async fn play_again(&mut self) -> bool {
        if !self.board.can_play_again() {
            return false;
        }

        match self.handle.play_again().await {
            Ok(()) => {
                self.set_status(text::REQUESTING_REMATCH);
                false
            }
            Err(error) => self.command_failed(error),
        }
    }

    /// Logs a failed command. Returns true when the runtime is gone.
    fn command_failed(&mut self, error: RuntimeError) -> bool {
        match error {
            RuntimeError::CommandChannelClosed | RuntimeError::ReplyChannelClosed(_) => {
                tracing::error!(error = %error, "runtime stopped");
                true
            }
            error if error.is_rejection() => {
                self.push(MessageEntry::warning(error.to_string()));
                false
            }
            error => {
                tracing::warn!(error = %error, "command failed");
                self.push(MessageEntry::error(error.to_string()));
                false
            }
        }
    }

    fn push(&mut self, entry: MessageEntry) {
        self.consumer.message_log_mut().push(entry);
    }
}
