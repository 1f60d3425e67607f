//! Rendering handlers.

use anyhow::Result;
use client_frontend_core::{EventConsumer, view_model::TokenView};

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Render the current page.
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let token = TokenView::new(
            self.handle.token(),
            &self.app_state.hello_draft,
            &self.app_state.inbox,
        );

        let ctx = ui::RenderContext {
            board: &self.board,
            gallery: &self.gallery,
            token: &token,
            messages: self.consumer.message_log(),
            app_state: &self.app_state,
            message_panel_height: self.cli_config.ui.message_panel_height,
            board_columns: self.cli_config.ui.board_columns,
        };

        ui::render(terminal, &ctx)
    }
}
