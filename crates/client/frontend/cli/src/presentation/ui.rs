//! UI rendering composed from page widgets.
//!
//! This module provides the main render entry point that lays out the
//! header, the current page, the message log and the footer.
use anyhow::Result;
use ratatui::layout::{Constraint, Layout};

use crate::{
    presentation::{terminal::Tui, theme::RatatuiTheme, widgets},
    state::{AppState, Page},
};
use client_frontend_core::{
    message::MessageLog,
    view_model::{BoardView, GalleryView, TokenView, collect_messages},
};

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub board: &'a BoardView,
    pub gallery: &'a GalleryView,
    pub token: &'a TokenView,
    pub messages: &'a MessageLog,
    pub app_state: &'a AppState,
    pub message_panel_height: u16,
    pub board_columns: usize,
}

/// Render the terminal UI for the current page.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme;

    terminal.draw(|frame| {
        let chunks = Layout::vertical([
            Constraint::Length(3),                        // Header
            Constraint::Min(0),                           // Page
            Constraint::Length(ctx.message_panel_height), // Messages
            Constraint::Length(3),                        // Footer
        ])
        .split(frame.area());

        widgets::header::render(frame, chunks[0], ctx.app_state.page, &theme);

        match ctx.app_state.page {
            Page::Token => widgets::token::render(frame, chunks[1], ctx.token, &theme),
            Page::Duel if ctx.board.is_setup() => widgets::board::render_setup(
                frame,
                chunks[1],
                ctx.board,
                ctx.token,
                &ctx.app_state.peer_draft,
                &theme,
            ),
            Page::Duel => widgets::board::render(
                frame,
                chunks[1],
                ctx.board,
                ctx.app_state.cursor,
                ctx.board_columns,
                &theme,
            ),
            Page::Gallery => widgets::gallery::render(
                frame,
                chunks[1],
                ctx.gallery,
                ctx.app_state.gallery_offset,
                &theme,
            ),
        }

        // Borders take two lines.
        let visible = ctx.message_panel_height.saturating_sub(2) as usize;
        let recent_messages = collect_messages(ctx.messages, visible);
        widgets::messages::render(frame, chunks[2], &recent_messages, visible, &theme);

        let mode = ctx.app_state.input_mode(ctx.board.lifecycle);
        widgets::footer::render(frame, chunks[3], ctx.app_state.page, mode, ctx.board);
    })?;

    Ok(())
}
