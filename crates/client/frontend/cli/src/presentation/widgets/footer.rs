//! Footer widget displaying context-sensitive key bindings.

use client_frontend_core::view_model::BoardView;
use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{input::InputMode, state::Page};

pub fn render(frame: &mut Frame, area: Rect, page: Page, mode: InputMode, board: &BoardView) {
    let keys = match (page, mode) {
        (Page::Token, _) => "[Type] Peer token | [Enter] Send Hello | [Tab] Next page | [Esc] Quit",
        (_, InputMode::TextEntry) => {
            "[Type] Friend's token | [Enter] Connect | [Tab] Next page | [Esc] Quit"
        }
        (_, InputMode::Board) if board.can_play_again() => {
            "[r] Play again | [Tab] Next page | [q/Esc] Quit"
        }
        (_, InputMode::Board) => {
            "[hjkl/WASD/Arrows] Move | [Space/Enter] Flip | [Tab] Next page | [q/Esc] Quit"
        }
        (_, InputMode::Gallery) => "[j/k/Arrows] Scroll | [Tab] Next page | [q/Esc] Quit",
    };

    let paragraph = Paragraph::new(Line::from(keys)).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
