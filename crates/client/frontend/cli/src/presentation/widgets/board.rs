//! Duel page: the connect form during setup, the card grid afterwards.

use client_frontend_core::view_model::{BoardView, CardView, PresentationMapper, TokenView, text};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::presentation::theme::RatatuiTheme;

const CARD_HEIGHT: u16 = 3;
const CARD_BACK: &str = "◓";

/// Connect form shown until the first game is dealt.
pub fn render_setup(
    frame: &mut Frame,
    area: Rect,
    board: &BoardView,
    token: &TokenView,
    peer_draft: &str,
    theme: &RatatuiTheme,
) {
    let lines = vec![
        Line::from(Span::styled(text::HEADING, theme.emphasize(Style::default()))),
        Line::default(),
        Line::from(text::TOKEN_LABEL),
        Line::from(Span::styled(token.token_text(), theme.accent())),
        Line::default(),
        Line::from("Friend's token:"),
        Line::from(vec![
            Span::raw(peer_draft),
            Span::styled("_", theme.muted()),
        ]),
        Line::default(),
        Line::from(format!("[Enter] {}", text::CONNECT)),
        Line::default(),
        Line::from(Span::styled(
            board.status.as_str(),
            Style::default().fg(Color::Yellow),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Duel"));

    frame.render_widget(paragraph, area);
}

/// Card grid with scores, status and, once the game is over, the result.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    board: &BoardView,
    cursor: usize,
    columns: usize,
    theme: &RatatuiTheme,
) {
    let result_height = if board.can_play_again() { 3 } else { 0 };
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(result_height),
    ])
    .split(area);

    let summary = Paragraph::new(vec![
        Line::from(Span::styled(board.title(), theme.emphasize(Style::default()))),
        Line::from(board.score_line()),
        Line::from(Span::styled(board.status.as_str(), theme.muted())),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(summary, chunks[0]);

    render_grid(frame, chunks[1], board, cursor, columns, theme);

    if board.can_play_again() {
        let result = board.result.as_deref().unwrap_or_default();
        let paragraph = Paragraph::new(vec![
            Line::from(Span::styled(result, theme.emphasize(Style::default()))),
            Line::from(format!("[r] {}", text::PLAY_AGAIN)),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
        frame.render_widget(paragraph, chunks[2]);
    }
}

fn render_grid(
    frame: &mut Frame,
    area: Rect,
    board: &BoardView,
    cursor: usize,
    columns: usize,
    theme: &RatatuiTheme,
) {
    let columns = columns.max(1);
    let row_count = board.cards.len().div_ceil(columns);
    let rows = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); row_count]).split(area);

    for (row_index, (row, row_area)) in board.rows(columns).zip(rows.iter()).enumerate() {
        let cells =
            Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns]).split(*row_area);

        for (column_index, (card, cell)) in row.iter().zip(cells.iter()).enumerate() {
            let index = row_index * columns + column_index;
            render_card(frame, *cell, card, index == cursor, theme);
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &CardView, is_cursor: bool, theme: &RatatuiTheme) {
    let style = theme.style_card(card, is_cursor);
    let border_type = if card.decisive {
        BorderType::Double
    } else {
        BorderType::Rounded
    };

    let face = if card.is_face_up() {
        card.label.as_str()
    } else {
        CARD_BACK
    };

    let tile = Paragraph::new(Line::from(face))
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(style),
        );

    frame.render_widget(tile, area);
}
