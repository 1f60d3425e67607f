//! Token page: local token, hello sender and received notifications.

use client_frontend_core::view_model::{PresentationMapper, TokenView};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, view: &TokenView, theme: &RatatuiTheme) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .split(area);

    let token = Paragraph::new(Span::styled(
        view.token_text(),
        theme.emphasize(theme.accent()),
    ))
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).title("Your Token"));
    frame.render_widget(token, chunks[0]);

    let draft = Paragraph::new(Line::from(vec![
        Span::raw(view.draft.as_str()),
        Span::styled("_", theme.muted()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Send Notification to"),
    );
    frame.render_widget(draft, chunks[1]);

    let items: Vec<ListItem> = if view.received.is_empty() {
        vec![ListItem::new(Span::styled(
            "Nothing received yet.",
            theme.muted(),
        ))]
    } else {
        view.received
            .iter()
            .map(|n| ListItem::new(format!("{}: {}", n.title, n.body)))
            .collect()
    };
    let inbox = List::new(items).block(Block::default().borders(Borders::ALL).title("Received"));
    frame.render_widget(inbox, chunks[2]);
}
