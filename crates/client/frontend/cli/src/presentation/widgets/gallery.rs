//! Gallery page listing catalog species.

use client_frontend_core::view_model::{GalleryView, PresentationMapper, text};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Row, Table, Wrap},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    gallery: &GalleryView,
    offset: usize,
    theme: &RatatuiTheme,
) {
    if let Some(error) = &gallery.error {
        let paragraph = Paragraph::new(vec![
            Line::styled(text::CATALOG_FAILED, Style::default().fg(Color::LightRed)),
            Line::styled(error.as_str(), theme.muted()),
        ])
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Gallery"));
        frame.render_widget(paragraph, area);
        return;
    }

    let rows = gallery.entries.iter().skip(offset).map(|entry| {
        Row::new(vec![
            format!("#{}", entry.id),
            entry.name.clone(),
            entry.sprite_url.clone(),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(16),
            Constraint::Min(10),
        ],
    )
    .header(Row::new(vec!["#", "Name", "Sprite"]).style(theme.emphasize(theme.accent())))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Gallery ({} species)", gallery.entries.len())),
    );

    frame.render_widget(table, area);
}
