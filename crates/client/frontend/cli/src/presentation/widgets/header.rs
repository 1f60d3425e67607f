//! Header widget with the page tabs.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Tabs},
};

use crate::{presentation::theme::RatatuiTheme, state::Page};
use client_frontend_core::view_model::PresentationMapper;

pub fn render(frame: &mut Frame, area: Rect, page: Page, theme: &RatatuiTheme) {
    let titles = Page::ALL.iter().map(Page::title);

    let tabs = Tabs::new(titles)
        .select(page.index())
        .style(theme.muted())
        .highlight_style(theme.emphasize(theme.accent()))
        .block(Block::default().borders(Borders::ALL).title("PokéFlip"));

    frame.render_widget(tabs, area);
}
