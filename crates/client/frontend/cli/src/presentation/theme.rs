//! Ratatui theme implementation of PresentationMapper.
//!
//! Green marks our reveals and yellow the opponent's; the card whose flip
//! ended the game is drawn red.

use client_frontend_core::{
    message::MessageLevel,
    view_model::{CardView, FaceState, PresentationMapper},
};
use ratatui::style::{Color, Modifier, Style};

/// Ratatui-specific theme implementing PresentationMapper.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl PresentationMapper for RatatuiTheme {
    type Style = Style;

    fn style_card(&self, card: &CardView, is_cursor: bool) -> Self::Style {
        let mut style = match card.face {
            FaceState::Down => Style::default().fg(Color::LightBlue),
            FaceState::Mine => Style::default().fg(Color::Green),
            FaceState::Theirs => Style::default().fg(Color::Yellow),
        };

        if card.decisive {
            style = self.emphasize(style.fg(Color::Red));
        }
        if is_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        if !card.selectable && !card.is_face_up() {
            // Face down but frozen: game over.
            style = style.add_modifier(Modifier::DIM);
        }

        style
    }

    fn style_message(&self, level: MessageLevel) -> Self::Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }

    fn emphasize(&self, base_style: Self::Style) -> Self::Style {
        base_style.add_modifier(Modifier::BOLD)
    }
}

impl RatatuiTheme {
    pub fn accent(&self) -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::CardId;

    fn card(face: FaceState, decisive: bool) -> CardView {
        CardView {
            id: CardId::from("pikachu"),
            label: "Pikachu".into(),
            image_url: String::new(),
            face,
            decisive,
            selectable: face == FaceState::Down,
        }
    }

    #[test]
    fn reveals_are_colored_by_side() {
        let theme = RatatuiTheme;
        assert_eq!(
            theme.style_card(&card(FaceState::Mine, false), false).fg,
            Some(Color::Green)
        );
        assert_eq!(
            theme.style_card(&card(FaceState::Theirs, false), false).fg,
            Some(Color::Yellow)
        );
    }

    #[test]
    fn decisive_card_is_red_and_bold() {
        let style = RatatuiTheme.style_card(&card(FaceState::Theirs, true), true);
        assert_eq!(style.fg, Some(Color::Red));
        assert!(style.add_modifier.contains(Modifier::BOLD));
        assert!(style.add_modifier.contains(Modifier::REVERSED));
    }
}
