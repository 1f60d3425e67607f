//! View-model snapshots derived from runtime state.
//!
//! Each page of the client (token demo, duel board, species gallery) gets a
//! presentation-ready snapshot. Snapshots are rebuilt from the latest
//! [`game_core::GameState`] or catalog data and hold no references into
//! runtime-owned values.
mod board;
mod gallery;
mod token;

pub use board::{BoardView, CardView, FaceState};
pub use gallery::{GalleryEntry, GalleryView};
pub use token::TokenView;

use crate::message::{MessageEntry, MessageLevel, MessageLog};

/// Fixed strings shown to the player.
pub mod text {
    pub const HEADING: &str = "PokéFlip Duel!";
    pub const TOKEN_LABEL: &str = "Your Game Token (Share with friend):";
    pub const TOKEN_PENDING: &str = "Generating...";
    pub const CONNECT: &str = "Connect & Start Game";
    pub const PLAY_AGAIN: &str = "Play Again?";
    pub const TITLE_PLAYING: &str = "Flip the Cards!";
    pub const TITLE_OVER: &str = "Game Over!";

    pub const WAITING_FOR_TOKEN: &str = "Waiting for game token...";
    pub const ENTER_PEER_TOKEN: &str = "Enter your friend's token to connect.";
    pub const CONNECTED: &str = "Connected! Initializing game...";
    pub const MISSING_TOKENS: &str =
        "Please ensure your token is generated and friend's token is entered.";
    pub const CATALOG_FAILED: &str = "Error fetching Pokémon data. Please refresh.";
    pub const REQUESTING_REMATCH: &str = "Requesting a new game with opponent...";
}

/// Framework-agnostic styling hooks implemented by each frontend theme.
pub trait PresentationMapper {
    type Style;

    /// Style for a card tile. `is_cursor` marks the tile under the selection.
    fn style_card(&self, card: &CardView, is_cursor: bool) -> Self::Style;

    fn style_message(&self, level: MessageLevel) -> Self::Style;

    fn emphasize(&self, base_style: Self::Style) -> Self::Style;
}

/// The status line shown before any game event arrived.
pub fn initial_status(token: Option<&str>, catalog_error: Option<&str>) -> &'static str {
    match (token, catalog_error) {
        (_, Some(_)) => text::CATALOG_FAILED,
        (Some(token), None) if !token.is_empty() => text::ENTER_PEER_TOKEN,
        _ => text::WAITING_FOR_TOKEN,
    }
}

/// Species names are stored lower-case; boards show them capitalised.
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The last `limit` messages, oldest first.
pub fn collect_messages(log: &MessageLog, limit: usize) -> Vec<MessageEntry> {
    let mut messages: Vec<_> = log.recent(limit).cloned().collect();
    messages.reverse();
    messages
}
