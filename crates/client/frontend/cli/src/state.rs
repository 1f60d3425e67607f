//! Application state for page navigation and UI context.

use std::collections::VecDeque;

use game_core::Lifecycle;
use runtime::Notification;

use crate::input::{Direction, InputMode};

/// Top-level page determining input handling and UI layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    /// Local token, hello sender and received notifications.
    Token,
    Duel,
    Gallery,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Token, Page::Duel, Page::Gallery];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Token => "Token",
            Page::Duel => "Duel",
            Page::Gallery => "Gallery",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Page::Token => 0,
            Page::Duel => 1,
            Page::Gallery => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Mutable application state tracking the current page, drafts and cursor.
#[derive(Clone, Debug)]
pub struct AppState {
    pub page: Page,
    /// Peer token typed on the duel setup screen.
    pub peer_draft: String,
    /// Token typed on the token page.
    pub hello_draft: String,
    /// Status line above the duel board.
    pub status: String,
    /// Index of the selected card.
    pub cursor: usize,
    /// First gallery row shown.
    pub gallery_offset: usize,
    /// Received notifications, newest first.
    pub inbox: VecDeque<Notification>,
    inbox_capacity: usize,
}

impl AppState {
    pub fn new(status: impl Into<String>, inbox_capacity: usize) -> Self {
        Self {
            page: Page::Duel,
            peer_draft: String::new(),
            hello_draft: String::new(),
            status: status.into(),
            cursor: 0,
            gallery_offset: 0,
            inbox: VecDeque::new(),
            inbox_capacity: inbox_capacity.max(1),
        }
    }

    pub fn input_mode(&self, lifecycle: Lifecycle) -> InputMode {
        match self.page {
            Page::Token => InputMode::TextEntry,
            Page::Duel if lifecycle == Lifecycle::Setup => InputMode::TextEntry,
            Page::Duel => InputMode::Board,
            Page::Gallery => InputMode::Gallery,
        }
    }

    /// The token field edited on the current page.
    pub fn draft_mut(&mut self) -> &mut String {
        match self.page {
            Page::Token => &mut self.hello_draft,
            Page::Duel | Page::Gallery => &mut self.peer_draft,
        }
    }

    pub fn receive(&mut self, notification: Notification) {
        if self.inbox.len() == self.inbox_capacity {
            self.inbox.pop_back();
        }
        self.inbox.push_front(notification);
    }

    /// Moves over a row-major grid of `len` cards, `columns` wide. Moves
    /// that would leave the grid are ignored.
    pub fn move_cursor(&mut self, direction: Direction, columns: usize, len: usize) {
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let columns = columns.max(1);
        let cursor = self.cursor.min(len - 1);

        self.cursor = match direction {
            Direction::Left if cursor % columns > 0 => cursor - 1,
            Direction::Right if cursor % columns + 1 < columns && cursor + 1 < len => cursor + 1,
            Direction::Up if cursor >= columns => cursor - columns,
            Direction::Down if cursor + columns < len => cursor + columns,
            _ => cursor,
        };
    }

    pub fn clamp_cursor(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn scroll(&mut self, direction: Direction, len: usize) {
        self.gallery_offset = match direction {
            Direction::Up => self.gallery_offset.saturating_sub(1),
            Direction::Down => (self.gallery_offset + 1).min(len.saturating_sub(1)),
            Direction::Left | Direction::Right => self.gallery_offset,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_cycle_both_ways() {
        assert_eq!(Page::Token.next(), Page::Duel);
        assert_eq!(Page::Gallery.next(), Page::Token);
        assert_eq!(Page::Token.prev(), Page::Gallery);
    }

    #[test]
    fn duel_setup_takes_text() {
        let mut state = AppState::new("", 4);
        assert_eq!(state.input_mode(Lifecycle::Setup), InputMode::TextEntry);
        assert_eq!(state.input_mode(Lifecycle::Playing), InputMode::Board);

        state.draft_mut().push('a');
        state.page = Page::Token;
        state.draft_mut().push('b');
        assert_eq!(state.peer_draft, "a");
        assert_eq!(state.hello_draft, "b");
        assert_eq!(state.input_mode(Lifecycle::Playing), InputMode::TextEntry);
    }

    #[test]
    fn cursor_stays_on_the_grid() {
        // 5 columns, 7 cards: second row holds indices 5 and 6.
        let mut state = AppState::new("", 4);
        state.move_cursor(Direction::Left, 5, 7);
        state.move_cursor(Direction::Up, 5, 7);
        assert_eq!(state.cursor, 0);

        state.move_cursor(Direction::Down, 5, 7);
        assert_eq!(state.cursor, 5);
        state.move_cursor(Direction::Right, 5, 7);
        state.move_cursor(Direction::Right, 5, 7);
        assert_eq!(state.cursor, 6);

        state.cursor = 4;
        state.move_cursor(Direction::Right, 5, 7);
        assert_eq!(state.cursor, 4);
        state.move_cursor(Direction::Down, 5, 7);
        assert_eq!(state.cursor, 4);
    }

    #[test]
    fn inbox_is_bounded_and_newest_first() {
        let mut state = AppState::new("", 2);
        for title in ["a", "b", "c"] {
            state.receive(Notification::new(title, ""));
        }
        let titles: Vec<_> = state.inbox.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["c", "b"]);
    }

    #[test]
    fn gallery_scroll_is_clamped() {
        let mut state = AppState::new("", 1);
        state.scroll(Direction::Up, 3);
        assert_eq!(state.gallery_offset, 0);
        for _ in 0..5 {
            state.scroll(Direction::Down, 3);
        }
        assert_eq!(state.gallery_offset, 2);
    }
}
