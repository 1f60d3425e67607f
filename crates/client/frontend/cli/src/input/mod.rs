//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// How keys are interpreted on the current page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    /// Printable keys edit a token field.
    TextEntry,
    /// Keys move over and flip cards.
    Board,
    /// Keys scroll the species list.
    Gallery,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    NextPage,
    PrevPage,
    /// Append a character to the token field.
    Type(char),
    Erase,
    /// Send the token field (connect or say hello, depending on the page).
    Submit,
    Move(Direction),
    Flip,
    PlayAgain,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into UI commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, mode: InputMode) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match key.code {
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Tab => KeyAction::NextPage,
            KeyCode::BackTab => KeyAction::PrevPage,
            _ => match mode {
                InputMode::TextEntry => self.text_entry(key.code),
                InputMode::Board => self.board(key.code),
                InputMode::Gallery => self.gallery(key.code),
            },
        }
    }

    fn text_entry(&self, code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Char(ch) if !ch.is_control() => KeyAction::Type(ch),
            KeyCode::Backspace => KeyAction::Erase,
            KeyCode::Enter => KeyAction::Submit,
            _ => KeyAction::None,
        }
    }

    fn board(&self, code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Left => KeyAction::Move(Direction::Left),
            KeyCode::Right => KeyAction::Move(Direction::Right),
            KeyCode::Up => KeyAction::Move(Direction::Up),
            KeyCode::Down => KeyAction::Move(Direction::Down),
            KeyCode::Enter => KeyAction::Flip,
            KeyCode::Char(raw) => match raw.to_ascii_lowercase() {
                'q' => KeyAction::Quit,
                'h' | 'a' => KeyAction::Move(Direction::Left),
                'j' | 's' => KeyAction::Move(Direction::Down),
                'k' | 'w' => KeyAction::Move(Direction::Up),
                'l' | 'd' => KeyAction::Move(Direction::Right),
                ' ' | 'f' => KeyAction::Flip,
                'r' => KeyAction::PlayAgain,
                _ => KeyAction::None,
            },
            _ => KeyAction::None,
        }
    }

    fn gallery(&self, code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Up | KeyCode::Char('k') => KeyAction::Move(Direction::Up),
            KeyCode::Down | KeyCode::Char('j') => KeyAction::Move(Direction::Down),
            KeyCode::Char('q') => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn text_entry_captures_letters() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('q')), InputMode::TextEntry),
            KeyAction::Type('q')
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Backspace), InputMode::TextEntry),
            KeyAction::Erase
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), InputMode::TextEntry),
            KeyAction::Submit
        );
    }

    #[test]
    fn maps_board_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('H')), InputMode::Board),
            KeyAction::Move(Direction::Left)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Down), InputMode::Board),
            KeyAction::Move(Direction::Down)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char(' ')), InputMode::Board),
            KeyAction::Flip
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('r')), InputMode::Board),
            KeyAction::PlayAgain
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('q')), InputMode::Board),
            KeyAction::Quit
        );
    }

    #[test]
    fn navigation_works_everywhere() {
        let handler = InputHandler::new();
        for mode in [InputMode::TextEntry, InputMode::Board, InputMode::Gallery] {
            assert_eq!(handler.handle_key(key(KeyCode::Tab), mode), KeyAction::NextPage);
            assert_eq!(
                handler.handle_key(key(KeyCode::BackTab), mode),
                KeyAction::PrevPage
            );
            assert_eq!(handler.handle_key(key(KeyCode::Esc), mode), KeyAction::Quit);
        }

        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'))
        };
        assert_eq!(
            handler.handle_key(ctrl_c, InputMode::TextEntry),
            KeyAction::Quit
        );
    }

    #[test]
    fn ignores_unknown_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('x')), InputMode::Board),
            KeyAction::None
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Left), InputMode::Gallery),
            KeyAction::None
        );
    }
}
