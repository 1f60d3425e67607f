//! Duel board snapshot.
use game_core::{Card, CardId, GameState, Lifecycle, Revealer, Scores};

use super::{display_name, text};

/// Which way a card is facing, and for whom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaceState {
    Down,
    /// Revealed by the local player.
    Mine,
    /// Revealed by the opponent.
    Theirs,
}

impl FaceState {
    fn of(card: &Card) -> Self {
        match card.revealed_by {
            None => FaceState::Down,
            Some(Revealer::Local) => FaceState::Mine,
            Some(Revealer::Remote) => FaceState::Theirs,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub id: CardId,
    pub label: String,
    pub image_url: String,
    pub face: FaceState,
    /// The flip that ended the game.
    pub decisive: bool,
    /// A local flip on this card would be accepted.
    pub selectable: bool,
}

impl CardView {
    fn from_card(card: &Card, playing: bool) -> Self {
        Self {
            id: card.id.clone(),
            label: display_name(&card.face.name),
            image_url: card.face.image_url.clone(),
            face: FaceState::of(card),
            decisive: card.decisive,
            selectable: playing && !card.is_flipped(),
        }
    }

    pub fn is_face_up(&self) -> bool {
        self.face != FaceState::Down
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardView {
    pub lifecycle: Lifecycle,
    pub status: String,
    pub scores: Scores,
    pub cards: Vec<CardView>,
    pub result: Option<String>,
}

impl BoardView {
    pub fn from_state(state: &GameState, status: impl Into<String>) -> Self {
        let playing = state.is_playing();
        Self {
            lifecycle: state.lifecycle,
            status: status.into(),
            scores: state.scores,
            cards: state
                .cards
                .iter()
                .map(|card| CardView::from_card(card, playing))
                .collect(),
            result: state.result.clone(),
        }
    }

    pub fn is_setup(&self) -> bool {
        self.lifecycle == Lifecycle::Setup
    }

    pub fn title(&self) -> &'static str {
        match self.lifecycle {
            Lifecycle::GameOver => text::TITLE_OVER,
            Lifecycle::Setup | Lifecycle::Playing => text::TITLE_PLAYING,
        }
    }

    pub fn score_line(&self) -> String {
        format!(
            "Your Score: {} | Opponent's Score: {}",
            self.scores.local, self.scores.remote
        )
    }

    pub fn can_play_again(&self) -> bool {
        self.lifecycle == Lifecycle::GameOver
    }

    pub fn card(&self, index: usize) -> Option<&CardView> {
        self.cards.get(index)
    }

    pub fn rows(&self, columns: usize) -> impl Iterator<Item = &[CardView]> {
        self.cards.chunks(columns.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{CardFace, GameConfig, GameEngine, Input, PeerEvent};

    fn playing_state() -> GameState {
        let deck = ["bulbasaur", "ivysaur", "venusaur"]
            .into_iter()
            .map(|name| CardFace::new(name, format!("https://sprites.test/{name}.svg")))
            .collect();
        let mut state = GameState::with_seed(3, deck);
        let config = GameConfig::default();
        GameEngine::new(&mut state, &config)
            .execute(Input::Start)
            .unwrap();
        state
    }

    #[test]
    fn playing_board_offers_face_down_cards() {
        let mut state = playing_state();
        let config = GameConfig::default();
        GameEngine::new(&mut state, &config)
            .execute(Input::local_flip("ivysaur", 1_000))
            .unwrap();

        let board = BoardView::from_state(&state, "Card flipped! Waiting for opponent...");
        assert_eq!(board.title(), "Flip the Cards!");
        assert_eq!(board.score_line(), "Your Score: 1 | Opponent's Score: 0");
        assert!(!board.can_play_again());

        let flipped = board.cards.iter().find(|c| c.id.as_str() == "ivysaur").unwrap();
        assert_eq!(flipped.face, FaceState::Mine);
        assert_eq!(flipped.label, "Ivysaur");
        assert!(!flipped.selectable);
        assert_eq!(board.cards.iter().filter(|c| c.selectable).count(), 2);
    }

    #[test]
    fn finished_board_marks_the_decisive_card() {
        let mut state = playing_state();
        let config = GameConfig::default();
        GameEngine::new(&mut state, &config)
            .execute(Input::local_flip("venusaur", 1_000))
            .unwrap();
        GameEngine::new(&mut state, &config)
            .execute(Input::Remote(PeerEvent::FlipCard {
                card_id: "venusaur".into(),
                timestamp: 5_000,
            }))
            .unwrap();

        let board = BoardView::from_state(&state, "");
        assert_eq!(board.title(), "Game Over!");
        assert!(board.can_play_again());
        assert!(board.cards.iter().all(|c| !c.selectable));

        let decisive: Vec<_> = board.cards.iter().filter(|c| c.decisive).collect();
        assert_eq!(decisive.len(), 1);
        assert_eq!(decisive[0].id.as_str(), "venusaur");
        assert!(board.result.as_deref().unwrap().contains("TIE"));
    }

    #[test]
    fn rows_chunk_the_table() {
        let board = BoardView::from_state(&playing_state(), "");
        let sizes: Vec<_> = board.rows(2).map(<[CardView]>::len).collect();
        assert_eq!(sizes, [2, 1]);
        assert_eq!(board.rows(0).count(), 3);
    }

    #[test]
    fn setup_board_is_empty() {
        let board = BoardView::from_state(&GameState::default(), "Waiting for game token...");
        assert!(board.is_setup());
        assert!(board.cards.is_empty());
    }
}
