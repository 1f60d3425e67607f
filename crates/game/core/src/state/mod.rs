//! Authoritative game state representation.
//!
//! This module owns the table (cards), tallies and lifecycle of one peer's
//! view of a duel. Runtime layers clone or query this state but mutate it
//! exclusively through the engine.
mod card;
mod error;
mod outcome;

use std::fmt;

pub use card::{Card, CardFace, CardId, Revealer, Timestamp};
pub use error::{FlipError, InvariantViolation, StartError};
pub use outcome::Outcome;

use crate::rng::{PcgRng, RngOracle, compute_seed};

/// Where a game is in its life.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Lifecycle {
    /// Waiting for the session to connect and the deck to load.
    #[default]
    Setup,
    Playing,
    GameOver,
}

impl Lifecycle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lifecycle::Setup => "setup",
            Lifecycle::Playing => "playing",
            Lifecycle::GameOver => "gameOver",
        }
    }
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of cards revealed by each side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scores {
    pub local: u32,
    pub remote: u32,
}

impl Scores {
    pub fn of(&self, side: Revealer) -> u32 {
        match side {
            Revealer::Local => self.local,
            Revealer::Remote => self.remote,
        }
    }

    pub(crate) fn increment(&mut self, side: Revealer) {
        match side {
            Revealer::Local => self.local += 1,
            Revealer::Remote => self.remote += 1,
        }
    }
}

/// One peer's view of a duel.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Base seed for shuffling. Set once and never modified.
    pub game_seed: u64,

    /// Number of deals so far. Mixed into the seed so every reset reshuffles.
    pub round: u64,

    /// Species available for dealing, in catalog order.
    deck: Vec<CardFace>,

    /// Cards on the table, in shuffled order. Empty during setup.
    pub cards: Vec<Card>,
    pub scores: Scores,
    pub lifecycle: Lifecycle,

    /// Result text once the game is over. Adopted verbatim from the
    /// opponent when they decided the outcome.
    pub result: Option<String>,
}

impl GameState {
    /// Creates a state in [`Lifecycle::Setup`] holding `deck` for later deals.
    pub fn new(deck: Vec<CardFace>) -> Self {
        Self::with_seed(0, deck)
    }

    pub fn with_seed(game_seed: u64, deck: Vec<CardFace>) -> Self {
        Self {
            game_seed,
            round: 0,
            deck,
            cards: Vec::new(),
            scores: Scores::default(),
            lifecycle: Lifecycle::Setup,
            result: None,
        }
    }

    pub fn deck(&self) -> &[CardFace] {
        &self.deck
    }

    pub fn has_deck(&self) -> bool {
        !self.deck.is_empty()
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| &card.id == id)
    }

    pub(crate) fn card_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| &card.id == id)
    }

    pub fn is_playing(&self) -> bool {
        self.lifecycle == Lifecycle::Playing
    }

    pub fn is_over(&self) -> bool {
        self.lifecycle == Lifecycle::GameOver
    }

    /// True once a deal exists and every card on it is face up.
    pub fn all_flipped(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(Card::is_flipped)
    }

    pub fn face_down(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|card| !card.is_flipped())
    }

    pub fn revealed_by(&self, side: Revealer) -> u32 {
        self.cards
            .iter()
            .filter(|card| card.is_revealed_by(side))
            .count() as u32
    }

    pub fn decisive_card(&self) -> Option<&Card> {
        self.cards.iter().find(|card| card.decisive)
    }

    /// Deals a fresh table: reshuffles the deck, clears tallies and result,
    /// and enters [`Lifecycle::Playing`]. A state without a deck is left
    /// untouched and `false` is returned.
    pub(crate) fn deal(&mut self) -> bool {
        if self.deck.is_empty() {
            return false;
        }

        self.round += 1;
        let mut faces = self.deck.clone();
        PcgRng.shuffle(compute_seed(self.game_seed, self.round, 0), &mut faces);

        self.cards = faces.into_iter().map(Card::face_down).collect();
        self.scores = Scores::default();
        self.lifecycle = Lifecycle::Playing;
        self.result = None;
        true
    }

    pub(crate) fn finish(&mut self, reason: impl Into<String>) {
        self.lifecycle = Lifecycle::GameOver;
        self.result = Some(reason.into());
    }

    /// Checks the reveal and tally bookkeeping.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        for card in &self.cards {
            if card.revealed_by.is_some() != card.revealed_at.is_some() {
                return Err(InvariantViolation::RevealMismatch {
                    card: card.id.clone(),
                    revealer: card.revealed_by,
                    has_timestamp: card.revealed_at.is_some(),
                });
            }
            if card.decisive && self.lifecycle != Lifecycle::GameOver {
                return Err(InvariantViolation::StrayHighlight {
                    card: card.id.clone(),
                    lifecycle: self.lifecycle,
                });
            }
        }

        for side in [Revealer::Local, Revealer::Remote] {
            let revealed = self.revealed_by(side);
            let score = self.scores.of(side);
            if revealed != score {
                return Err(InvariantViolation::ScoreMismatch {
                    side,
                    score,
                    revealed,
                });
            }
        }

        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
