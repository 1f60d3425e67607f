//! State-level errors.
//!
//! [`FlipError`] rejects a local click, [`StartError`] rejects dealing a
//! game, and [`InvariantViolation`] reports a board that no longer satisfies
//! the reveal/score bookkeeping.

use crate::state::{CardId, Lifecycle, Revealer};

/// Reasons a local click is rejected. None of these mutate state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlipError {
    #[error("cards can only be flipped while playing (lifecycle: {lifecycle})")]
    NotPlaying { lifecycle: Lifecycle },

    #[error("no card with id '{0}' on the table")]
    UnknownCard(CardId),

    #[error("card '{0}' is already face up")]
    AlreadyFlipped(CardId),

    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

/// Reasons a game cannot be dealt.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StartError {
    #[error("deck is empty; species have not been loaded")]
    EmptyDeck,

    #[error("game already started (lifecycle: {lifecycle})")]
    AlreadyStarted { lifecycle: Lifecycle },

    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

/// Bookkeeping that must hold after every transition.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvariantViolation {
    #[error("card '{card}' has revealer {revealer:?} but timestamp present={has_timestamp}")]
    RevealMismatch {
        card: CardId,
        revealer: Option<Revealer>,
        has_timestamp: bool,
    },

    #[error("card '{card}' is marked decisive while the game is still {lifecycle}")]
    StrayHighlight { card: CardId, lifecycle: Lifecycle },

    #[error("{side:?} score is {score} but {revealed} cards are revealed by that side")]
    ScoreMismatch {
        side: Revealer,
        score: u32,
        revealed: u32,
    },
}
