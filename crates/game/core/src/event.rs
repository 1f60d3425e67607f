//! Messages exchanged between the two peers of a duel.
use crate::state::{CardId, Timestamp};

/// Discriminant of a [`PeerEvent`], spelled the way it travels on the wire.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    FlipCard,
    GameEnded,
    ResetGameRequest,
    ResetGameConfirmed,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Reset events are the only ones accepted once a game is over.
    pub const fn is_reset(&self) -> bool {
        matches!(self, Self::ResetGameRequest | Self::ResetGameConfirmed)
    }
}

/// Event sent to, or received from, the opponent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PeerEvent {
    /// The sender revealed `card_id` at `timestamp` on its own clock.
    FlipCard {
        card_id: CardId,
        timestamp: Timestamp,
    },
    /// The sender decided the game is over. `card_id` names the decisive
    /// card when the game ended on a same-card race.
    GameEnded {
        reason: String,
        card_id: Option<CardId>,
    },
    ResetGameRequest,
    ResetGameConfirmed,
}

impl PeerEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            PeerEvent::FlipCard { .. } => EventKind::FlipCard,
            PeerEvent::GameEnded { .. } => EventKind::GameEnded,
            PeerEvent::ResetGameRequest => EventKind::ResetGameRequest,
            PeerEvent::ResetGameConfirmed => EventKind::ResetGameConfirmed,
        }
    }

    pub fn flip(card_id: impl Into<CardId>, timestamp: Timestamp) -> Self {
        PeerEvent::FlipCard {
            card_id: card_id.into(),
            timestamp,
        }
    }
}
