//! Event types for different topics.

use game_core::{GameState, Outcome, Status, TransitionPhase};
use serde::{Deserialize, Serialize};

use crate::session::Session;
use crate::transport::Notification;

/// Where an input to the game engine came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputSource {
    Local,
    Remote,
}

/// Events related to game state changes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameEvent {
    /// The reconciler accepted an input and the table changed.
    StateChanged {
        state: Box<GameState>,
        status: Option<Status>,
        /// Set when this change ended the game.
        outcome: Option<Outcome>,
    },

    /// An input was refused or failed validation.
    InputRejected {
        source: InputSource,
        phase: TransitionPhase,
        error: String,
    },
}

/// Events related to the peer session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SessionEvent {
    Connected(Session),
}

/// Raw traffic on the transport, decodable or not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NotificationEvent {
    Received(Notification),
    Sent { peer: String, notification: Notification },
    /// A notification could not be delivered; there is no retry.
    SendFailed { peer: String, title: String, error: String },
}
