//! Worker tasks that back the runtime orchestration.
//!
//! The game worker reconciles commands and peer notifications; the bot peer
//! in [`crate::providers`] drives a runtime from the outside like a player.

mod game;

pub use game::{Command, GameWorker};
