//! Deterministic card-flip rules shared across clients.
//!
//! `game-core` defines the canonical data model (cards, scores, lifecycle)
//! and the reconciler that folds local clicks and peer events into the next
//! [`GameState`]. It performs no I/O: outgoing peer events are returned to
//! the caller, which owns the transport. All state mutation flows through
//! [`engine::GameEngine`].
pub mod config;
pub mod engine;
pub mod event;
pub mod rng;
pub mod state;

pub use config::GameConfig;
pub use engine::{
    GameEngine, Input, ReconcileError, Reconciliation, Status, TransitionPhase,
    TransitionPhaseError,
};
pub use event::{EventKind, PeerEvent};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use state::{
    Card, CardFace, CardId, FlipError, GameState, InvariantViolation, Lifecycle, Outcome,
    Revealer, Scores, StartError, Timestamp,
};
