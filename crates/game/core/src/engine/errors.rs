//! Error types for the reconciliation pipeline.

use crate::event::EventKind;
use crate::state::{FlipError, InvariantViolation, StartError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while reconciling an input through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReconcileError {
    #[error("start failed: {0}")]
    Start(TransitionPhaseError<StartError>),

    #[error("local flip failed: {0}")]
    LocalFlip(TransitionPhaseError<FlipError>),

    #[error("{kind} event failed: {error}")]
    Remote {
        kind: EventKind,
        error: TransitionPhaseError<InvariantViolation>,
    },
}

impl ReconcileError {
    /// Returns the phase that failed.
    pub fn phase(&self) -> TransitionPhase {
        match self {
            ReconcileError::Start(e) => e.phase,
            ReconcileError::LocalFlip(e) => e.phase,
            ReconcileError::Remote { error, .. } => error.phase,
        }
    }

    /// True when the input was refused before touching the state.
    pub fn is_rejection(&self) -> bool {
        self.phase() == TransitionPhase::PreValidate
    }
}
