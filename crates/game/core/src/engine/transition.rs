//! Transition trait and the three-phase driver.

use crate::config::GameConfig;
use crate::state::{GameState, InvariantViolation};

use super::Reconciliation;
use super::errors::{TransitionPhase, TransitionPhaseError};

/// Defines how one kind of input mutates the game state.
pub trait Transition {
    type Error: From<InvariantViolation>;

    /// Validates pre-conditions using the state **before** mutation.
    /// A failure here guarantees the state was not touched.
    fn pre_validate(&self, _state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the input, recording outgoing events and status in `out`.
    fn apply(
        &self,
        state: &mut GameState,
        config: &GameConfig,
        out: &mut Reconciliation,
    ) -> Result<(), Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        state.check_invariants().map_err(Self::Error::from)
    }
}

/// Executes a transition through `pre_validate → apply → post_validate`.
#[inline]
pub(super) fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    config: &GameConfig,
) -> Result<Reconciliation, TransitionPhaseError<T::Error>>
where
    T: Transition,
{
    let mut out = Reconciliation::default();

    transition
        .pre_validate(state, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    transition
        .apply(state, config, &mut out)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(out)
}
