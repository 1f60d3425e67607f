//! Dealing, remote game-over notices and the rematch handshake.

use crate::config::GameConfig;
use crate::event::PeerEvent;
use crate::state::{CardId, GameState, InvariantViolation, Lifecycle, StartError};

use super::transition::Transition;
use super::{Reconciliation, Status};

/// First deal after the session connects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StartGame;

impl Transition for StartGame {
    type Error = StartError;

    fn pre_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        if state.lifecycle != Lifecycle::Setup {
            return Err(StartError::AlreadyStarted {
                lifecycle: state.lifecycle,
            });
        }
        if !state.has_deck() {
            return Err(StartError::EmptyDeck);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _config: &GameConfig,
        out: &mut Reconciliation,
    ) -> Result<(), Self::Error> {
        state.deal();
        out.status = Some(Status::GameStarted);
        Ok(())
    }
}

/// The opponent declared the game over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteGameEnded {
    pub reason: String,
    pub card_id: Option<CardId>,
}

impl Transition for RemoteGameEnded {
    type Error = InvariantViolation;

    fn apply(
        &self,
        state: &mut GameState,
        _config: &GameConfig,
        out: &mut Reconciliation,
    ) -> Result<(), Self::Error> {
        state.finish(self.reason.clone());
        if let Some(card) = self.card_id.as_ref().and_then(|id| state.card_mut(id)) {
            card.decisive = true;
        }
        out.status = Some(Status::Finished(self.reason.clone()));
        Ok(())
    }
}

/// Either half of the rematch handshake.
///
/// A request re-deals immediately and answers with a confirmation; a
/// confirmation only re-deals. Nothing prevents both peers from requesting
/// at once, in which case each side simply deals twice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RemoteReset {
    pub confirmed: bool,
}

impl Transition for RemoteReset {
    type Error = InvariantViolation;

    fn apply(
        &self,
        state: &mut GameState,
        _config: &GameConfig,
        out: &mut Reconciliation,
    ) -> Result<(), Self::Error> {
        state.deal();
        if self.confirmed {
            out.status = Some(Status::RematchConfirmed);
        } else {
            out.send(PeerEvent::ResetGameConfirmed);
            out.status = Some(Status::RematchRequested);
        }
        Ok(())
    }
}
