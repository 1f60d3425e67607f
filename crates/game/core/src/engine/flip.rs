//! Card reveals from either side and the board evaluation that follows them.

use crate::config::GameConfig;
use crate::event::PeerEvent;
use crate::state::{
    CardId, FlipError, GameState, InvariantViolation, Outcome, Revealer, Timestamp,
};

use super::transition::Transition;
use super::{Reconciliation, Status};

/// The local player clicked a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalFlip {
    pub card_id: CardId,
    pub timestamp: Timestamp,
}

impl Transition for LocalFlip {
    type Error = FlipError;

    fn pre_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        if !state.is_playing() {
            return Err(FlipError::NotPlaying {
                lifecycle: state.lifecycle,
            });
        }
        let card = state
            .card(&self.card_id)
            .ok_or_else(|| FlipError::UnknownCard(self.card_id.clone()))?;
        if card.is_flipped() {
            return Err(FlipError::AlreadyFlipped(self.card_id.clone()));
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _config: &GameConfig,
        out: &mut Reconciliation,
    ) -> Result<(), Self::Error> {
        let card = state
            .card_mut(&self.card_id)
            .ok_or_else(|| FlipError::UnknownCard(self.card_id.clone()))?;
        card.reveal(Revealer::Local, self.timestamp);
        state.scores.increment(Revealer::Local);

        out.send(PeerEvent::flip(self.card_id.clone(), self.timestamp));

        if !evaluate_board(state, out) {
            out.status = Some(Status::CardFlipped);
        }
        Ok(())
    }
}

/// The opponent reports a reveal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteFlip {
    pub card_id: CardId,
    pub timestamp: Timestamp,
}

impl Transition for RemoteFlip {
    type Error = InvariantViolation;

    fn apply(
        &self,
        state: &mut GameState,
        config: &GameConfig,
        out: &mut Reconciliation,
    ) -> Result<(), Self::Error> {
        let Some(card) = state.card_mut(&self.card_id) else {
            out.ignored = true;
            return Ok(());
        };

        match (card.revealed_by, card.revealed_at) {
            (Some(Revealer::Local), Some(local_at)) => {
                // Both sides picked this card.
                let outcome = Outcome::from_race(local_at, self.timestamp, config.tie_window_ms);
                let reason = outcome.to_string();
                state.finish(reason.clone());
                if let Some(card) = state.card_mut(&self.card_id) {
                    card.decisive = true;
                }
                out.outcome = Some(outcome);
                out.send(PeerEvent::GameEnded {
                    reason: reason.clone(),
                    card_id: Some(self.card_id.clone()),
                });
                out.status = Some(Status::Finished(reason));
            }
            (Some(_), _) => {
                out.ignored = true;
            }
            (None, _) => {
                card.reveal(Revealer::Remote, self.timestamp);
                state.scores.increment(Revealer::Remote);
                if !evaluate_board(state, out) {
                    out.status = Some(Status::OpponentFlipped);
                }
            }
        }
        Ok(())
    }
}

/// Ends the game once every card is face up. Returns `true` if it did.
fn evaluate_board(state: &mut GameState, out: &mut Reconciliation) -> bool {
    if state.is_over() || !state.all_flipped() {
        return false;
    }

    let outcome = Outcome::from_scores(state.scores.local, state.scores.remote);
    let reason = outcome.to_string();
    state.finish(reason.clone());

    out.outcome = Some(outcome);
    out.send(PeerEvent::GameEnded {
        reason: reason.clone(),
        card_id: None,
    });
    out.status = Some(Status::Finished(reason));
    true
}
