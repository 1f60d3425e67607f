//! Reconciliation pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Local
//! clicks and peer events are both expressed as an [`Input`]; each input is
//! driven through `pre_validate → apply → post_validate` and produces a
//! [`Reconciliation`] listing the events the caller must forward to the
//! opponent.

mod errors;
mod flip;
mod lifecycle;
mod status;
mod transition;

pub use errors::{ReconcileError, TransitionPhase, TransitionPhaseError};
pub use flip::{LocalFlip, RemoteFlip};
pub use lifecycle::{RemoteGameEnded, RemoteReset, StartGame};
pub use status::Status;
pub use transition::Transition;

use crate::config::GameConfig;
use crate::event::PeerEvent;
use crate::state::{CardId, GameState, Outcome, Timestamp};

use transition::drive_transition;

/// Everything the engine can be asked to reconcile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// Deal the first game once the session is connected.
    Start,
    /// The local player clicked a card.
    LocalFlip { card_id: CardId, timestamp: Timestamp },
    /// An event arrived from the opponent.
    Remote(PeerEvent),
}

impl Input {
    pub fn local_flip(card_id: impl Into<CardId>, timestamp: Timestamp) -> Self {
        Input::LocalFlip {
            card_id: card_id.into(),
            timestamp,
        }
    }
}

/// Result of reconciling one input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reconciliation {
    /// Events to forward to the opponent, in order.
    pub outgoing: Vec<PeerEvent>,
    /// Progress message for the player, if the input changed anything visible.
    pub status: Option<Status>,
    /// Set when this input decided the game locally.
    pub outcome: Option<Outcome>,
    /// The input was valid but had no effect (stale or irrelevant event).
    pub ignored: bool,
}

impl Reconciliation {
    fn ignored() -> Self {
        Self {
            ignored: true,
            ..Self::default()
        }
    }

    pub(crate) fn send(&mut self, event: PeerEvent) {
        self.outgoing.push(event);
    }
}

/// Reducer that folds inputs into a borrowed [`GameState`].
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    config: &'a GameConfig,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState, config: &'a GameConfig) -> Self {
        Self { state, config }
    }

    /// Reconciles one input.
    ///
    /// Once the game is over, remote events other than the rematch handshake
    /// are ignored.
    pub fn execute(&mut self, input: Input) -> Result<Reconciliation, ReconcileError> {
        match input {
            Input::Start => drive_transition(&StartGame, self.state, self.config)
                .map_err(ReconcileError::Start),
            Input::LocalFlip { card_id, timestamp } => drive_transition(
                &LocalFlip { card_id, timestamp },
                self.state,
                self.config,
            )
            .map_err(ReconcileError::LocalFlip),
            Input::Remote(event) => self.execute_remote(event),
        }
    }

    fn execute_remote(&mut self, event: PeerEvent) -> Result<Reconciliation, ReconcileError> {
        let kind = event.kind();
        if self.state.is_over() && !kind.is_reset() {
            return Ok(Reconciliation::ignored());
        }

        let result = match event {
            PeerEvent::FlipCard { card_id, timestamp } => drive_transition(
                &RemoteFlip { card_id, timestamp },
                self.state,
                self.config,
            ),
            PeerEvent::GameEnded { reason, card_id } => drive_transition(
                &RemoteGameEnded { reason, card_id },
                self.state,
                self.config,
            ),
            PeerEvent::ResetGameRequest => drive_transition(
                &RemoteReset { confirmed: false },
                self.state,
                self.config,
            ),
            PeerEvent::ResetGameConfirmed => {
                drive_transition(&RemoteReset { confirmed: true }, self.state, self.config)
            }
        };

        result.map_err(|error| ReconcileError::Remote { kind, error })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CardFace, FlipError, Lifecycle, Revealer, StartError};

    fn deck(size: usize) -> Vec<CardFace> {
        (0..size)
            .map(|i| {
                CardFace::new(
                    format!("species-{i}"),
                    format!("https://sprites.test/{}.svg", i + 1),
                )
            })
            .collect()
    }

    fn started(size: usize) -> (GameState, GameConfig) {
        let config = GameConfig::default();
        let mut state = GameState::with_seed(99, deck(size));
        GameEngine::new(&mut state, &config)
            .execute(Input::Start)
            .unwrap();
        (state, config)
    }

    fn ids(state: &GameState) -> Vec<CardId> {
        state.cards.iter().map(|c| c.id.clone()).collect()
    }

    fn assert_exclusive_reveals(state: &GameState) {
        for card in &state.cards {
            let local = card.is_revealed_by(Revealer::Local);
            let remote = card.is_revealed_by(Revealer::Remote);
            assert!(!(local && remote), "card {} revealed by both", card.id);
        }
        state.check_invariants().unwrap();
    }

    #[test]
    fn start_deals_the_whole_deck() {
        let (state, _) = started(20);
        assert_eq!(state.lifecycle, Lifecycle::Playing);
        assert_eq!(state.cards.len(), 20);
        assert!(state.cards.iter().all(|c| !c.is_flipped()));
        assert_eq!(state.scores.local, 0);
        assert_eq!(state.round, 1);
    }

    #[test]
    fn start_requires_deck_and_setup() {
        let config = GameConfig::default();
        let mut empty = GameState::default();
        let err = GameEngine::new(&mut empty, &config)
            .execute(Input::Start)
            .unwrap_err();
        assert!(matches!(
            err,
            ReconcileError::Start(TransitionPhaseError {
                error: StartError::EmptyDeck,
                ..
            })
        ));

        let (mut state, config) = started(4);
        let err = GameEngine::new(&mut state, &config)
            .execute(Input::Start)
            .unwrap_err();
        assert!(err.is_rejection());
    }

    #[test]
    fn local_flip_reveals_scores_and_notifies_peer() {
        let (mut state, config) = started(4);
        let target = ids(&state)[0].clone();

        let rec = GameEngine::new(&mut state, &config)
            .execute(Input::local_flip(target.clone(), 1_000))
            .unwrap();

        let card = state.card(&target).unwrap();
        assert_eq!(card.revealed_by, Some(Revealer::Local));
        assert_eq!(card.revealed_at, Some(1_000));
        assert_eq!(state.scores.local, 1);
        assert_eq!(rec.outgoing, vec![PeerEvent::flip(target, 1_000)]);
        assert_eq!(rec.status, Some(Status::CardFlipped));
        assert_exclusive_reveals(&state);
    }

    #[test]
    fn rejected_clicks_leave_state_untouched() {
        let (mut state, config) = started(4);
        let target = ids(&state)[0].clone();
        GameEngine::new(&mut state, &config)
            .execute(Input::local_flip(target.clone(), 1))
            .unwrap();
        let before = state.clone();

        let err = GameEngine::new(&mut state, &config)
            .execute(Input::local_flip(target.clone(), 2))
            .unwrap_err();
        assert!(matches!(
            err,
            ReconcileError::LocalFlip(TransitionPhaseError {
                phase: TransitionPhase::PreValidate,
                error: FlipError::AlreadyFlipped(_),
            })
        ));

        let err = GameEngine::new(&mut state, &config)
            .execute(Input::local_flip("missingno", 3))
            .unwrap_err();
        assert!(err.is_rejection());
        assert_eq!(state, before);

        let mut setup = GameState::new(deck(4));
        let err = GameEngine::new(&mut setup, &config)
            .execute(Input::local_flip("species-0", 4))
            .unwrap_err();
        assert!(matches!(
            err,
            ReconcileError::LocalFlip(TransitionPhaseError {
                error: FlipError::NotPlaying {
                    lifecycle: Lifecycle::Setup
                },
                ..
            })
        ));
    }

    #[test]
    fn remote_flip_on_face_down_card_scores_for_opponent() {
        let (mut state, config) = started(4);
        let target = ids(&state)[2].clone();

        let rec = GameEngine::new(&mut state, &config)
            .execute(Input::Remote(PeerEvent::flip(target.clone(), 7_000)))
            .unwrap();

        let card = state.card(&target).unwrap();
        assert_eq!(card.revealed_by, Some(Revealer::Remote));
        assert_eq!(card.revealed_at, Some(7_000));
        assert_eq!(state.scores.remote, 1);
        assert!(rec.outgoing.is_empty());
        assert_eq!(rec.status, Some(Status::OpponentFlipped));
    }

    #[test]
    fn same_card_within_window_is_a_tie() {
        let (mut state, config) = started(20);
        GameEngine::new(&mut state, &config)
            .execute(Input::local_flip("species-3", 1_000))
            .unwrap();

        let rec = GameEngine::new(&mut state, &config)
            .execute(Input::Remote(PeerEvent::flip("species-3", 5_000)))
            .unwrap();

        assert_eq!(state.lifecycle, Lifecycle::GameOver);
        assert!(matches!(rec.outcome, Some(Outcome::Tie { window_ms: 60_000 })));
        let result = state.result.clone().unwrap();
        assert!(result.contains("TIE"));
        assert!(state.card(&"species-3".into()).unwrap().decisive);
        assert_eq!(
            rec.outgoing,
            vec![PeerEvent::GameEnded {
                reason: result,
                card_id: Some("species-3".into()),
            }]
        );
        assert_exclusive_reveals(&state);
    }

    #[test]
    fn same_card_outside_window_is_a_double_pick() {
        let (mut state, config) = started(20);
        GameEngine::new(&mut state, &config)
            .execute(Input::local_flip("species-3", 1_000))
            .unwrap();

        let rec = GameEngine::new(&mut state, &config)
            .execute(Input::Remote(PeerEvent::flip("species-3", 70_000)))
            .unwrap();

        assert_eq!(rec.outcome, Some(Outcome::DoublePick));
        assert_eq!(
            state.result.as_deref(),
            Some("GAME OVER! Both picked the same card.")
        );
        // The reveal stays with the local side.
        let card = state.card(&"species-3".into()).unwrap();
        assert_eq!(card.revealed_by, Some(Revealer::Local));
        assert_eq!(state.scores.local, 1);
        assert_eq!(state.scores.remote, 0);
    }

    #[test]
    fn tie_window_is_configurable() {
        let config = GameConfig::with_tie_window(15_000);
        let mut state = GameState::with_seed(1, deck(6));
        let mut engine = GameEngine::new(&mut state, &config);
        engine.execute(Input::Start).unwrap();
        engine
            .execute(Input::local_flip("species-1", 1_000))
            .unwrap();
        let rec = engine
            .execute(Input::Remote(PeerEvent::flip("species-1", 20_000)))
            .unwrap();
        assert_eq!(rec.outcome, Some(Outcome::DoublePick));
    }

    #[test]
    fn duplicate_and_unknown_remote_flips_are_ignored() {
        let (mut state, config) = started(4);
        let mut engine = GameEngine::new(&mut state, &config);
        engine
            .execute(Input::Remote(PeerEvent::flip("species-1", 10)))
            .unwrap();

        let again = engine
            .execute(Input::Remote(PeerEvent::flip("species-1", 20)))
            .unwrap();
        assert!(again.ignored);

        let unknown = engine
            .execute(Input::Remote(PeerEvent::flip("missingno", 30)))
            .unwrap();
        assert!(unknown.ignored);

        assert_eq!(state.scores.remote, 1);
        assert_eq!(state.card(&"species-1".into()).unwrap().revealed_at, Some(10));
    }

    #[test]
    fn full_board_decides_by_tally() {
        // 20 cards: local flips 11, remote flips 9.
        let (mut state, config) = started(20);
        let order = ids(&state);
        let mut last = Reconciliation::default();

        for (i, id) in order.iter().enumerate() {
            let mut engine = GameEngine::new(&mut state, &config);
            last = if i % 2 == 0 || i == 19 {
                engine
                    .execute(Input::local_flip(id.clone(), i as u64))
                    .unwrap()
            } else {
                engine
                    .execute(Input::Remote(PeerEvent::flip(id.clone(), i as u64)))
                    .unwrap()
            };
            if i < 19 {
                assert_eq!(state.lifecycle, Lifecycle::Playing, "ended early at {i}");
                assert!(last.outcome.is_none());
            }
            assert_exclusive_reveals(&state);
        }

        assert_eq!(state.scores.local, 11);
        assert_eq!(state.scores.remote, 9);
        assert_eq!(state.lifecycle, Lifecycle::GameOver);
        assert_eq!(last.outcome, Some(Outcome::Win));
        assert!(state.result.as_deref().unwrap().contains("YOU WIN"));

        // The final click is forwarded, then the verdict.
        assert_eq!(last.outgoing.len(), 2);
        assert!(matches!(last.outgoing[0], PeerEvent::FlipCard { .. }));
        assert!(matches!(
            last.outgoing[1],
            PeerEvent::GameEnded { card_id: None, .. }
        ));
    }

    #[test]
    fn remote_flip_completing_the_board_can_lose() {
        let (mut state, config) = started(3);
        let order = ids(&state);
        let mut engine = GameEngine::new(&mut state, &config);
        engine
            .execute(Input::local_flip(order[0].clone(), 1))
            .unwrap();
        engine
            .execute(Input::Remote(PeerEvent::flip(order[1].clone(), 2)))
            .unwrap();
        let rec = engine
            .execute(Input::Remote(PeerEvent::flip(order[2].clone(), 3)))
            .unwrap();

        assert_eq!(rec.outcome, Some(Outcome::Loss));
        assert_eq!(rec.outgoing.len(), 1);
        assert!(state.is_over());
    }

    #[test]
    fn remote_game_ended_is_adopted_once() {
        let (mut state, config) = started(4);
        let mut engine = GameEngine::new(&mut state, &config);

        let rec = engine
            .execute(Input::Remote(PeerEvent::GameEnded {
                reason: "GAME OVER! Both picked the same card.".into(),
                card_id: Some("species-2".into()),
            }))
            .unwrap();
        assert!(rec.outgoing.is_empty());
        assert!(matches!(rec.status, Some(Status::Finished(_))));

        let second = engine
            .execute(Input::Remote(PeerEvent::GameEnded {
                reason: "something else".into(),
                card_id: None,
            }))
            .unwrap();
        assert!(second.ignored);

        assert_eq!(
            state.result.as_deref(),
            Some("GAME OVER! Both picked the same card.")
        );
        assert!(state.card(&"species-2".into()).unwrap().decisive);
    }

    #[test]
    fn game_over_freezes_cards() {
        let (mut state, config) = started(4);
        let mut engine = GameEngine::new(&mut state, &config);
        engine
            .execute(Input::Remote(PeerEvent::GameEnded {
                reason: "done".into(),
                card_id: None,
            }))
            .unwrap();

        let frozen = engine
            .execute(Input::Remote(PeerEvent::flip("species-0", 5)))
            .unwrap();
        assert!(frozen.ignored);
        assert!(engine.execute(Input::local_flip("species-0", 6)).is_err());

        assert!(state.cards.iter().all(|c| !c.is_flipped()));
    }

    #[test]
    fn reset_request_redeals_and_confirms_once() {
        let (mut state, config) = started(6);
        let mut engine = GameEngine::new(&mut state, &config);
        engine
            .execute(Input::local_flip("species-0", 1))
            .unwrap();
        engine
            .execute(Input::Remote(PeerEvent::GameEnded {
                reason: "done".into(),
                card_id: Some("species-0".into()),
            }))
            .unwrap();

        let rec = engine
            .execute(Input::Remote(PeerEvent::ResetGameRequest))
            .unwrap();

        assert_eq!(rec.outgoing, vec![PeerEvent::ResetGameConfirmed]);
        assert_eq!(rec.status, Some(Status::RematchRequested));
        assert_eq!(state.lifecycle, Lifecycle::Playing);
        assert_eq!(state.round, 2);
        assert_eq!(state.scores.local, 0);
        assert!(state.result.is_none());
        assert!(state.cards.iter().all(|c| !c.is_flipped() && !c.decisive));
    }

    #[test]
    fn reset_confirmation_redeals_without_reply() {
        let (mut state, config) = started(6);
        let rec = GameEngine::new(&mut state, &config)
            .execute(Input::Remote(PeerEvent::ResetGameConfirmed))
            .unwrap();
        assert!(rec.outgoing.is_empty());
        assert_eq!(rec.status, Some(Status::RematchConfirmed));
        assert_eq!(state.round, 2);
    }

    #[test]
    fn reset_without_deck_still_confirms() {
        let config = GameConfig::default();
        let mut state = GameState::default();
        let rec = GameEngine::new(&mut state, &config)
            .execute(Input::Remote(PeerEvent::ResetGameRequest))
            .unwrap();
        assert_eq!(rec.outgoing, vec![PeerEvent::ResetGameConfirmed]);
        assert_eq!(state.lifecycle, Lifecycle::Setup);
    }
}
