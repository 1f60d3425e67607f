//! Wire format for peer events.
//!
//! A [`PeerEvent`] travels as a [`Notification`] whose title is the event
//! kind (`FLIP_CARD`, `GAME_ENDED`, ...) and whose body is a camelCase JSON
//! payload.

use std::str::FromStr;

use game_core::{CardId, EventKind, PeerEvent, Timestamp};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::transport::Notification;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("notification title {0:?} is not a game event")]
    UnknownKind(String),

    #[error("malformed {kind} payload")]
    MalformedBody {
        kind: EventKind,
        #[source]
        source: serde_json::Error,
    },
}

impl DecodeError {
    /// True for notifications that are not game traffic at all, like the
    /// token page greeting.
    pub fn is_foreign(&self) -> bool {
        matches!(self, DecodeError::UnknownKind(_))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FlipPayload {
    card_id: CardId,
    timestamp: Timestamp,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GameEndedPayload {
    reason: String,
    #[serde(default)]
    card_id: Option<CardId>,
}

pub fn encode(event: &PeerEvent) -> Notification {
    let body = match event {
        PeerEvent::FlipCard { card_id, timestamp } => {
            json!({ "cardId": card_id.as_str(), "timestamp": timestamp })
        }
        PeerEvent::GameEnded { reason, card_id } => json!({
            "reason": reason,
            "cardId": card_id.as_ref().map(CardId::as_str),
        }),
        PeerEvent::ResetGameRequest | PeerEvent::ResetGameConfirmed => json!({}),
    };
    Notification::new(event.kind().as_str(), body.to_string())
}

/// Decodes a notification into a peer event.
///
/// Reset bodies are not inspected; the kind alone carries the meaning.
pub fn decode(notification: &Notification) -> Result<PeerEvent, DecodeError> {
    let kind = EventKind::from_str(&notification.title)
        .map_err(|_| DecodeError::UnknownKind(notification.title.clone()))?;
    let malformed = |source| DecodeError::MalformedBody { kind, source };

    match kind {
        EventKind::FlipCard => {
            let payload: FlipPayload =
                serde_json::from_str(&notification.body).map_err(malformed)?;
            Ok(PeerEvent::FlipCard {
                card_id: payload.card_id,
                timestamp: payload.timestamp,
            })
        }
        EventKind::GameEnded => {
            let payload: GameEndedPayload =
                serde_json::from_str(&notification.body).map_err(malformed)?;
            Ok(PeerEvent::GameEnded {
                reason: payload.reason,
                card_id: payload.card_id,
            })
        }
        EventKind::ResetGameRequest => Ok(PeerEvent::ResetGameRequest),
        EventKind::ResetGameConfirmed => Ok(PeerEvent::ResetGameConfirmed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn body(notification: &Notification) -> Value {
        serde_json::from_str(&notification.body).unwrap()
    }

    #[test]
    fn flip_uses_camel_case_payload() {
        let n = encode(&PeerEvent::flip("pikachu", 1_000));
        assert_eq!(n.title, "FLIP_CARD");
        assert_eq!(body(&n), json!({ "cardId": "pikachu", "timestamp": 1000 }));
    }

    #[test]
    fn game_ended_spells_out_null_card() {
        let n = encode(&PeerEvent::GameEnded {
            reason: "done".into(),
            card_id: None,
        });
        assert_eq!(n.title, "GAME_ENDED");
        assert_eq!(body(&n), json!({ "reason": "done", "cardId": null }));
    }

    #[test]
    fn reset_bodies_are_empty_objects() {
        let n = encode(&PeerEvent::ResetGameRequest);
        assert_eq!(n.title, "RESET_GAME_REQUEST");
        assert_eq!(n.body, "{}");
        assert_eq!(
            encode(&PeerEvent::ResetGameConfirmed).title,
            "RESET_GAME_CONFIRMED"
        );
    }

    #[test]
    fn decodes_payloads_from_other_clients() {
        let flip = Notification::new("FLIP_CARD", r#"{"timestamp":42,"cardId":"eevee"}"#);
        assert_eq!(decode(&flip).unwrap(), PeerEvent::flip("eevee", 42));

        let ended = Notification::new(
            "GAME_ENDED",
            r#"{"reason":"GAME OVER! Both picked the same card.","cardId":"eevee"}"#,
        );
        assert_eq!(
            decode(&ended).unwrap(),
            PeerEvent::GameEnded {
                reason: "GAME OVER! Both picked the same card.".into(),
                card_id: Some("eevee".into()),
            }
        );

        let reset = Notification::new("RESET_GAME_REQUEST", "");
        assert_eq!(decode(&reset).unwrap(), PeerEvent::ResetGameRequest);
    }

    #[test]
    fn greeting_is_foreign_traffic() {
        let err = decode(&Notification::hello()).unwrap_err();
        assert!(err.is_foreign());
    }

    #[test]
    fn malformed_bodies_name_the_kind() {
        let err = decode(&Notification::new("FLIP_CARD", "not json")).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::MalformedBody {
                kind: EventKind::FlipCard,
                ..
            }
        ));
        assert!(!err.is_foreign());

        let missing = Notification::new("FLIP_CARD", r#"{"cardId":"eevee"}"#);
        assert!(decode(&missing).is_err());
    }
}
