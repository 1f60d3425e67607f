//! Message text for runtime events.
use runtime::{Event, GameEvent, InputSource, NotificationEvent, SessionEvent};

use crate::config::MessageVisibility;
use crate::message::{MessageEntry, MessageLevel};
use crate::view_model::text;

/// Describes `event` for the message log, or `None` when it is filtered out
/// or carries nothing worth showing.
pub fn format_event(event: &Event, visibility: &MessageVisibility) -> Option<MessageEntry> {
    match event {
        Event::Game(GameEvent::StateChanged { state, status, .. }) => {
            let status = status.as_ref()?;
            Some(MessageEntry::new(
                status.to_string(),
                Some(state.round),
                MessageLevel::Info,
            ))
        }
        Event::Game(GameEvent::InputRejected {
            source,
            phase,
            error,
        }) => {
            if !visibility.show_rejections {
                return None;
            }
            let text = match source {
                InputSource::Local => format!("Flip refused: {error}"),
                InputSource::Remote => {
                    format!("Ignored opponent event during {}: {error}", phase.as_str())
                }
            };
            Some(MessageEntry::warning(text))
        }
        Event::Session(SessionEvent::Connected(session)) => {
            let peer = session.peer().map(short_token).unwrap_or_default();
            Some(MessageEntry::info(format!("{} (peer {peer})", text::CONNECTED)))
        }
        Event::Notification(NotificationEvent::Received(notification)) => visibility
            .show_notifications
            .then(|| {
                MessageEntry::info(format!(
                    "Received {}: {}",
                    notification.title, notification.body
                ))
            }),
        Event::Notification(NotificationEvent::Sent { peer, notification }) => {
            visibility.show_outgoing.then(|| {
                MessageEntry::info(format!(
                    "Sent {} to {}",
                    notification.title,
                    short_token(peer)
                ))
            })
        }
        Event::Notification(NotificationEvent::SendFailed { peer, title, error }) => {
            Some(MessageEntry::error(format!(
                "Could not deliver {title} to {}: {error}",
                short_token(peer)
            )))
        }
    }
}

/// First eight characters of a token, enough to tell peers apart.
pub fn short_token(token: &str) -> String {
    let mut short: String = token.chars().take(8).collect();
    if token.chars().count() > 8 {
        short.push('…');
    }
    short
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{GameState, Status, TransitionPhase};
    use runtime::{Notification, Session};

    fn changed(status: Option<Status>) -> Event {
        Event::Game(GameEvent::StateChanged {
            state: Box::new(GameState::default()),
            status,
            outcome: None,
        })
    }

    #[test]
    fn status_changes_become_info() {
        let visibility = MessageVisibility::default();
        let entry = format_event(&changed(Some(Status::CardFlipped)), &visibility).unwrap();
        assert_eq!(entry.text, "Card flipped! Waiting for opponent...");
        assert_eq!(entry.level, MessageLevel::Info);
        assert_eq!(entry.round, Some(0));

        assert!(format_event(&changed(None), &visibility).is_none());
    }

    #[test]
    fn rejections_respect_visibility() {
        let event = Event::Game(GameEvent::InputRejected {
            source: InputSource::Local,
            phase: TransitionPhase::PreValidate,
            error: "card already flipped".into(),
        });

        let shown = format_event(&event, &MessageVisibility::default()).unwrap();
        assert_eq!(shown.level, MessageLevel::Warning);
        assert_eq!(shown.text, "Flip refused: card already flipped");

        let hidden = MessageVisibility {
            show_rejections: false,
            ..MessageVisibility::default()
        };
        assert!(format_event(&event, &hidden).is_none());
    }

    #[test]
    fn outgoing_is_hidden_by_default() {
        let sent = Event::Notification(NotificationEvent::Sent {
            peer: "0123456789abcdef".into(),
            notification: Notification::hello(),
        });
        assert!(format_event(&sent, &MessageVisibility::default()).is_none());

        let failed = Event::Notification(NotificationEvent::SendFailed {
            peer: "0123456789abcdef".into(),
            title: "FLIP_CARD".into(),
            error: "unknown peer".into(),
        });
        let entry = format_event(&failed, &MessageVisibility::default()).unwrap();
        assert_eq!(entry.level, MessageLevel::Error);
        assert_eq!(
            entry.text,
            "Could not deliver FLIP_CARD to 01234567…: unknown peer"
        );
    }

    #[test]
    fn received_notifications_are_shown() {
        let event = Event::Notification(NotificationEvent::Received(Notification::hello()));
        let entry = format_event(&event, &MessageVisibility::default()).unwrap();
        assert_eq!(entry.text, "Received Hello: Hello world");
    }

    #[test]
    fn connection_names_the_peer() {
        let mut session = Session::new("local-token");
        session.connect("abcdef0123456789").unwrap();
        let entry = format_event(
            &Event::Session(SessionEvent::Connected(session)),
            &MessageVisibility::default(),
        )
        .unwrap();
        assert_eq!(
            entry.text,
            "Connected! Initializing game... (peer abcdef01…)"
        );
    }

    #[test]
    fn short_tokens_are_kept_whole() {
        assert_eq!(short_token("abc"), "abc");
    }
}
