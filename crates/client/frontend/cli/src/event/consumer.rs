//! Maintains the CLI message log in response to runtime events.
use runtime::{Event, NotificationEvent};

use client_frontend_core::{
    MessageVisibility,
    event::{EventConsumer, EventImpact},
    format::format_event,
    message::MessageLog,
};

pub struct CliEventConsumer {
    log: MessageLog,
    visibility: MessageVisibility,
}

impl CliEventConsumer {
    pub fn new(log: MessageLog, visibility: MessageVisibility) -> Self {
        Self { log, visibility }
    }
}

impl EventConsumer for CliEventConsumer {
    fn on_event(&mut self, event: &Event) -> EventImpact {
        let logged = match format_event(event, &self.visibility) {
            Some(entry) => {
                self.log.push(entry);
                EventImpact::redraw()
            }
            None => EventImpact::none(),
        };

        // Sent notifications change nothing on screen unless logged.
        let visible = match event {
            Event::Notification(NotificationEvent::Sent { .. }) => EventImpact::none(),
            Event::Game(_) | Event::Session(_) | Event::Notification(_) => EventImpact::redraw(),
        };

        logged.combine(visible)
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }

    fn take_message_log(self) -> MessageLog {
        self.log
    }
}
