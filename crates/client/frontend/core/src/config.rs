//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;

/// Frontend-specific configuration.
///
/// This contains UI-related settings like message capacity and filtering.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig) -> Self {
        Self { messages }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    /// - `SHOW_NOTIFICATION_MESSAGES` - Log raw notifications received (default: true)
    /// - `SHOW_OUTGOING_MESSAGES` - Log notifications sent to the peer (default: false)
    /// - `SHOW_REJECTION_MESSAGES` - Log refused flips and ignored peer events (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>(&lookup, "CLI_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        let visibility = &mut config.messages.visibility;
        if let Some(show) = read_env_bool(&lookup, "SHOW_NOTIFICATION_MESSAGES") {
            visibility.show_notifications = show;
        }
        if let Some(show) = read_env_bool(&lookup, "SHOW_OUTGOING_MESSAGES") {
            visibility.show_outgoing = show;
        }
        if let Some(show) = read_env_bool(&lookup, "SHOW_REJECTION_MESSAGES") {
            visibility.show_rejections = show;
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
    pub visibility: MessageVisibility,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            capacity: 64,
            visibility: MessageVisibility::default(),
        }
    }
}

/// Controls which runtime events generate visible messages.
///
/// Status changes and delivery failures are always shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageVisibility {
    /// Every notification that reaches this endpoint, game traffic included.
    pub show_notifications: bool,
    /// Notifications this endpoint sent.
    pub show_outgoing: bool,
    /// Local flips the reconciler refused and peer events it ignored.
    pub show_rejections: bool,
}

impl Default for MessageVisibility {
    fn default() -> Self {
        Self {
            show_notifications: true,
            show_outgoing: false, // Echoes every flip
            show_rejections: true,
        }
    }
}

fn read_env<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

fn read_env_bool(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<bool> {
    match lookup(key)?.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn defaults() {
        let config = FrontendConfig::from_lookup(lookup(&[]));
        assert_eq!(config.messages.capacity, 64);
        assert_eq!(config.messages.visibility, MessageVisibility::default());
    }

    #[test]
    fn reads_capacity_and_flags() {
        let config = FrontendConfig::from_lookup(lookup(&[
            ("CLI_MESSAGE_CAPACITY", "0"),
            ("SHOW_NOTIFICATION_MESSAGES", "No"),
            ("SHOW_OUTGOING_MESSAGES", " on "),
            ("SHOW_REJECTION_MESSAGES", "sometimes"),
        ]));
        assert_eq!(config.messages.capacity, 1);
        assert!(!config.messages.visibility.show_notifications);
        assert!(config.messages.visibility.show_outgoing);
        assert!(config.messages.visibility.show_rejections);
    }
}
