//! Client configuration structures and loaders.
use std::env;
use std::time::Duration;

use client_catalog::{DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE, DEFAULT_SPRITE_BASE_URL};
use game_core::GameConfig;
use runtime::{BotConfig, RuntimeConfig};

/// Configuration required to bootstrap a client runtime and UI.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub channels: ChannelConfig,
    pub catalog: CatalogConfig,
    pub game: GameConfig,
    pub bot: BotSettings,
    pub session_id: Option<String>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `POKEAPI_BASE_URL` - Species API root (default: public PokéAPI)
    /// - `POKEAPI_SPRITE_BASE_URL` - Sprite directory (default: dream-world sprites)
    /// - `DECK_SIZE` - Species dealt per game (default: 20)
    /// - `TIE_WINDOW_MS` - Same-card tie window (default: 60000)
    /// - `ENABLE_BOT` - Play against a local bot (default: true)
    /// - `BOT_FLIP_INTERVAL_MS` - Bot flip cadence (default: 1500)
    /// - `GAME_SESSION_ID` - Session identifier for log files (default: auto-generated)
    /// - `RUNTIME_EVENT_BUFFER` - Event bus capacity per topic (default: 100)
    /// - `RUNTIME_COMMAND_BUFFER` - Worker command queue size (default: 32)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).map(|value| value.trim().to_owned());
        let parse = |key: &str| read(key).and_then(|value| value.parse::<u64>().ok());

        let mut config = Self::default();

        // Channel configuration
        if let Some(capacity) = parse("RUNTIME_EVENT_BUFFER") {
            config.channels.event_buffer = (capacity as usize).max(1);
        }
        if let Some(capacity) = parse("RUNTIME_COMMAND_BUFFER") {
            config.channels.command_buffer = (capacity as usize).max(1);
        }

        // Catalog
        if let Some(url) = read("POKEAPI_BASE_URL").filter(|url| !url.is_empty()) {
            config.catalog.base_url = url;
        }
        if let Some(url) = read("POKEAPI_SPRITE_BASE_URL").filter(|url| !url.is_empty()) {
            config.catalog.sprite_base_url = url;
        }
        if let Some(size) = parse("DECK_SIZE") {
            config.catalog.deck_size = (size as usize).max(1);
        }
        config.game.deck_size = config.catalog.deck_size;

        // Rules
        if let Some(window) = parse("TIE_WINDOW_MS") {
            config.game.tie_window_ms = window;
        }

        // Bot
        if let Some(enabled) = read("ENABLE_BOT").and_then(|value| parse_flag(&value)) {
            config.bot.enabled = enabled;
        }
        if let Some(interval) = parse("BOT_FLIP_INTERVAL_MS") {
            config.bot.flip_interval = Duration::from_millis(interval.max(1));
        }

        // Session ID (optional)
        config.session_id = read("GAME_SESSION_ID").filter(|id| !id.is_empty());

        config
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            game_config: self.game.clone(),
            event_buffer_size: self.channels.event_buffer,
            command_buffer_size: self.channels.command_buffer,
            seed: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ChannelConfig {
    pub event_buffer: usize,
    pub command_buffer: usize,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        let runtime = RuntimeConfig::default();
        Self {
            event_buffer: runtime.event_buffer_size,
            command_buffer: runtime.command_buffer_size,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CatalogConfig {
    pub base_url: String,
    pub sprite_base_url: String,
    pub deck_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            sprite_base_url: DEFAULT_SPRITE_BASE_URL.to_owned(),
            deck_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Clone, Debug)]
pub struct BotSettings {
    pub enabled: bool,
    pub flip_interval: Duration,
}

impl BotSettings {
    pub fn bot_config(&self, opponent_token: &str) -> BotConfig {
        BotConfig::new(opponent_token).with_flip_interval(self.flip_interval)
    }
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            flip_interval: BotConfig::DEFAULT_FLIP_INTERVAL,
        }
    }
}

/// Accepts `true/false`, `1/0`, `yes/no` and `on/off`, case-insensitively.
fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_match_the_public_api() {
        let config = config(&[]);
        assert_eq!(config.catalog.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.catalog.deck_size, 20);
        assert_eq!(config.game.tie_window_ms, 60_000);
        assert!(config.bot.enabled);
        assert_eq!(config.bot.flip_interval, Duration::from_millis(1500));
        assert!(config.session_id.is_none());
    }

    #[test]
    fn overrides_are_applied() {
        let config = config(&[
            ("DECK_SIZE", "8"),
            ("TIE_WINDOW_MS", "15000"),
            ("ENABLE_BOT", "off"),
            ("BOT_FLIP_INTERVAL_MS", "250"),
            ("POKEAPI_BASE_URL", "http://localhost:9000/api/v2"),
            ("GAME_SESSION_ID", "duel-1"),
            ("RUNTIME_COMMAND_BUFFER", "0"),
        ]);
        assert_eq!(config.catalog.deck_size, 8);
        assert_eq!(config.game.deck_size, 8);
        assert_eq!(config.game.tie_window_ms, 15_000);
        assert!(!config.bot.enabled);
        assert_eq!(config.bot.flip_interval, Duration::from_millis(250));
        assert_eq!(config.catalog.base_url, "http://localhost:9000/api/v2");
        assert_eq!(config.session_id.as_deref(), Some("duel-1"));
        assert_eq!(config.channels.command_buffer, 1);
    }

    #[test]
    fn garbage_values_keep_defaults() {
        let config = config(&[("DECK_SIZE", "many"), ("ENABLE_BOT", "maybe")]);
        assert_eq!(config.catalog.deck_size, 20);
        assert!(config.bot.enabled);
    }
}
