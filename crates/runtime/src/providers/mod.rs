//! Automated players that drive a runtime through its handle.

pub mod bot;

pub use bot::{BotConfig, BotPlayer};
