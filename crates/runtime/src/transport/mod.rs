//! Notification transport seam.
//!
//! Peers never talk directly: every message is a push notification addressed
//! to the other side's token. [`Transport`] captures the three capabilities
//! the runtime needs from a delivery service (who am I, send, listen) so the
//! worker stays agnostic of how notifications actually travel.
mod memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::broadcast;

pub use memory::{MemoryHub, MemoryTransport};

/// A push notification as delivered to an endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

impl Notification {
    pub const HELLO_TITLE: &'static str = "Hello";
    pub const HELLO_BODY: &'static str = "Hello world";

    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Greeting sent from the token page.
    pub fn hello() -> Self {
        Self::new(Self::HELLO_TITLE, Self::HELLO_BODY)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("peer token must not be empty")]
    EmptyToken,

    #[error("no endpoint registered for token {0}")]
    UnknownPeer(String),
}

/// Delivery service for notifications between peers.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Token other peers use to address this endpoint.
    fn token(&self) -> &str;

    /// Delivers `notification` to the endpoint registered under `peer`.
    async fn send(&self, peer: &str, notification: Notification) -> Result<(), TransportError>;

    /// Stream of notifications addressed to this endpoint.
    ///
    /// Every receiver sees every notification delivered after it subscribed.
    fn subscribe(&self) -> broadcast::Receiver<Notification>;
}
