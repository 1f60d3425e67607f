//! In-process notification hub.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{RwLock, broadcast};

use super::{Notification, Transport, TransportError};

const TOKEN_BYTES: usize = 16;

/// Routes notifications between endpoints living in the same process.
///
/// Each [`MemoryHub::register`] call issues a fresh random token and returns
/// the endpoint bound to it. Cloning the hub shares the routing table.
#[derive(Clone)]
pub struct MemoryHub {
    endpoints: Arc<RwLock<HashMap<String, broadcast::Sender<Notification>>>>,
    capacity: usize,
}

impl MemoryHub {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// Creates a hub whose endpoints buffer up to `capacity` undelivered
    /// notifications per subscriber.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            endpoints: Arc::new(RwLock::new(HashMap::new())),
            capacity: capacity.max(1),
        }
    }

    /// Registers a new endpoint under a random hex token.
    pub async fn register(&self) -> MemoryTransport {
        let mut endpoints = self.endpoints.write().await;

        let token = loop {
            let candidate = hex::encode(rand::random::<[u8; TOKEN_BYTES]>());
            if !endpoints.contains_key(&candidate) {
                break candidate;
            }
        };

        let (inbox, _) = broadcast::channel(self.capacity);
        endpoints.insert(token.clone(), inbox.clone());
        tracing::debug!(target: "runtime::transport", %token, "endpoint registered");

        MemoryTransport {
            token,
            inbox,
            hub: self.clone(),
        }
    }

    /// Removes an endpoint. Later sends to its token fail with
    /// [`TransportError::UnknownPeer`].
    pub async fn unregister(&self, token: &str) -> bool {
        self.endpoints.write().await.remove(token).is_some()
    }

    pub async fn is_registered(&self, token: &str) -> bool {
        self.endpoints.read().await.contains_key(token)
    }

    async fn deliver(&self, peer: &str, notification: Notification) -> Result<(), TransportError> {
        if peer.is_empty() {
            return Err(TransportError::EmptyToken);
        }

        let endpoints = self.endpoints.read().await;
        let inbox = endpoints
            .get(peer)
            .ok_or_else(|| TransportError::UnknownPeer(peer.to_owned()))?;

        // Nobody listening yet is not an error: the notification is simply
        // not shown, like a push arriving for a closed page.
        if inbox.send(notification).is_err() {
            tracing::trace!(target: "runtime::transport", %peer, "no subscribers for endpoint");
        }
        Ok(())
    }
}

impl Default for MemoryHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Endpoint handed out by [`MemoryHub::register`].
#[derive(Clone)]
pub struct MemoryTransport {
    token: String,
    inbox: broadcast::Sender<Notification>,
    hub: MemoryHub,
}

impl std::fmt::Debug for MemoryTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryTransport")
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    fn token(&self) -> &str {
        &self.token
    }

    async fn send(&self, peer: &str, notification: Notification) -> Result<(), TransportError> {
        tracing::debug!(
            target: "runtime::transport",
            from = %self.token,
            to = %peer,
            title = %notification.title,
            "sending notification"
        );
        self.hub.deliver(peer, notification).await
    }

    fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.inbox.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn tokens_are_unique_hex() {
        let hub = MemoryHub::new();
        let a = hub.register().await;
        let b = hub.register().await;

        assert_ne!(a.token(), b.token());
        assert_eq!(a.token().len(), TOKEN_BYTES * 2);
        assert!(a.token().chars().all(|c| c.is_ascii_hexdigit()));
        assert!(hub.is_registered(b.token()).await);
    }

    #[tokio::test]
    async fn routes_only_to_addressed_endpoint() {
        let hub = MemoryHub::new();
        let alice = hub.register().await;
        let bob = hub.register().await;
        let carol = hub.register().await;

        let mut bob_rx = bob.subscribe();
        let mut carol_rx = carol.subscribe();

        alice.send(bob.token(), Notification::hello()).await.unwrap();

        assert_eq!(bob_rx.recv().await.unwrap(), Notification::hello());
        assert!(carol_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn unknown_and_empty_tokens_are_rejected() {
        let hub = MemoryHub::new();
        let alice = hub.register().await;

        assert_eq!(
            alice.send("deadbeef", Notification::hello()).await,
            Err(TransportError::UnknownPeer("deadbeef".into()))
        );
        assert_eq!(
            alice.send("", Notification::hello()).await,
            Err(TransportError::EmptyToken)
        );
    }

    #[tokio::test]
    async fn unregistered_endpoint_stops_receiving() {
        let hub = MemoryHub::new();
        let alice = hub.register().await;
        let bob = hub.register().await;

        assert!(hub.unregister(bob.token()).await);
        assert!(alice.send(bob.token(), Notification::hello()).await.is_err());
    }

    #[tokio::test]
    async fn sending_without_listeners_succeeds() {
        let hub = MemoryHub::new();
        let alice = hub.register().await;
        let bob = hub.register().await;

        alice.send(bob.token(), Notification::hello()).await.unwrap();
    }
}
