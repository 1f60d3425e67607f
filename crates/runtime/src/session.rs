use serde::{Deserialize, Serialize};

use crate::api::RuntimeError;

/// Who we are and who we play against.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Token issued by the transport for this runtime.
    pub local_token: String,
    /// Token typed in by the user.
    pub peer_token: Option<String>,
    pub connected: bool,
}

impl Session {
    pub fn new(local_token: impl Into<String>) -> Self {
        Self {
            local_token: local_token.into(),
            ..Self::default()
        }
    }

    /// Records the opponent's token. Surrounding whitespace is ignored.
    pub fn connect(&mut self, peer_token: &str) -> Result<(), RuntimeError> {
        if self.local_token.is_empty() {
            return Err(RuntimeError::MissingLocalToken);
        }
        let peer_token = peer_token.trim();
        if peer_token.is_empty() {
            return Err(RuntimeError::EmptyPeerToken);
        }

        self.peer_token = Some(peer_token.to_owned());
        self.connected = true;
        Ok(())
    }

    /// Peer token, but only once connected.
    pub fn peer(&self) -> Option<&str> {
        self.peer_token.as_deref().filter(|_| self.connected)
    }

    pub fn require_peer(&self) -> Result<&str, RuntimeError> {
        self.peer().ok_or(RuntimeError::NotConnected)
    }
}
