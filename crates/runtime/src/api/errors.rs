//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, the transport and the game
//! engine so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use game_core::ReconcileError;

use crate::transport::TransportError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("game worker command channel closed")]
    CommandChannelClosed,

    #[error("game worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("game worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires a transport before building")]
    MissingTransport,

    #[error("transport did not issue a local token")]
    MissingLocalToken,

    #[error("peer token must not be empty")]
    EmptyPeerToken,

    #[error("not connected to a peer")]
    NotConnected,

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Reconcile(#[from] ReconcileError),
}

impl RuntimeError {
    /// True when a command was refused by game rules or session checks,
    /// as opposed to the runtime itself failing.
    pub fn is_rejection(&self) -> bool {
        match self {
            RuntimeError::EmptyPeerToken | RuntimeError::NotConnected => true,
            RuntimeError::Reconcile(error) => error.is_rejection(),
            _ => false,
        }
    }
}
