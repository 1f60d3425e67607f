//! Runtime orchestration for one peer of a PokéFlip duel.
//!
//! This crate wires together the notification transport, the wire codec and
//! the game worker into a cohesive runtime API. Consumers embed [`Runtime`]
//! to play, subscribe to events, and reach the peer through
//! [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`transport`] and [`codec`] move peer events over push notifications
//! - [`providers`] hosts the bot opponent
//! - [`workers`] keeps background tasks internal to the crate
pub mod api;
pub mod clock;
pub mod codec;
pub mod events;
pub mod providers;
pub mod runtime;
pub mod session;
pub mod transport;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use clock::{Clock, ManualClock, SystemClock};
pub use codec::DecodeError;
pub use events::{
    Event, EventBus, GameEvent, InputSource, NotificationEvent, SessionEvent, Topic,
};
pub use providers::{BotConfig, BotPlayer};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use session::Session;
pub use transport::{MemoryHub, MemoryTransport, Notification, Transport, TransportError};
