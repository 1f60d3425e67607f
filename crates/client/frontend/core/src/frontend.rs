//! The seam between the client container and a user interface.
use anyhow::Result;
use async_trait::async_trait;
use runtime::RuntimeHandle;

/// A user interface driving one duel peer.
///
/// The client owns the local runtime (and the bot runtime, when enabled)
/// and lends the frontend a [`RuntimeHandle`]. Through it the frontend
/// connects to the peer token the player typed, flips cards, asks for a
/// rematch and sends the token-demo `Hello`. It learns about the outcome
/// of all of these from the `Game`, `Session` and `Notification` topics
/// rather than from the command replies alone, because the opponent's
/// moves arrive the same way.
///
/// When `run` returns the client shuts the runtimes down, so the handle
/// and every clone of it must be dropped by then.
///
/// ```no_run
/// use anyhow::Result;
/// use async_trait::async_trait;
/// use client_frontend_core::Frontend;
/// use runtime::{Event, GameEvent, RuntimeHandle, Topic};
///
/// /// Connects, opens with the first card and prints every verdict.
/// struct Scoreboard {
///     peer: String,
/// }
///
/// #[async_trait]
/// impl Frontend for Scoreboard {
///     async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
///         let mut game = handle.subscribe(Topic::Game);
///         handle.connect(self.peer.clone()).await?;
///
///         let state = handle.query_state().await?;
///         if let Some(card) = state.cards.first() {
///             handle.flip_card(card.id.clone()).await?;
///         }
///
///         while let Ok(event) = game.recv().await {
///             if let Event::Game(GameEvent::StateChanged { state, .. }) = event {
///                 if let Some(result) = &state.result {
///                     println!("{result}");
///                     break;
///                 }
///             }
///         }
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Runs until the player quits. An error here is fatal for the client.
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()>;
}
