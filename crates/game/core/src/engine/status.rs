use std::fmt;

/// Human-readable progress reported after a reconciliation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    GameStarted,
    CardFlipped,
    OpponentFlipped,
    RematchRequested,
    RematchConfirmed,
    /// Game over; carries the result text.
    Finished(String),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::GameStarted => f.write_str("Game started! Your turn to flip."),
            Status::CardFlipped => f.write_str("Card flipped! Waiting for opponent..."),
            Status::OpponentFlipped => f.write_str("Opponent flipped a card. Your turn!"),
            Status::RematchRequested => {
                f.write_str("Opponent wants to play again! Initializing new game...")
            }
            Status::RematchConfirmed => f.write_str("Opponent confirmed new game. Starting..."),
            Status::Finished(result) => f.write_str(result),
        }
    }
}
