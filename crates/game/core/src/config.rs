/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Maximum distance between two reveals of the same card that still
    /// counts as a tie. Larger gaps end the game as a double pick.
    pub tie_window_ms: u64,

    /// Number of species dealt into a game.
    pub deck_size: usize,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    /// Observed value is `15000 * 4`; kept as a tunable rather than guessing
    /// whether fifteen seconds was meant.
    pub const DEFAULT_TIE_WINDOW_MS: u64 = 15_000 * 4;
    pub const DEFAULT_DECK_SIZE: usize = 20;

    pub fn new() -> Self {
        Self {
            tie_window_ms: Self::DEFAULT_TIE_WINDOW_MS,
            deck_size: Self::DEFAULT_DECK_SIZE,
        }
    }

    pub fn with_tie_window(tie_window_ms: u64) -> Self {
        Self {
            tie_window_ms,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
