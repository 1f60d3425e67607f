//! Terminal results and the text shown for them.
use std::fmt;

/// How a game ended, from the local player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Every card flipped and we flipped more.
    Win,
    /// Every card flipped and the opponent flipped more.
    Loss,
    /// Every card flipped with equal tallies.
    Draw,
    /// Both sides picked the same card within the tie window.
    Tie { window_ms: u64 },
    /// Both sides picked the same card too far apart.
    DoublePick,
}

impl Outcome {
    /// Decides a fully revealed board. Higher tally wins.
    pub fn from_scores(local: u32, remote: u32) -> Self {
        match local.cmp(&remote) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Less => Outcome::Loss,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    /// Classifies a same-card race from the two reveal timestamps.
    pub fn from_race(local_at: u64, remote_at: u64, window_ms: u64) -> Self {
        if local_at.abs_diff(remote_at) <= window_ms {
            Outcome::Tie { window_ms }
        } else {
            Outcome::DoublePick
        }
    }

    pub fn is_race(&self) -> bool {
        matches!(self, Outcome::Tie { .. } | Outcome::DoublePick)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win => f.write_str("🎉 YOU WIN! You flipped more cards. 🎉"),
            Outcome::Loss => f.write_str("😥 OPPONENT WINS! They flipped more cards. 😥"),
            Outcome::Draw => {
                f.write_str("🤝 IT'S A DRAW! Equal flips when all cards revealed. 🤝")
            }
            Outcome::Tie { window_ms } => write!(
                f,
                "🤝 TIE! Same card picked within {}. 🤝",
                window_text(*window_ms)
            ),
            Outcome::DoublePick => f.write_str("GAME OVER! Both picked the same card."),
        }
    }
}

/// `60000` → `60 seconds`, `1500` → `1.5 seconds`, `250` → `0.25 seconds`.
fn window_text(window_ms: u64) -> String {
    let secs = window_ms / 1000;
    let millis = window_ms % 1000;
    if millis == 0 {
        let unit = if secs == 1 { "second" } else { "seconds" };
        return format!("{secs} {unit}");
    }
    let fraction = format!("{millis:03}");
    format!("{secs}.{} seconds", fraction.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_tally_wins() {
        assert_eq!(Outcome::from_scores(11, 9), Outcome::Win);
        assert_eq!(Outcome::from_scores(9, 11), Outcome::Loss);
        assert_eq!(Outcome::from_scores(10, 10), Outcome::Draw);
    }

    #[test]
    fn race_window_is_inclusive() {
        assert!(matches!(
            Outcome::from_race(1_000, 61_000, 60_000),
            Outcome::Tie { window_ms: 60_000 }
        ));
        assert_eq!(
            Outcome::from_race(1_000, 61_001, 60_000),
            Outcome::DoublePick
        );
        // Remote clock may be behind ours.
        assert!(matches!(
            Outcome::from_race(5_000, 1_000, 60_000),
            Outcome::Tie { .. }
        ));
    }

    #[test]
    fn result_text_names_the_winner() {
        assert!(Outcome::Win.to_string().contains("YOU WIN"));
        assert!(Outcome::Loss.to_string().contains("OPPONENT WINS"));
        assert!(Outcome::Draw.to_string().contains("DRAW"));
        assert_eq!(
            Outcome::DoublePick.to_string(),
            "GAME OVER! Both picked the same card."
        );
    }

    #[test]
    fn tie_text_keeps_sub_second_windows() {
        let text = |window_ms| Outcome::Tie { window_ms }.to_string();
        assert_eq!(text(60_000), "🤝 TIE! Same card picked within 60 seconds. 🤝");
        assert_eq!(text(1_000), "🤝 TIE! Same card picked within 1 second. 🤝");
        assert_eq!(text(1_500), "🤝 TIE! Same card picked within 1.5 seconds. 🤝");
        assert_eq!(text(250), "🤝 TIE! Same card picked within 0.25 seconds. 🤝");
        assert_eq!(text(0), "🤝 TIE! Same card picked within 0 seconds. 🤝");
    }
}
