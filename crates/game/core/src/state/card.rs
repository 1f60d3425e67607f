use std::fmt;

/// Milliseconds on the revealing peer's own clock. Peers never synchronize
/// clocks, so timestamps are only compared with each other in the tie check.
pub type Timestamp = u64;

/// Stable card identity derived from the species name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CardId(pub String);

impl CardId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for CardId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// What a card shows once flipped.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardFace {
    pub name: String,
    pub image_url: String,
}

impl CardFace {
    pub fn new(name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_url: image_url.into(),
        }
    }

    pub fn id(&self) -> CardId {
        CardId(self.name.clone())
    }
}

/// Which side revealed a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Revealer {
    Local,
    Remote,
}

/// A single card on the table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    pub id: CardId,
    pub face: CardFace,
    /// `None` while face down. A card is flipped iff this is set.
    pub revealed_by: Option<Revealer>,
    pub revealed_at: Option<Timestamp>,
    /// Set on the card whose flip ended the game.
    pub decisive: bool,
}

impl Card {
    pub fn face_down(face: CardFace) -> Self {
        Self {
            id: face.id(),
            face,
            revealed_by: None,
            revealed_at: None,
            decisive: false,
        }
    }

    #[inline]
    pub fn is_flipped(&self) -> bool {
        self.revealed_by.is_some()
    }

    pub fn is_revealed_by(&self, side: Revealer) -> bool {
        self.revealed_by == Some(side)
    }

    pub(crate) fn reveal(&mut self, side: Revealer, at: Timestamp) {
        self.revealed_by = Some(side);
        self.revealed_at = Some(at);
    }
}
