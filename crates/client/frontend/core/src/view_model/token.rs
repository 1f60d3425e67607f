//! Token demo snapshot.
use runtime::Notification;

use super::text;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenView {
    /// Local token, `None` until the transport assigned one.
    pub token: Option<String>,
    /// Peer token typed so far.
    pub draft: String,
    /// Notifications received while the page was open, newest first.
    pub received: Vec<Notification>,
}

impl TokenView {
    pub fn new<'a>(
        token: &str,
        draft: &str,
        received: impl IntoIterator<Item = &'a Notification>,
    ) -> Self {
        Self {
            token: (!token.is_empty()).then(|| token.to_owned()),
            draft: draft.to_owned(),
            received: received.into_iter().cloned().collect(),
        }
    }

    pub fn token_text(&self) -> &str {
        self.token.as_deref().unwrap_or(text::TOKEN_PENDING)
    }

    pub fn can_send(&self) -> bool {
        self.token.is_some() && !self.draft.trim().is_empty()
    }
}
