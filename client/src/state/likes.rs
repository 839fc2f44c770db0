//! Like count and membership for the post currently being viewed.

#[cfg(test)]
#[path = "likes_test.rs"]
mod likes_test;

use crate::net::types::{LikeSummary, LikeToggleResponse};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LikeState {
    pub count: u64,
    pub liked: bool,
}

impl LikeState {
    /// Adopt a fetched summary. The server's count always wins; membership is
    /// kept from local state when the server does not report it.
    #[must_use]
    pub fn with_summary(self, summary: &LikeSummary) -> Self {
        Self { count: summary.count, liked: summary.liked.unwrap_or(self.liked) }
    }

    /// Apply a toggle response locally until the re-fetched summary lands.
    #[must_use]
    pub fn with_toggle(self, resp: &LikeToggleResponse) -> Self {
        let liked = resp.is_liked();
        let count = match (self.liked, liked) {
            (false, true) => self.count + 1,
            (true, false) => self.count.saturating_sub(1),
            _ => self.count,
        };
        Self { count, liked }
    }

    pub fn label(self) -> String {
        format!("{} Likes", self.count)
    }
}
