use crate::emoji::emoji_clusters;
use crate::record::{author_username, day_key, TweetRecord};

/// How a record votes for primary keys.
///
/// A record contributes zero, one, or many votes: a tweet has at most one
/// calendar day, but may carry several emoji and mention several users, and
/// every element counts as an independent occurrence of that key.
pub enum VoteExtractor {
    Day,
    Emoji,
    Mention,
}

impl VoteExtractor {
    /// Collect this record's votes into `out` (cleared first, so the
    /// caller can reuse one buffer across the whole scan).
    pub fn votes(&self, rec: &TweetRecord, out: &mut Vec<String>) {
        out.clear();
        match self {
            VoteExtractor::Day => {
                if let Some(day) = day_key(rec) {
                    out.push(day);
                }
            }
            VoteExtractor::Emoji => {
                if let Some(text) = rec.content.as_deref() {
                    out.extend(emoji_clusters(text).map(str::to_string));
                }
            }
            VoteExtractor::Mention => {
                if let Some(users) = rec.mentioned_users.as_deref() {
                    out.extend(users.iter().filter_map(|u| u.username.clone()));
                }
            }
        }
    }
}

/// Per-record secondary attribute; the engines report its per-group mode.
pub enum SecondaryExtractor {
    Author,
}

impl SecondaryExtractor {
    pub fn value(&self, rec: &TweetRecord) -> Option<String> {
        match self {
            SecondaryExtractor::Author => author_username(rec),
        }
    }
}
