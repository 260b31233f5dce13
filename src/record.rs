use anyhow::Result;
use serde::Deserialize;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

/// Minimal line-level schema for a tweet record.
/// Extra fields are ignored by serde.
/// NOTE: only the fields the analytics consume are declared; everything is
/// optional so that sparse records decode instead of failing the line.
#[derive(Debug, Deserialize)]
pub struct TweetRecord {
    pub date: Option<String>,
    pub id: Option<i64>,
    pub user: Option<TweetUser>,

    // Free text, source of emoji clusters:
    pub content: Option<String>,

    // Ordered, possibly empty or absent:
    #[serde(rename = "mentionedUsers")]
    pub mentioned_users: Option<Vec<TweetUser>>,
}

#[derive(Debug, Deserialize)]
pub struct TweetUser {
    pub username: Option<String>,
}

/// Parse a JSON line into `TweetRecord` using serde_json.
#[inline]
pub fn parse_record(line: &str) -> Result<TweetRecord> {
    Ok(serde_json::from_str(line)?)
}

const DAY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Calendar-day key: the first 10 chars of the ISO-8601 `date` field.
/// Returns None when the field is absent or those 10 chars are not a
/// valid `YYYY-MM-DD` date, so malformed records drop out of the count.
pub fn day_key(rec: &TweetRecord) -> Option<String> {
    let date = rec.date.as_deref()?;
    let day = date.get(..10)?;
    Date::parse(day, DAY_FORMAT).ok()?;
    Some(day.to_string())
}

/// The posting author's username, when present.
pub fn author_username(rec: &TweetRecord) -> Option<String> {
    rec.user.as_ref().and_then(|u| u.username.clone())
}
