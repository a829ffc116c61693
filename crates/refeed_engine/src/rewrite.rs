use chrono::DateTime;
use thiserror::Error;

use crate::feed::Feed;

/// Publication-date layout the platform emits, e.g. `02 Jan 2025 09:15 +0000`.
const SOURCE_LAYOUT: &str = "%d %b %Y %H:%M %z";

/// Layout written to the output feed, e.g. `2025-01-02T09:15:00+00:00`.
const TARGET_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%:z";

#[derive(Debug, Error)]
#[error("malformed pubDate {value:?}: {source}")]
pub struct RewriteError {
    pub value: String,
    #[source]
    pub source: chrono::ParseError,
}

/// Reformat one pubDate value from the source layout to the target layout.
///
/// The UTC offset is carried over unchanged. Seconds are always `:00`
/// because the source layout has no seconds field.
pub fn reformat_pub_date(value: &str) -> Result<String, RewriteError> {
    let parsed = DateTime::parse_from_str(value, SOURCE_LAYOUT).map_err(|source| RewriteError {
        value: value.to_string(),
        source,
    })?;
    Ok(parsed.format(TARGET_LAYOUT).to_string())
}

/// Rewrite every item's pubDate in place, in feed order, returning the
/// number of items rewritten.
///
/// Fails on the first item that does not match the source layout. The feed
/// value may be left partially rewritten, but nothing has been written to
/// disk at that point.
pub fn rewrite_pub_dates(feed: &mut Feed) -> Result<usize, RewriteError> {
    for item in &mut feed.channel.items {
        item.pub_date = reformat_pub_date(&item.pub_date)?;
    }
    Ok(feed.channel.items.len())
}
