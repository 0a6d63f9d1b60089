use chrono::{DateTime, NaiveDate};
use thiserror::Error;

/// URL scheme the host application registers for day navigation.
pub const SCHEME: &str = "inkday";

const DATE_PREFIX: &str = "inkday://date/";

/// Errors from deep-link parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeepLinkError {
    #[error("not an {SCHEME}:// link: {0}")]
    UnknownScheme(String),

    #[error("unsupported deep link path: {0}")]
    UnsupportedPath(String),

    #[error("invalid timestamp in deep link: {0}")]
    InvalidTimestamp(String),
}

/// Parse an `inkday://date/{unix_timestamp}` link into the calendar day it
/// points at. The timestamp is whole seconds, interpreted as UTC.
pub fn parse_date_link(url: &str) -> Result<NaiveDate, DeepLinkError> {
    if !url.starts_with(&format!("{SCHEME}://")) {
        return Err(DeepLinkError::UnknownScheme(url.to_owned()));
    }
    let timestamp = url
        .strip_prefix(DATE_PREFIX)
        .ok_or_else(|| DeepLinkError::UnsupportedPath(url.to_owned()))?
        .trim_end_matches('/');

    let secs: i64 = timestamp
        .parse()
        .map_err(|_| DeepLinkError::InvalidTimestamp(timestamp.to_owned()))?;
    let datetime = DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| DeepLinkError::InvalidTimestamp(timestamp.to_owned()))?;
    Ok(datetime.date_naive())
}
