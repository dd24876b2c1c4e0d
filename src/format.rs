//! Timestamp Display
//!
//! Server timestamps are display-only; anything unparsable is shown as-is.

use std::fmt::Display;

use chrono::{DateTime, Local, Locale, NaiveDateTime, TimeZone, Utc};

use crate::messages;

const DISPLAY_FORMAT: &str = "%Y/%m/%d(%a) %H:%M";
const DISPLAY_LOCALE: Locale = Locale::ja_JP;

/// Formats an ISO-8601 timestamp in the browser's local time zone
pub fn format_timestamp(value: Option<&str>) -> String {
    format_timestamp_in(value, &Local)
}

pub fn format_timestamp_in<Tz>(value: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return messages::NO_TIMESTAMP.to_string();
    };
    match parse_timestamp(raw) {
        Some(parsed) => parsed
            .with_timezone(tz)
            .format_localized(DISPLAY_FORMAT, DISPLAY_LOCALE)
            .to_string(),
        None => raw.to_string(),
    }
}

/// Formats the client-side last-synced time
pub fn format_synced(value: Option<DateTime<Utc>>) -> String {
    match value {
        Some(synced) => synced
            .with_timezone(&Local)
            .format_localized(DISPLAY_FORMAT, DISPLAY_LOCALE)
            .to_string(),
        None => messages::NO_TIMESTAMP.to_string(),
    }
}

/// RFC 3339, or a zone-less ISO date-time read as UTC
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
