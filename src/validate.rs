//! Sanity checks on item metadata.
//!
//! The server occasionally reports items stamped in the future. That is a
//! data-quality anomaly upstream, not a client error, so it is surfaced as a
//! warning and never affects the fetch.

use crate::models::Video;
use chrono::DateTime;

/// Checks a video's timestamps against the wall-clock time captured at
/// startup and returns the warning text when either lies in the future.
///
/// `now` is sampled once per run so every item is compared against the same
/// instant.
pub fn check_timestamps(video: &Video, now: i64) -> Option<String> {
    if video.added_at > now || video.updated_at > now {
        Some(format!(
            "WARNING: FUTURE DATE {} ({})\n\tAdded: {}, Updated: {}",
            video.title,
            video.year,
            format_timestamp(video.added_at),
            format_timestamp(video.updated_at),
        ))
    } else {
        None
    }
}

/// Formats a Unix timestamp as `YYYY-MM-DD HH:MM:SS`, falling back to the
/// raw value when it is outside the representable range.
fn format_timestamp(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| secs.to_string())
}
