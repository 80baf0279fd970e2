//! Timestamp value generators.

use chrono::{DateTime, Utc};
use rand::Rng;

/// Generate a random timestamp uniformly distributed over [start, end].
///
/// If start >= end the start bound is returned as-is.
pub fn between<R: Rng + ?Sized>(
    rng: &mut R,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> DateTime<Utc> {
    let start_ts = start.timestamp();
    let end_ts = end.timestamp();

    if start_ts >= end_ts {
        return start;
    }

    let random_ts = rng.random_range(start_ts..=end_ts);
    DateTime::from_timestamp(random_ts, 0).unwrap_or(start)
}

/// Parse a date bound in RFC 3339 or `YYYY-MM-DD` format.
pub fn parse_bound(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(date) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}
