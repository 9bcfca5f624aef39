//! Shared date helpers.

use chrono::{DateTime, NaiveDate, Utc};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Whole days from `now` until `target`, rounded up.
///
/// A target 36 hours away is 2 days out; one already past yields zero or a
/// negative count.
pub fn days_until_ceil(now: DateTime<Utc>, target: DateTime<Utc>) -> i64 {
    let millis = (target - now).num_milliseconds() as f64;
    (millis / MILLIS_PER_DAY).ceil() as i64
}

/// Calendar days between `earlier` and `later` (positive when `later` is after).
pub fn days_between(earlier: NaiveDate, later: NaiveDate) -> i64 {
    (later - earlier).num_days()
}

/// Serde adapter accepting either RFC 3339 timestamps or bare `YYYY-MM-DD`
/// dates (read as midnight UTC).
pub mod flexible_datetime {
    use chrono::{DateTime, NaiveDate, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(D::Error::custom)
    }

    pub fn parse(raw: &str) -> Result<DateTime<Utc>, String> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Ok(dt.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
            .ok_or_else(|| format!("invalid date '{}': expected RFC 3339 or YYYY-MM-DD", raw))
    }
}
