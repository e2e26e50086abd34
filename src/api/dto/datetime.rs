//! Lenient timestamp input for write forms.
//!
//! Accepts RFC 3339 with `Z` or an offset (normalized to UTC), a bare
//! `YYYY-MM-DDTHH:MM:SS[.fff]`, or a date alone (midnight).

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, de::Error};

pub fn parse(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = raw.parse::<NaiveDateTime>() {
        return Some(dt);
    }
    raw.parse::<NaiveDate>()
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// `deserialize_with` target for `Option<NaiveDateTime>` fields.
pub fn optional<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => parse(&raw)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid date-time '{raw}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, 0))
            .unwrap()
    }

    #[test]
    fn utc_suffix_and_fraction() {
        assert_eq!(parse("2025-06-01T19:00:00Z"), Some(at(2025, 6, 1, 19, 0)));
        assert_eq!(parse("2025-06-01T19:00:00.000Z"), Some(at(2025, 6, 1, 19, 0)));
    }

    #[test]
    fn offset_is_normalized_to_utc() {
        assert_eq!(parse("2025-06-01T19:00:00+02:00"), Some(at(2025, 6, 1, 17, 0)));
    }

    #[test]
    fn naive_and_date_only() {
        assert_eq!(parse("2025-06-01T19:00:00"), Some(at(2025, 6, 1, 19, 0)));
        assert_eq!(parse("2025-06-01"), Some(at(2025, 6, 1, 0, 0)));
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(parse("tomorrow"), None);
        assert_eq!(parse(""), None);
    }
}
