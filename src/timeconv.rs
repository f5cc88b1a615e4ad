//! Timestamp conversion
//!
//! Backs `otto time`: accepts epoch seconds, epoch milliseconds,
//! RFC 3339, and the common date forms, and renders every representation
//! at once. Naive inputs are read as UTC.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::Serialize;

use crate::error::{OttoError, OttoResult};

/// Integers at or above this magnitude are read as epoch milliseconds.
/// Plain epoch seconds stay below it until the year 33658.
const MILLIS_THRESHOLD: i64 = 1_000_000_000_000;

/// A parsed instant with every rendering `otto time` prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Moment {
    pub epoch_seconds: i64,
    pub epoch_millis: i64,
    pub utc: String,
    pub local: String,
}

impl Moment {
    fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self {
            epoch_seconds: datetime.timestamp(),
            epoch_millis: datetime.timestamp_millis(),
            utc: datetime.to_rfc3339_opts(SecondsFormat::Secs, true),
            local: datetime
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S %:z")
                .to_string(),
        }
    }
}

/// Parse a moment from any supported input form.
pub fn parse_moment(input: &str) -> OttoResult<Moment> {
    let trimmed = input.trim();

    if let Ok(value) = trimmed.parse::<i64>() {
        return from_epoch(value, trimmed);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(Moment::from_datetime(datetime.with_timezone(&Utc)));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Ok(Moment::from_datetime(Utc.from_utc_datetime(&naive)));
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(Moment::from_datetime(Utc.from_utc_datetime(&naive)));
        }
    }

    Err(OttoError::UnrecognizedMoment {
        input: trimmed.to_string(),
    })
}

fn from_epoch(value: i64, input: &str) -> OttoResult<Moment> {
    let (seconds, millis) = if value.abs() >= MILLIS_THRESHOLD {
        (value.div_euclid(1000), value.rem_euclid(1000))
    } else {
        (value, 0)
    };
    match Utc.timestamp_opt(seconds, millis as u32 * 1_000_000) {
        chrono::LocalResult::Single(datetime) => Ok(Moment::from_datetime(datetime)),
        _ => Err(OttoError::UnrecognizedMoment {
            input: input.to_string(),
        }),
    }
}
