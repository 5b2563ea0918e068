//! Deadline parsing and `HH : MM : SS` countdown formatting.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::LandingError;

/// Text shown once a countdown has run out.
pub const EXPIRED_DISPLAY: &str = "00 : 00 : 00";

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// ISO 8601 layouts with an offset that RFC 3339 rejects (seconds omitted).
/// A trailing `Z` is rewritten to `+00:00` before these are tried.
const OFFSET_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"];

/// Date-time layouts accepted without an explicit offset.
const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
];

/// Absolute instant a countdown runs towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deadline(DateTime<Utc>);

impl Deadline {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    /// Parse a deadline attribute value.
    ///
    /// Timestamps with an offset are taken as-is. Date-times without one are read
    /// in `local_offset`, and bare dates are UTC midnight, which is how browsers
    /// interpret the same strings.
    pub fn parse(raw: &str, local_offset: FixedOffset) -> Result<Self, LandingError> {
        let trimmed = raw.trim();
        let invalid = || LandingError::InvalidDeadline {
            raw: raw.to_string(),
        };

        if trimmed.is_empty() {
            return Err(invalid());
        }

        if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(parsed.with_timezone(&Utc)));
        }

        let with_offset = match trimmed.strip_suffix(['Z', 'z']) {
            Some(stripped) => format!("{stripped}+00:00"),
            None => trimmed.to_string(),
        };
        for format in OFFSET_DATETIME_FORMATS {
            if let Ok(parsed) = DateTime::parse_from_str(&with_offset, format) {
                return Ok(Self(parsed.with_timezone(&Utc)));
            }
        }

        for format in NAIVE_DATETIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
                return naive
                    .and_local_timezone(local_offset)
                    .single()
                    .map(|local| Self(local.with_timezone(&Utc)))
                    .ok_or_else(invalid);
            }
        }

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(invalid)?;
            return Ok(Self(Utc.from_utc_datetime(&midnight)));
        }

        Err(invalid())
    }

    pub fn at(&self) -> DateTime<Utc> {
        self.0
    }

    /// Milliseconds left until the deadline; negative once it has passed.
    pub fn remaining_ms(&self, now: DateTime<Utc>) -> i64 {
        self.0.signed_duration_since(now).num_milliseconds()
    }
}

/// One rendered state of a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    /// Hours are reduced modulo a day, as the page only has room for two digits.
    Remaining { hours: u8, minutes: u8, seconds: u8 },
    Expired,
}

impl Countdown {
    pub fn between(deadline: &Deadline, now: DateTime<Utc>) -> Self {
        Self::from_remaining_ms(deadline.remaining_ms(now))
    }

    pub fn from_remaining_ms(distance: i64) -> Self {
        if distance < 0 {
            return Self::Expired;
        }

        Self::Remaining {
            hours: ((distance % MS_PER_DAY) / MS_PER_HOUR) as u8,
            minutes: ((distance % MS_PER_HOUR) / MS_PER_MINUTE) as u8,
            seconds: ((distance % MS_PER_MINUTE) / MS_PER_SECOND) as u8,
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, Self::Expired)
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remaining {
                hours,
                minutes,
                seconds,
            } => write!(f, "{hours:02} : {minutes:02} : {seconds:02}"),
            Self::Expired => f.write_str(EXPIRED_DISPLAY),
        }
    }
}
