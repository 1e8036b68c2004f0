//! Promotion Expiry Timestamps

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::{Zoned, civil::DateTime, fmt::strtime};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

/// Wire format of an expiry, matching the `datetime-local` form input.
pub const EXPIRES_AT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Errors raised while reading an expiry timestamp.
#[derive(Debug, Error)]
pub enum ExpiresAtError {
    /// No timestamp was supplied.
    #[error("expiry timestamp is empty")]
    Empty,

    /// The timestamp is not a valid `YYYY-MM-DDTHH:MM` local datetime.
    #[error("invalid expiry timestamp {input:?}, expected YYYY-MM-DDTHH:MM")]
    Malformed {
        /// The rejected input.
        input: String,

        /// Underlying parse failure.
        #[source]
        source: jiff::Error,
    },
}

/// Local wall-clock instant at minute precision.
///
/// Ordering is chronological. Values are always truncated to the minute so that a sweep
/// clock read mid-minute compares the same way as the stored string would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExpiresAt(DateTime);

impl ExpiresAt {
    /// Truncate a civil datetime to the minute.
    #[must_use]
    pub fn from_datetime(datetime: DateTime) -> Self {
        Self(datetime.date().at(datetime.hour(), datetime.minute(), 0, 0))
    }

    /// The current local time, truncated to the minute.
    #[must_use]
    pub fn now() -> Self {
        Self::from_datetime(Zoned::now().datetime())
    }

    /// The underlying civil datetime.
    #[must_use]
    pub const fn datetime(self) -> DateTime {
        self.0
    }
}

impl From<DateTime> for ExpiresAt {
    fn from(value: DateTime) -> Self {
        Self::from_datetime(value)
    }
}

impl FromStr for ExpiresAt {
    type Err = ExpiresAtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();

        if input.is_empty() {
            return Err(ExpiresAtError::Empty);
        }

        strtime::parse(EXPIRES_AT_FORMAT, input)
            .and_then(|parsed| parsed.to_datetime())
            .map(Self::from_datetime)
            .map_err(|source| ExpiresAtError::Malformed {
                input: input.to_string(),
                source,
            })
    }
}

impl Display for ExpiresAt {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0.strftime(EXPIRES_AT_FORMAT), f)
    }
}

impl Serialize for ExpiresAt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ExpiresAt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;

        raw.parse().map_err(de::Error::custom)
    }
}
