//! # Timestamp Value Object
//!
//! UTC point in time with the calendar helpers transfer scheduling needs.
//!
//! # Examples
//!
//! ```
//! use transfer_scheduler::domain::value_objects::timestamp::Timestamp;
//!
//! let now = Timestamp::now();
//! let in_ten_days = now.add_days(10);
//!
//! assert!(in_ten_days.is_after(&now));
//! assert_eq!(now.whole_days_until(&in_ten_days), 10);
//! ```

use chrono::{DateTime, Local, NaiveDate, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Error returned when a timestamp string is not valid RFC 3339.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid timestamp '{input}': expected RFC 3339 (e.g. 2024-01-01T00:00:00Z)")]
pub struct ParseTimestampError {
    input: String,
}

/// A UTC timestamp.
///
/// Serializes as an RFC 3339 string.
///
/// # Examples
///
/// ```
/// use transfer_scheduler::domain::value_objects::timestamp::Timestamp;
///
/// let ts: Timestamp = "2024-01-01T12:00:00Z".parse().unwrap();
/// assert_eq!(ts.timestamp_secs(), 1_704_110_400);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from Unix milliseconds.
    ///
    /// Returns `None` if the value is out of range.
    #[must_use]
    pub fn from_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis).single().map(Self)
    }

    /// Creates a timestamp from Unix seconds.
    ///
    /// Returns `None` if the value is out of range.
    #[must_use]
    pub fn from_secs(secs: i64) -> Option<Self> {
        Utc.timestamp_opt(secs, 0).single().map(Self)
    }

    /// Returns the Unix timestamp in milliseconds.
    #[inline]
    #[must_use]
    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Returns the Unix timestamp in seconds.
    #[inline]
    #[must_use]
    pub fn timestamp_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Adds seconds (can be negative).
    ///
    /// Returns `None` if the result is out of range.
    #[must_use]
    pub fn checked_add_secs(&self, secs: i64) -> Option<Self> {
        TimeDelta::try_seconds(secs)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Self)
    }

    /// Adds whole days (can be negative).
    ///
    /// Returns `None` if the result is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use transfer_scheduler::domain::value_objects::timestamp::Timestamp;
    ///
    /// let ts = Timestamp::from_secs(0).unwrap();
    /// assert_eq!(ts.checked_add_days(2).unwrap().timestamp_secs(), 172_800);
    /// assert!(ts.checked_add_days(200_000_000).is_none());
    /// ```
    #[must_use]
    pub fn checked_add_days(&self, days: i64) -> Option<Self> {
        TimeDelta::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Self)
    }

    /// Adds seconds (can be negative), saturating at the representable range.
    #[must_use]
    pub fn add_secs(&self, secs: i64) -> Self {
        self.checked_add_secs(secs)
            .unwrap_or_else(|| Self::saturated(secs))
    }

    /// Adds whole days (can be negative), saturating at the representable range.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        self.checked_add_days(days)
            .unwrap_or_else(|| Self::saturated(days))
    }

    /// Subtracts whole days, saturating at the representable range.
    #[must_use]
    pub fn sub_days(&self, days: i64) -> Self {
        match days.checked_neg() {
            Some(negated) => self.add_days(negated),
            None => Self(DateTime::<Utc>::MAX_UTC),
        }
    }

    fn saturated(direction: i64) -> Self {
        if direction < 0 {
            Self(DateTime::<Utc>::MIN_UTC)
        } else {
            Self(DateTime::<Utc>::MAX_UTC)
        }
    }

    /// Returns the whole days from `self` to `later`, rounded down.
    ///
    /// Negative when `later` precedes `self`: half a day earlier is `-1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use transfer_scheduler::domain::value_objects::timestamp::Timestamp;
    ///
    /// let start = Timestamp::from_secs(0).unwrap();
    /// assert_eq!(start.whole_days_until(&start.add_secs(36 * 3600)), 1);
    /// assert_eq!(start.whole_days_until(&start.add_secs(-12 * 3600)), -1);
    /// ```
    #[must_use]
    pub fn whole_days_until(&self, later: &Self) -> i64 {
        (later.0 - self.0)
            .num_milliseconds()
            .div_euclid(MILLIS_PER_DAY)
    }

    /// Returns the calendar day of this instant in the local time zone.
    #[must_use]
    pub fn local_date(&self) -> NaiveDate {
        self.0.with_timezone(&Local).date_naive()
    }

    /// Returns true if this instant falls on a local calendar day before today.
    #[must_use]
    pub fn is_before_today(&self) -> bool {
        self.local_date() < Self::now().local_date()
    }

    /// Returns true if this timestamp is before another.
    #[inline]
    #[must_use]
    pub fn is_before(&self, other: &Self) -> bool {
        self.0 < other.0
    }

    /// Returns true if this timestamp is after another.
    #[inline]
    #[must_use]
    pub fn is_after(&self, other: &Self) -> bool {
        self.0 > other.0
    }

    /// Formats the timestamp as RFC 3339.
    #[must_use]
    pub fn to_iso8601(&self) -> String {
        self.0.to_rfc3339()
    }

    /// Returns the underlying DateTime.
    #[inline]
    #[must_use]
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl FromStr for Timestamp {
    type Err = ParseTimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateTime::parse_from_rfc3339(s.trim())
            .map(|dt| Self(dt.with_timezone(&Utc)))
            .map_err(|_| ParseTimestampError {
                input: s.to_string(),
            })
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod construction {
        use super::*;

        #[test]
        fn now_creates_current_time() {
            let before = Utc::now();
            let ts = Timestamp::now();
            let after = Utc::now();

            assert!(ts.0 >= before);
            assert!(ts.0 <= after);
        }

        #[test]
        fn from_millis_works() {
            let ts = Timestamp::from_millis(1704067200000).unwrap();
            assert_eq!(ts.timestamp_millis(), 1704067200000);
        }

        #[test]
        fn from_secs_works() {
            let ts = Timestamp::from_secs(1704067200).unwrap();
            assert_eq!(ts.timestamp_secs(), 1704067200);
        }

        #[test]
        fn parses_rfc3339_with_offset() {
            let ts: Timestamp = "2024-01-01T03:00:00+03:00".parse().unwrap();
            assert_eq!(ts.timestamp_secs(), 1704067200);
        }

        #[test]
        fn rejects_malformed_input() {
            let err = "next tuesday".parse::<Timestamp>().unwrap_err();
            assert!(err.to_string().contains("next tuesday"));
        }
    }

    mod days {
        use super::*;

        #[test]
        fn add_and_sub_days() {
            let ts = Timestamp::from_secs(1_000_000).unwrap();
            assert_eq!(ts.add_days(3).sub_days(3), ts);
            assert_eq!(ts.add_days(-1), ts.sub_days(1));
        }

        #[test]
        fn checked_add_rejects_out_of_range() {
            let now = Timestamp::now();
            assert!(now.checked_add_days(200_000_000).is_none());
            assert!(now.checked_add_days(-200_000_000).is_none());
            assert!(now.checked_add_days(i64::MAX).is_none());
            assert!(now.checked_add_secs(i64::MIN).is_none());
            assert_eq!(now.checked_add_days(1), Some(now.add_days(1)));
        }

        #[test]
        fn add_days_saturates_instead_of_overflowing() {
            let now = Timestamp::now();
            assert_eq!(now.add_days(200_000_000).as_datetime(), &DateTime::<Utc>::MAX_UTC);
            assert_eq!(now.sub_days(200_000_000).as_datetime(), &DateTime::<Utc>::MIN_UTC);
            assert_eq!(now.sub_days(i64::MIN).as_datetime(), &DateTime::<Utc>::MAX_UTC);
            assert_eq!(now.add_secs(i64::MAX).as_datetime(), &DateTime::<Utc>::MAX_UTC);
        }

        #[test]
        fn whole_days_exact() {
            let start = Timestamp::from_secs(1704067200).unwrap();
            assert_eq!(start.whole_days_until(&start), 0);
            assert_eq!(start.whole_days_until(&start.add_days(15)), 15);
            assert_eq!(start.whole_days_until(&start.sub_days(2)), -2);
        }

        #[test]
        fn whole_days_rounds_down() {
            let start = Timestamp::from_secs(1704067200).unwrap();
            assert_eq!(start.whole_days_until(&start.add_secs(86_399)), 0);
            assert_eq!(start.whole_days_until(&start.add_secs(-1)), -1);
            assert_eq!(start.whole_days_until(&start.add_days(9).add_secs(-1)), 8);
        }

        #[test]
        fn yesterday_is_before_today() {
            assert!(Timestamp::now().sub_days(1).is_before_today());
            assert!(!Timestamp::now().is_before_today());
            assert!(!Timestamp::now().add_days(1).is_before_today());
        }
    }

    mod comparison {
        use super::*;

        #[test]
        fn is_before_and_after() {
            let ts1 = Timestamp::from_secs(1000).unwrap();
            let ts2 = Timestamp::from_secs(2000).unwrap();
            assert!(ts1.is_before(&ts2));
            assert!(ts2.is_after(&ts1));
            assert!(ts1 < ts2);
        }
    }

    mod serde {
        use super::*;

        #[test]
        fn serde_roundtrip() {
            let ts = Timestamp::from_millis(1704067200123).unwrap();
            let json = serde_json::to_string(&ts).unwrap();
            let deserialized: Timestamp = serde_json::from_str(&json).unwrap();
            assert_eq!(ts, deserialized);
        }

        #[test]
        fn display_is_rfc3339() {
            let ts = Timestamp::from_secs(1704067200).unwrap();
            assert!(ts.to_string().starts_with("2024-01-01T00:00:00"));
            assert_eq!(ts.to_string(), ts.to_iso8601());
        }
    }
}
