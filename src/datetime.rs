//! The SLON date-time literal.
//!
//! A date-time is written with a fixed 23-character template,
//! `YYYY-MM-DD/HH:MM:SS.mmm`. Parsing only checks the digit/separator shape;
//! `2024-13-40/99:99:99.999` is a perfectly good SLON date-time. Use
//! [`DateTime::is_valid_calendar`] or the `chrono` conversions when the fields
//! need to describe a real instant.
//!
//! ```rust
//! use slon::DateTime;
//!
//! let dt: DateTime = "2024-01-02/03:04:05.006".parse().unwrap();
//! assert_eq!(dt, DateTime::new(2024, 1, 2, 3, 4, 5, 6));
//! assert_eq!(dt.to_string(), "2024-01-02/03:04:05.006");
//! ```

use crate::{Error, ErrorCode, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Length of the date-time template in bytes.
pub const DATETIME_LEN: usize = 23;

/// Newtype-struct name under which [`DateTime`] passes through serde.
///
/// [`ValueSerializer`](crate::ValueSerializer) turns it back into
/// [`Value::DateTime`](crate::Value::DateTime); other serializers see a string.
pub(crate) const DATETIME_TOKEN: &str = "$slon::private::DateTime";

// 'D' marks a digit; every other byte must match literally.
const TEMPLATE: &[u8; DATETIME_LEN] = b"DDDD-DD-DD/DD:DD:DD.DDD";

/// Calendar-shaped record parsed from a date-time literal.
///
/// Fields hold whatever digits the literal contained; no range check is made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct DateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
}

impl DateTime {
    #[must_use]
    pub const fn new(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
    ) -> Self {
        DateTime {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
        }
    }

    /// Matches the template against the start of `bytes`.
    ///
    /// Returns `None` if fewer than [`DATETIME_LEN`] bytes are available or any
    /// byte deviates from the template. Whatever follows is not inspected.
    pub(crate) fn match_prefix(bytes: &[u8]) -> Option<Self> {
        let candidate = bytes.get(..DATETIME_LEN)?;
        let shape_ok = candidate
            .iter()
            .zip(TEMPLATE.iter())
            .all(|(&b, &t)| if t == b'D' { b.is_ascii_digit() } else { b == t });
        if !shape_ok {
            return None;
        }

        // Digits only from here on, so the casts below cannot truncate.
        let digits = |start: usize, len: usize| {
            candidate[start..start + len]
                .iter()
                .fold(0u16, |acc, &b| acc * 10 + u16::from(b - b'0'))
        };

        Some(DateTime {
            year: digits(0, 4),
            month: digits(5, 2) as u8,
            day: digits(8, 2) as u8,
            hour: digits(11, 2) as u8,
            minute: digits(14, 2) as u8,
            second: digits(17, 2) as u8,
            millisecond: digits(20, 3),
        })
    }

    /// Renders the literal into a fixed array.
    ///
    /// Returns `None` when a field has more digits than its template slot,
    /// since such text would not parse back as a date-time.
    pub(crate) fn to_literal(&self) -> Option<[u8; DATETIME_LEN]> {
        if self.year > 9999
            || self.month > 99
            || self.day > 99
            || self.hour > 99
            || self.minute > 99
            || self.second > 99
            || self.millisecond > 999
        {
            return None;
        }

        let mut out = *TEMPLATE;
        let mut fill = |start: usize, len: usize, mut n: u16| {
            for slot in out[start..start + len].iter_mut().rev() {
                *slot = b'0' + (n % 10) as u8;
                n /= 10;
            }
        };
        fill(0, 4, self.year);
        fill(5, 2, u16::from(self.month));
        fill(8, 2, u16::from(self.day));
        fill(11, 2, u16::from(self.hour));
        fill(14, 2, u16::from(self.minute));
        fill(17, 2, u16::from(self.second));
        fill(20, 3, self.millisecond);
        Some(out)
    }

    /// Returns `true` if the fields name an existing calendar instant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slon::DateTime;
    ///
    /// assert!(DateTime::new(2024, 2, 29, 23, 59, 59, 999).is_valid_calendar());
    /// assert!(!DateTime::new(2023, 2, 29, 0, 0, 0, 0).is_valid_calendar());
    /// assert!(!DateTime::new(2024, 13, 40, 99, 99, 99, 999).is_valid_calendar());
    /// ```
    #[must_use]
    pub fn is_valid_calendar(&self) -> bool {
        NaiveDateTime::try_from(*self).is_ok()
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}/{:02}:{:02}:{:02}.{:03}",
            self.year, self.month, self.day, self.hour, self.minute, self.second, self.millisecond
        )
    }
}

impl FromStr for DateTime {
    type Err = Error;

    /// Parses exactly one date-time literal with nothing around it.
    fn from_str(s: &str) -> Result<Self> {
        if s.len() != DATETIME_LEN {
            return Err(Error::syntax(0, ErrorCode::InvalidDateTime));
        }
        DateTime::match_prefix(s.as_bytes()).ok_or(Error::syntax(0, ErrorCode::InvalidDateTime))
    }
}

impl TryFrom<DateTime> for NaiveDateTime {
    type Error = Error;

    fn try_from(dt: DateTime) -> Result<Self> {
        let date = NaiveDate::from_ymd_opt(
            i32::from(dt.year),
            u32::from(dt.month),
            u32::from(dt.day),
        );
        let time = NaiveTime::from_hms_milli_opt(
            u32::from(dt.hour),
            u32::from(dt.minute),
            u32::from(dt.second),
            u32::from(dt.millisecond),
        );
        match (date, time) {
            (Some(date), Some(time)) if dt.millisecond < 1000 => Ok(date.and_time(time)),
            _ => Err(Error::invalid_arguments(format!(
                "{} is not a valid calendar date-time",
                dt
            ))),
        }
    }
}

impl TryFrom<NaiveDateTime> for DateTime {
    type Error = Error;

    /// Truncates sub-millisecond precision. Years outside `0..=9999` and leap
    /// seconds have no SLON spelling and are rejected.
    fn try_from(ndt: NaiveDateTime) -> Result<Self> {
        let year = u16::try_from(ndt.year()).ok().filter(|year| *year <= 9999);
        let millisecond = ndt.nanosecond() / 1_000_000;
        match year {
            Some(year) if millisecond < 1000 => Ok(DateTime {
                year,
                month: ndt.month() as u8,
                day: ndt.day() as u8,
                hour: ndt.hour() as u8,
                minute: ndt.minute() as u8,
                second: ndt.second() as u8,
                millisecond: millisecond as u16,
            }),
            _ => Err(Error::invalid_arguments(format!(
                "{} cannot be written as a SLON date-time",
                ndt
            ))),
        }
    }
}

impl Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_newtype_struct(DATETIME_TOKEN, &self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_literal() {
        let dt = DateTime::new(987, 1, 2, 3, 4, 5, 6);
        assert_eq!(&dt.to_literal().unwrap(), b"0987-01-02/03:04:05.006");
        assert_eq!(
            &DateTime::new(2024, 13, 40, 99, 99, 99, 999).to_literal().unwrap(),
            b"2024-13-40/99:99:99.999"
        );
    }

    #[test]
    fn test_to_literal_rejects_overwide_fields() {
        assert!(DateTime::new(10000, 1, 2, 3, 4, 5, 6).to_literal().is_none());
        assert!(DateTime::new(2024, 100, 2, 3, 4, 5, 6).to_literal().is_none());
        assert!(DateTime::new(2024, 1, 2, 3, 4, 100, 6).to_literal().is_none());
        assert!(DateTime::new(2024, 1, 2, 3, 4, 5, 1000).to_literal().is_none());
    }

    #[test]
    fn test_match_prefix_ignores_trailing_bytes() {
        let dt = DateTime::match_prefix(b"2024-03-01/18:22:10.001)").unwrap();
        assert_eq!(dt, DateTime::new(2024, 3, 1, 18, 22, 10, 1));
    }

    #[test]
    fn test_match_prefix_rejects_wrong_shape() {
        assert!(DateTime::match_prefix(b"2024-03-01T18:22:10.001").is_none());
        assert!(DateTime::match_prefix(b"2024-03-01/18:22:10.01").is_none());
        assert!(DateTime::match_prefix(b"-024-03-01/18:22:10.001").is_none());
        assert!(DateTime::match_prefix(b"2024").is_none());
    }

    #[test]
    fn test_no_calendar_validation() {
        let dt: DateTime = "2024-13-40/99:99:99.999".parse().unwrap();
        assert_eq!(dt, DateTime::new(2024, 13, 40, 99, 99, 99, 999));
        assert!(!dt.is_valid_calendar());
    }

    #[test]
    fn test_from_str_requires_exact_length() {
        assert!("2024-01-02/03:04:05.006 ".parse::<DateTime>().is_err());
        assert!("".parse::<DateTime>().is_err());
    }

    #[test]
    fn test_display_zero_pads() {
        let dt = DateTime::new(7, 1, 2, 3, 4, 5, 6);
        assert_eq!(dt.to_string(), "0007-01-02/03:04:05.006");
    }

    #[test]
    fn test_chrono_roundtrip() {
        let dt = DateTime::new(2024, 3, 1, 18, 22, 10, 1);
        let ndt = NaiveDateTime::try_from(dt).unwrap();
        assert_eq!(ndt.to_string(), "2024-03-01 18:22:10.001");
        assert_eq!(DateTime::try_from(ndt).unwrap(), dt);
    }

    #[test]
    fn test_chrono_rejects_out_of_range_year() {
        let ndt = NaiveDate::from_ymd_opt(12_000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(DateTime::try_from(ndt).is_err());
    }
}
