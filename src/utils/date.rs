//! Calendar dates for post frontmatter, without timezone dependencies.
//!
//! Posts carry a `date: "YYYY-MM-DD"` field. The release gate compares that
//! date against "today" in a fixed UTC offset, so only whole days matter.
//!
//! # Examples
//!
//! ```ignore
//! let date = PostDate::parse("2025-08-12").unwrap();
//! let date = PostDate::parse("2025-08-12T10:00:00Z").unwrap(); // time ignored
//! assert!(date <= PostDate::today(-3));
//! ```

use std::fmt;
use std::time::SystemTime;

use anyhow::{Result, bail};
use serde::{Serialize, Serializer};

const SECS_PER_DAY: i64 = 86_400;

/// Calendar date, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PostDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl PostDate {
    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Parse the `YYYY-MM-DD` prefix of a date or datetime string.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.trim().as_bytes();
        if bytes.len() < 10 {
            return None;
        }
        // Anything after the date must start a time part
        if bytes.len() > 10 && !matches!(bytes[10], b'T' | b't' | b' ') {
            return None;
        }

        let year = parse_u16(&bytes[0..4])?;
        if bytes[4] != b'-' {
            return None;
        }
        let month = parse_u8(&bytes[5..7])?;
        if bytes[7] != b'-' {
            return None;
        }
        let day = parse_u8(&bytes[8..10])?;

        let date = Self::from_ymd(year, month, day);
        date.validate().ok()?;
        Some(date)
    }

    pub fn validate(self) -> Result<()> {
        if !(1..=12).contains(&self.month) {
            bail!("month is invalid: {}", self.month);
        }
        let max_days = Self::days_in_month(self.year, self.month);
        if self.day == 0 || self.day > max_days {
            bail!("day is invalid: {}", self.day);
        }
        Ok(())
    }

    /// Current date at the given UTC offset (hours).
    pub fn today(utc_offset_hours: i32) -> Self {
        let secs = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
            .unwrap_or(0);
        Self::from_unix_secs(secs, utc_offset_hours)
    }

    /// Date of a unix timestamp shifted by `utc_offset_hours`.
    pub fn from_unix_secs(secs: i64, utc_offset_hours: i32) -> Self {
        let local = secs.saturating_add(i64::from(utc_offset_hours) * 3600);
        Self::from_days(local.div_euclid(SECS_PER_DAY))
    }

    /// Civil date from days since 1970-01-01 (H. Hinnant's algorithm).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from_days(days: i64) -> Self {
        let z = days + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z.rem_euclid(146_097);
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
        let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
        let year = yoe + era * 400 + i64::from(month <= 2);
        Self::from_ymd(year.clamp(0, i64::from(u16::MAX)) as u16, month, day)
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }
}

impl fmt::Display for PostDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl Serialize for PostDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}
