//! Date-coercibility checks for front-matter date fields.
//!
//! Accepts the two spellings entries actually use: a plain `YYYY-MM-DD`
//! date, or a UTC timestamp `YYYY-MM-DDTHH:MM:SSZ`. Anything else is not
//! date-coercible and fails the date validator.

use anyhow::{Result, bail};
use std::str::FromStr;

/// UTC datetime, no timezone handling beyond the trailing `Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parse from `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SSZ`.
    ///
    /// Returns `None` on any other shape or any out-of-range component.
    pub fn parse(s: &str) -> Option<Self> {
        // Both accepted shapes are pure ASCII; rejecting everything else up
        // front keeps the byte-length splits below on char boundaries.
        if !s.is_ascii() {
            return None;
        }
        let (date, time) = match s.len() {
            10 => (s, None),
            20 => {
                let (date, rest) = s.split_at(10);
                let time = rest.strip_prefix('T')?.strip_suffix('Z')?;
                (date, Some(time))
            }
            _ => return None,
        };

        let mut parts = date.split('-');
        let year = fixed_width::<u16>(parts.next()?, 4)?;
        let month = fixed_width::<u8>(parts.next()?, 2)?;
        let day = fixed_width::<u8>(parts.next()?, 2)?;
        if parts.next().is_some() {
            return None;
        }

        let (hour, minute, second) = match time {
            Some(time) => {
                let mut parts = time.split(':');
                let hour = fixed_width::<u8>(parts.next()?, 2)?;
                let minute = fixed_width::<u8>(parts.next()?, 2)?;
                let second = fixed_width::<u8>(parts.next()?, 2)?;
                if parts.next().is_some() {
                    return None;
                }
                (hour, minute, second)
            }
            None => (0, 0, 0),
        };

        let dt = Self::new(year, month, day, hour, minute, second);
        dt.validate().ok()?;
        Some(dt)
    }

    /// Check all components against the calendar.
    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        if hour > 23 {
            bail!("hour is invalid: {hour}");
        }
        if minute > 59 {
            bail!("minute is invalid: {minute}");
        }
        if second > 59 {
            bail!("second is invalid: {second}");
        }

        Ok(())
    }

    #[inline]
    fn is_leap_year(year: u16) -> bool {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }

    #[inline]
    fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }
}

/// Parse an all-digit field of exactly `width` chars.
#[inline]
fn fixed_width<T: FromStr>(s: &str, width: usize) -> Option<T> {
    if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
