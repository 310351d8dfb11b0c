// SPDX-License-Identifier: Apache-2.0
//! Clock-face time arithmetic.
//!
//! Shift templates carry times of day, not timestamps; a shift whose end
//! time is at or before its start wraps past midnight. All duration math
//! in the engine is done in fractional hours with that wrap applied
//! explicitly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minutes in a full day.
const DAY_MINUTES: u16 = 24 * 60;

/// Error produced when parsing an `"HH:MM"` string fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeParseError {
    /// The string was not of the form `HH:MM`.
    #[error("malformed time of day: {0:?}")]
    Malformed(String),
    /// Hours or minutes were outside their valid range.
    #[error("time of day out of range: {0:?}")]
    OutOfRange(String),
}

/// A time of day stored as minutes since midnight (`0..1440`).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Constructs a time of day from hour and minute components.
    ///
    /// Returns `None` if `hour > 23` or `minute > 59`.
    #[must_use]
    pub fn new(hour: u16, minute: u16) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self(hour * 60 + minute))
    }

    /// Constructs a time of day from raw minutes since midnight, clamping
    /// anything past `23:59` down to it.
    ///
    /// Infallible, so callers building compile-time-known times (engine
    /// defaults, fixtures) need no error path.
    #[must_use]
    pub const fn from_minutes_clamped(minutes: u16) -> Self {
        if minutes >= DAY_MINUTES {
            Self(DAY_MINUTES - 1)
        } else {
            Self(minutes)
        }
    }

    /// Minutes since midnight.
    #[must_use]
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Hour component (`0..24`).
    #[must_use]
    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    /// Minute component (`0..60`).
    #[must_use]
    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Duration in fractional hours from `self` to `end`, wrapping past
    /// midnight when `end <= self`.
    ///
    /// A shift of `21:00 -> 08:00` is 11 hours; `09:00 -> 17:00` is 8.
    /// Equal endpoints are read as a full 24-hour wrap, not zero.
    #[must_use]
    pub fn span_hours(self, end: Self) -> f64 {
        let mut minutes = i32::from(end.0) - i32::from(self.0);
        if minutes <= 0 {
            minutes += i32::from(DAY_MINUTES);
        }
        f64::from(minutes) / 60.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((h, m)) = s.split_once(':') else {
            return Err(TimeParseError::Malformed(s.to_owned()));
        };
        let hour: u16 = h
            .parse()
            .map_err(|_| TimeParseError::Malformed(s.to_owned()))?;
        let minute: u16 = m
            .parse()
            .map_err(|_| TimeParseError::Malformed(s.to_owned()))?;
        Self::new(hour, minute).ok_or_else(|| TimeParseError::OutOfRange(s.to_owned()))
    }
}

/// A half-open `[start, end)` window over the clock face.
///
/// The window may wrap midnight (`start > end`), in which case it covers
/// the late evening and early morning, the shape of a night-shift
/// definition such as 20:00–06:00.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Inclusive window start.
    pub start: TimeOfDay,
    /// Exclusive window end.
    pub end: TimeOfDay,
}

impl TimeWindow {
    /// Constructs a window from its endpoints.
    #[must_use]
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Whether `t` falls inside the window, honouring midnight wrap.
    #[must_use]
    pub fn contains(&self, t: TimeOfDay) -> bool {
        if self.start <= self.end {
            t >= self.start && t < self.end
        } else {
            t >= self.start || t < self.end
        }
    }
}
