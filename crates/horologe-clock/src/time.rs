use std::fmt;

use chrono::{FixedOffset, Timelike, Utc};

use crate::error::ConfigError;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Wall-clock reading in a single zone.
///
/// Hours are 24-hour form. Constructors normalize, so components are always
/// in range (`hours < 24`, `minutes < 60`, `seconds < 60`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TimeSample {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeSample {
    pub const MIDNIGHT: TimeSample = TimeSample { hours: 0, minutes: 0, seconds: 0 };

    /// Builds a sample, carrying out-of-range components into the next unit
    /// and wrapping at midnight.
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self::from_seconds_of_day(hours as i64 * 3600 + minutes as i64 * 60 + seconds as i64)
    }

    /// Sample at `n` seconds past midnight, wrapped into one day.
    pub fn from_seconds_of_day(n: i64) -> Self {
        let n = n.rem_euclid(SECONDS_PER_DAY) as u32;
        Self {
            hours: n / 3600,
            minutes: n / 60 % 60,
            seconds: n % 60,
        }
    }

    pub fn seconds_of_day(self) -> i64 {
        self.hours as i64 * 3600 + self.minutes as i64 * 60 + self.seconds as i64
    }

    pub fn plus_seconds(self, n: i64) -> Self {
        Self::from_seconds_of_day(self.seconds_of_day() + n)
    }

    /// Same instant read in a zone `hours` away.
    pub fn shift_hours(self, hours: i32) -> Self {
        self.plus_seconds(hours as i64 * 3600)
    }
}

impl fmt::Display for TimeSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Source of wall-clock samples for the display.
pub trait TimeSource {
    fn now(&self) -> TimeSample;
}

/// Reads the system clock at a fixed offset from UTC.
#[derive(Debug, Copy, Clone)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(utc_offset_hours: i32) -> Result<Self, ConfigError> {
        let hours = check_offset("UTC", utc_offset_hours)?;
        let offset = FixedOffset::east_opt(hours * 3600)
            .ok_or(ConfigError::ZoneOffset { which: "UTC", hours })?;
        Ok(Self { offset })
    }

    pub fn utc_offset_hours(&self) -> i32 {
        self.offset.local_minus_utc() / 3600
    }
}

impl TimeSource for SystemClock {
    fn now(&self) -> TimeSample {
        let local = Utc::now().with_timezone(&self.offset);
        // A leap second reports second() == 59 with an oversized nanosecond field.
        TimeSample::new(local.hour(), local.minute(), local.second())
    }
}

/// Always reports the same sample. Used by tests and demos.
#[derive(Debug, Copy, Clone)]
pub struct FixedClock(pub TimeSample);

impl TimeSource for FixedClock {
    fn now(&self) -> TimeSample {
        self.0
    }
}

pub(crate) fn check_offset(which: &'static str, hours: i32) -> Result<i32, ConfigError> {
    if (-23..=23).contains(&hours) {
        Ok(hours)
    } else {
        Err(ConfigError::ZoneOffset { which, hours })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_carries_and_wraps() {
        assert_eq!(TimeSample::new(23, 59, 60), TimeSample::MIDNIGHT);
        assert_eq!(TimeSample::new(1, 61, 5), TimeSample { hours: 2, minutes: 1, seconds: 5 });
    }

    #[test]
    fn plus_seconds_wraps_backwards() {
        let t = TimeSample::MIDNIGHT.plus_seconds(-1);
        assert_eq!(t, TimeSample::new(23, 59, 59));
    }

    #[test]
    fn shift_hours_keeps_minutes_and_seconds() {
        let t = TimeSample::new(23, 15, 30).shift_hours(1);
        assert_eq!(t, TimeSample::new(0, 15, 30));
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(TimeSample::new(3, 5, 9).to_string(), "03:05:09");
    }

    #[test]
    fn system_clock_rejects_out_of_range_offset() {
        assert!(SystemClock::new(24).is_err());
        assert!(SystemClock::new(-24).is_err());
        assert_eq!(SystemClock::new(-5).map(|c| c.utc_offset_hours()), Ok(-5));
    }

    #[test]
    fn system_clock_sample_is_in_range() {
        let Ok(clock) = SystemClock::new(1) else {
            panic!("offset 1 must be accepted");
        };
        let t = clock.now();
        assert!(t.hours < 24 && t.minutes < 60 && t.seconds < 60);
    }
}
