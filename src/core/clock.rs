use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Timelike};
use std::fmt;

/// Morning/afternoon half of a 12-hour clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::Am => f.write_str("AM"),
            Meridiem::Pm => f.write_str("PM"),
        }
    }
}

/// Wall-clock reading for a single render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSnapshot {
    date: NaiveDate,
    hour: u32,
    minute: u32,
    second: u32,
}

impl ClockSnapshot {
    /// Capture from any chrono date-time (local, naive or zoned)
    pub fn from_datetime<T: Datelike + Timelike>(dt: &T) -> Self {
        let date = NaiveDate::from_ymd_opt(dt.year(), dt.month(), dt.day())
            .unwrap_or_default();
        Self {
            date,
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
        }
    }

    /// Build from calendar fields, `None` if any field is out of range
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Option<Self> {
        let dt: NaiveDateTime = NaiveDate::from_ymd_opt(year, month, day)?
            .and_hms_opt(hour, minute, second)?;
        Some(Self::from_datetime(&dt))
    }

    /// Full weekday name in capitals, e.g. `TUESDAY`
    pub fn weekday_name(&self) -> String {
        self.date.format("%A").to_string().to_uppercase()
    }

    /// Full month name in capitals, e.g. `MARCH`
    pub fn month_name(&self) -> String {
        self.date.format("%B").to_string().to_uppercase()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Hour on a 24-hour clock
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Hour on a 12-hour clock, 1..=12
    pub fn hour12(&self) -> u32 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    pub fn meridiem(&self) -> Meridiem {
        if self.hour >= 12 {
            Meridiem::Pm
        } else {
            Meridiem::Am
        }
    }

    /// `5  MARCH,  2024.`
    pub fn date_line(&self) -> String {
        format!("{}  {},  {}.", self.day(), self.month_name(), self.year())
    }

    /// `-  2:05 PM  -`
    pub fn time_line(&self) -> String {
        format!(
            "-  {}:{:02} {}  -",
            self.hour12(),
            self.minute,
            self.meridiem()
        )
    }
}

/// Source of the current local time
pub trait TimeSource {
    fn now(&self) -> ClockSnapshot;
}

/// System clock in the local timezone
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> ClockSnapshot {
        ClockSnapshot::from_datetime(&Local::now())
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub ClockSnapshot);

impl TimeSource for FixedClock {
    fn now(&self) -> ClockSnapshot {
        self.0
    }
}
