//! The main clock, which turns a wall clock reading into
//! everything the interface needs to draw it.
//!
//! [`sample`] holds no state of its own, so every call is independent
//! and the 1 Hz driver that calls it lives elsewhere.

use chrono::{Datelike, Timelike};

use crate::format::{self, HourFormat, Meridiem};

pub mod world;

pub use world::Zone;

/// A coarse classification of the hour, used to pick the interface's accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPeriod {
    /// `06:00` up to noon.
    Morning,

    /// Noon up to `17:00`.
    Day,

    /// `17:00` up to `21:00`.
    Evening,

    /// Everything else.
    Night,
}

impl DayPeriod {
    /// Classifies a 24-hour value. Every hour lands in exactly one period.
    pub const fn of(hour24: u32) -> Self {
        match hour24 {
            6..=11 => Self::Morning,
            12..=16 => Self::Day,
            17..=20 => Self::Evening,
            _ => Self::Night,
        }
    }

    /// The lowercase name of the period.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Day => "day",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }
}

/// How far each hand has travelled around its dial, in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rings {
    /// Uses the hour modulo 12, not the displayed hour.
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl Rings {
    /// Computes the fill fraction of each ring.
    pub fn new(hour24: u32, minute: u32, second: u32) -> Self {
        Self {
            hour: (hour24 % 12) as f32 / 12.0,
            minute: (minute % 60) as f32 / 60.0,
            second: (second % 60) as f32 / 60.0,
        }
    }
}

/// A single reading of the clock, derived fresh every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub hour24: u32,
    pub minute: u32,
    pub second: u32,

    /// `1..=12` in 12-hour mode, otherwise identical to `hour24`.
    pub display_hour: u32,

    /// Only present in 12-hour mode.
    pub meridiem: Option<Meridiem>,
    pub period: DayPeriod,
    pub rings: Rings,
}

impl Snapshot {
    /// The `HH:MM:SS` digits, without the meridiem.
    pub fn digits(&self) -> String {
        format!(
            "{}:{}:{}",
            format::pad2(self.display_hour),
            format::pad2(self.minute),
            format::pad2(self.second)
        )
    }
}

/// Samples the clock at `now`, displayed in `format`.
pub fn sample(now: &impl Timelike, format: HourFormat) -> Snapshot {
    let (hour24, minute, second) = (now.hour(), now.minute(), now.second());
    let (display_hour, meridiem) = match format {
        HourFormat::TwentyFour => (hour24, None),
        HourFormat::Twelve => {
            let (hour, meridiem) = format::to_12_hour(hour24);
            (hour, Some(meridiem))
        }
    };

    Snapshot {
        hour24,
        minute,
        second,
        display_hour,
        meridiem,
        period: DayPeriod::of(hour24),
        rings: Rings::new(hour24, minute, second),
    }
}

/// Formats the long date, like `Saturday, October 17, 2026`.
pub fn date<T>(now: &T) -> String
where
    T: Datelike,
{
    let weekday = match now.weekday() {
        chrono::Weekday::Mon => "Monday",
        chrono::Weekday::Tue => "Tuesday",
        chrono::Weekday::Wed => "Wednesday",
        chrono::Weekday::Thu => "Thursday",
        chrono::Weekday::Fri => "Friday",
        chrono::Weekday::Sat => "Saturday",
        chrono::Weekday::Sun => "Sunday",
    };

    let month = chrono::Month::try_from(now.month() as u8).map_or("", |x| x.name());
    format!("{weekday}, {month} {}, {}", now.day(), now.year())
}
