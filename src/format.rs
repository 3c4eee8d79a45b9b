//! Small, pure helpers for turning raw clock values into display text.

use std::fmt;

/// Either side of noon, for the 12-hour display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridiem {
    /// Before noon.
    Am,

    /// Noon and after.
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        })
    }
}

/// Whether hours are displayed on a 12 or 24 hour dial.
///
/// This is owned by the interface, and the clock only ever reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HourFormat {
    /// `1..=12` with an [`Meridiem`].
    #[default]
    Twelve,

    /// `0..=23`, no meridiem.
    TwentyFour,
}

impl HourFormat {
    /// Flips between the two formats.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Twelve => Self::TwentyFour,
            Self::TwentyFour => Self::Twelve,
        }
    }
}

/// Zero pads `n` to a width of two.
///
/// Only meaningful for `0..=99`, callers already hold values in `0..=59`.
pub fn pad2(n: u32) -> String {
    debug_assert!(n <= 99, "pad2 called with {n}");
    format!("{n:02}")
}

/// Converts a 24-hour value into its 12-hour display hour and meridiem.
///
/// Midnight is `12 AM` and noon is `12 PM`.
pub const fn to_12_hour(hour24: u32) -> (u32, Meridiem) {
    match hour24 {
        0 => (12, Meridiem::Am),
        1..=11 => (hour24, Meridiem::Am),
        12 => (12, Meridiem::Pm),
        _ => (hour24 - 12, Meridiem::Pm),
    }
}

/// Formats a wall clock time as `HH:MM:SS`, with a trailing meridiem in 12-hour mode.
pub fn wall(hour24: u32, minute: u32, second: u32, format: HourFormat) -> String {
    match format {
        HourFormat::TwentyFour => format!("{}:{}:{}", pad2(hour24), pad2(minute), pad2(second)),
        HourFormat::Twelve => {
            let (hour, meridiem) = to_12_hour(hour24);
            format!("{}:{}:{} {meridiem}", pad2(hour), pad2(minute), pad2(second))
        }
    }
}

/// Formats a number of seconds as `HH:MM:SS`.
pub fn hms(seconds: u32) -> String {
    format!(
        "{}:{}:{}",
        pad2(seconds / 3600),
        pad2((seconds % 3600) / 60),
        pad2(seconds % 60)
    )
}

/// Formats a number of seconds as `MM:SS`.
///
/// Minutes aren't wrapped, so anything over an hour just gets wider.
pub fn ms(seconds: u32) -> String {
    format!("{:02}:{}", seconds / 60, pad2(seconds % 60))
}
