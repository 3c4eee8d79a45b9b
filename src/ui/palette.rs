//! Colors, picked from the theme & the time of day.

use crossterm::style::Color;

use crate::{clock::DayPeriod, countdown::Urgency};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// The main clock & focused elements.
    pub accent: Color,

    /// Secondary text, like labels.
    pub dim: Color,
}

impl Palette {
    pub const fn new(dark: bool, period: DayPeriod) -> Self {
        let accent = match (dark, period) {
            (false, DayPeriod::Morning) => Color::Yellow,
            (false, DayPeriod::Day) => Color::Cyan,
            (false, DayPeriod::Evening) => Color::Magenta,
            (false, DayPeriod::Night) => Color::Blue,
            (true, DayPeriod::Morning) => Color::DarkYellow,
            (true, DayPeriod::Day) => Color::DarkCyan,
            (true, DayPeriod::Evening) => Color::DarkMagenta,
            (true, DayPeriod::Night) => Color::DarkBlue,
        };

        Self {
            accent,
            dim: if dark { Color::DarkGrey } else { Color::Grey },
        }
    }

    /// The color of the countdown, which doesn't depend on the theme.
    pub const fn urgency(urgency: Urgency) -> Color {
        match urgency {
            Urgency::Normal => Color::Green,
            Urgency::Warning => Color::DarkYellow,
            Urgency::Danger => Color::Red,
        }
    }
}
