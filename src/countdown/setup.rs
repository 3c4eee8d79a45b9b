//! The three entry fields used to pick a countdown duration.
//!
//! Any input is clamped into range here, rather than being reported as an error.

/// One of the entry fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    Hours,
    Minutes,
    #[default]
    Seconds,
}

impl Field {
    /// The largest value this field accepts.
    pub const fn max(self) -> u32 {
        match self {
            Self::Hours => 23,
            Self::Minutes | Self::Seconds => 59,
        }
    }

    /// Clamps an arbitrary number to the nearest valid value.
    pub fn clamp(self, value: i64) -> u32 {
        value.clamp(0, i64::from(self.max())) as u32
    }

    /// Parses the leading digits of `text`, clamping the result.
    ///
    /// Text which isn't a number, or is negative, becomes zero.
    pub fn parse(self, text: &str) -> u32 {
        let digits: String = text
            .trim()
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();

        digits
            .parse::<i64>()
            .map_or_else(|_| if digits.is_empty() { 0 } else { self.max() }, |x| self.clamp(x))
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Hours => Self::Minutes,
            Self::Minutes => Self::Seconds,
            Self::Seconds => Self::Hours,
        }
    }

    pub const fn previous(self) -> Self {
        match self {
            Self::Hours => Self::Seconds,
            Self::Minutes => Self::Hours,
            Self::Seconds => Self::Minutes,
        }
    }
}

/// The values currently entered, plus which field is focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Setup {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub focus: Field,
}

impl Setup {
    pub const fn get(&self, field: Field) -> u32 {
        match field {
            Field::Hours => self.hours,
            Field::Minutes => self.minutes,
            Field::Seconds => self.seconds,
        }
    }

    /// Sets `field`, clamping `value` into range.
    pub fn set(&mut self, field: Field, value: i64) {
        let value = field.clamp(value);
        match field {
            Field::Hours => self.hours = value,
            Field::Minutes => self.minutes = value,
            Field::Seconds => self.seconds = value,
        }
    }

    /// Nudges the focused field, stopping at either bound.
    pub fn adjust(&mut self, delta: i64) {
        let current = i64::from(self.get(self.focus));
        self.set(self.focus, current + delta);
    }

    /// Replaces the focused field with whatever `text` parses to.
    pub fn enter(&mut self, text: &str) {
        let value = self.focus.parse(text);
        self.set(self.focus, i64::from(value));
    }

    /// Types a digit into the focused field, like a microwave keypad.
    ///
    /// The last digit shifts left and the result is clamped.
    pub fn digit(&mut self, digit: u8) {
        let text = format!("{}{}", self.get(self.focus) % 10, digit.min(9));
        self.enter(&text);
    }
}
