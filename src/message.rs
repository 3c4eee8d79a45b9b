use crate::{pomodoro, ticker::Driver};

/// Handles communication between the drivers, the input listener & the [`crate::App`].
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Message {
    /// A second has passed on one of the drivers.
    ///
    /// Carries the generation of the arming which sent it.
    Tick(Driver, u64),

    /// Moves keyboard focus to the other timer.
    Focus,

    /// Switches between a 12 & 24 hour display.
    ToggleFormat,

    /// Flips the dark theme preference.
    ToggleTheme,

    /// Flips the sound preference.
    ToggleSound,

    /// Starts or pauses the focused timer, depending on what it's doing.
    Toggle,

    /// Starts the focused timer.
    Start,

    /// Pauses the countdown.
    Pause,

    /// Resets the countdown.
    Reset,

    /// Focuses the next (`true`) or previous countdown field.
    Field(bool),

    /// Nudges the focused countdown field.
    Adjust(i64),

    /// Types a digit into the focused countdown field.
    Digit(u8),

    /// Switches the pomodoro phase.
    Mode(pomodoro::Mode),

    /// Quits gracefully.
    Quit,
}
