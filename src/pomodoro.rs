//! The pomodoro timer, alternating between fixed work & break phases.
//!
//! There's deliberately no pause. Once a phase completes, the mode flips
//! and the timer waits for another explicit start.

use std::fmt;

/// One of the two phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Work,
    Break,
}

impl Mode {
    /// Length of a phase in seconds.
    pub const fn duration(self) -> u32 {
        match self {
            Self::Work => 25 * 60,
            Self::Break => 5 * 60,
        }
    }

    /// The phase that follows this one.
    pub const fn flipped(self) -> Self {
        match self {
            Self::Work => Self::Break,
            Self::Break => Self::Work,
        }
    }

    /// The message shown once a phase of this mode finishes.
    pub const fn complete(self) -> &'static str {
        match self {
            Self::Work => "work session complete! time for a break.",
            Self::Break => "break time over! ready to work?",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Work => "work",
            Self::Break => "break",
        })
    }
}

/// The outcome of a single driver tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Tick {
    /// The timer wasn't running.
    Ignored,
    Counted,

    /// The phase of the contained mode just finished.
    Complete(Mode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pomodoro {
    mode: Mode,
    total: u32,
    remaining: u32,
    running: bool,
}

impl Default for Pomodoro {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

impl Pomodoro {
    /// An idle timer, ready to run a phase of `mode`.
    pub const fn new(mode: Mode) -> Self {
        Self {
            mode,
            total: mode.duration(),
            remaining: mode.duration(),
            running: false,
        }
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn total(&self) -> u32 {
        self.total
    }

    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether a phase is running, and so whether the driver should be armed.
    pub const fn running(&self) -> bool {
        self.running
    }

    /// Switches to `target`, but only while idle. Doesn't start anything.
    pub fn switch(&mut self, target: Mode) {
        if self.running {
            return;
        }

        tracing::debug!(mode = %target, "pomodoro mode switched");
        *self = Self::new(target);
    }

    /// Starts a fresh phase of the current mode. Does nothing if already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }

        tracing::debug!(mode = %self.mode, "pomodoro phase started");
        *self = Self::new(self.mode);
        self.running = true;
    }

    /// Applies one tick of the driver.
    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Ignored;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining > 0 {
            return Tick::Counted;
        }

        let finished = self.mode;
        tracing::debug!(mode = %finished, "pomodoro phase complete");
        *self = Self::new(finished.flipped());

        Tick::Complete(finished)
    }

    /// A short summary of what the timer is doing.
    pub const fn status(&self) -> &'static str {
        match (self.running, self.mode) {
            (true, Mode::Work) => "WORKING...",
            (true, Mode::Break) => "BREAK TIME...",
            (false, Mode::Work) => "READY TO WORK",
            (false, Mode::Break) => "READY FOR BREAK",
        }
    }

    /// The fraction of the phase which is still left.
    pub fn progress(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.remaining as f32 / self.total as f32
        }
    }
}
