//! The countdown timer, which counts a user picked duration down to zero.
//!
//! This only holds state & transitions. Arming the actual 1 Hz driver and
//! drawing the result is up to the caller, which should check [`Countdown::armed`]
//! after each transition.

pub mod setup;

pub use setup::{Field, Setup};

/// Starting a countdown of zero seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("please set a valid countdown time!")]
pub struct InvalidDuration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// Nothing set, both totals are zero.
    #[default]
    Idle,
    Running,
    Paused,
}

/// How urgently the remaining time should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Urgency {
    #[default]
    Normal,

    /// A minute or less.
    Warning,

    /// Ten seconds or less.
    Danger,
}

impl Urgency {
    /// Both thresholds are inclusive.
    pub const fn of(remaining: u32) -> Self {
        match remaining {
            0..=10 => Self::Danger,
            11..=60 => Self::Warning,
            _ => Self::Normal,
        }
    }
}

/// The outcome of feeding a single driver tick to a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Tick {
    /// The timer wasn't armed, so nothing happened.
    Ignored,

    /// One second was taken off.
    Counted,

    /// The timer hit zero and has reset itself.
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Countdown {
    total: u32,
    remaining: u32,
    status: Status,
}

impl Countdown {
    pub const fn total(&self) -> u32 {
        self.total
    }

    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    pub const fn status(&self) -> Status {
        self.status
    }

    /// Whether the 1 Hz driver should be running.
    pub const fn armed(&self) -> bool {
        matches!(self.status, Status::Running)
    }

    /// Starts counting down from `hours:minutes:seconds`.
    ///
    /// Starting from [`Status::Paused`] discards the old run. Starting while
    /// already running does nothing.
    pub fn start(
        &mut self,
        hours: u32,
        minutes: u32,
        seconds: u32,
    ) -> Result<(), InvalidDuration> {
        if self.armed() {
            return Ok(());
        }

        let total = hours
            .saturating_mul(3600)
            .saturating_add(minutes.saturating_mul(60))
            .saturating_add(seconds);
        if total == 0 {
            return Err(InvalidDuration);
        }

        tracing::debug!(total, "countdown started");
        self.total = total;
        self.remaining = total;
        self.status = Status::Running;

        Ok(())
    }

    /// Only does anything while running.
    pub fn pause(&mut self) {
        if self.armed() {
            tracing::debug!(remaining = self.remaining, "countdown paused");
            self.status = Status::Paused;
        }
    }

    /// Only does anything while paused.
    pub fn resume(&mut self) {
        if self.status == Status::Paused {
            tracing::debug!(remaining = self.remaining, "countdown resumed");
            self.status = Status::Running;
        }
    }

    /// Valid from anywhere.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Pauses, resumes or starts, depending on the current status.
    pub fn toggle(&mut self, setup: &Setup) -> Result<(), InvalidDuration> {
        match self.status {
            Status::Running => self.pause(),
            Status::Paused => self.resume(),
            Status::Idle => return self.start(setup.hours, setup.minutes, setup.seconds),
        }

        Ok(())
    }

    /// Applies one tick of the driver.
    ///
    /// A tick that arrives after the countdown was paused or reset
    /// is simply [`Tick::Ignored`].
    pub fn tick(&mut self) -> Tick {
        if !self.armed() {
            return Tick::Ignored;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            tracing::debug!(total = self.total, "countdown expired");
            self.reset();
            return Tick::Expired;
        }

        Tick::Counted
    }

    /// The urgency of the remaining time. A countdown that isn't set is never urgent.
    pub const fn urgency(&self) -> Urgency {
        match self.status {
            Status::Idle => Urgency::Normal,
            _ => Urgency::of(self.remaining),
        }
    }

    /// The fraction of the total which is still left, or zero if nothing is set.
    pub fn progress(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.remaining as f32 / self.total as f32
        }
    }
}
