//! The 1 Hz drivers, one per logical clock.
//!
//! A [`Ticker`] only ever sends [`Message::Tick`]s, it doesn't touch any
//! timer state. That way every transition still goes through the [`crate::App`].
//!
//! Each arming gets a new generation, which is stamped onto its ticks. A tick
//! which was already queued when its ticker was disarmed then can't be
//! mistaken for one from a later arming.

use std::time::Duration;

use tokio::{
    sync::mpsc::Sender,
    task::{self, JoinHandle},
    time::{self, Instant, MissedTickBehavior},
};

use crate::Message;

/// How often a driver ticks.
pub const PERIOD: Duration = Duration::from_secs(1);

/// Which clock a tick belongs to.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Driver {
    Clock,
    Countdown,
    Pomodoro,
}

/// A periodic driver which can be armed & disarmed.
pub struct Ticker {
    /// The driver reported in each tick.
    driver: Driver,

    /// Where the ticks are sent.
    tx: Sender<Message>,

    /// The running task, [`None`] if disarmed.
    task: Option<JoinHandle<()>>,

    /// Bumped every time the ticker is armed.
    generation: u64,
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.disarm();
    }
}

impl Ticker {
    pub const fn new(driver: Driver, tx: Sender<Message>) -> Self {
        Self {
            driver,
            tx,
            task: None,
            generation: 0,
        }
    }

    pub const fn armed(&self) -> bool {
        self.task.is_some()
    }

    /// The generation of the running task, [`None`] if disarmed.
    pub const fn generation(&self) -> Option<u64> {
        if self.armed() {
            Some(self.generation)
        } else {
            None
        }
    }

    /// Starts ticking, with the first tick a full [`PERIOD`] from now.
    ///
    /// Arming an armed ticker does nothing, so the rhythm isn't reset.
    pub fn arm(&mut self) {
        if self.armed() {
            return;
        }

        self.generation = self.generation.wrapping_add(1);
        tracing::trace!(driver = ?self.driver, generation = self.generation, "armed");
        self.task = Some(task::spawn(Self::run(
            self.driver,
            self.generation,
            self.tx.clone(),
        )));
    }

    /// Stops ticking. Ticks which were already sent will still arrive,
    /// stamped with a generation that's no longer current.
    pub fn disarm(&mut self) {
        if let Some(task) = self.task.take() {
            tracing::trace!(driver = ?self.driver, "disarmed");
            task.abort();
        }
    }

    /// Arms or disarms, to match `armed`.
    pub fn sync(&mut self, armed: bool) {
        if armed {
            self.arm();
        } else {
            self.disarm();
        }
    }

    async fn run(driver: Driver, generation: u64, tx: Sender<Message>) {
        let mut interval = time::interval_at(Instant::now() + PERIOD, PERIOD);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            if tx.send(Message::Tick(driver, generation)).await.is_err() {
                break;
            }
        }
    }
}
