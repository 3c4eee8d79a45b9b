use std::time::Duration;

use crate::{
    clock,
    countdown::{Countdown, Setup},
    pomodoro::Pomodoro,
    preferences::Preferences,
};
use tokio::{
    sync::broadcast::{self, error::TryRecvError},
    time::Instant,
};
pub mod components;
pub mod environment;
pub use environment::Environment;
pub mod input;
pub mod interface;
pub mod palette;
mod task;
pub mod window;

pub use interface::Interface;

pub type Result<T> = std::result::Result<T, Error>;

/// How long a [`Notice`] stays on screen.
const NOTICE_DURATION: Duration = Duration::from_secs(5);

/// The error type for the UI, which is used to handle errors that occur
/// while drawing the UI or handling input.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unable to convert number")]
    Conversion(#[from] std::num::TryFromIntError),

    #[error("unable to write output")]
    Write(#[from] std::io::Error),

    #[error("sending message to backend from ui failed")]
    CrateSend(#[from] tokio::sync::mpsc::error::SendError<crate::Message>),
}

/// Which timer the keyboard currently controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Countdown,
    Pomodoro,
}

impl Focus {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Countdown => Self::Pomodoro,
            Self::Pomodoro => Self::Countdown,
        }
    }
}

/// A transient message, like "time's up!".
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    since: Instant,
}

impl Notice {
    pub fn new(text: String) -> Self {
        Self {
            text,
            since: Instant::now(),
        }
    }

    /// Whether the notice has been up for long enough.
    pub fn expired(&self) -> bool {
        self.since.elapsed() > NOTICE_DURATION
    }
}

/// Everything the interface draws, kept up to date by [`Update`]s.
#[derive(Debug, Clone)]
pub struct State {
    pub clock: clock::Snapshot,
    pub date: String,

    /// Pairs of labels & formatted times.
    pub world: Vec<(String, String)>,
    pub countdown: Countdown,
    pub setup: Setup,
    pub pomodoro: Pomodoro,
    pub preferences: Preferences,
    pub focus: Focus,
    pub notice: Option<Notice>,
}

impl State {
    /// The state before the first clock tick arrives.
    pub fn initial(
        clock: clock::Snapshot,
        date: String,
        setup: Setup,
        preferences: Preferences,
    ) -> Self {
        Self {
            clock,
            date,
            world: Vec::new(),
            countdown: Countdown::default(),
            setup,
            pomodoro: Pomodoro::default(),
            preferences,
            focus: Focus::default(),
            notice: None,
        }
    }

    /// Applies an update. Returns `false` if the interface should quit.
    pub fn apply(&mut self, update: Update) -> bool {
        match update {
            Update::Clock {
                snapshot,
                date,
                world,
            } => {
                self.clock = snapshot;
                self.date = date;
                self.world = world;
            }
            Update::Countdown(countdown, setup) => {
                self.countdown = countdown;
                self.setup = setup;
            }
            Update::Pomodoro(pomodoro) => self.pomodoro = pomodoro,
            Update::Preferences(preferences) => self.preferences = preferences,
            Update::Focus(focus) => self.focus = focus,
            Update::Notice(text) => self.notice = Some(Notice::new(text)),
            Update::Quit => return false,
        }

        true
    }
}

/// Sent from the [`crate::App`] to the interface whenever something changes.
#[derive(Debug, Clone)]
pub enum Update {
    Clock {
        snapshot: clock::Snapshot,
        date: String,
        world: Vec<(String, String)>,
    },
    Countdown(Countdown, Setup),
    Pomodoro(Pomodoro),
    Preferences(Preferences),
    Focus(Focus),
    Notice(String),
    Quit,
}

/// The main render loop, which runs until [`Update::Quit`].
pub async fn run(
    mut rx: broadcast::Receiver<Update>,
    mut state: State,
    params: interface::Params,
) -> Result<()> {
    let mut interface = Interface::new(params);

    loop {
        loop {
            match rx.try_recv() {
                Ok(update) => {
                    if !state.apply(update) {
                        return Ok(());
                    }
                }
                Err(TryRecvError::Lagged(_)) => continue,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Closed) => return Ok(()),
            }
        }

        interface.draw(&mut state).await?;
    }
}
