//! The application core, which owns every timer and is the only
//! place their state ever changes.
//!
//! Commands from the keyboard and ticks from the drivers both arrive as
//! [`Message`]s on a single channel, so transitions are handled one at a time.

use chrono::{Local, Utc};
use tokio::sync::{
    broadcast,
    mpsc::{Receiver, Sender},
};

use crate::{
    audio::Audio,
    clock::{self, Zone},
    countdown::{self, Countdown, Setup},
    format::HourFormat,
    pomodoro::{self, Pomodoro},
    preferences,
    ticker::{Driver, Ticker},
    ui::{self, Focus, Update},
    Message,
};

/// One [`Ticker`] per logical clock.
struct Drivers {
    clock: Ticker,
    countdown: Ticker,
    pomodoro: Ticker,
}

pub struct App {
    /// Where every [`Message`] arrives.
    rx: Receiver<Message>,

    /// Pushes [`Update`]s to the interface.
    updater: broadcast::Sender<Update>,

    countdown: Countdown,

    /// The values in the countdown's entry fields.
    setup: Setup,
    pomodoro: Pomodoro,

    /// The persistent sound & theme flags.
    store: preferences::Store,
    audio: Audio,
    drivers: Drivers,

    /// Not persisted, unlike the [`preferences::Preferences`].
    format: HourFormat,
    focus: Focus,

    /// The world clocks to display.
    zones: Vec<Zone>,
}

impl App {
    /// Creates the application core.
    ///
    /// `tx` is used by the drivers to deliver their ticks back to `rx`.
    pub fn new(
        rx: Receiver<Message>,
        tx: &Sender<Message>,
        updater: broadcast::Sender<Update>,
        store: preferences::Store,
        audio: Audio,
        format: HourFormat,
        zones: Vec<Zone>,
    ) -> Self {
        Self {
            rx,
            updater,
            countdown: Countdown::default(),
            setup: Setup::default(),
            pomodoro: Pomodoro::default(),
            store,
            audio,
            drivers: Drivers {
                clock: Ticker::new(Driver::Clock, tx.clone()),
                countdown: Ticker::new(Driver::Countdown, tx.clone()),
                pomodoro: Ticker::new(Driver::Pomodoro, tx.clone()),
            },
            format,
            focus: Focus::default(),
            zones,
        }
    }

    /// The initial interface state.
    pub fn state(&self) -> ui::State {
        let now = Local::now();
        let mut state = ui::State::initial(
            clock::sample(&now, self.format),
            clock::date(&now),
            self.setup,
            self.store.get(),
        );
        state.world = self.world(now.with_timezone(&Utc));

        state
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn pomodoro(&self) -> &Pomodoro {
        &self.pomodoro
    }

    const fn ticker(&self, driver: Driver) -> &Ticker {
        match driver {
            Driver::Clock => &self.drivers.clock,
            Driver::Countdown => &self.drivers.countdown,
            Driver::Pomodoro => &self.drivers.pomodoro,
        }
    }

    /// The generation of the ticker for `driver`, if it's currently running.
    pub const fn armed(&self, driver: Driver) -> Option<u64> {
        self.ticker(driver).generation()
    }

    fn update(&self, update: Update) -> crate::Result<()> {
        self.updater.send(update)?;
        Ok(())
    }

    fn notice(&self, text: impl Into<String>) -> crate::Result<()> {
        self.update(Update::Notice(text.into()))
    }

    /// Formats every world clock at `now`.
    fn world(&self, now: chrono::DateTime<Utc>) -> Vec<(String, String)> {
        self.zones
            .iter()
            .map(|zone| (zone.label.clone(), zone.time(now, self.format)))
            .collect()
    }

    /// Samples the clock & sends it off to the interface.
    fn clock(&self) -> crate::Result<()> {
        let now = Local::now();

        self.update(Update::Clock {
            snapshot: clock::sample(&now, self.format),
            date: clock::date(&now),
            world: self.world(now.with_timezone(&Utc)),
        })
    }

    /// Matches the countdown's driver to its state, then redraws it.
    fn sync_countdown(&mut self) -> crate::Result<()> {
        self.drivers.countdown.sync(self.countdown.armed());
        self.update(Update::Countdown(self.countdown, self.setup))
    }

    /// Matches the pomodoro's driver to its state, then redraws it.
    fn sync_pomodoro(&mut self) -> crate::Result<()> {
        self.drivers.pomodoro.sync(self.pomodoro.running());
        self.update(Update::Pomodoro(self.pomodoro))
    }

    /// Reports an invalid duration to the user, leaving the countdown untouched.
    fn started(&mut self, result: Result<(), countdown::InvalidDuration>) -> crate::Result<()> {
        if let Err(error) = result {
            tracing::debug!(%error, "countdown refused to start");
            self.notice(error.to_string())?;
        }

        self.sync_countdown()
    }

    /// Handles a single [`Message`], apart from [`Message::Quit`].
    pub async fn handle(&mut self, message: Message) -> crate::Result<()> {
        match message {
            Message::Tick(driver, generation) if self.armed(driver) != Some(generation) => {
                tracing::trace!(?driver, generation, "tick from a disarmed driver");
            }
            Message::Tick(Driver::Clock, _) => {
                self.audio.tick();
                self.clock()?;
            }
            Message::Tick(Driver::Countdown, _) => match self.countdown.tick() {
                countdown::Tick::Ignored => tracing::trace!("stale countdown tick"),
                countdown::Tick::Counted => self.sync_countdown()?,
                countdown::Tick::Expired => {
                    self.audio.alarm();
                    self.notice("time's up!")?;
                    self.sync_countdown()?;
                }
            },
            Message::Tick(Driver::Pomodoro, _) => match self.pomodoro.tick() {
                pomodoro::Tick::Ignored => tracing::trace!("stale pomodoro tick"),
                pomodoro::Tick::Counted => self.sync_pomodoro()?,
                pomodoro::Tick::Complete(mode) => {
                    self.audio.alarm();
                    self.notice(mode.complete())?;
                    self.sync_pomodoro()?;
                }
            },
            Message::Focus => {
                self.focus = self.focus.toggled();
                self.update(Update::Focus(self.focus))?;
            }
            Message::ToggleFormat => {
                self.format = self.format.toggled();
                self.clock()?;
            }
            Message::ToggleTheme => {
                let preferences = self.store.toggle_theme().await?;
                self.update(Update::Preferences(preferences))?;
            }
            Message::ToggleSound => {
                let preferences = self.store.toggle_sound().await?;
                self.audio.set_enabled(preferences.sound);
                self.update(Update::Preferences(preferences))?;
            }
            Message::Toggle => match self.focus {
                Focus::Countdown => {
                    let result = self.countdown.toggle(&self.setup);
                    self.started(result)?;
                }
                Focus::Pomodoro => {
                    self.pomodoro.start();
                    self.sync_pomodoro()?;
                }
            },
            Message::Start => match self.focus {
                Focus::Countdown => {
                    let Setup {
                        hours,
                        minutes,
                        seconds,
                        ..
                    } = self.setup;
                    let result = self.countdown.start(hours, minutes, seconds);
                    self.started(result)?;
                }
                Focus::Pomodoro => {
                    self.pomodoro.start();
                    self.sync_pomodoro()?;
                }
            },
            Message::Pause => {
                self.countdown.pause();
                self.sync_countdown()?;
            }
            Message::Reset => {
                self.countdown.reset();
                self.sync_countdown()?;
            }
            Message::Field(_) | Message::Adjust(_) | Message::Digit(_)
                if self.focus != Focus::Countdown
                    || self.countdown.status() != countdown::Status::Idle => {}
            Message::Field(forward) => {
                self.setup.focus = if forward {
                    self.setup.focus.next()
                } else {
                    self.setup.focus.previous()
                };
                self.sync_countdown()?;
            }
            Message::Adjust(delta) => {
                self.setup.adjust(delta);
                self.sync_countdown()?;
            }
            Message::Digit(digit) => {
                self.setup.digit(digit);
                self.sync_countdown()?;
            }
            Message::Mode(mode) => {
                self.pomodoro.switch(mode);
                self.sync_pomodoro()?;
            }
            Message::Quit => {}
        }

        Ok(())
    }

    /// Runs until [`Message::Quit`] arrives or every sender is gone.
    pub async fn run(mut self) -> crate::Result<()> {
        self.drivers.clock.arm();
        self.clock()?;

        while let Some(message) = self.rx.recv().await {
            if message == Message::Quit {
                break;
            }

            self.handle(message).await?;
        }

        tracing::info!("quitting");
        self.drivers.countdown.disarm();
        self.drivers.pomodoro.disarm();

        // The interface may already be gone, which is fine on the way out.
        let _ = self.updater.send(Update::Quit);

        Ok(())
    }
}
