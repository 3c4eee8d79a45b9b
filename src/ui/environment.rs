//! Puts the terminal into the clock face's raw, cursorless mode and back.

use std::{
    io::{stdout, StdoutLock},
    panic,
    time::{Duration, Instant},
};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::format;

/// The longest uptime the goodbye line can show, `99:59:59`.
const LONGEST: u64 = 99 * 3600 + 59 * 60 + 59;

/// What the goodbye line says after the clock has been up for `uptime`.
pub fn farewell(uptime: Duration) -> String {
    let seconds = uptime.as_secs().min(LONGEST) as u32;
    format!("clocked out after {}", format::hms(seconds))
}

/// Everything the clock face changed about the terminal on the way in.
#[derive(Debug, Clone, Copy)]
pub struct Environment {
    /// Whether the terminal accepted disambiguated key codes.
    keyboard: bool,

    /// Whether the face is drawn on the alternate screen.
    alternate: bool,

    /// When the face went up.
    since: Instant,
}

impl Environment {
    /// Asks for disambiguated key codes, if the terminal knows about them,
    /// so that modified keys like `Ctrl+C` arrive intact in raw mode.
    fn keyboard(lock: &mut StdoutLock<'_>) -> super::Result<bool> {
        let supported = terminal::supports_keyboard_enhancement().unwrap_or_default();
        if supported {
            crossterm::execute!(
                lock,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
            )?;
        }

        Ok(supported)
    }

    /// Readies the terminal for drawing the clock face.
    ///
    /// Also hooks panics, so a crash mid-frame doesn't strand the terminal in raw mode.
    pub fn ready(alternate: bool) -> super::Result<Self> {
        let mut lock = stdout().lock();

        crossterm::execute!(lock, Hide)?;
        if alternate {
            crossterm::execute!(lock, EnterAlternateScreen, MoveTo(0, 0))?;
        }

        terminal::enable_raw_mode()?;
        let environment = Self {
            keyboard: Self::keyboard(&mut lock)?,
            alternate,
            since: Instant::now(),
        };

        panic::set_hook(Box::new(move |info| {
            let _ = environment.cleanup(false);
            eprintln!("neoclock panicked: {info}");
        }));

        Ok(environment)
    }

    /// Takes the clock face down & gives the terminal back.
    ///
    /// On a normal quit (`elegant`), a goodbye with the uptime is printed.
    pub fn cleanup(&self, elegant: bool) -> super::Result<()> {
        let mut lock = stdout().lock();

        if self.keyboard {
            crossterm::execute!(lock, PopKeyboardEnhancementFlags)?;
        }

        if self.alternate {
            crossterm::execute!(lock, LeaveAlternateScreen)?;
        }

        crossterm::execute!(lock, Clear(ClearType::FromCursorDown), Show)?;
        terminal::disable_raw_mode()?;

        if elegant {
            eprintln!("{}", farewell(self.since.elapsed()));
        }

        Ok(())
    }
}
