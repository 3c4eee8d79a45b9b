use crate::{
    ui::{components, window::Window, State},
    Args,
};
use std::time::Duration;

/// UI-specific parameters and options.
#[derive(Copy, Clone, Debug)]
pub struct Params {
    /// Whether to include borders.
    pub borderless: bool,

    /// Whether to hide the world clocks & the bottom control bar.
    pub minimalist: bool,

    /// The full inner width of the terminal window.
    pub(crate) width: usize,

    /// The total delta between frames.
    ///
    /// Derived from the FPS.
    pub delta: Duration,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            borderless: false,
            minimalist: false,
            width: 40,
            delta: Duration::from_secs_f32(1.0 / 12.0),
        }
    }
}

impl From<&Args> for Params {
    fn from(args: &Args) -> Self {
        Self {
            delta: Duration::from_secs_f32(1.0 / f32::from(args.fps.max(1))),
            width: 34 + args.width.min(32) * 2,
            minimalist: args.minimalist,
            borderless: args.borderless,
        }
    }
}

/// All of the state related to the interface itself,
/// which is displayed each frame to the standard output.
pub struct Interface {
    /// The [`Window`] to render to.
    pub(crate) window: Window,

    /// The interval to wait between frames.
    interval: tokio::time::Interval,

    /// The interface parameters that control smaller
    /// aesthetic features and options.
    params: Params,
}

impl Interface {
    /// Creates a new interface.
    pub fn new(params: Params) -> Self {
        Self {
            window: Window::new(params.width, params.borderless),
            interval: tokio::time::interval(params.delta),
            params,
        }
    }

    /// Creates a full "menu" from the [`State`], which can be
    /// easily put into a window for display.
    ///
    /// This also clears out the notice once it has been up for long enough.
    pub(crate) fn menu(&self, state: &mut State) -> Vec<String> {
        let width = self.params.width;
        if state.notice.as_ref().is_some_and(super::Notice::expired) {
            state.notice = None;
        }

        let rings = state.clock.rings;
        let mut menu = vec![
            components::time(state, width),
            components::ring(state, 'h', rings.hour, width),
            components::ring(state, 'm', rings.minute, width),
            components::ring(state, 's', rings.second, width),
        ];

        if !self.params.minimalist && !state.world.is_empty() {
            menu.push(" ".repeat(width));
            for (label, time) in &state.world {
                menu.push(components::world(state, label, time, width));
            }
        }

        menu.push(" ".repeat(width));
        menu.push(components::countdown(state, width));
        menu.push(components::pomodoro(state, width));
        menu.push(components::phase(state, width));
        menu.push(components::notice(state, width));

        if !self.params.minimalist {
            menu.push(components::controls(state.focus, width));
        }

        menu
    }

    /// Draws the terminal. This will also wait for the specified
    /// delta to pass before completing.
    pub async fn draw(&mut self, state: &mut State) -> super::Result<()> {
        let menu = self.menu(state);
        self.window.title(&state.date);
        self.window.draw(menu)?;
        self.interval.tick().await;

        Ok(())
    }
}
