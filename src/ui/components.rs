//! Various different individual components that
//! appear in the clock's UI, like the ring bars.
//!
//! Every component returns a line which is exactly `width` columns wide,
//! so lengths are always worked out before any styling is applied.

use crossterm::style::Stylize as _;
use unicode_segmentation::UnicodeSegmentation as _;

use crate::{
    countdown::{Field, Status},
    format,
    ui::{palette::Palette, Focus, State},
};

/// Cuts `text` down to at most `width` graphemes, returning it with its length.
fn fit(text: &str, width: usize) -> (String, usize) {
    let len = text.graphemes(true).count();
    if len <= width {
        (text.to_owned(), len)
    } else {
        (text.graphemes(true).take(width).collect(), width)
    }
}

/// The little arrow that marks the focused timer.
fn marker(state: &State, focus: Focus) -> &'static str {
    if state.focus == focus {
        "> "
    } else {
        "  "
    }
}

/// A bar filled to `fraction`, `width + 2` columns wide including the brackets.
pub fn bar(fraction: f32, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f32).round() as usize;

    format!(
        "[{}{}]",
        "/".repeat(filled),
        " ".repeat(width.saturating_sub(filled))
    )
}

/// The main time readout, with the day period on the right.
pub fn time(state: &State, width: usize) -> String {
    let palette = Palette::new(state.preferences.dark_theme, state.clock.period);
    let digits = state.clock.digits();
    let meridiem = state
        .clock
        .meridiem
        .map_or_else(String::new, |x| format!(" {x}"));
    let period = state.clock.period.name();

    let gap = width.saturating_sub(digits.len() + meridiem.len() + period.len());
    format!(
        "{}{}{}{}",
        digits.with(palette.accent).bold(),
        meridiem,
        " ".repeat(gap),
        period.with(palette.dim)
    )
}

/// One of the three clock rings, drawn as a bar.
pub fn ring(state: &State, label: char, fraction: f32, width: usize) -> String {
    let palette = Palette::new(state.preferences.dark_theme, state.clock.period);

    format!(
        "{} {}",
        label.with(palette.dim),
        bar(fraction, width.saturating_sub(4)).with(palette.accent)
    )
}

/// A single world clock line.
pub fn world(state: &State, label: &str, time: &str, width: usize) -> String {
    let palette = Palette::new(state.preferences.dark_theme, state.clock.period);
    let (label, len) = fit(label, width.saturating_sub(time.len() + 1));

    format!(
        "{}{}{time}",
        label.with(palette.dim),
        " ".repeat(width.saturating_sub(len + time.len()))
    )
}

/// The countdown, which shows the entry fields while idle.
pub fn countdown(state: &State, width: usize) -> String {
    const LABEL: &str = "countdown ";
    let palette = Palette::new(state.preferences.dark_theme, state.clock.period);
    let prefix = format!("{}{LABEL}", marker(state, Focus::Countdown));
    let used = prefix.len() + 8;

    let body = match state.countdown.status() {
        Status::Idle => {
            let fields = [Field::Hours, Field::Minutes, Field::Seconds].map(|field| {
                let digits = format::pad2(state.setup.get(field));
                if state.focus == Focus::Countdown && state.setup.focus == field {
                    digits.with(palette.accent).reverse().to_string()
                } else {
                    digits
                }
            });

            format!("{}{}", fields.join(":"), " ".repeat(width.saturating_sub(used)))
        }
        status => {
            let color = Palette::urgency(state.countdown.urgency());
            let remaining = format::hms(state.countdown.remaining()).with(color);
            let room = width.saturating_sub(used + 1);

            let tail = if status == Status::Paused {
                format!("{:<room$}", "paused").with(palette.dim).to_string()
            } else {
                bar(state.countdown.progress(), room.saturating_sub(2))
                    .with(color)
                    .to_string()
            };

            format!("{remaining} {tail}")
        }
    };

    format!("{}{body}", prefix.with(palette.dim))
}

/// The pomodoro timer, with its mode & status.
pub fn pomodoro(state: &State, width: usize) -> String {
    let palette = Palette::new(state.preferences.dark_theme, state.clock.period);
    let prefix = format!("{}pomodoro ", marker(state, Focus::Pomodoro));
    let mode = format!("{:<6}", state.pomodoro.mode().to_string());
    let remaining = format::ms(state.pomodoro.remaining());

    let used = prefix.len() + mode.len() + remaining.len() + 1;
    let (status, len) = fit(state.pomodoro.status(), width.saturating_sub(used));
    let color = if state.pomodoro.running() {
        palette.accent
    } else {
        palette.dim
    };

    format!(
        "{}{mode}{} {}{}",
        prefix.with(palette.dim),
        remaining.with(color).bold(),
        status.with(color),
        " ".repeat(width.saturating_sub(used + len))
    )
}

/// How much of the current pomodoro phase is left, drawn under the pomodoro line.
pub fn phase(state: &State, width: usize) -> String {
    let palette = Palette::new(state.preferences.dark_theme, state.clock.period);
    let color = if state.pomodoro.running() {
        palette.accent
    } else {
        palette.dim
    };

    format!(
        "  {}",
        bar(state.pomodoro.progress(), width.saturating_sub(4)).with(color)
    )
}

/// The latest notice, or a blank line.
pub fn notice(state: &State, width: usize) -> String {
    let palette = Palette::new(state.preferences.dark_theme, state.clock.period);
    let Some(notice) = &state.notice else {
        return " ".repeat(width);
    };

    let (text, len) = fit(&notice.text, width);
    format!(
        "{}{}",
        text.with(palette.accent).bold(),
        " ".repeat(width - len)
    )
}

/// Creates the bottom controls bar, which depends on the focused timer.
pub fn controls(focus: Focus, width: usize) -> String {
    let controls = match focus {
        Focus::Countdown => [["[s]", "tart"], ["[p]", "ause"], ["[r]", "eset"], ["[q]", "uit"]],
        Focus::Pomodoro => [["[s]", "tart"], ["[w]", "ork"], ["[b]", "reak"], ["[q]", "uit"]],
    };

    let len: usize = controls.concat().iter().map(|x| x.len()).sum();
    let gap = width.saturating_sub(len) / (controls.len() - 1);
    let controls = controls.map(|x| format!("{}{}", x[0].bold(), x[1]));

    let mut line = controls.join(&" ".repeat(gap));
    line.push_str(&" ".repeat(width.saturating_sub(len + gap * (controls.len() - 1))));
    line
}
