#[cfg(test)]
fn visible(text: &str) -> usize {
    use unicode_segmentation::UnicodeSegmentation as _;

    let mut plain = String::new();
    let mut escaped = false;
    for c in text.chars() {
        match (escaped, c) {
            (false, '\x1b') => escaped = true,
            (true, 'm') => escaped = false,
            (true, _) => {}
            (false, c) => plain.push(c),
        }
    }

    plain.graphemes(true).count()
}

#[cfg(test)]
fn state() -> crate::ui::State {
    use chrono::NaiveTime;

    use crate::{clock, countdown::Setup, format::HourFormat, preferences::Preferences};

    let now = NaiveTime::from_hms_opt(9, 41, 7).unwrap();
    let mut state = crate::ui::State::initial(
        clock::sample(&now, HourFormat::Twelve),
        String::from("Saturday, October 17, 2026"),
        Setup {
            minutes: 1,
            seconds: 30,
            ..Setup::default()
        },
        Preferences::default(),
    );
    state.world = vec![
        (String::from("new york"), String::from("03:41:07 AM")),
        (String::from("a very long label which goes on"), String::from("21:41:07")),
    ];

    state
}

#[cfg(test)]
mod components {
    use super::{state, visible};
    use crate::{
        countdown::Countdown,
        pomodoro::Pomodoro,
        ui::{components, Focus, Notice},
    };

    const WIDTH: usize = 40;

    #[test]
    fn bar_fills() {
        assert_eq!(components::bar(0.0, 4), "[    ]");
        assert_eq!(components::bar(0.5, 4), "[//  ]");
        assert_eq!(components::bar(1.0, 4), "[////]");
        assert_eq!(components::bar(2.0, 4), "[////]");
    }

    #[test]
    fn time_shows_meridiem_and_period() {
        let line = components::time(&state(), WIDTH);

        assert!(line.contains("09:41:07"));
        assert!(line.contains("AM"));
        assert!(line.contains("morning"));
        assert_eq!(visible(&line), WIDTH);
    }

    #[test]
    fn rings_are_full_width() {
        let state = state();
        let line = components::ring(&state, 'm', state.clock.rings.minute, WIDTH);
        assert_eq!(visible(&line), WIDTH);
    }

    #[test]
    fn world_truncates_labels() {
        let state = state();
        for (label, time) in &state.world {
            let line = components::world(&state, label, time, WIDTH);
            assert!(line.contains(time.as_str()));
            assert_eq!(visible(&line), WIDTH);
        }
    }

    #[test]
    fn countdown_idle_shows_fields() {
        let line = components::countdown(&state(), WIDTH);

        assert!(line.contains("> countdown"));
        assert!(line.contains("01"));
        assert!(line.contains("30"));
        assert_eq!(visible(&line), WIDTH);
    }

    #[test]
    fn countdown_running_and_paused() {
        let mut state = state();
        let mut countdown = Countdown::default();
        countdown.start(0, 1, 30).unwrap();
        state.countdown = countdown;

        let running = components::countdown(&state, WIDTH);
        assert!(running.contains("00:01:30"));
        assert_eq!(visible(&running), WIDTH);

        countdown.pause();
        state.countdown = countdown;
        let paused = components::countdown(&state, WIDTH);
        assert!(paused.contains("paused"));
        assert_eq!(visible(&paused), WIDTH);
    }

    #[test]
    fn pomodoro_line() {
        let mut state = state();
        state.focus = Focus::Pomodoro;
        state.pomodoro = Pomodoro::default();

        let line = components::pomodoro(&state, WIDTH);
        assert!(line.contains("> pomodoro"));
        assert!(line.contains("25:00"));
        assert!(line.contains("READY TO WORK"));
        assert_eq!(visible(&line), WIDTH);
    }

    #[test]
    fn phase_bar_drains() {
        let mut state = state();
        let full = components::phase(&state, WIDTH);
        assert!(full.contains(&"/".repeat(WIDTH - 4)));
        assert_eq!(visible(&full), WIDTH);

        let mut pomodoro = Pomodoro::default();
        pomodoro.start();
        for _ in 0..750 {
            let _ = pomodoro.tick();
        }
        state.pomodoro = pomodoro;

        let half = components::phase(&state, WIDTH);
        let filled = half.matches('/').count();
        assert_eq!(filled, (WIDTH - 4) / 2);
        assert_eq!(visible(&half), WIDTH);
    }

    #[test]
    fn notice_or_blank() {
        let mut state = state();
        assert_eq!(components::notice(&state, WIDTH), " ".repeat(WIDTH));

        state.notice = Some(Notice::new(String::from("time's up!")));
        let line = components::notice(&state, WIDTH);
        assert!(line.contains("time's up!"));
        assert_eq!(visible(&line), WIDTH);
    }

    #[test]
    fn controls_follow_focus() {
        let countdown = components::controls(Focus::Countdown, WIDTH);
        assert!(countdown.contains("[r]"));
        assert_eq!(visible(&countdown), WIDTH);

        let pomodoro = components::controls(Focus::Pomodoro, WIDTH);
        assert!(pomodoro.contains("[w]"));
        assert!(pomodoro.contains("[b]"));
        assert_eq!(visible(&pomodoro), WIDTH);
    }
}

#[cfg(test)]
mod window {
    use crate::ui::window::Window;

    #[test]
    fn new_border_strings() {
        let w = Window::new(10, false);
        assert!(w.borders[0].starts_with('┌'));
        assert!(w.borders[1].starts_with('└'));

        let w2 = Window::new(5, true);
        assert!(w2.borders[0].is_empty());
        assert!(w2.borders[1].is_empty());
    }

    #[test]
    fn title_keeps_border_width() {
        let mut w = Window::new(20, false);
        let plain = w.borders[0].chars().count();

        w.title("Saturday");
        assert!(w.borders[0].contains("Saturday"));
        assert_eq!(w.borders[0].chars().count(), plain);

        w.title("Wednesday, September 30, 2026");
        assert!(w.borders[0].contains("..."));
        assert_eq!(w.borders[0].chars().count(), plain);
    }

    #[test]
    fn render_height() {
        let w = Window::new(4, false);
        let (rendered, height) = w.render(vec![String::from("abcd")], true).unwrap();

        assert!(rendered.contains("│ abcd │"));
        #[cfg(not(windows))]
        assert_eq!(height, 3);
    }
}

#[cfg(test)]
mod interface {
    use super::state;
    use crate::ui::{interface::Params, Interface};

    #[tokio::test]
    async fn menu_layout() {
        let interface = Interface::new(Params::default());
        let mut state = state();

        // Time, three rings, blank, two world clocks, blank,
        // two timers with the phase bar, notice, controls.
        assert_eq!(interface.menu(&mut state).len(), 13);
    }

    #[tokio::test]
    async fn minimalist_hides_extras() {
        let interface = Interface::new(Params {
            minimalist: true,
            ..Params::default()
        });
        let mut state = state();

        assert_eq!(interface.menu(&mut state).len(), 9);
    }
}

#[cfg(test)]
mod updates {
    use super::state;
    use crate::{
        pomodoro::{Mode, Pomodoro},
        ui::{Focus, Update},
    };

    #[test]
    fn updates_apply() {
        let mut state = state();

        assert!(state.apply(Update::Focus(Focus::Pomodoro)));
        assert_eq!(state.focus, Focus::Pomodoro);

        assert!(state.apply(Update::Pomodoro(Pomodoro::new(Mode::Break))));
        assert_eq!(state.pomodoro.mode(), Mode::Break);

        assert!(state.apply(Update::Notice(String::from("hi"))));
        assert_eq!(state.notice.as_ref().map(|x| x.text.as_str()), Some("hi"));

        assert!(!state.apply(Update::Quit));
    }

    #[test]
    fn focus_toggles() {
        assert_eq!(Focus::Countdown.toggled(), Focus::Pomodoro);
        assert_eq!(Focus::Pomodoro.toggled(), Focus::Countdown);
    }
}

#[cfg(test)]
mod input {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::{pomodoro::Mode, ui::input::map, Message};

    fn key(code: KeyCode) -> Option<Message> {
        map(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn quitting() {
        assert_eq!(key(KeyCode::Char('q')), Some(Message::Quit));
        assert_eq!(
            map(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Message::Quit)
        );
        assert_eq!(key(KeyCode::Char('c')), None);
    }

    #[test]
    fn timers() {
        assert_eq!(key(KeyCode::Char(' ')), Some(Message::Toggle));
        assert_eq!(key(KeyCode::Char('S')), Some(Message::Start));
        assert_eq!(key(KeyCode::Char('r')), Some(Message::Reset));
        assert_eq!(key(KeyCode::Char('w')), Some(Message::Mode(Mode::Work)));
        assert_eq!(key(KeyCode::Char('b')), Some(Message::Mode(Mode::Break)));
        assert_eq!(key(KeyCode::Tab), Some(Message::Focus));
    }

    #[test]
    fn editing() {
        assert_eq!(key(KeyCode::Char('7')), Some(Message::Digit(7)));
        assert_eq!(key(KeyCode::Up), Some(Message::Adjust(1)));
        assert_eq!(key(KeyCode::Left), Some(Message::Field(false)));
    }
}

#[cfg(test)]
mod palette {
    use crossterm::style::Color;

    use crate::{clock::DayPeriod, countdown::Urgency, ui::palette::Palette};

    #[test]
    fn theme_changes_accent() {
        let light = Palette::new(false, DayPeriod::Night);
        let dark = Palette::new(true, DayPeriod::Night);
        assert_ne!(light, dark);
    }

    #[test]
    fn urgency_colors() {
        assert_eq!(Palette::urgency(Urgency::Normal), Color::Green);
        assert_eq!(Palette::urgency(Urgency::Danger), Color::Red);
    }
}

#[cfg(test)]
mod environment {
    use std::time::Duration;

    use crate::ui::{environment::farewell, Environment};

    #[test]
    fn farewell_reports_uptime() {
        assert_eq!(farewell(Duration::from_secs(3725)), "clocked out after 01:02:05");
        assert_eq!(farewell(Duration::from_millis(900)), "clocked out after 00:00:00");
        assert_eq!(farewell(Duration::from_secs(u64::MAX)), "clocked out after 99:59:59");
    }

    #[test]
    fn ready_and_cleanup_no_panic() {
        // There might not be a terminal at all, so only check that
        // a successful setup can also be torn down.
        if let Ok(env) = Environment::ready(false) {
            let _ = env.cleanup(false);
        }
    }
}
