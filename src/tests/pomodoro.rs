#[cfg(test)]
mod pomodoro {
    use crate::pomodoro::{Mode, Pomodoro, Tick};

    #[test]
    fn starts_ready_to_work() {
        let pomodoro = Pomodoro::default();

        assert_eq!(pomodoro.mode(), Mode::Work);
        assert_eq!(pomodoro.total(), 1500);
        assert_eq!(pomodoro.remaining(), 1500);
        assert!(!pomodoro.running());
        assert_eq!(pomodoro.status(), "READY TO WORK");
    }

    #[test]
    fn a_full_work_phase_flips_to_break() {
        let mut pomodoro = Pomodoro::default();
        pomodoro.start();
        assert_eq!(pomodoro.status(), "WORKING...");

        let mut completed = Vec::new();
        for _ in 0..1500 {
            if let Tick::Complete(mode) = pomodoro.tick() {
                completed.push(mode);
            }
        }

        assert_eq!(completed, [Mode::Work]);
        assert_eq!(pomodoro.mode(), Mode::Break);
        assert_eq!(pomodoro.total(), 300);
        assert_eq!(pomodoro.remaining(), 300);
        assert!(!pomodoro.running());
        assert_eq!(pomodoro.status(), "READY FOR BREAK");
    }

    #[test]
    fn a_break_phase_flips_back() {
        let mut pomodoro = Pomodoro::new(Mode::Break);
        pomodoro.start();
        assert_eq!(pomodoro.status(), "BREAK TIME...");

        for _ in 0..299 {
            assert_eq!(pomodoro.tick(), Tick::Counted);
        }

        assert_eq!(pomodoro.tick(), Tick::Complete(Mode::Break));
        assert_eq!(pomodoro, Pomodoro::new(Mode::Work));
    }

    #[test]
    fn next_phase_needs_a_start() {
        let mut pomodoro = Pomodoro::new(Mode::Break);
        pomodoro.start();
        for _ in 0..300 {
            let _ = pomodoro.tick();
        }

        assert_eq!(pomodoro.tick(), Tick::Ignored);
        assert_eq!(pomodoro.remaining(), 1500);
    }

    #[test]
    fn switching_only_while_idle() {
        let mut pomodoro = Pomodoro::default();
        pomodoro.switch(Mode::Break);
        assert_eq!(pomodoro, Pomodoro::new(Mode::Break));
        assert!(!pomodoro.running());

        pomodoro.start();
        let _ = pomodoro.tick();
        pomodoro.switch(Mode::Work);

        assert_eq!(pomodoro.mode(), Mode::Break);
        assert_eq!(pomodoro.remaining(), 299);
        assert!(pomodoro.running());
    }

    #[test]
    fn start_while_running_does_nothing() {
        let mut pomodoro = Pomodoro::default();
        pomodoro.start();
        let _ = pomodoro.tick();
        pomodoro.start();

        assert_eq!(pomodoro.remaining(), 1499);
    }

    #[test]
    fn stale_ticks_are_ignored() {
        let mut pomodoro = Pomodoro::default();
        assert_eq!(pomodoro.tick(), Tick::Ignored);
        assert_eq!(pomodoro, Pomodoro::default());
    }

    #[test]
    fn messages_and_names() {
        assert_eq!(Mode::Work.to_string(), "work");
        assert_eq!(Mode::Break.to_string(), "break");
        assert_eq!(Mode::Work.complete(), "work session complete! time for a break.");
        assert_eq!(Mode::Break.complete(), "break time over! ready to work?");
        assert_eq!(Mode::Work.flipped(), Mode::Break);
    }

    #[test]
    fn progress() {
        let mut pomodoro = Pomodoro::new(Mode::Break);
        assert_eq!(pomodoro.progress(), 1.0);

        pomodoro.start();
        for _ in 0..150 {
            let _ = pomodoro.tick();
        }
        assert!((pomodoro.progress() - 0.5).abs() < f32::EPSILON);
    }
}
