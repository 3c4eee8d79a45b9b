#[cfg(test)]
mod tones {
    use crate::audio::{Audio, ALARM, TICK};

    #[test]
    fn tick_is_a_quiet_click() {
        for beep in ALARM {
            assert!(TICK.gain * 10.0 <= beep.gain);
            assert!(TICK.millis < beep.millis);
        }
    }

    #[test]
    fn silent_never_panics() {
        let mut audio = Audio::silent();
        audio.set_enabled(true);
        audio.tick();
        audio.alarm();
    }
}
