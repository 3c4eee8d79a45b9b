//! The audio collaborator, which synthesizes the tick & alarm tones.
//!
//! Playback is best effort. If there isn't an output device, every
//! signal is quietly dropped.

use std::time::Duration;

use rodio::{source::SineWave, OutputStream, Sink, Source as _};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("audio stream error: {0}")]
    Stream(#[from] rodio::StreamError),

    #[error("C string null error: {0}")]
    FfiNull(#[from] std::ffi::NulError),
}

/// This gets the output stream while also shutting up alsa with [libc].
/// Uses raw libc calls, and therefore is functional only on Linux.
#[cfg(target_os = "linux")]
fn output_stream() -> Result<OutputStream, Error> {
    use libc::freopen;
    use rodio::OutputStreamBuilder;
    use std::ffi::CString;

    extern "C" {
        static stderr: *mut libc::FILE;
    }

    // ALSA loves to complain on stderr, which scribbles all over the clock,
    // so point stderr at /dev/null while the stream is opened.
    let mode = CString::new("w")?;
    let null = CString::new("/dev/null")?;
    let tty = CString::new("/dev/tty")?;

    // SAFETY: `stderr` is a valid stream for the whole life of the process,
    // and both paths are valid C strings.
    unsafe {
        freopen(null.as_ptr(), mode.as_ptr(), stderr);
    }

    let stream = OutputStreamBuilder::open_default_stream();

    // SAFETY: See the first call to `freopen`.
    unsafe {
        freopen(tty.as_ptr(), mode.as_ptr(), stderr);
    }

    Ok(stream?)
}

#[cfg(not(target_os = "linux"))]
fn output_stream() -> Result<OutputStream, Error> {
    Ok(rodio::OutputStreamBuilder::open_default_stream()?)
}

/// The once a second tick is a soft click rather than a beep,
/// well under the alarm's volume.
pub const TICK: Tone = Tone {
    frequency: 800.0,
    millis: 30,
    gain: 0.02,
};

/// The two halves of each alarm beep.
pub const ALARM: [Tone; 2] = [
    Tone {
        frequency: 1000.0,
        millis: 100,
        gain: 0.3,
    },
    Tone {
        frequency: 1500.0,
        millis: 200,
        gain: 0.3,
    },
];

/// A plain sine beep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency: f32,
    pub millis: u64,
    pub gain: f32,
}

/// A short beep of `frequency` for `millis`.
fn tone(frequency: f32, millis: u64, gain: f32) -> impl rodio::Source + Send + 'static {
    SineWave::new(frequency)
        .take_duration(Duration::from_millis(millis))
        .amplify(gain)
}

/// The open output, if there is one.
struct Output {
    /// Alarms are queued on their own sink so the beeps stay in order.
    alarm: Sink,

    /// Kept around so the output stays open.
    stream: OutputStream,
}

pub struct Audio {
    /// [`None`] if no output device could be opened.
    output: Option<Output>,

    /// Mirrors the sound preference.
    enabled: bool,
}

impl Audio {
    /// Opens the default output device, falling back to silence.
    pub fn new(enabled: bool) -> Self {
        let output = match output_stream() {
            Ok(mut stream) => {
                stream.log_on_drop(false);
                Some(Output {
                    alarm: Sink::connect_new(stream.mixer()),
                    stream,
                })
            }
            Err(error) => {
                tracing::warn!(%error, "no audio output, staying silent");
                None
            }
        };

        Self { output, enabled }
    }

    /// An audio collaborator which never makes a sound.
    pub const fn silent() -> Self {
        Self {
            output: None,
            enabled: false,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            if let Some(output) = &self.output {
                output.alarm.clear();
            }
        }
    }

    /// The once a second tick.
    pub fn tick(&self) {
        if let Some(output) = self.output.as_ref().filter(|_| self.enabled) {
            output
                .stream
                .mixer()
                .add(tone(TICK.frequency, TICK.millis, TICK.gain));
        }
    }

    /// Three rising beeps, each 400ms apart.
    pub fn alarm(&self) {
        let Some(output) = self.output.as_ref().filter(|_| self.enabled) else {
            return;
        };

        for _ in 0..3 {
            for beep in ALARM {
                output.alarm.append(tone(beep.frequency, beep.millis, beep.gain));
            }

            // Rest.
            output.alarm.append(tone(1000.0, 100, 0.0));
        }

        output.alarm.play();
    }
}
