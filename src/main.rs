//! A futuristic terminal clock, with a countdown and a pomodoro timer.
pub mod error;
use std::{fs::OpenOptions, path::PathBuf, sync::Mutex};

use clap::Parser;
use tokio::sync::{broadcast, mpsc};
use tracing_subscriber::EnvFilter;
pub use error::{Error, Result};
pub mod message;
pub mod ui;
pub use message::Message;
pub mod tasks;
pub use tasks::Tasks;

pub mod app;
pub mod audio;
pub mod clock;
pub mod countdown;
pub mod format;
pub mod pomodoro;
pub mod preferences;
pub mod ticker;

use crate::{app::App, audio::Audio, clock::Zone, format::HourFormat};

/// A futuristic terminal clock, with a countdown and a pomodoro timer.
#[derive(Parser, Clone)]
#[command(about, version)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Use an alternate terminal screen.
    #[clap(long, short)]
    alternate: bool,

    /// Hide the world clocks & the bottom control bar.
    #[clap(long, short)]
    minimalist: bool,

    /// Exclude borders in UI.
    #[clap(long, short)]
    borderless: bool,

    /// Start with a 24-hour display.
    #[clap(long, short)]
    twenty_four: bool,

    /// FPS of the UI.
    #[clap(long, short, default_value_t = 12, value_parser = clap::value_parser!(u8).range(1..=60))]
    fps: u8,

    /// Write logs to neoclock.log in the data directory.
    #[clap(long, short)]
    debug: bool,

    /// Width of the clock, from 0 to 32.
    #[clap(long, short, default_value_t = 3)]
    width: usize,

    /// An extra world clock, like `paris=Europe/Paris`. May be repeated.
    #[clap(long, short, value_name = "NAME=ZONE")]
    zone: Vec<Zone>,
}

/// Gets neoclock's data directory.
pub fn data_dir() -> crate::Result<PathBuf> {
    let dir = dirs::data_dir().ok_or(Error::Directory)?.join("neoclock");

    Ok(dir)
}

/// Sends logs to a file, since stdout belongs to the interface.
///
/// Nothing is installed unless `--debug` was passed.
fn logging(args: &Args) -> eyre::Result<()> {
    if !args.debug {
        return Ok(());
    }

    let dir = data_dir()?;
    std::fs::create_dir_all(&dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("neoclock.log"))?;

    let filter = EnvFilter::try_from_env("NEOCLOCK_LOG")
        .unwrap_or_else(|_| EnvFilter::new("neoclock=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<()> {
    let args = Args::parse();
    logging(&args)?;

    let store = preferences::Store::load().await?;
    let format = if args.twenty_four {
        HourFormat::TwentyFour
    } else {
        HourFormat::Twelve
    };

    let mut zones = Zone::defaults();
    zones.extend(args.zone.iter().cloned());

    let (tx, rx) = mpsc::channel(32);
    let (utx, urx) = broadcast::channel(32);
    let mut tasks = Tasks::new(tx.clone());

    let audio = Audio::new(store.get().sound);
    let app = App::new(rx, &tx, utx, store, audio, format, zones);
    let params = ui::interface::Params::from(&args);
    let environment = tasks.ui(urx, app.state(), params, args.alternate)?;

    tracing::info!(?format, "starting");
    let result = tasks.wait(app.run()).await;

    environment.cleanup(result.is_ok())?;
    Ok(result?)
}
