//! The two persistent flags, which are loaded at startup and written
//! straight back to disk every time one of them is toggled.

use std::path::PathBuf;
use tokio::fs;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("couldn't find config directory")]
    Directory,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// The flags themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    /// Whether ticks & alarms should make any noise.
    pub sound: bool,

    /// Whether to use the muted, dark palette.
    pub dark_theme: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            sound: true,
            dark_theme: false,
        }
    }
}

impl Preferences {
    /// Parses the contents of `preferences.txt`.
    ///
    /// This is intentionally lenient: sound is only disabled by an exact `false`,
    /// and the dark theme is only enabled by an exact `true`.
    pub fn parse(text: &str) -> Self {
        let mut preferences = Self::default();

        for line in text.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };

            match key.trim() {
                "sound" => preferences.sound = value.trim() != "false",
                "dark_theme" => preferences.dark_theme = value.trim() == "true",
                _ => continue,
            }
        }

        preferences
    }

    /// The inverse of [`Preferences::parse`].
    pub fn serialize(self) -> String {
        format!("sound={}\ndark_theme={}\n", self.sound, self.dark_theme)
    }
}

/// Owns the [`Preferences`], and the file they're persisted to.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    current: Preferences,
}

impl Store {
    /// Retrieves the config directory, creating it if needed.
    async fn config() -> Result<PathBuf> {
        let config = dirs::config_dir()
            .ok_or(Error::Directory)?
            .join(PathBuf::from("neoclock"));

        if !config.exists() {
            fs::create_dir_all(&config).await?;
        }

        Ok(config)
    }

    /// Loads the store from `preferences.txt` inside [`dirs::config_dir()`].
    pub async fn load() -> Result<Self> {
        let path = Self::config().await?.join(PathBuf::from("preferences.txt"));
        Self::open(path).await
    }

    /// Loads the store from an arbitrary path, writing the defaults if it doesn't exist yet.
    pub async fn open(path: PathBuf) -> Result<Self> {
        let current = if path.exists() {
            Preferences::parse(&fs::read_to_string(&path).await?)
        } else {
            tracing::info!(path = %path.display(), "writing default preferences");
            let defaults = Preferences::default();
            fs::write(&path, defaults.serialize()).await?;
            defaults
        };

        Ok(Self { path, current })
    }

    pub const fn get(&self) -> Preferences {
        self.current
    }

    /// Writes the current preferences to disk.
    async fn save(&self) -> Result<()> {
        fs::write(&self.path, self.current.serialize()).await?;
        tracing::info!(preferences = ?self.current, "saved preferences");

        Ok(())
    }

    /// Flips the sound flag and persists it.
    pub async fn toggle_sound(&mut self) -> Result<Preferences> {
        self.current.sound = !self.current.sound;
        self.save().await?;

        Ok(self.current)
    }

    /// Flips the theme flag and persists it.
    pub async fn toggle_theme(&mut self) -> Result<Preferences> {
        self.current.dark_theme = !self.current.dark_theme;
        self.save().await?;

        Ok(self.current)
    }
}
