//! World clocks, resolved against the IANA time zone database
//! so that daylight saving is handled properly.

use std::str::FromStr;

use chrono::{DateTime, Timelike as _, Utc};
use chrono_tz::Tz;

use crate::format::{self, HourFormat};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("expected NAME=ZONE, got {0:?}")]
    Malformed(String),

    #[error("unknown time zone {0:?}")]
    Unknown(String),
}

/// A labelled time zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    /// What's shown next to the time.
    pub label: String,
    tz: Tz,
}

impl Zone {
    /// The zones which are always shown.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("new york", chrono_tz::America::New_York),
            Self::new("london", chrono_tz::Europe::London),
            Self::new("tokyo", chrono_tz::Asia::Tokyo),
        ]
    }

    pub fn new(label: impl Into<String>, tz: Tz) -> Self {
        Self {
            label: label.into(),
            tz,
        }
    }

    /// Formats the time in this zone at the instant `now`.
    pub fn time(&self, now: DateTime<Utc>, format: HourFormat) -> String {
        let local = now.with_timezone(&self.tz);
        format::wall(local.hour(), local.minute(), local.second(), format)
    }
}

impl FromStr for Zone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((label, name)) = s.split_once('=') else {
            return Err(Error::Malformed(s.to_owned()));
        };

        let (label, name) = (label.trim(), name.trim());
        if label.is_empty() || name.is_empty() {
            return Err(Error::Malformed(s.to_owned()));
        }

        let tz = name
            .parse::<Tz>()
            .map_err(|_| Error::Unknown(name.to_owned()))?;

        Ok(Self::new(label.to_lowercase(), tz))
    }
}
