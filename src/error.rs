use tokio::sync::broadcast;

use crate::{preferences, ui};

pub type Result<T> = std::result::Result<T, Error>;
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unable to load/save preferences: {0}")]
    Preferences(#[from] preferences::Error),

    #[error("couldn't update UI state: {0}")]
    Broadcast(#[from] broadcast::error::SendError<ui::Update>),

    #[error("directory not found")]
    Directory,

    #[error("ui failure")]
    UI(#[from] ui::Error),

    #[error("join error")]
    JoinError(#[from] tokio::task::JoinError),
}
