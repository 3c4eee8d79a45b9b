//! Task management.
//!
//! The render loop and the input listener run as tasks, while the
//! [`crate::App`] itself runs on the main future alongside them.

use futures_util::TryFutureExt;
use std::future::Future;
use tokio::{select, sync::mpsc, task::JoinSet};

/// Supervises the background tasks, ending everything when one of them fails.
pub struct Tasks {
    /// The [`JoinSet`], which contains all of the task handles.
    pub set: JoinSet<crate::Result<()>>,

    /// A sender, which is kept for convenience to be used when
    /// initializing various other tasks.
    tx: mpsc::Sender<crate::Message>,
}

impl Tasks {
    /// Creates a new task manager.
    pub fn new(tx: mpsc::Sender<crate::Message>) -> Self {
        Self {
            tx,
            set: JoinSet::new(),
        }
    }

    /// Processes a task, and adds it to the internal [`JoinSet`].
    pub fn spawn<E: Into<crate::Error> + Send + Sync + 'static>(
        &mut self,
        future: impl Future<Output = Result<(), E>> + Send + 'static,
    ) {
        self.set.spawn(future.map_err(Into::into));
    }

    /// Gets a copy of the internal [`mpsc::Sender`].
    pub fn tx(&self) -> mpsc::Sender<crate::Message> {
        self.tx.clone()
    }

    /// Polls the `runner` together with every task previously added.
    ///
    /// The runner isn't a task because it holds the audio output, which
    /// has to stay on the main thread.
    ///
    /// This either returns when the runner completes, or if an error occurs
    /// in any of the internally held tasks.
    pub async fn wait(
        &mut self,
        runner: impl Future<Output = Result<(), crate::Error>>,
    ) -> crate::Result<()> {
        select! {
            result = runner => result,
            Some(result) = self.set.join_next() => match result {
                Ok(res) => res,
                Err(e) if !e.is_cancelled() => Err(crate::Error::JoinError(e)),
                Err(_) => Ok(()),
            }
        }
    }
}
