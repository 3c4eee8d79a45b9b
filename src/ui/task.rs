//! Contains the code for readying the terminal and starting the UI tasks.

use crate::ui::{self, input, interface};
use tokio::sync::broadcast;

impl crate::Tasks {
    /// Readies the terminal, then starts the render loop & the input listener.
    ///
    /// The returned [`ui::Environment`] should be cleaned up once everything is done.
    pub fn ui(
        &mut self,
        updates: broadcast::Receiver<ui::Update>,
        state: ui::State,
        params: interface::Params,
        alternate: bool,
    ) -> ui::Result<ui::Environment> {
        let environment = ui::Environment::ready(alternate)?;

        self.spawn(ui::run(updates, state, params));
        self.spawn(input::listen(self.tx()));

        Ok(environment)
    }
}
