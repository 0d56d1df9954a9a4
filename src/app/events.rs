//! Event processing from backend

use super::GuildhallApp;
use crate::events;

impl GuildhallApp {
    pub fn process_events(&mut self) {
        let mut data_changed = false;

        while let Ok(event) = self.event_rx.try_recv() {
            data_changed |= events::process_single_event(&mut self.state, &mut self.dialogs, event);
        }

        if data_changed {
            self.persist_settings();
        }
    }
}
