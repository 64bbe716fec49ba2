//! Polling for conversion completions and panel events.

use std::time::Instant;

use winit::event_loop::ActiveEventLoop;

use lingo_panel::PanelEvent;

use super::core::LingoApp;
use super::types::POLL_INTERVAL;

impl LingoApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_convert();
            self.poll_panel_events();
        }

        event_loop.set_control_flow(winit::event_loop::ControlFlow::WaitUntil(
            Instant::now() + POLL_INTERVAL,
        ));
    }

    /// Drain and dispatch panel events (IPC messages, closures).
    fn poll_panel_events(&mut self) {
        let events = match self.panels {
            Some(ref registry) => registry.drain_events(),
            None => return,
        };

        for event in events {
            match event {
                PanelEvent::IpcMessage { pane_id, body } => {
                    self.handle_ipc_message(pane_id, &body);
                }
                PanelEvent::Closed { pane_id } => {
                    tracing::debug!(pane_id, "panel closed");
                }
            }
        }
    }
}
