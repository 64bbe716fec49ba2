use std::collections::HashMap;

use tracing::debug;
use wry::raw_window_handle;

use crate::events::PanelEvent;

use super::handle::PanelHandle;
use super::types::PanelConfig;
use super::PanelManager;

/// A registry that maps pane IDs to panel handles — a higher-level
/// convenience over `PanelManager` for managing the full lifecycle.
pub struct PanelRegistry {
    manager: PanelManager,
    handles: HashMap<u32, PanelHandle>,
}

impl PanelRegistry {
    pub fn new(manager: PanelManager) -> Self {
        Self {
            manager,
            handles: HashMap::new(),
        }
    }

    /// Create a panel for a pane and register it.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        pane_id: u32,
        window: &W,
        bounds: wry::Rect,
        config: PanelConfig,
    ) -> Result<(), wry::Error> {
        let handle = self.manager.create(pane_id, window, bounds, config)?;
        self.handles.insert(pane_id, handle);
        Ok(())
    }

    /// Get a handle to a panel by pane ID.
    pub fn get(&self, pane_id: u32) -> Option<&PanelHandle> {
        self.handles.get(&pane_id)
    }

    /// Get a mutable handle to a panel by pane ID.
    pub fn get_mut(&mut self, pane_id: u32) -> Option<&mut PanelHandle> {
        self.handles.get_mut(&pane_id)
    }

    /// Destroy a panel by pane ID.
    pub fn destroy(&mut self, pane_id: u32) -> bool {
        if self.handles.remove(&pane_id).is_some() {
            debug!(pane_id, "panel destroyed");
            if let Ok(mut evts) = self.manager.events.lock() {
                evts.push(PanelEvent::Closed { pane_id });
            }
            true
        } else {
            false
        }
    }

    /// Get all active pane IDs with panels.
    pub fn active_panes(&self) -> Vec<u32> {
        self.handles.keys().copied().collect()
    }

    /// Drain all pending events from all panels.
    pub fn drain_events(&self) -> Vec<PanelEvent> {
        self.manager.drain_events()
    }

    /// Destroy all active panels. Used during graceful shutdown.
    pub fn destroy_all(&mut self) {
        let pane_ids = self.active_panes();
        for pane_id in pane_ids {
            self.destroy(pane_id);
        }
    }

    /// How many panels are active.
    pub fn count(&self) -> usize {
        self.handles.len()
    }
}
