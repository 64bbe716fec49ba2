//! Drag-resize sessions for pane dividers.
//!
//! Each [`DragController`] owns exactly one divider's session. A session is
//! created on pointer-down, fed pointer positions while the button is held,
//! and cleared exactly once on pointer-up or forced teardown. The shell only
//! routes pointer-move events here while a session is active, so nothing
//! about a drag outlives it.

use crate::panes::PaneLayout;

/// Captured state for one active drag.
///
/// The container origin/extent are captured at pointer-down so the
/// pointer-to-percent mapping stays stable for the whole session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// The divider being dragged.
    pub divider: usize,
    /// Pointer position (along the layout axis) when the drag started.
    pub origin_pointer: f64,
    /// Container origin along the layout axis at drag start.
    pub container_origin: f64,
    /// Container extent along the layout axis at drag start.
    pub container_extent: f64,
}

/// Result of a `begin_drag` attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeginDrag {
    /// A new session was started.
    Started,
    /// A session is already active for this divider; the call was a no-op.
    AlreadyActive,
    /// The container has no extent to map pointer positions against.
    EmptyContainer,
}

/// Owns the drag session for a single divider.
#[derive(Debug)]
pub struct DragController {
    divider: usize,
    session: Option<DragSession>,
}

impl DragController {
    pub fn new(divider: usize) -> Self {
        Self {
            divider,
            session: None,
        }
    }

    pub fn divider(&self) -> usize {
        self.divider
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Start a drag session. No-op (reported, not stacked) if one is
    /// already active; refused if the container extent is not positive.
    /// Never touches the layout.
    pub fn begin_drag(
        &mut self,
        pointer: f64,
        container_origin: f64,
        container_extent: f64,
    ) -> BeginDrag {
        if self.session.is_some() {
            return BeginDrag::AlreadyActive;
        }
        if container_extent <= 0.0 {
            return BeginDrag::EmptyContainer;
        }
        self.session = Some(DragSession {
            divider: self.divider,
            origin_pointer: pointer,
            container_origin,
            container_extent,
        });
        BeginDrag::Started
    }

    /// Feed a pointer position into the active session. Returns whether the
    /// layout changed; with no active session this is a no-op.
    pub fn update_drag(&mut self, layout: &mut PaneLayout, pointer: f64) -> bool {
        let session = match self.session {
            Some(s) => s,
            None => return false,
        };
        let pct = (pointer - session.container_origin) / session.container_extent * 100.0;
        layout.apply_drag(self.divider, pct)
    }

    /// Clear the session unconditionally. Safe to call with none active.
    pub fn end_drag(&mut self) {
        self.session = None;
    }
}
