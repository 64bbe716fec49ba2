//! Internal types and constants for the app state module.

use std::time::Duration;

use lingo_convert::{ConvertError, ConvertedCode};

/// Completion event from a spawned conversion request. The generation is
/// the one the request was dispatched with; the controller compares it
/// against the current generation before applying anything.
pub(super) struct ConvertEvent {
    pub generation: u64,
    pub result: Result<ConvertedCode, ConvertError>,
}

/// How often to poll for events (approx 120 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);

/// Fixed pane IDs for the three panels.
pub(super) const SOURCE_PANE: u32 = 1;
pub(super) const TARGET_PANE: u32 = 2;
pub(super) const CONTROLS_PANE: u32 = 3;
