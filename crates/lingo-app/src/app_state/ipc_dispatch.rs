//! IPC message validation and dispatch from panels to Rust handlers.

use lingo_panel::IpcMessage;

use super::core::LingoApp;
use super::types::{CONTROLS_PANE, SOURCE_PANE, TARGET_PANE};

// =============================================================================
// IPC ALLOWLIST
// =============================================================================

/// Allowed IPC message kinds from JavaScript.
///
/// Any message with a `kind` not in this list is rejected and logged.
const ALLOWED_IPC_KINDS: &[&str] = &[
    "editor_ready",
    "source_changed",
    "convert_clicked",
    "ping",
];

/// Check whether an IPC message kind is in the allowlist.
pub fn is_ipc_kind_allowed(kind: &str) -> bool {
    ALLOWED_IPC_KINDS.contains(&kind)
}

// =============================================================================
// DISPATCH
// =============================================================================

impl LingoApp {
    /// Handle a single IPC message from a panel.
    pub(super) fn handle_ipc_message(&mut self, pane_id: u32, body: &str) {
        let msg = match IpcMessage::from_json(body) {
            Some(m) => m,
            None => {
                tracing::warn!(
                    pane_id,
                    body_len = body.len(),
                    "IPC message rejected: failed to parse"
                );
                return;
            }
        };

        if !is_ipc_kind_allowed(&msg.kind) {
            tracing::warn!(
                pane_id,
                kind = %msg.kind,
                "IPC message rejected: unknown kind"
            );
            return;
        }

        tracing::debug!(pane_id, kind = %msg.kind, "IPC message dispatched");

        match msg.kind.as_str() {
            "editor_ready" => {
                self.push_initial_state(pane_id);
            }
            "source_changed" => {
                // Only the source pane may mutate SourceText
                if pane_id != SOURCE_PANE {
                    tracing::warn!(pane_id, "source_changed from non-source pane ignored");
                    return;
                }
                match msg.payload.as_text() {
                    Some(text) => self.source_text = text.to_string(),
                    None => tracing::warn!(pane_id, "source_changed without text payload"),
                }
            }
            "convert_clicked" => {
                self.start_conversion();
            }
            "ping" => {
                // Respond with pong — used for IPC round-trip testing
                self.send_panel_ipc(pane_id, "pong", &serde_json::json!("pong"));
            }
            _ => {
                // Shouldn't happen — allowlist checked above
                tracing::warn!(pane_id, kind = %msg.kind, "Unhandled IPC kind");
            }
        }
    }

    /// Push the state a freshly loaded panel needs to display.
    fn push_initial_state(&self, pane_id: u32) {
        match pane_id {
            SOURCE_PANE => {
                self.send_panel_ipc(
                    pane_id,
                    "set_text",
                    &serde_json::json!({ "text": self.source_text }),
                );
            }
            TARGET_PANE => {
                self.push_target_text();
            }
            CONTROLS_PANE => {
                self.push_busy(self.conversion.is_busy());
                self.push_error(self.conversion.error());
            }
            _ => {
                tracing::warn!(pane_id, "editor_ready from unknown pane");
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipc_kind_allowed_valid() {
        assert!(is_ipc_kind_allowed("editor_ready"));
        assert!(is_ipc_kind_allowed("source_changed"));
        assert!(is_ipc_kind_allowed("convert_clicked"));
        assert!(is_ipc_kind_allowed("ping"));
    }

    #[test]
    fn ipc_kind_rejected_unknown() {
        assert!(!is_ipc_kind_allowed("eval"));
        assert!(!is_ipc_kind_allowed("exec"));
        assert!(!is_ipc_kind_allowed(""));
        assert!(!is_ipc_kind_allowed("source_changed_extra"));
        assert!(!is_ipc_kind_allowed("SOURCE_CHANGED")); // case-sensitive
    }

    #[test]
    fn ipc_kind_rejected_injection_attempts() {
        assert!(!is_ipc_kind_allowed("ping\0"));
        assert!(!is_ipc_kind_allowed("ping; rm -rf /"));
        assert!(!is_ipc_kind_allowed("<script>alert(1)</script>"));
    }

    #[test]
    fn source_changed_updates_source_text() {
        let mut app = LingoApp::new(lingo_config::LingoConfig::default(), None);
        app.handle_ipc_message(
            super::super::types::SOURCE_PANE,
            r#"{"kind":"source_changed","payload":"x = 1"}"#,
        );
        assert_eq!(app.source_text, "x = 1");
    }

    #[test]
    fn source_changed_from_other_panes_is_ignored() {
        let mut app = LingoApp::new(lingo_config::LingoConfig::default(), None);
        app.handle_ipc_message(
            super::super::types::TARGET_PANE,
            r#"{"kind":"source_changed","payload":"sneaky"}"#,
        );
        assert_eq!(app.source_text, "");
    }

    #[test]
    fn malformed_ipc_is_ignored() {
        let mut app = LingoApp::new(lingo_config::LingoConfig::default(), None);
        app.handle_ipc_message(super::super::types::SOURCE_PANE, "not json at all");
        assert_eq!(app.source_text, "");
    }
}
