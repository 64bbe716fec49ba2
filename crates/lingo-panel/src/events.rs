//! Panel event types.

/// Events emitted by a panel WebView, drained by the shell's poll loop.
#[derive(Debug, Clone)]
pub enum PanelEvent {
    /// An IPC message was received from JavaScript.
    IpcMessage { pane_id: u32, body: String },
    /// Panel was closed / destroyed.
    Closed { pane_id: u32 },
}
