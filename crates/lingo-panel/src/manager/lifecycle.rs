use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::events::PanelEvent;
use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::PanelHandle;
use super::types::PanelConfig;
use super::PanelManager;

impl PanelManager {
    /// Create a new panel WebView as a child of the given window.
    ///
    /// The `window` must implement `raw_window_handle::HasWindowHandle`.
    /// The WebView is positioned at `bounds` within the parent window.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        pane_id: u32,
        window: &W,
        bounds: wry::Rect,
        config: PanelConfig,
    ) -> Result<PanelHandle, wry::Error> {
        let events = Arc::clone(&self.events);
        let pid = pane_id;

        let builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_focused(false)
            .with_initialization_script(IPC_INIT_SCRIPT)
            .with_ipc_handler(move |request| {
                let body = request.body().to_string();

                // Validate that the IPC body is valid JSON before forwarding
                if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                    warn!(
                        pane_id = pid,
                        body_len = body.len(),
                        "IPC message rejected: invalid JSON"
                    );
                    return;
                }

                debug!(pane_id = pid, body_len = body.len(), "IPC message from JS");
                if let Ok(mut evts) = events.lock() {
                    evts.push(PanelEvent::IpcMessage { pane_id: pid, body });
                }
            })
            .with_html(&config.html);

        let webview = builder.build_as_child(window)?;

        debug!(pane_id, "panel WebView created");

        Ok(PanelHandle { webview, pane_id })
    }
}
