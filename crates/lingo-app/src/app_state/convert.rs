//! Conversion wiring: runtime management, request dispatch, and completion
//! polling.
//!
//! Each trigger that passes validation spawns one request task on the tokio
//! runtime; the task reports back over an mpsc channel with the generation
//! it was dispatched under. The poll loop feeds completions through the
//! controller, which discards anything stale.

use std::sync::Arc;

use lingo_convert::{Converter, ConverterConfig, HttpConverter, TriggerOutcome};

use super::core::LingoApp;
use super::types::{ConvertEvent, CONTROLS_PANE, TARGET_PANE};

impl LingoApp {
    /// Lazily initialize the tokio runtime, the HTTP client, and the
    /// completion channel.
    pub(super) fn ensure_convert_runtime(&mut self) {
        if self.convert_tx.is_some() {
            return;
        }

        let (event_tx, event_rx) = std::sync::mpsc::channel::<ConvertEvent>();
        self.convert_tx = Some(event_tx);
        self.convert_rx = Some(event_rx);

        if self.tokio_runtime.is_none() {
            match tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .enable_all()
                .build()
            {
                Ok(rt) => self.tokio_runtime = Some(rt),
                Err(e) => {
                    tracing::error!("Failed to create tokio runtime: {e}");
                    return;
                }
            }
        }

        if self.converter.is_none() {
            let endpoint = self
                .endpoint_override
                .clone()
                .unwrap_or_else(|| self.config.converter.endpoint.clone());
            let config = ConverterConfig::new(endpoint)
                .with_timeout(std::time::Duration::from_secs(
                    self.config.converter.timeout_secs,
                ))
                .with_connect_timeout(std::time::Duration::from_secs(
                    self.config.converter.connect_timeout_secs,
                ));
            self.converter = Some(Arc::new(HttpConverter::new(config)));
        }
    }

    /// Activate the convert trigger with the current source text.
    pub(super) fn start_conversion(&mut self) {
        self.ensure_convert_runtime();

        // A trigger that passes validation must issue exactly one request,
        // so refuse before triggering if there is nothing to dispatch on.
        let (converter, tx, rt) = match (
            self.converter.as_ref(),
            self.convert_tx.as_ref(),
            self.tokio_runtime.as_ref(),
        ) {
            (Some(c), Some(t), Some(r)) => (Arc::clone(c), t.clone(), r),
            _ => {
                tracing::error!("conversion runtime unavailable");
                return;
            }
        };

        match self.conversion.trigger(&self.source_text) {
            TriggerOutcome::Rejected { message } => {
                tracing::debug!("conversion rejected: {message}");
                self.push_error(Some(&message));
            }
            TriggerOutcome::Dispatch { generation, code } => {
                self.push_error(None);
                self.push_busy(true);

                rt.spawn(async move {
                    let result = converter.convert(&code).await;
                    let _ = tx.send(ConvertEvent { generation, result });
                });
                tracing::info!(generation, "conversion dispatched");
            }
        }
    }

    /// Poll for conversion completions from spawned tasks (non-blocking).
    pub(super) fn poll_convert(&mut self) {
        let events: Vec<ConvertEvent> = match self.convert_rx {
            Some(ref rx) => rx.try_iter().collect(),
            None => return,
        };

        for event in events {
            let generation = event.generation;
            match self.conversion.resolve(generation, event.result) {
                Some(resolution) => {
                    tracing::info!(
                        generation,
                        ok = resolution.error.is_none(),
                        "conversion resolved"
                    );
                    self.target_text = resolution.target_text;
                    self.push_target_text();
                    self.push_error(resolution.error.as_deref());
                    self.push_busy(self.conversion.is_busy());
                }
                None => {
                    tracing::debug!(generation, "stale conversion completion discarded");
                }
            }
        }
    }

    /// Push the current target text into the target pane.
    pub(super) fn push_target_text(&self) {
        self.send_panel_ipc(
            TARGET_PANE,
            "set_text",
            &serde_json::json!({ "text": self.target_text }),
        );
    }

    /// Show or clear the error banner on the control bar.
    pub(super) fn push_error(&self, message: Option<&str>) {
        self.send_panel_ipc(
            CONTROLS_PANE,
            "set_error",
            &serde_json::json!({ "message": message }),
        );
    }

    /// Enable or disable the convert trigger on the control bar.
    pub(super) fn push_busy(&self, busy: bool) {
        self.send_panel_ipc(
            CONTROLS_PANE,
            "set_busy",
            &serde_json::json!({ "busy": busy }),
        );
    }

    /// Send an IPC message to one panel.
    pub(super) fn send_panel_ipc(&self, pane_id: u32, kind: &str, payload: &serde_json::Value) {
        if let Some(ref registry) = self.panels {
            if let Some(handle) = registry.get(pane_id) {
                if let Err(e) = handle.send_ipc(kind, payload) {
                    tracing::warn!(pane_id, kind, error = %e, "Failed to send panel IPC");
                }
            }
        }
    }
}
