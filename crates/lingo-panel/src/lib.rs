//! WebView panes for the Lingo shell.
//!
//! Wraps the `wry` crate to provide:
//! - Managed WebView instances per pane
//! - Bidirectional IPC (Rust <-> JavaScript)
//! - Generated HTML for the editor panes and the control bar
//!
//! Panes never navigate; every page is an inline HTML string and all
//! behavior flows through the IPC bridge.

pub mod events;
pub mod html;
pub mod ipc;
pub mod manager;

pub use events::PanelEvent;
pub use ipc::{IpcMessage, IpcPayload};
pub use manager::{PanelConfig, PanelHandle, PanelManager, PanelRegistry};
