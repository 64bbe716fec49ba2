//! Window creation and panel setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use lingo_layout::pane_rects;
use lingo_panel::{html, PanelConfig, PanelManager, PanelRegistry};

use super::bounds::layout_rect_to_wry;
use super::core::LingoApp;
use super::types::{CONTROLS_PANE, SOURCE_PANE, TARGET_PANE};

impl LingoApp {
    /// Create the window and the panel registry.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(&self.config.window.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        self.panels = Some(PanelRegistry::new(PanelManager::new()));
        self.window = Some(window);
        tracing::info!("Window created and panel registry initialized");
        true
    }

    /// Create the three panels: source editor, target editor, control bar.
    pub(super) fn setup_panes(&mut self) {
        let window = match &self.window {
            Some(w) => Arc::clone(w),
            None => {
                tracing::warn!("Cannot create panels: no window");
                return;
            }
        };

        let rects = pane_rects(&self.layout, self.editor_area(), self.config.layout.gap);
        let bar_rect = self.control_bar_rect();

        let registry = match &mut self.panels {
            Some(r) => r,
            None => {
                tracing::warn!("Cannot create panels: registry not initialized");
                return;
            }
        };

        let pages = [
            (
                SOURCE_PANE,
                rects[0],
                html::editor_page("Python Code", "Write Python Code Here...", false),
            ),
            (
                TARGET_PANE,
                rects[1],
                html::editor_page("JavaScript Code", "", true),
            ),
            (CONTROLS_PANE, bar_rect, html::control_bar_page()),
        ];

        for (pane_id, rect, page) in pages {
            let config = PanelConfig::with_html(page);
            if let Err(e) =
                registry.create(pane_id, window.as_ref(), layout_rect_to_wry(&rect), config)
            {
                tracing::error!(pane_id, error = %e, "Failed to create panel");
            } else {
                tracing::info!(pane_id, "Panel created");
            }
        }
    }
}
