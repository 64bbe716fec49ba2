//! Pane geometry: layout-derived rects and wry coordinate conversion.
//!
//! Panel bounds are always re-derived from the PaneLayout value and the
//! current window size — the webviews are never resized imperatively from
//! inside the drag handler.

use lingo_common::Rect;
use lingo_layout::pane_rects;

use super::core::LingoApp;
use super::types::{CONTROLS_PANE, SOURCE_PANE, TARGET_PANE};

/// Convert a layout `Rect` (f64 logical coords) to a wry `Rect`.
pub(super) fn layout_rect_to_wry(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(rect.width, rect.height)),
    }
}

impl LingoApp {
    /// Compute the current viewport rect from the window.
    pub(super) fn viewport(&self) -> Rect {
        match &self.window {
            Some(w) => {
                let size = w.inner_size();
                Rect {
                    x: 0.0,
                    y: 0.0,
                    width: size.width as f64,
                    height: size.height as f64,
                }
            }
            None => Rect {
                x: 0.0,
                y: 0.0,
                width: 0.0,
                height: 0.0,
            },
        }
    }

    /// The region holding the editor panes: everything above the control bar.
    pub(super) fn editor_area(&self) -> Rect {
        let viewport = self.viewport();
        let bar = self.config.layout.control_bar_height.min(viewport.height);
        Rect {
            x: viewport.x,
            y: viewport.y,
            width: viewport.width,
            height: viewport.height - bar,
        }
    }

    /// The control bar strip along the bottom edge.
    pub(super) fn control_bar_rect(&self) -> Rect {
        let viewport = self.viewport();
        let bar = self.config.layout.control_bar_height.min(viewport.height);
        Rect {
            x: viewport.x,
            y: viewport.y + viewport.height - bar,
            width: viewport.width,
            height: bar,
        }
    }

    /// Push layout-derived bounds into every panel webview.
    pub(super) fn sync_panel_bounds(&self) {
        let registry = match &self.panels {
            Some(r) => r,
            None => return,
        };

        let rects = pane_rects(&self.layout, self.editor_area(), self.config.layout.gap);
        let targets = [(SOURCE_PANE, 0usize), (TARGET_PANE, 1usize)];
        for (pane_id, index) in targets {
            if let (Some(handle), Some(rect)) = (registry.get(pane_id), rects.get(index)) {
                if let Err(e) = handle.set_bounds(layout_rect_to_wry(rect)) {
                    tracing::warn!(pane_id, error = %e, "Failed to set panel bounds");
                }
            }
        }

        if let Some(handle) = registry.get(CONTROLS_PANE) {
            let rect = self.control_bar_rect();
            if let Err(e) = handle.set_bounds(layout_rect_to_wry(&rect)) {
                tracing::warn!(pane_id = CONTROLS_PANE, error = %e, "Failed to set panel bounds");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_rect_converts_to_wry_rect() {
        let rect = Rect {
            x: 100.0,
            y: 50.0,
            width: 800.0,
            height: 600.0,
        };
        let wry_rect = layout_rect_to_wry(&rect);

        match wry_rect.position {
            wry::dpi::Position::Logical(pos) => {
                assert!((pos.x - 100.0).abs() < f64::EPSILON);
                assert!((pos.y - 50.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical position"),
        }

        match wry_rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.width - 800.0).abs() < f64::EPSILON);
                assert!((size.height - 600.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }

    #[test]
    fn zero_rect_converts_correctly() {
        let rect = Rect {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        };
        let wry_rect = layout_rect_to_wry(&rect);

        match wry_rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!(size.width.abs() < f64::EPSILON);
                assert!(size.height.abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }

    #[test]
    fn windowless_app_has_empty_viewport() {
        let app = LingoApp::new(lingo_config::LingoConfig::default(), None);
        let viewport = app.viewport();
        assert_eq!(viewport.width, 0.0);
        assert_eq!(viewport.height, 0.0);
        // The control bar never exceeds the viewport.
        assert_eq!(app.control_bar_rect().height, 0.0);
        assert_eq!(app.editor_area().height, 0.0);
    }
}
