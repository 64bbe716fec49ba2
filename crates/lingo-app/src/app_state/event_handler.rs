//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::{CursorIcon, WindowId};

use lingo_layout::{divider_lines, find_hovered_divider, BeginDrag};

use super::core::LingoApp;

impl ApplicationHandler for LingoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.setup_panes();
        self.sync_panel_bounds();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_panel_bounds();
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.handle_cursor_moved(position.x, position.y);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.handle_mouse_input(state, button);
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.poll_and_schedule(event_loop);
    }
}

impl LingoApp {
    /// Ctrl+Enter triggers a conversion from the keyboard; everything else
    /// belongs to the focused webview.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        let KeyEvent {
            logical_key, state, ..
        } = event;
        if state != ElementState::Pressed {
            return;
        }

        if matches!(logical_key, Key::Named(NamedKey::Enter)) && self.modifiers.control_key() {
            self.start_conversion();
        }
    }

    /// Handle cursor movement: feed active drag sessions and update the
    /// cursor icon near the divider.
    fn handle_cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor_pos = (x, y);

        // If actively dragging, route the position into the session
        if self.any_drag_active() {
            let mut changed = false;
            for drag in &mut self.dividers {
                if drag.is_active() {
                    changed |= drag.update_drag(&mut self.layout, x);
                }
            }
            if changed {
                self.sync_panel_bounds();
            }
            return;
        }

        // Not dragging — update cursor icon based on proximity to the divider
        let area = self.editor_area();
        let lines = divider_lines(&self.layout, area, self.config.layout.gap);
        let hovered =
            find_hovered_divider(&lines, x, y, self.config.layout.divider_hit_width);

        let icon = if hovered.is_some() {
            CursorIcon::ColResize
        } else {
            CursorIcon::Default
        };
        if let Some(ref w) = self.window {
            w.set_cursor(icon);
        }
    }

    /// Handle mouse button press/release: start or stop divider drags.
    fn handle_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }

        match state {
            ElementState::Pressed => {
                let (x, y) = self.cursor_pos;
                let area = self.editor_area();
                let lines = divider_lines(&self.layout, area, self.config.layout.gap);

                if let Some(line) =
                    find_hovered_divider(&lines, x, y, self.config.layout.divider_hit_width)
                {
                    let index = line.index;
                    match self.dividers[index].begin_drag(x, area.x, area.width) {
                        BeginDrag::Started => {
                            tracing::debug!(divider = index, "drag started");
                        }
                        BeginDrag::AlreadyActive => {
                            tracing::debug!(divider = index, "drag already active, ignoring");
                        }
                        BeginDrag::EmptyContainer => {
                            tracing::warn!(divider = index, "drag refused: empty container");
                        }
                    }
                }
            }
            ElementState::Released => {
                if self.any_drag_active() {
                    self.end_all_drags();
                    if let Some(ref w) = self.window {
                        w.set_cursor(CursorIcon::Default);
                    }
                }
            }
        }
    }
}
