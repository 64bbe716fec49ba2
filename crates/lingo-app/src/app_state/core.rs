//! LingoApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use lingo_config::LingoConfig;
use lingo_convert::{ConversionController, HttpConverter, INITIAL_TARGET_TEXT};
use lingo_layout::{ClampBounds, DragController, PaneLayout};
use lingo_panel::PanelRegistry;

use super::types::ConvertEvent;

/// Top-level application state.
///
/// The only owner of SourceText, TargetText, the pane layout, and the
/// conversion state; everything the panels display is pushed down from here.
pub struct LingoApp {
    pub(super) config: LingoConfig,
    pub(super) endpoint_override: Option<String>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // Panel webviews
    pub(super) panels: Option<PanelRegistry>,

    // Pane layout + divider drag (one controller per divider)
    pub(super) layout: PaneLayout,
    pub(super) dividers: Vec<DragController>,
    pub(super) cursor_pos: (f64, f64),

    // Editor text
    pub(super) source_text: String,
    pub(super) target_text: String,

    // Conversion lifecycle
    pub(super) conversion: ConversionController,
    pub(super) converter: Option<Arc<HttpConverter>>,
    pub(super) convert_tx: Option<std::sync::mpsc::Sender<ConvertEvent>>,
    pub(super) convert_rx: Option<std::sync::mpsc::Receiver<ConvertEvent>>,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    // Modifier tracking (winit sends these separately)
    pub(super) modifiers: winit::keyboard::ModifiersState,

    pub(super) last_poll: Instant,
}

impl LingoApp {
    pub fn new(config: LingoConfig, endpoint_override: Option<String>) -> Self {
        let bounds = ClampBounds {
            min: config.layout.min_fraction,
            max: config.layout.max_fraction,
        };
        let layout = PaneLayout::even_split(2, bounds).unwrap_or_else(|e| {
            tracing::warn!("layout bounds rejected ({e}), using defaults");
            PaneLayout::even_split(2, ClampBounds::default()).expect("default layout")
        });
        let dividers = (0..layout.divider_count()).map(DragController::new).collect();

        Self {
            config,
            endpoint_override,
            window: None,
            panels: None,
            layout,
            dividers,
            cursor_pos: (0.0, 0.0),
            source_text: String::new(),
            target_text: INITIAL_TARGET_TEXT.to_string(),
            conversion: ConversionController::new(),
            converter: None,
            convert_tx: None,
            convert_rx: None,
            tokio_runtime: None,
            modifiers: winit::keyboard::ModifiersState::empty(),
            last_poll: Instant::now(),
        }
    }

    /// End every active drag session. Called on pointer-up and on teardown
    /// so no session outlives the interaction that started it.
    pub(super) fn end_all_drags(&mut self) {
        for drag in &mut self.dividers {
            drag.end_drag();
        }
    }

    /// Whether any divider drag is in progress.
    pub(super) fn any_drag_active(&self) -> bool {
        self.dividers.iter().any(|d| d.is_active())
    }
}
