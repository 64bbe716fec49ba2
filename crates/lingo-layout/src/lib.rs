//! Pane layout model and drag-resize control for Lingo.
//!
//! A layout is a single row of panes described by percent fractions that
//! always sum to 100. Dragging the divider between two panes moves size
//! from one to the other, clamped so neither pane collapses. All geometry
//! (pane rects, divider lines) is derived from the layout value; nothing
//! renders or mutates pixels here.

pub mod drag;
pub mod geometry;
pub mod panes;

pub use drag::{BeginDrag, DragController, DragSession};
pub use geometry::{divider_lines, find_hovered_divider, pane_rects, DividerLine};
pub use panes::{ClampBounds, LayoutError, PaneLayout};
