//! Input model: drag payloads, drop targets, selection, and the resize
//! gesture state machine.
//!
//! This module defines the types consumed by the input engine. `DragPayload`
//! is the data attached to a drag source by the host's drag-and-drop library
//! and handed back on drag end. `ResizeState` is the active resize gesture
//! tracked between handle press and pointer release, carrying all context
//! needed to compute a new size from each pointer sample.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::doc::{ComponentId, ComponentKind};
use crate::geom::{Point, Size};

/// A registered drop target.
///
/// The canvas is the only target today; the closed enum keeps the drop
/// protocol typed rather than stringly keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// The page canvas.
    Canvas,
}

/// Payload attached to a drag source and returned on drag end.
///
/// `placed` distinguishes a fresh palette item from a component already on
/// the canvas. The payload round-trips through the host drag library as
/// JSON, so it carries serde derives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragPayload {
    /// Which palette block is being dragged.
    pub kind: ComponentKind,
    /// True when the drag source is an existing placement on the canvas.
    pub placed: bool,
    /// The placement being moved, when `placed` is true.
    pub id: Option<ComponentId>,
}

impl DragPayload {
    /// Payload for dragging a fresh block out of the palette.
    #[must_use]
    pub fn palette(kind: ComponentKind) -> Self {
        Self { kind, placed: false, id: None }
    }

    /// Payload for dragging an existing placement across the canvas.
    #[must_use]
    pub fn placed(id: ComponentId, kind: ComponentKind) -> Self {
        Self { kind, placed: true, id: Some(id) }
    }
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// The id of the currently selected placement, if any.
    ///
    /// A weak reference: a stale id that no longer resolves in the store is
    /// ignored at render time and never cascades anything.
    pub selected_id: Option<ComponentId>,
}

/// Internal state for the resize gesture state machine.
///
/// The gesture is independent of the drag system used for moves. While
/// `Resizing`, the host forwards document-level pointer events to the
/// engine; while `Idle`, pointer samples are ignored, so leaving the state
/// is all the teardown there is.
#[derive(Debug, Clone, Copy)]
pub enum ResizeState {
    /// No resize in progress; pointer samples are ignored.
    Idle,
    /// A resize handle is held down.
    Resizing {
        /// Id of the placement being resized.
        id: ComponentId,
        /// Pointer position captured when the handle was pressed.
        start_pointer: Point,
        /// The placement's size captured when the handle was pressed.
        start_size: Size,
    },
}

impl ResizeState {
    /// Whether a resize gesture is in progress.
    #[must_use]
    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing { .. })
    }
}

impl Default for ResizeState {
    fn default() -> Self {
        Self::Idle
    }
}
