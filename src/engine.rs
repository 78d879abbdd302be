use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use crate::consts::{MIN_RESIZE_HEIGHT, MIN_RESIZE_WIDTH};
use crate::doc::{ComponentId, PageStore, PlacedComponent};
use crate::geom::{Delta, Point, Size};
use crate::input::{DragPayload, DropTarget, ResizeState, UiState};
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone)]
pub enum Action {
    None,
    ComponentAdded(PlacedComponent),
    ComponentMoved { id: ComponentId, position: Point },
    ComponentResized { id: ComponentId, size: Size },
    SelectionChanged(Option<ComponentId>),
}

/// Core engine state — all logic that doesn't depend on the DOM.
///
/// Separated from `Engine` so it can be tested without WASM/browser
/// dependencies.
#[derive(Default)]
pub struct EngineCore {
    pub doc: PageStore,
    pub ui: UiState,
    pub resize: ResizeState,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Drag/drop transaction ---

    /// Handle the end of a drag reported by the host's drag library.
    ///
    /// A palette payload dropped over the canvas creates a new placement at
    /// the raw pointer delta from drag start. A placed payload applies the
    /// delta as a relative move. A drop with no target is ignored entirely.
    pub fn on_drag_end(&mut self, payload: &DragPayload, over: Option<DropTarget>, delta: Delta) -> Action {
        let Some(DropTarget::Canvas) = over else {
            return Action::None;
        };

        if payload.placed {
            let Some(id) = payload.id else {
                log::warn!("placed drag payload carried no id; drop ignored");
                return Action::None;
            };
            if !self.doc.move_component(&id, delta) {
                return Action::None;
            }
            match self.doc.get(&id) {
                Some(component) => Action::ComponentMoved { id, position: component.position },
                None => Action::None,
            }
        } else {
            let id = self.doc.add_component(payload.kind, Point::new(delta.dx, delta.dy));
            match self.doc.get(&id) {
                Some(component) => Action::ComponentAdded(component.clone()),
                None => Action::None,
            }
        }
    }

    // --- Selection ---

    /// Toggle selection: selecting the already-selected id clears it.
    pub fn select_component(&mut self, id: ComponentId) -> Action {
        if self.ui.selected_id == Some(id) {
            self.ui.selected_id = None;
        } else {
            self.ui.selected_id = Some(id);
        }
        Action::SelectionChanged(self.ui.selected_id)
    }

    // --- Resize gesture ---

    /// Enter the resize gesture for an existing placement, capturing the
    /// pointer position and the placement's size at gesture start.
    pub fn on_resize_start(&mut self, id: ComponentId, pointer: Point) -> Action {
        let Some(component) = self.doc.get(&id) else {
            return Action::None;
        };
        self.resize = ResizeState::Resizing { id, start_pointer: pointer, start_size: component.size };
        Action::None
    }

    /// Feed a pointer sample into the active resize gesture.
    ///
    /// Computes `start size + pointer travel` per axis, clamps to the
    /// interactive minimums, writes it through the store, and reports the
    /// new size on every sample. Ignored while `Idle`.
    pub fn on_pointer_move(&mut self, pointer: Point) -> Action {
        let ResizeState::Resizing { id, start_pointer, start_size } = self.resize else {
            return Action::None;
        };
        let travel = Delta::between(start_pointer, pointer);
        let size = Size::new(
            (start_size.width + travel.dx).max(MIN_RESIZE_WIDTH),
            (start_size.height + travel.dy).max(MIN_RESIZE_HEIGHT),
        );
        if self.doc.resize_component(&id, size) {
            Action::ComponentResized { id, size }
        } else {
            Action::None
        }
    }

    /// Leave the resize gesture, regardless of pointer position.
    pub fn on_pointer_up(&mut self) -> Action {
        self.resize = ResizeState::Idle;
        Action::None
    }

    // --- Save stub ---

    /// Log the current layout snapshot to the diagnostic stream.
    ///
    /// Placeholder: no collaborator consumes the snapshot.
    pub fn save(&self) {
        match serde_json::to_string(self.doc.components()) {
            Ok(snapshot) => log::info!("saving layout: {snapshot}"),
            Err(err) => log::error!("layout snapshot failed to serialize: {err}"),
        }
    }

    // --- Queries ---

    /// The currently selected placement, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ComponentId> {
        self.ui.selected_id
    }

    /// Look up a placement by id.
    #[must_use]
    pub fn component(&self, id: &ComponentId) -> Option<&PlacedComponent> {
        self.doc.get(id)
    }

    /// The placement currently being resized, if any.
    #[must_use]
    pub fn resizing_id(&self) -> Option<ComponentId> {
        match self.resize {
            ResizeState::Resizing { id, .. } => Some(id),
            ResizeState::Idle => None,
        }
    }

    /// Whether a resize gesture is in progress.
    #[must_use]
    pub fn is_resizing(&self) -> bool {
        self.resize.is_resizing()
    }
}

/// The full editor engine. Wraps `EngineCore` and owns the host canvas element.
pub struct Engine {
    root: HtmlElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas host element.
    #[must_use]
    pub fn new(root: HtmlElement) -> Self {
        Self { root, core: EngineCore::new() }
    }

    // --- Delegated input events ---

    pub fn on_drag_end(&mut self, payload: &DragPayload, over: Option<DropTarget>, delta: Delta) -> Action {
        self.core.on_drag_end(payload, over, delta)
    }

    pub fn select_component(&mut self, id: ComponentId) -> Action {
        self.core.select_component(id)
    }

    pub fn on_resize_start(&mut self, id: ComponentId, pointer: Point) -> Action {
        self.core.on_resize_start(id, pointer)
    }

    pub fn on_pointer_move(&mut self, pointer: Point) -> Action {
        self.core.on_pointer_move(pointer)
    }

    pub fn on_pointer_up(&mut self) -> Action {
        self.core.on_pointer_up()
    }

    pub fn save(&self) {
        self.core.save();
    }

    // --- Render ---

    /// Draw the current state into the host element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a DOM call fails (e.g. the host element is detached).
    pub fn render(&self) -> Result<(), JsValue> {
        render::draw(&self.root, &self.core.doc, &self.core.ui, self.core.resizing_id())
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn selection(&self) -> Option<ComponentId> {
        self.core.selection()
    }

    #[must_use]
    pub fn component(&self, id: &ComponentId) -> Option<&PlacedComponent> {
        self.core.component(id)
    }
}
