//! Document model: placed components and the in-memory placement store.
//!
//! This module defines the core data types that describe what is on the page
//! (`PlacedComponent`, `ComponentKind`) and the runtime store that owns all
//! live placements (`PageStore`).
//!
//! Data flows into this layer from the input engine (drop, move, and resize
//! mutations). The renderer reads from `PageStore` via `components`, whose
//! insertion order doubles as draw order.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::geom::{Delta, Point, Size};

/// Unique identifier for a placed component.
pub type ComponentId = Uuid;

/// The kind of a placed component.
///
/// A closed set of the nine palette blocks. Unrecognized wire tags
/// deserialize to [`ComponentKind::Unknown`] rather than failing, and
/// `Unknown` renders as empty content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Large sample heading.
    Heading,
    /// Lorem-ipsum body paragraph.
    Paragraph,
    /// Remote sample image.
    Image,
    /// Call-to-action button.
    Button,
    /// Two-cell column layout.
    Columns,
    /// Card with a title and body text.
    Card,
    /// Inline hyperlink.
    Link,
    /// Three-item bulleted list.
    List,
    /// Bordered container box.
    Container,
    /// Catch-all for tags this build does not know about.
    Unknown,
}

impl ComponentKind {
    /// Resolve a wire tag to a kind. Anything outside the nine known tags
    /// resolves to [`ComponentKind::Unknown`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "heading" => Self::Heading,
            "paragraph" => Self::Paragraph,
            "image" => Self::Image,
            "button" => Self::Button,
            "columns" => Self::Columns,
            "card" => Self::Card,
            "link" => Self::Link,
            "list" => Self::List,
            "container" => Self::Container,
            _ => Self::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for ComponentKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

/// A component instance placed on the canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedComponent {
    /// Unique identifier for this placement.
    pub id: ComponentId,
    /// Which palette block this placement renders.
    pub kind: ComponentKind,
    /// Top-left corner in CSS pixels. Free-form; may be negative or off-canvas.
    pub position: Point,
    /// Width and height in CSS pixels.
    pub size: Size,
}

/// In-memory store of placed components.
///
/// Placements are kept in insertion order, which is also z-order: later
/// entries paint above earlier ones. Ids are unique within the store.
pub struct PageStore {
    components: Vec<PlacedComponent>,
}

impl PageStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { components: Vec::new() }
    }

    /// Append a new placement of `kind` at `position` with the default size,
    /// returning its freshly generated id. Always succeeds.
    pub fn add_component(&mut self, kind: ComponentKind, position: Point) -> ComponentId {
        let id = Uuid::new_v4();
        self.components.push(PlacedComponent {
            id,
            kind,
            position,
            size: Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
        });
        id
    }

    /// Displace a placement by `delta`. Returns false (and changes nothing)
    /// if no placement has this id.
    pub fn move_component(&mut self, id: &ComponentId, delta: Delta) -> bool {
        let Some(component) = self.components.iter_mut().find(|c| c.id == *id) else {
            return false;
        };
        component.position = component.position.offset(delta);
        true
    }

    /// Replace a placement's size. Returns false (and changes nothing) if no
    /// placement has this id. The caller is responsible for clamping to the
    /// interactive minimums.
    pub fn resize_component(&mut self, id: &ComponentId, size: Size) -> bool {
        let Some(component) = self.components.iter_mut().find(|c| c.id == *id) else {
            return false;
        };
        component.size = size;
        true
    }

    /// Return a reference to a placement by id.
    #[must_use]
    pub fn get(&self, id: &ComponentId) -> Option<&PlacedComponent> {
        self.components.iter().find(|c| c.id == *id)
    }

    /// All placements in insertion order (bottom of the z-stack first).
    #[must_use]
    pub fn components(&self) -> &[PlacedComponent] {
        &self.components
    }

    /// Number of placements currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if the store contains no placements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl Default for PageStore {
    fn default() -> Self {
        Self::new()
    }
}
