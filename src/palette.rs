//! The component palette: the nine blocks offered as drag sources.
//!
//! The palette itself is stateless. Each entry pairs a [`ComponentKind`]
//! with the label the host shows in the sidebar, and can mint the unplaced
//! [`DragPayload`] to attach to its drag source.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use crate::doc::ComponentKind;
use crate::input::DragPayload;

/// One entry in the component palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteItem {
    /// The block this entry creates when dropped.
    pub kind: ComponentKind,
    /// Sidebar label.
    pub label: &'static str,
}

impl PaletteItem {
    /// The payload to attach to this entry's drag source.
    #[must_use]
    pub fn payload(&self) -> DragPayload {
        DragPayload::palette(self.kind)
    }
}

/// All palette entries, in sidebar order.
pub const PALETTE: [PaletteItem; 9] = [
    PaletteItem { kind: ComponentKind::Heading, label: "Heading" },
    PaletteItem { kind: ComponentKind::Paragraph, label: "Paragraph" },
    PaletteItem { kind: ComponentKind::Image, label: "Image" },
    PaletteItem { kind: ComponentKind::Button, label: "Button" },
    PaletteItem { kind: ComponentKind::Columns, label: "Two Columns" },
    PaletteItem { kind: ComponentKind::Card, label: "Card" },
    PaletteItem { kind: ComponentKind::Link, label: "Link" },
    PaletteItem { kind: ComponentKind::List, label: "List" },
    PaletteItem { kind: ComponentKind::Container, label: "Container" },
];
