//! Static placeholder content for each component kind.
//!
//! [`Content::for_kind`] is a pure total function from a [`ComponentKind`]
//! to the fixed markup-shaped data the renderer paints for it. It has no
//! state and no failure mode beyond the explicit [`Content::Empty`], which
//! is what an [`ComponentKind::Unknown`] tag maps to.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::doc::ComponentKind;

/// URL of the sample image placed for [`ComponentKind::Image`].
pub const SAMPLE_IMAGE_URL: &str = "https://images.unsplash.com/photo-1682687220742-aba19b51f319";

/// Placeholder content for one placed component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content {
    /// Large heading text.
    Heading { text: &'static str },
    /// Body paragraph text.
    Paragraph { text: &'static str },
    /// Remote image with alt text.
    Image { src: &'static str, alt: &'static str },
    /// Button with a label.
    Button { label: &'static str },
    /// Two side-by-side cells.
    Columns { left: &'static str, right: &'static str },
    /// Card with a title and body.
    Card { title: &'static str, body: &'static str },
    /// Hyperlink with display text.
    Link { text: &'static str, href: &'static str },
    /// Bulleted list items.
    List { items: [&'static str; 3] },
    /// Bordered box with centered text.
    Container { text: &'static str },
    /// Nothing to paint.
    Empty,
}

impl Content {
    /// The placeholder content for `kind`.
    #[must_use]
    pub fn for_kind(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::Heading => Self::Heading { text: "Sample Heading" },
            ComponentKind::Paragraph => Self::Paragraph {
                text: "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
                       Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.",
            },
            ComponentKind::Image => Self::Image { src: SAMPLE_IMAGE_URL, alt: "Sample" },
            ComponentKind::Button => Self::Button { label: "Click Me" },
            ComponentKind::Columns => Self::Columns { left: "Column 1", right: "Column 2" },
            ComponentKind::Card => Self::Card { title: "Card Title", body: "Card content goes here" },
            ComponentKind::Link => Self::Link { text: "Sample Link", href: "#" },
            ComponentKind::List => Self::List { items: ["List Item 1", "List Item 2", "List Item 3"] },
            ComponentKind::Container => Self::Container { text: "Container Content" },
            ComponentKind::Unknown => Self::Empty,
        }
    }
}
