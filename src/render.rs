//! Rendering: builds the DOM for the placed components.
//!
//! This module is the only place that touches [`web_sys`]. It receives
//! read-only views of document and UI state and produces elements — it does
//! not mutate any application state. Placements are appended in store order,
//! so document order is z-order and later drops paint on top.
//!
//! All fallible DOM calls propagate errors via `Result<_, JsValue>`. The
//! top-level caller ([`crate::engine::Engine::render`]) handles the result.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement};

use crate::content::Content;
use crate::doc::{ComponentId, PageStore, PlacedComponent};
use crate::input::UiState;

/// Draw the full page: placements, selection ring, and resize handle.
///
/// `resizing_id` is the placement with an active resize gesture; its CSS
/// transition is dropped so the box tracks the pointer without animating.
///
/// # Errors
///
/// Returns `Err` if a DOM call fails (e.g. the host element is detached).
pub fn draw(
    root: &HtmlElement,
    doc: &PageStore,
    ui: &UiState,
    resizing_id: Option<ComponentId>,
) -> Result<(), JsValue> {
    let document = root
        .owner_document()
        .ok_or_else(|| JsValue::from_str("canvas host element is not attached to a document"))?;

    root.set_inner_html("");

    if doc.is_empty() {
        let hint = document.create_element("p")?;
        hint.set_class_name("canvas-hint");
        hint.set_text_content(Some("Drag and drop components here to build your page"));
        root.append_child(&hint)?;
        return Ok(());
    }

    for component in doc.components() {
        let selected = ui.selected_id == Some(component.id);
        let resizing = resizing_id == Some(component.id);
        let element = draw_component(&document, component, selected, resizing)?;
        root.append_child(&element)?;
    }

    Ok(())
}

// =============================================================
// Placement wrapper
// =============================================================

fn draw_component(
    document: &Document,
    component: &PlacedComponent,
    selected: bool,
    resizing: bool,
) -> Result<Element, JsValue> {
    let element = document.create_element("div")?;
    element.set_class_name(if selected { "placed selected" } else { "placed" });
    element.set_attribute("data-id", &component.id.to_string())?;

    let transition = if resizing { "transition:none" } else { "transition:all 0.2s ease" };
    element.set_attribute(
        "style",
        &format!(
            "position:absolute;left:{}px;top:{}px;width:{}px;height:{}px;{transition}",
            component.position.x, component.position.y, component.size.width, component.size.height
        ),
    )?;

    if let Some(content) = content_element(document, Content::for_kind(component.kind))? {
        element.append_child(&content)?;
    }

    // The resize affordance only exists on the selected placement.
    if selected {
        let handle = document.create_element("div")?;
        handle.set_class_name("resize-handle");
        element.append_child(&handle)?;
    }

    Ok(element)
}

// =============================================================
// Content renderers
// =============================================================

fn content_element(document: &Document, content: Content) -> Result<Option<Element>, JsValue> {
    let element = match content {
        Content::Heading { text } => text_element(document, "h2", text)?,
        Content::Paragraph { text } => text_element(document, "p", text)?,
        Content::Image { src, alt } => {
            let img = document.create_element("img")?;
            img.set_attribute("src", src)?;
            img.set_attribute("alt", alt)?;
            img.set_attribute("draggable", "false")?;
            img
        }
        Content::Button { label } => text_element(document, "button", label)?,
        Content::Columns { left, right } => {
            let columns = document.create_element("div")?;
            columns.set_class_name("columns");
            columns.append_child(&text_element(document, "div", left)?.into())?;
            columns.append_child(&text_element(document, "div", right)?.into())?;
            columns
        }
        Content::Card { title, body } => {
            let card = document.create_element("div")?;
            card.set_class_name("card");
            card.append_child(&text_element(document, "h3", title)?.into())?;
            card.append_child(&text_element(document, "p", body)?.into())?;
            card
        }
        Content::Link { text, href } => {
            let link = text_element(document, "a", text)?;
            link.set_attribute("href", href)?;
            link
        }
        Content::List { items } => {
            let list = document.create_element("ul")?;
            for item in items {
                list.append_child(&text_element(document, "li", item)?.into())?;
            }
            list
        }
        Content::Container { text } => {
            let container = document.create_element("div")?;
            container.set_class_name("container");
            container.append_child(&text_element(document, "p", text)?.into())?;
            container
        }
        Content::Empty => return Ok(None),
    };
    Ok(Some(element))
}

fn text_element(document: &Document, tag: &str, text: &str) -> Result<Element, JsValue> {
    let element = document.create_element(tag)?;
    element.set_text_content(Some(text));
    Ok(element)
}
