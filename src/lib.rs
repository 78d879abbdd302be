//! Drag-and-drop page editor engine.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns
//! the editing state of the page: a flat list of placed components with
//! position and size, a single optional selection, a resize gesture state
//! machine, and DOM rendering of the result. The host layer is responsible
//! only for wiring drag-and-drop library callbacks and document-level
//! pointer events to the engine and reacting to the resulting
//! [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | In-memory placement store and component types |
//! | [`geom`] | Point, size, and delta primitives |
//! | [`input`] | Drag payloads, selection, and the resize gesture state machine |
//! | [`palette`] | The nine palette entries exposed as drag sources |
//! | [`content`] | Pure mapping from component kind to placeholder content |
//! | [`render`] | DOM rendering of the placed components |
//! | [`consts`] | Shared numeric constants (default size, resize minimums) |

pub mod consts;
pub mod content;
pub mod doc;
pub mod engine;
pub mod geom;
pub mod input;
pub mod palette;
pub mod render;
