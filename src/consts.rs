//! Shared numeric constants for the page editor crate.

// ── Placement defaults ──────────────────────────────────────────

/// Width in CSS pixels given to a component when it is first dropped.
pub const DEFAULT_WIDTH: f64 = 200.0;

/// Height in CSS pixels given to a component when it is first dropped.
pub const DEFAULT_HEIGHT: f64 = 100.0;

// ── Resize gesture ──────────────────────────────────────────────

/// Minimum width in CSS pixels enforced while interactively resizing.
pub const MIN_RESIZE_WIDTH: f64 = 100.0;

/// Minimum height in CSS pixels enforced while interactively resizing.
pub const MIN_RESIZE_HEIGHT: f64 = 50.0;
