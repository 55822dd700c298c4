//! Paint configurator state and input surfaces.
//!
//! The `PaintSelection` resource is the only mutable shared state in the
//! showcase. It has a single writer: `handle_selection_events` drains
//! `PaintSelectionEvent`s raised by either input surface and applies them,
//! so RPC and keyboard input can never race.
//!
//! ### Selection Flow
//!
//! ```text
//! Keyboard/RPC Input
//!   └─> PaintSelectionEvent
//!       └─> handle_selection_events()
//!           ├─> Mutate PaintSelection resource
//!           └─> Send selection_changed notification to frontend
//! PaintSelection change
//!   ├─> material binder re-traversal (Ready)
//!   └─> fallback paint update (Fallback)
//! ```
//!
//! ### Cross-Platform Considerations
//!
//! Native builds take digit keys 1-6 for the curated palette and G/M/T for
//! glossy/metallic/matte. WASM builds are controlled entirely by the React
//! frontend over JSON-RPC 2.0 (`set_paint_colour`, `set_paint_finish`); the
//! binder accepts any 24-bit colour, not just the palette.

/// Native keyboard shortcuts mirroring the RPC control surface.
pub mod keyboard;

/// Paint selection resource, finish presets and the selection event pipeline.
pub mod selection;
