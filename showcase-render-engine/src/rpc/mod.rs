//! JSON-RPC 2.0 communication layer for the React configurator frontend.
//!
//! Implements bidirectional messaging between the Bevy engine and the React
//! UI via iframe postMessage, supporting both request-response and
//! notification patterns.
//!
//! ## Message Flow
//!
//! ```text
//! React (Parent Window)  <──postMessage──>  Bevy (iframe)
//!        │                                        │
//!        ├─ set_paint_colour / set_paint_finish ─> │
//!        │ <───────────────── Response (with ID) ─┤
//!        │                                        │
//!        │ <── loading_progress / selection_changed
//!        │ <── load_failed / fallback_active ─────┤
//! ```
//!
//! ## Methods
//!
//! - `set_paint_colour { colour: uint24 }` — select an exterior colour; any
//!   24-bit value is accepted, the curated palette lives in the frontend.
//! - `set_paint_finish { finish: "glossy" | "metallic" | "matte" }`
//! - `get_paint_selection` — current colour and finish.
//!
//! ## Notifications
//!
//! - `loading_progress { percent, label }` on every progress change.
//! - `selection_changed { colour, finish }` after an applied selection.
//! - `load_failed { reason }` when the model fetch fails terminally.
//! - `fallback_active {}` when the placeholder vehicle takes over — the
//!   composition layer's cue to swap any real-asset chrome.

pub mod web_rpc;
