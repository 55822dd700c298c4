/// On-canvas loading text driven by the progress reporter.
pub mod loading_overlay;

/// Terminal progress bar mirroring the loading pipeline (native only).
#[cfg(not(target_arch = "wasm32"))]
pub mod terminal_progress;

/// Slow showcase orbit around the vehicle.
pub mod turntable;
