//! Rasterization driver and its output type.

/// Flattened-geometry cache.
pub mod cache;
/// Sparse cell output.
pub mod diff;
/// Bounds, per-cell sampling and character selection.
pub mod driver;
