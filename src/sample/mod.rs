//! Per-cell sampling on top of [`crate::Containment`].

/// Coverage percentage and center tests.
pub mod overlap;
/// Nine named sub-cell regions.
pub mod regions;
