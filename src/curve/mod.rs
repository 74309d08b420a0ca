//! Curve model: anchors, derived path segments and bounds.

/// Anchor points and the editable curve built from them.
pub mod anchor;
/// Segment construction and bounding windows.
pub mod segments;
