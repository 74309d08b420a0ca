//! Path containment: flattening plus nonzero winding-number point queries.

/// Cubic flattening and the [`flatten::Containment`] seam.
pub mod flatten;
/// Winding-number kernel over flat polygons.
pub mod winding;
