//! Tapered stroke outlines for open (and closed) curves.

/// Outline generation and the taper profile.
pub mod outline;
