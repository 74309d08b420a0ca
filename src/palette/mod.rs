//! Autofill palettes: exact region-set → character tables.

/// Palette types, the catalog and lookups.
pub mod registry;
pub(crate) mod tables;
