//! JSON documents describing rasterization jobs.

/// Shape document model and loading.
pub mod document;
