/// Convenience result type used across cellcurve.
pub type CellcurveResult<T> = Result<T, CellcurveError>;

/// Error taxonomy for the fallible edges of the crate.
///
/// Rasterization itself never fails; these errors come from loading documents, validating
/// settings and registering palettes.
#[derive(thiserror::Error, Debug)]
pub enum CellcurveError {
    /// Invalid user-provided document, settings or palette data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CellcurveError {
    /// Build a [`CellcurveError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CellcurveError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
