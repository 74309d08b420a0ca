use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    curve::anchor::Curve,
    foundation::core::GridSize,
    foundation::error::{CellcurveError, CellcurveResult},
    palette::registry::{Palette, PaletteCatalog},
    raster::diff::CellDiff,
    raster::driver::{FillMode, RasterSettings, Rasterizer},
};

/// JSON-facing description of one rasterization job.
///
/// ```json
/// {
///   "canvas": { "width": 40, "height": 12 },
///   "curve": { "anchors": [ ... ], "closed": true },
///   "settings": { "palette_id": "block" },
///   "palettes": [ ... ]
/// }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShapeDocument {
    /// Target grid size.
    pub canvas: GridSize,
    /// Curve to rasterize.
    pub curve: Curve,
    /// Rasterization settings.
    #[serde(default)]
    pub settings: RasterSettings,
    /// Custom palettes registered on top of the built-ins.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub palettes: Vec<Palette>,
}

impl ShapeDocument {
    /// Parse a document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> CellcurveResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| CellcurveError::serde(format!("parse shape document JSON: {e}")))
    }

    /// Parse a document from a JSON string.
    pub fn from_json(s: &str) -> CellcurveResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse a document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CellcurveResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open shape document '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> CellcurveResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CellcurveError::serde(format!("serialize shape document: {e}")))
    }

    /// Check the canvas, settings and palettes.
    ///
    /// An unknown palette id is not an error: rasterization degrades to blanks and logs it.
    pub fn validate(&self) -> CellcurveResult<()> {
        if self.canvas.is_empty() {
            return Err(CellcurveError::validation(
                "canvas width and height must be > 0",
            ));
        }
        self.settings.validate()?;
        for (i, a) in self.curve.anchors.iter().enumerate() {
            let coords = [
                Some(a.position.to_vec2()),
                a.handle_in,
                a.handle_out,
            ];
            if coords.iter().flatten().any(|v| !v.x.is_finite() || !v.y.is_finite()) {
                return Err(CellcurveError::validation(format!(
                    "anchor {i} (id {}) has non-finite coordinates",
                    a.id.0
                )));
            }
        }
        let catalog = self.catalog()?;
        if !matches!(self.settings.fill, FillMode::Constant { .. })
            && catalog.get(&self.settings.palette_id).is_none()
        {
            tracing::warn!(
                palette_id = %self.settings.palette_id,
                "document references an unknown palette"
            );
        }
        Ok(())
    }

    /// Built-in palettes plus the document's custom ones.
    pub fn catalog(&self) -> CellcurveResult<PaletteCatalog> {
        let mut catalog = PaletteCatalog::builtin();
        for p in &self.palettes {
            catalog.register(p.clone())?;
        }
        Ok(catalog)
    }

    /// Validate, then rasterize with a fresh [`Rasterizer`].
    pub fn rasterize(&self) -> CellcurveResult<CellDiff> {
        self.validate()?;
        let mut r = Rasterizer::with_catalog(self.catalog()?);
        Ok(r.rasterize(&self.curve, self.canvas, &self.settings))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/document.rs"]
mod tests;
