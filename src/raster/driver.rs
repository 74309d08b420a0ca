use std::sync::Arc;

use crate::{
    curve::anchor::Curve,
    curve::segments::CellBounds,
    foundation::core::{CellCoord, GridSize, Rect},
    foundation::error::{CellcurveError, CellcurveResult},
    foundation::math::Fnv1a64,
    geom::flatten::{Containment, FlattenedPath},
    palette::registry::{DEFAULT_RAMP, FALLBACK_CHAR, Palette, PaletteCatalog},
    raster::cache::FlattenCache,
    raster::diff::{Cell, CellDiff},
    sample::overlap::{cell_overlap_percent, is_cell_inside},
    sample::regions::{RegionSet, detect_regions},
    stroke::outline::{MAX_SEGMENTS_PER_CURVE, StrokeOptions, generate_stroke_outline},
};

/// Which geometry of the curve is rasterized.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeMode {
    /// The area enclosed by the curve (open curves close implicitly).
    #[default]
    Fill,
    /// A tapered band along the curve.
    Stroke(StrokeOptions),
}

/// How coverage turns into characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FillMode {
    /// 3×3 region sampling and exact palette lookup.
    #[default]
    Autofill,
    /// 5×5 coverage percentage mapped onto the palette's density ramp.
    Graduated,
    /// One fixed character wherever the cell center is inside.
    Constant {
        /// Character to emit.
        ch: char,
    },
}

/// Colors attached to every emitted cell.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CellStyle {
    /// Foreground color.
    pub color: String,
    /// Optional background color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            color: "#ffffff".to_string(),
            bg_color: None,
        }
    }
}

fn default_palette_id() -> String {
    "block".to_string()
}

/// Everything besides the curve and canvas that shapes one rasterization.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RasterSettings {
    /// Fill or stroke.
    #[serde(default)]
    pub shape: ShapeMode,
    /// Character selection strategy.
    #[serde(default)]
    pub fill: FillMode,
    /// Palette id resolved through the [`PaletteCatalog`].
    #[serde(default = "default_palette_id")]
    pub palette_id: String,
    /// Uniform cell colors.
    #[serde(default)]
    pub style: CellStyle,
}

impl Default for RasterSettings {
    fn default() -> Self {
        Self {
            shape: ShapeMode::default(),
            fill: FillMode::default(),
            palette_id: default_palette_id(),
            style: CellStyle::default(),
        }
    }
}

impl RasterSettings {
    /// Reject values the rasterizer would otherwise clamp silently.
    pub fn validate(&self) -> CellcurveResult<()> {
        if let ShapeMode::Stroke(s) = self.shape {
            if !s.base_width.is_finite() || s.base_width < 0.0 {
                return Err(CellcurveError::validation(
                    "stroke base_width must be finite and >= 0",
                ));
            }
            for (name, v) in [("taper_start", s.taper_start), ("taper_end", s.taper_end)] {
                if !(0.0..=1.0).contains(&v) {
                    return Err(CellcurveError::validation(format!(
                        "stroke {name} must be in [0, 1], got {v}"
                    )));
                }
            }
            if s.segments_per_curve == 0 || s.segments_per_curve > MAX_SEGMENTS_PER_CURVE {
                return Err(CellcurveError::validation(format!(
                    "stroke segments_per_curve must be in 1..={MAX_SEGMENTS_PER_CURVE}"
                )));
            }
        }
        if self.palette_id.trim().is_empty() {
            return Err(CellcurveError::validation("palette_id must be non-empty"));
        }
        Ok(())
    }
}

fn shape_key(curve: &Curve, shape: &ShapeMode) -> u64 {
    let mut h = Fnv1a64::new(curve.fingerprint());
    match shape {
        ShapeMode::Fill => h.write_u8(b'F'),
        ShapeMode::Stroke(s) => {
            h.write_u8(b'S');
            s.hash_into(&mut h);
        }
    }
    h.finish()
}

fn build_geometry(curve: &Curve, shape: &ShapeMode) -> FlattenedPath {
    let segments = curve.segments();
    match shape {
        ShapeMode::Fill => FlattenedPath::from_segments(&segments),
        ShapeMode::Stroke(opts) => {
            FlattenedPath::from_polygon(generate_stroke_outline(&segments, *opts))
        }
    }
}

fn ramp_index(percent: f64, len: usize) -> usize {
    let top = len.saturating_sub(1);
    let idx = (percent / 100.0 * top as f64).ceil() as usize;
    idx.clamp(1, top.max(1))
}

/// Stateful rasterizer: palette catalog plus a cache of flattened shapes.
///
/// Output depends only on the inputs; the cache only saves rebuilding geometry.
#[derive(Debug, Default)]
pub struct Rasterizer {
    catalog: PaletteCatalog,
    cache: FlattenCache,
}

impl Rasterizer {
    /// Rasterizer over the built-in palettes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rasterizer over a custom catalog.
    pub fn with_catalog(catalog: PaletteCatalog) -> Self {
        Self {
            catalog,
            cache: FlattenCache::default(),
        }
    }

    /// Palette catalog in use.
    pub fn catalog(&self) -> &PaletteCatalog {
        &self.catalog
    }

    /// Mutable catalog, for registering palettes.
    pub fn catalog_mut(&mut self) -> &mut PaletteCatalog {
        &mut self.catalog
    }

    /// Geometry cache.
    pub fn cache(&self) -> &FlattenCache {
        &self.cache
    }

    /// Flattened geometry for `curve` under `shape`, from the cache when unchanged.
    pub fn geometry(&mut self, curve: &Curve, shape: &ShapeMode) -> Arc<FlattenedPath> {
        let key = shape_key(curve, shape);
        self.cache
            .get_or_insert_with(key, || build_geometry(curve, shape))
    }

    /// Rasterize `curve` onto a `canvas`-sized grid.
    ///
    /// Never fails: degenerate curves, empty windows and unknown palettes produce an empty or
    /// blank diff instead.
    #[tracing::instrument(
        skip_all,
        fields(anchors = curve.len(), closed = curve.closed, palette = %settings.palette_id)
    )]
    pub fn rasterize(
        &mut self,
        curve: &Curve,
        canvas: GridSize,
        settings: &RasterSettings,
    ) -> CellDiff {
        if curve.len() < 2 {
            tracing::debug!("fewer than two anchors; nothing to rasterize");
            return CellDiff::new();
        }

        let path = self.geometry(curve, &settings.shape);
        if path.is_empty() {
            tracing::debug!("geometry has no area");
            return CellDiff::new();
        }

        let rect: Option<Rect> = match settings.shape {
            ShapeMode::Fill => curve.bounds(),
            ShapeMode::Stroke(_) => path.bounding_box(),
        };
        let Some(window) = rect.and_then(|r| CellBounds::from_rect(r, canvas)) else {
            tracing::debug!(?rect, "bounds fall outside the canvas");
            return CellDiff::new();
        };

        let palette = self.catalog.get(&settings.palette_id);
        if palette.is_none() && !matches!(settings.fill, FillMode::Constant { .. }) {
            tracing::warn!(
                palette_id = %settings.palette_id,
                "unknown palette id; emitting blanks"
            );
        }

        let diff = match settings.fill {
            FillMode::Autofill => autofill(window, path.as_ref(), palette, &settings.style),
            FillMode::Graduated => graduated(window, path.as_ref(), palette, &settings.style),
            FillMode::Constant { ch } => constant(window, path.as_ref(), ch, &settings.style),
        };
        tracing::debug!(
            candidates = window.cell_count(),
            emitted = diff.len(),
            "rasterized"
        );
        diff
    }
}

fn styled(ch: char, style: &CellStyle) -> Cell {
    Cell {
        ch,
        color: style.color.clone(),
        bg_color: style.bg_color.clone(),
    }
}

fn cell_origin(x: u32, y: u32) -> Option<(i32, i32)> {
    Some((i32::try_from(x).ok()?, i32::try_from(y).ok()?))
}

fn autofill(
    window: CellBounds,
    path: &dyn Containment,
    palette: Option<&Palette>,
    style: &CellStyle,
) -> CellDiff {
    // An empty coverage set is only emitted when the palette made it visible on purpose.
    let empty_char = palette
        .and_then(|p| p.lookup(RegionSet::EMPTY))
        .filter(|c| !c.is_whitespace());

    let mut diff = CellDiff::new();
    for (x, y) in window.cells() {
        let Some((cx, cy)) = cell_origin(x, y) else {
            continue;
        };
        let regions = detect_regions(cx, cy, path);
        let ch = if regions.is_empty() {
            match empty_char {
                Some(c) => c,
                None => continue,
            }
        } else {
            palette.map_or(FALLBACK_CHAR, |p| p.character_for(regions))
        };
        diff.insert(CellCoord::new(x, y), styled(ch, style));
    }
    diff
}

fn graduated(
    window: CellBounds,
    path: &dyn Containment,
    palette: Option<&Palette>,
    style: &CellStyle,
) -> CellDiff {
    let ramp: Vec<char> = match palette {
        Some(p) => p.ramp_chars(),
        None => DEFAULT_RAMP.chars().collect(),
    };

    let mut diff = CellDiff::new();
    for (x, y) in window.cells() {
        let Some((cx, cy)) = cell_origin(x, y) else {
            continue;
        };
        let percent = cell_overlap_percent(cx, cy, path);
        if percent <= 0.0 {
            continue;
        }
        let ch = if palette.is_some() {
            ramp[ramp_index(percent, ramp.len())]
        } else {
            FALLBACK_CHAR
        };
        diff.insert(CellCoord::new(x, y), styled(ch, style));
    }
    diff
}

fn constant(window: CellBounds, path: &dyn Containment, ch: char, style: &CellStyle) -> CellDiff {
    let mut diff = CellDiff::new();
    for (x, y) in window.cells() {
        let Some((cx, cy)) = cell_origin(x, y) else {
            continue;
        };
        if is_cell_inside(cx, cy, path) {
            diff.insert(CellCoord::new(x, y), styled(ch, style));
        }
    }
    diff
}

/// Rasterize with the built-in palettes and no cache carried between calls.
pub fn rasterize(curve: &Curve, canvas: GridSize, settings: &RasterSettings) -> CellDiff {
    Rasterizer::new().rasterize(curve, canvas, settings)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/driver.rs"]
mod tests;
