//! cellcurve rasterizes bezier curves onto a character grid.
//!
//! A [`Curve`] is an ordered list of anchors with optional tangent handles. The rasterizer turns
//! it into a sparse [`CellDiff`]: for every grid cell the shape touches, one glyph plus colors.
//!
//! # Pipeline overview
//!
//! 1. **Segments**: anchors become lines or cubic bezier segments ([`build_segments`]).
//! 2. **Geometry**: segments are flattened into polygons, or outlined as a tapered stroke
//!    ([`generate_stroke_outline`]), and cached per curve fingerprint ([`FlattenCache`]).
//! 3. **Sampling**: each cell inside the bounding window is probed at nine points
//!    ([`detect_regions`]) or a 5×5 grid ([`cell_overlap_percent`]) with nonzero winding.
//! 4. **Glyphs**: the covered region set picks a character from a palette ([`PaletteCatalog`]).
//!
//! Rasterization is deterministic: the same curve, canvas and settings always produce the same
//! diff, whether or not the cache was warm.
//!
//! # Getting started
//!
//! ```
//! use cellcurve::{Curve, GridSize, Point, RasterSettings, rasterize};
//!
//! let square = Curve::polygon([
//!     Point::new(1.0, 1.0),
//!     Point::new(5.0, 1.0),
//!     Point::new(5.0, 4.0),
//!     Point::new(1.0, 4.0),
//! ]);
//! let diff = rasterize(&square, GridSize::new(8, 6), &RasterSettings::default());
//! assert_eq!(diff.len(), 12);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub mod config;
pub mod curve;
pub mod geom;
pub mod palette;
pub mod raster;
pub mod sample;
pub mod stroke;

pub use config::document::ShapeDocument;
pub use curve::anchor::{AnchorId, AnchorPoint, Curve};
pub use curve::segments::{CellBounds, PathSegment, bounds, build_segments, points_bounds};
pub use foundation::core::{BezPath, CellCoord, GridSize, Point, Rect, Vec2};
pub use foundation::error::{CellcurveError, CellcurveResult};
pub use geom::flatten::{Containment, FLATTEN_SEGMENTS, FlattenedPath, contains};
pub use geom::winding::winding_number;
pub use palette::registry::{
    BuiltinPalette, DEFAULT_RAMP, FALLBACK_CHAR, Palette, PaletteCatalog, RegionPattern,
    character_for,
};
pub use raster::cache::{DEFAULT_CACHE_CAPACITY, FlattenCache};
pub use raster::diff::{Cell, CellDiff, CellEntry, CellStore};
pub use raster::driver::{CellStyle, FillMode, RasterSettings, Rasterizer, ShapeMode, rasterize};
pub use sample::overlap::{OVERLAP_GRID, cell_overlap_percent, is_cell_inside};
pub use sample::regions::{RegionName, RegionSet, detect_regions};
pub use stroke::outline::{
    DEFAULT_SEGMENTS_PER_CURVE, MAX_SEGMENTS_PER_CURVE, StrokeOptions, generate_stroke_outline,
    outline_from_anchors, stroke_half_width,
};
