use kurbo::{CubicBez, Line, PathSeg};

use crate::{
    curve::anchor::AnchorPoint,
    foundation::core::{GridSize, Point, Rect},
};

/// One piece of a curve between two consecutive anchors.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum PathSegment {
    /// Straight edge; neither adjacent handle is present.
    Line {
        /// Start point.
        p0: Point,
        /// End point.
        p1: Point,
    },
    /// Cubic Bezier; at least one adjacent handle is present.
    Cubic {
        /// Start point.
        p0: Point,
        /// First control point (`start + handle_out`).
        cp1: Point,
        /// Second control point (`end + handle_in`).
        cp2: Point,
        /// End point.
        p1: Point,
    },
}

impl PathSegment {
    /// Start point.
    pub fn start(&self) -> Point {
        match *self {
            Self::Line { p0, .. } | Self::Cubic { p0, .. } => p0,
        }
    }

    /// End point.
    pub fn end(&self) -> Point {
        match *self {
            Self::Line { p1, .. } | Self::Cubic { p1, .. } => p1,
        }
    }

    /// The segment as a cubic; lines become degenerate cubics with controls on the endpoints.
    pub fn to_cubic(&self) -> CubicBez {
        match *self {
            Self::Line { p0, p1 } => CubicBez::new(p0, p0, p1, p1),
            Self::Cubic { p0, cp1, cp2, p1 } => CubicBez::new(p0, cp1, cp2, p1),
        }
    }

    /// The segment as a kurbo path segment.
    pub fn to_path_seg(&self) -> PathSeg {
        match *self {
            Self::Line { p0, p1 } => PathSeg::Line(Line::new(p0, p1)),
            Self::Cubic { .. } => PathSeg::Cubic(self.to_cubic()),
        }
    }
}

fn segment_between(a: &AnchorPoint, b: &AnchorPoint) -> PathSegment {
    if a.handle_out.is_none() && b.handle_in.is_none() {
        return PathSegment::Line {
            p0: a.position,
            p1: b.position,
        };
    }
    PathSegment::Cubic {
        p0: a.position,
        cp1: a.handle_out_point().unwrap_or(a.position),
        cp2: b.handle_in_point().unwrap_or(b.position),
        p1: b.position,
    }
}

/// Build path segments from consecutive anchor pairs.
///
/// Fewer than two anchors produce no segments. The closing segment is only emitted when
/// `closed` is set and there are at least three anchors; otherwise the curve stays open.
pub fn build_segments(anchors: &[AnchorPoint], closed: bool) -> Vec<PathSegment> {
    if anchors.len() < 2 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(anchors.len());
    for pair in anchors.windows(2) {
        out.push(segment_between(&pair[0], &pair[1]));
    }
    if closed
        && anchors.len() >= 3
        && let (Some(last), Some(first)) = (anchors.last(), anchors.first())
    {
        out.push(segment_between(last, first));
    }
    out
}

/// Bounds over anchor positions and handle endpoints.
///
/// A cubic never leaves the hull of its control points, so this over-estimates the curve's
/// extent slightly instead of solving for its extrema.
pub fn bounds(anchors: &[AnchorPoint]) -> Option<Rect> {
    let points = anchors.iter().flat_map(|a| {
        std::iter::once(a.position)
            .chain(a.handle_in_point())
            .chain(a.handle_out_point())
    });
    points_bounds(points)
}

/// Axis-aligned bounds of a point cloud; `None` when it is empty.
pub fn points_bounds(points: impl IntoIterator<Item = Point>) -> Option<Rect> {
    let mut it = points.into_iter();
    let first = it.next()?;
    Some(it.fold(Rect::from_points(first, first), |r, p| r.union_pt(p)))
}

/// Inclusive integer cell window that candidate cells are drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellBounds {
    /// First column.
    pub min_x: u32,
    /// First row.
    pub min_y: u32,
    /// Last column (inclusive).
    pub max_x: u32,
    /// Last row (inclusive).
    pub max_y: u32,
}

impl CellBounds {
    /// Floor/ceil `rect` to whole cells and clamp to `[0, w-1] × [0, h-1]`.
    ///
    /// Returns `None` when the canvas is empty, the rect is not finite, or it lies entirely
    /// outside the canvas.
    pub fn from_rect(rect: Rect, canvas: GridSize) -> Option<Self> {
        if canvas.is_empty() {
            return None;
        }
        if ![rect.x0, rect.y0, rect.x1, rect.y1]
            .iter()
            .all(|v| v.is_finite())
        {
            return None;
        }
        let max_col = f64::from(canvas.width - 1);
        let max_row = f64::from(canvas.height - 1);
        let x0 = rect.x0.floor();
        let y0 = rect.y0.floor();
        let x1 = rect.x1.ceil();
        let y1 = rect.y1.ceil();
        if x1 < 0.0 || y1 < 0.0 || x0 > max_col || y0 > max_row {
            return None;
        }
        Some(Self {
            min_x: x0.clamp(0.0, max_col) as u32,
            min_y: y0.clamp(0.0, max_row) as u32,
            max_x: x1.clamp(0.0, max_col) as u32,
            max_y: y1.clamp(0.0, max_row) as u32,
        })
    }

    /// `true` when `(x, y)` lies in the window.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }

    /// Cells in row-major order.
    pub fn cells(self) -> impl Iterator<Item = (u32, u32)> {
        (self.min_y..=self.max_y).flat_map(move |y| (self.min_x..=self.max_x).map(move |x| (x, y)))
    }

    /// Number of cells in the window.
    pub fn cell_count(&self) -> u64 {
        u64::from(self.max_x - self.min_x + 1) * u64::from(self.max_y - self.min_y + 1)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/segments.rs"]
mod tests;
