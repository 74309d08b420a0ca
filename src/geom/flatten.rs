use kurbo::ParamCurve;

use crate::{
    curve::segments::{PathSegment, points_bounds},
    foundation::core::{Point, Rect},
    geom::winding::winding_number,
};

/// Line segments each cubic is subdivided into before containment testing.
pub const FLATTEN_SEGMENTS: usize = 20;

/// Point-in-shape predicate shared by every sampler.
pub trait Containment {
    /// `true` when `p` is inside under the nonzero winding rule.
    fn contains_point(&self, p: Point) -> bool;
}

/// Closed polygon approximating a path, ready for repeated point queries.
///
/// The ring is implicitly closed (its last vertex connects back to its first), matching
/// how a canvas fill treats an open subpath.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlattenedPath {
    ring: Vec<Point>,
    bbox: Option<Rect>,
}

impl FlattenedPath {
    /// Flatten `segments` into one ring, splitting every cubic into [`FLATTEN_SEGMENTS`] edges.
    pub fn from_segments(segments: &[PathSegment]) -> Self {
        let Some(first) = segments.first() else {
            return Self::default();
        };
        let mut ring = Vec::with_capacity(segments.len() * FLATTEN_SEGMENTS + 1);
        ring.push(first.start());
        for seg in segments {
            match *seg {
                PathSegment::Line { p1, .. } => ring.push(p1),
                PathSegment::Cubic { .. } => {
                    let c = seg.to_cubic();
                    for i in 1..=FLATTEN_SEGMENTS {
                        ring.push(c.eval(i as f64 / FLATTEN_SEGMENTS as f64));
                    }
                }
            }
        }
        Self::from_polygon(ring)
    }

    /// Wrap an already-flat polygon (for example a stroke outline).
    pub fn from_polygon(points: Vec<Point>) -> Self {
        if points.len() < 3 {
            return Self::default();
        }
        let bbox = points_bounds(points.iter().copied());
        Self { ring: points, bbox }
    }

    /// `true` when there is no area to test against.
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Flattened polygon vertices.
    pub fn ring(&self) -> &[Point] {
        &self.ring
    }

    /// Bounds of all ring vertices.
    pub fn bounding_box(&self) -> Option<Rect> {
        self.bbox
    }

    /// Winding number of the polygon around `p`.
    pub fn winding(&self, p: Point) -> i32 {
        winding_number(&self.ring, p)
    }
}

impl Containment for FlattenedPath {
    fn contains_point(&self, p: Point) -> bool {
        match self.bbox {
            Some(b) if p.x >= b.x0 && p.x <= b.x1 && p.y >= b.y0 && p.y <= b.y1 => {
                self.winding(p) != 0
            }
            _ => false,
        }
    }
}

/// One-shot containment test against raw segments.
///
/// Flattens on every call; hot loops should build a [`FlattenedPath`] once instead.
pub fn contains(segments: &[PathSegment], point: Point) -> bool {
    FlattenedPath::from_segments(segments).contains_point(point)
}

#[cfg(test)]
#[path = "../../tests/unit/geom/flatten.rs"]
mod tests;
