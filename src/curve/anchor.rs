use crate::{
    curve::segments::{PathSegment, build_segments, bounds},
    foundation::core::{BezPath, Point, Rect, Vec2},
    foundation::math::Fnv1a64,
};

/// Opaque anchor identity, stable across edits of the same point.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct AnchorId(pub u64);

/// One user-placed vertex of a curve.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnchorPoint {
    /// Stable identity.
    pub id: AnchorId,
    /// Position in grid-cell units; may be fractional.
    pub position: Point,
    /// Incoming tangent handle, as an offset from `position`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_in: Option<Vec2>,
    /// Outgoing tangent handle, as an offset from `position`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_out: Option<Vec2>,
}

impl AnchorPoint {
    /// A corner point without handles.
    pub fn corner(id: AnchorId, position: Point) -> Self {
        Self {
            id,
            position,
            handle_in: None,
            handle_out: None,
        }
    }

    /// A point with both handles present.
    pub fn smooth(id: AnchorId, position: Point, handle_in: Vec2, handle_out: Vec2) -> Self {
        Self {
            id,
            position,
            handle_in: Some(handle_in),
            handle_out: Some(handle_out),
        }
    }

    /// `true` when at least one tangent handle is present.
    pub fn has_handles(&self) -> bool {
        self.handle_in.is_some() || self.handle_out.is_some()
    }

    /// Absolute position of the incoming handle endpoint, if any.
    pub fn handle_in_point(&self) -> Option<Point> {
        self.handle_in.map(|h| self.position + h)
    }

    /// Absolute position of the outgoing handle endpoint, if any.
    pub fn handle_out_point(&self) -> Option<Point> {
        self.handle_out.map(|h| self.position + h)
    }
}

/// Ordered anchor list plus the open/closed flag.
///
/// The anchor list is the source of truth owned by the editing session; segments, bounds and
/// flattened geometry are derived from it on demand.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Curve {
    /// Anchors in path order.
    #[serde(default)]
    pub anchors: Vec<AnchorPoint>,
    /// Whether the last anchor connects back to the first.
    #[serde(default)]
    pub closed: bool,
}

impl Curve {
    /// Construct a curve from an anchor list.
    pub fn new(anchors: Vec<AnchorPoint>, closed: bool) -> Self {
        Self { anchors, closed }
    }

    /// Open polyline through `points`, with sequential ids starting at 0.
    pub fn polyline(points: impl IntoIterator<Item = Point>) -> Self {
        let anchors = points
            .into_iter()
            .enumerate()
            .map(|(i, p)| AnchorPoint::corner(AnchorId(i as u64), p))
            .collect();
        Self {
            anchors,
            closed: false,
        }
    }

    /// Closed polygon through `points`, with sequential ids starting at 0.
    pub fn polygon(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            closed: true,
            ..Self::polyline(points)
        }
    }

    /// Number of anchors.
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// `true` when the curve has no anchors.
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// `true` when the closing segment actually exists (closed and at least 3 anchors).
    pub fn is_effectively_closed(&self) -> bool {
        self.closed && self.anchors.len() >= 3
    }

    /// Derived path segments.
    pub fn segments(&self) -> Vec<PathSegment> {
        build_segments(&self.anchors, self.closed)
    }

    /// Conservative bounds over anchor positions and handle endpoints.
    pub fn bounds(&self) -> Option<Rect> {
        bounds(&self.anchors)
    }

    /// Export as a [`BezPath`] for consumers that render vector geometry directly.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let segments = self.segments();
        let Some(first) = segments.first() else {
            return path;
        };
        path.move_to(first.start());
        for seg in &segments {
            match *seg {
                PathSegment::Line { p1, .. } => path.line_to(p1),
                PathSegment::Cubic { cp1, cp2, p1, .. } => path.curve_to(cp1, cp2, p1),
            }
        }
        if self.is_effectively_closed() {
            path.close_path();
        }
        path
    }

    /// Stable hash of the geometry, used as a cache key for derived data.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_u8(u8::from(self.closed));
        h.write_u64(self.anchors.len() as u64);
        for a in &self.anchors {
            h.write_f64(a.position.x);
            h.write_f64(a.position.y);
            for handle in [a.handle_in, a.handle_out] {
                match handle {
                    Some(v) => {
                        h.write_u8(1);
                        h.write_f64(v.x);
                        h.write_f64(v.y);
                    }
                    None => h.write_u8(0),
                }
            }
        }
        h.finish()
    }

    /// Lookup an anchor by id.
    pub fn anchor(&self, id: AnchorId) -> Option<&AnchorPoint> {
        self.anchors.iter().find(|a| a.id == id)
    }

    fn anchor_mut(&mut self, id: AnchorId) -> Option<&mut AnchorPoint> {
        self.anchors.iter_mut().find(|a| a.id == id)
    }

    /// Append a corner anchor and return its freshly allocated id.
    pub fn push(&mut self, position: Point) -> AnchorId {
        let id = AnchorId(
            self.anchors
                .iter()
                .map(|a| a.id.0.saturating_add(1))
                .max()
                .unwrap_or(0),
        );
        self.anchors.push(AnchorPoint::corner(id, position));
        id
    }

    /// Move an anchor; handles move with it since they are relative.
    pub fn move_anchor(&mut self, id: AnchorId, position: Point) -> bool {
        match self.anchor_mut(id) {
            Some(a) => {
                a.position = position;
                true
            }
            None => false,
        }
    }

    /// Replace both handles of an anchor.
    pub fn set_handles(
        &mut self,
        id: AnchorId,
        handle_in: Option<Vec2>,
        handle_out: Option<Vec2>,
    ) -> bool {
        match self.anchor_mut(id) {
            Some(a) => {
                a.handle_in = handle_in;
                a.handle_out = handle_out;
                true
            }
            None => false,
        }
    }

    /// Set the outgoing handle and mirror it into the incoming one (smooth join).
    pub fn set_mirrored_handle(&mut self, id: AnchorId, handle_out: Vec2) -> bool {
        self.set_handles(id, Some(-handle_out), Some(handle_out))
    }

    /// Turn an anchor back into a corner.
    pub fn clear_handles(&mut self, id: AnchorId) -> bool {
        self.set_handles(id, None, None)
    }

    /// Remove an anchor, returning it when it existed.
    pub fn remove_anchor(&mut self, id: AnchorId) -> Option<AnchorPoint> {
        let idx = self.anchors.iter().position(|a| a.id == id)?;
        Some(self.anchors.remove(idx))
    }

    /// Set the closed flag.
    pub fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/anchor.rs"]
mod tests;
