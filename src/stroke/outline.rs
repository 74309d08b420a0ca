use kurbo::{ParamCurve, ParamCurveDeriv};

use crate::{
    curve::anchor::AnchorPoint,
    curve::segments::{PathSegment, build_segments},
    foundation::core::{Point, Vec2},
    foundation::math::{DEGENERATE_EPS, Fnv1a64},
};

/// Default number of samples per segment along a stroke.
pub const DEFAULT_SEGMENTS_PER_CURVE: u32 = 20;

/// Upper bound on samples per segment; keeps interactive rasterization bounded.
pub const MAX_SEGMENTS_PER_CURVE: u32 = 256;

fn default_segments_per_curve() -> u32 {
    DEFAULT_SEGMENTS_PER_CURVE
}

/// Width profile of a tapered stroke.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokeOptions {
    /// Full stroke width in grid units (the outline sits `base_width / 2` off the curve).
    pub base_width: f64,
    /// Fraction of the path over which the width ramps up from zero, in `[0, 1]`.
    #[serde(default)]
    pub taper_start: f64,
    /// Fraction of the path over which the width ramps down to zero, in `[0, 1]`.
    #[serde(default)]
    pub taper_end: f64,
    /// Samples per segment.
    #[serde(default = "default_segments_per_curve")]
    pub segments_per_curve: u32,
}

impl Default for StrokeOptions {
    fn default() -> Self {
        Self {
            base_width: 1.0,
            taper_start: 0.0,
            taper_end: 0.0,
            segments_per_curve: DEFAULT_SEGMENTS_PER_CURVE,
        }
    }
}

impl StrokeOptions {
    /// Uniform-width stroke.
    pub fn new(base_width: f64) -> Self {
        Self {
            base_width,
            ..Self::default()
        }
    }

    /// Same stroke with tapers set.
    pub fn with_taper(self, taper_start: f64, taper_end: f64) -> Self {
        Self {
            taper_start,
            taper_end,
            ..self
        }
    }

    fn sanitized(self) -> Self {
        let unit = |v: f64| if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 };
        Self {
            base_width: if self.base_width.is_finite() {
                self.base_width.max(0.0)
            } else {
                0.0
            },
            taper_start: unit(self.taper_start),
            taper_end: unit(self.taper_end),
            segments_per_curve: self.segments_per_curve.clamp(1, MAX_SEGMENTS_PER_CURVE),
        }
    }

    pub(crate) fn hash_into(&self, h: &mut Fnv1a64) {
        let s = self.sanitized();
        h.write_f64(s.base_width);
        h.write_f64(s.taper_start);
        h.write_f64(s.taper_end);
        h.write_u64(u64::from(s.segments_per_curve));
    }
}

/// Half-width of the stroke at global path parameter `t_global ∈ [0, 1]`.
///
/// The start ramp rises linearly over `[0, taper_start]` and the end ramp falls linearly over
/// `[1 - taper_end, 1]`. The two factors multiply, so on a path where the ramps overlap the
/// full width is never reached.
pub fn stroke_half_width(t_global: f64, base_width: f64, taper_start: f64, taper_end: f64) -> f64 {
    let t = t_global.clamp(0.0, 1.0);
    let mut factor = 1.0;
    if taper_start > 0.0 && t < taper_start {
        factor *= t / taper_start;
    }
    if taper_end > 0.0 && t > 1.0 - taper_end {
        factor *= (1.0 - t) / taper_end;
    }
    base_width * 0.5 * factor
}

// Unit normal: the tangent rotated by 90°. A vanishing tangent falls back to the fixed
// normal (0, 1).
fn unit_normal(tangent: Vec2) -> Vec2 {
    if tangent.hypot2() <= DEGENERATE_EPS {
        return Vec2::new(0.0, 1.0);
    }
    let len = tangent.hypot();
    Vec2::new(-tangent.y / len, tangent.x / len)
}

/// Closed polygon approximating a variable-width stroke along `segments`.
///
/// Lines are walked as degenerate cubics, so their end samples have a zero tangent and take
/// the fixed normal `(0, 1)`. Left-edge samples run forward along the path and
/// right-edge samples run back, giving one closed ring. An empty segment list (a curve of
/// 0–1 anchors) yields an empty outline.
pub fn generate_stroke_outline(segments: &[PathSegment], opts: StrokeOptions) -> Vec<Point> {
    if segments.is_empty() {
        return Vec::new();
    }
    let opts = opts.sanitized();
    let steps = opts.segments_per_curve;
    let n = segments.len() as f64;

    let cap = segments.len() * steps as usize + 1;
    let mut left = Vec::with_capacity(cap);
    let mut right = Vec::with_capacity(cap);

    for (i, seg) in segments.iter().enumerate() {
        let cubic = seg.to_cubic();
        let deriv = cubic.deriv();
        let t_start = i as f64 / n;
        let t_end = (i + 1) as f64 / n;
        let first = if i == 0 { 0 } else { 1 };
        for k in first..=steps {
            let t = f64::from(k) / f64::from(steps);
            let p = cubic.eval(t);
            let normal = unit_normal(deriv.eval(t).to_vec2());
            let t_global = t_start + (t_end - t_start) * t;
            let hw = stroke_half_width(
                t_global,
                opts.base_width,
                opts.taper_start,
                opts.taper_end,
            );
            left.push(p + normal * hw);
            right.push(p - normal * hw);
        }
    }

    left.extend(right.into_iter().rev());
    left
}

/// Outline of the open curve through `anchors`.
pub fn outline_from_anchors(anchors: &[AnchorPoint], opts: StrokeOptions) -> Vec<Point> {
    generate_stroke_outline(&build_segments(anchors, false), opts)
}

#[cfg(test)]
#[path = "../../tests/unit/stroke/outline.rs"]
mod tests;
