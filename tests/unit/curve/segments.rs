use super::*;
use crate::curve::anchor::{AnchorId, AnchorPoint};
use crate::foundation::core::Vec2;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn corner(id: u64, x: f64, y: f64) -> AnchorPoint {
    AnchorPoint::corner(AnchorId(id), pt(x, y))
}

#[test]
fn degenerate_anchor_lists_have_no_segments() {
    assert!(build_segments(&[], false).is_empty());
    assert!(build_segments(&[], true).is_empty());
    assert!(build_segments(&[corner(0, 1.0, 1.0)], true).is_empty());
}

#[test]
fn closing_fewer_than_three_points_stays_open() {
    let anchors = [corner(0, 0.0, 0.0), corner(1, 3.0, 0.0)];
    let segs = build_segments(&anchors, true);
    assert_eq!(
        segs,
        vec![PathSegment::Line {
            p0: pt(0.0, 0.0),
            p1: pt(3.0, 0.0)
        }]
    );
}

#[test]
fn closing_segment_returns_to_first_anchor() {
    let anchors = [
        corner(0, 0.0, 0.0),
        corner(1, 3.0, 0.0),
        corner(2, 3.0, 3.0),
    ];
    let segs = build_segments(&anchors, true);
    assert_eq!(segs.len(), 3);
    assert_eq!(segs[2].start(), pt(3.0, 3.0));
    assert_eq!(segs[2].end(), pt(0.0, 0.0));
}

#[test]
fn mixed_handles_produce_cubic_with_anchor_controls() {
    let mut a = corner(0, 0.0, 0.0);
    a.handle_out = Some(Vec2::new(1.0, 2.0));
    let b = corner(1, 4.0, 0.0);
    let segs = build_segments(&[a, b], false);
    assert_eq!(
        segs[0],
        PathSegment::Cubic {
            p0: pt(0.0, 0.0),
            cp1: pt(1.0, 2.0),
            cp2: pt(4.0, 0.0),
            p1: pt(4.0, 0.0),
        }
    );

    // Only an incoming handle on the end anchor also curves the segment.
    let a = corner(0, 0.0, 0.0);
    let mut b = corner(1, 4.0, 0.0);
    b.handle_in = Some(Vec2::new(0.0, -1.0));
    let segs = build_segments(&[a, b], false);
    assert!(matches!(segs[0], PathSegment::Cubic { cp2, .. } if cp2 == pt(4.0, -1.0)));
}

#[test]
fn unrelated_handles_keep_segment_straight() {
    // An incoming handle on the start anchor does not affect the outgoing segment.
    let mut a = corner(0, 0.0, 0.0);
    a.handle_in = Some(Vec2::new(-2.0, 0.0));
    let b = corner(1, 4.0, 0.0);
    let segs = build_segments(&[a, b], false);
    assert!(matches!(segs[0], PathSegment::Line { .. }));
}

#[test]
fn line_to_cubic_is_degenerate() {
    let seg = PathSegment::Line {
        p0: pt(1.0, 1.0),
        p1: pt(5.0, 2.0),
    };
    let c = seg.to_cubic();
    assert_eq!(c.p0, c.p1);
    assert_eq!(c.p2, c.p3);
}

#[test]
fn bounds_include_handle_endpoints() {
    let mut a = corner(0, 2.0, 2.0);
    a.handle_out = Some(Vec2::new(0.0, -3.0));
    let b = corner(1, 6.0, 2.0);
    let r = bounds(&[a, b]).unwrap();
    assert_eq!(r, Rect::new(2.0, -1.0, 6.0, 2.0));
    assert!(bounds(&[]).is_none());
}

#[test]
fn cell_bounds_floor_ceil_and_clamp() {
    let canvas = GridSize::new(10, 5);
    let b = CellBounds::from_rect(Rect::new(-2.5, 1.2, 3.4, 9.0), canvas).unwrap();
    assert_eq!(
        b,
        CellBounds {
            min_x: 0,
            min_y: 1,
            max_x: 4,
            max_y: 4,
        }
    );
    assert_eq!(b.cell_count(), 20);
    assert_eq!(b.cells().count(), 20);
    assert_eq!(b.cells().next(), Some((0, 1)));
}

#[test]
fn cell_bounds_outside_canvas_is_empty() {
    let canvas = GridSize::new(10, 5);
    assert!(CellBounds::from_rect(Rect::new(-5.0, -5.0, -1.0, -1.0), canvas).is_none());
    assert!(CellBounds::from_rect(Rect::new(11.0, 0.0, 12.0, 1.0), canvas).is_none());
    assert!(CellBounds::from_rect(Rect::new(0.0, 0.0, 1.0, 1.0), GridSize::new(0, 5)).is_none());
    assert!(
        CellBounds::from_rect(Rect::new(0.0, 0.0, f64::INFINITY, 1.0), canvas).is_none()
    );
}
