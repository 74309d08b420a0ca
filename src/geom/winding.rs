use crate::foundation::core::Point;

// > 0 when `p` is left of the directed edge a→b, < 0 when right, 0 when collinear.
fn is_left(a: Point, b: Point, p: Point) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y)
}

/// Winding number of the implicitly closed polygon `ring` around `p`.
///
/// Counts signed crossings of the horizontal ray from `p` toward `+x`. An upward crossing
/// (edge going toward +y with `p` on its left) adds one, a downward crossing subtracts one.
/// Edges are half-open in `y` so a ray through a shared vertex is counted once.
pub fn winding_number(ring: &[Point], p: Point) -> i32 {
    let n = ring.len();
    if n < 2 {
        return 0;
    }
    let mut wn = 0i32;
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        if a.y <= p.y {
            if b.y > p.y && is_left(a, b, p) > 0.0 {
                wn += 1;
            }
        } else if b.y <= p.y && is_left(a, b, p) < 0.0 {
            wn -= 1;
        }
    }
    wn
}

#[cfg(test)]
#[path = "../../tests/unit/geom/winding.rs"]
mod tests;
