use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Point> {
    vec![pt(x0, y0), pt(x1, y0), pt(x1, y1), pt(x0, y1)]
}

#[test]
fn square_inside_and_outside() {
    let sq = square(0.0, 0.0, 4.0, 4.0);
    assert_ne!(winding_number(&sq, pt(2.0, 2.0)), 0);
    assert_eq!(winding_number(&sq, pt(5.0, 2.0)), 0);
    assert_eq!(winding_number(&sq, pt(-1.0, 2.0)), 0);
    assert_eq!(winding_number(&sq, pt(2.0, 5.0)), 0);
    assert_eq!(winding_number(&sq, pt(2.0, -0.5)), 0);
}

#[test]
fn reversed_orientation_flips_sign() {
    let sq = square(0.0, 0.0, 4.0, 4.0);
    let mut rev = sq.clone();
    rev.reverse();
    let p = pt(1.0, 3.0);
    assert_eq!(winding_number(&sq, p), -winding_number(&rev, p));
    assert_ne!(winding_number(&rev, p), 0);
}

#[test]
fn ray_through_vertex_counts_once() {
    // Diamond whose left/right vertices sit exactly on the query row.
    let diamond = vec![pt(2.0, 0.0), pt(4.0, 2.0), pt(2.0, 4.0), pt(0.0, 2.0)];
    assert_ne!(winding_number(&diamond, pt(2.0, 2.0)), 0);
    assert_eq!(winding_number(&diamond, pt(-1.0, 2.0)), 0);
    assert_eq!(winding_number(&diamond, pt(5.0, 2.0)), 0);
}

#[test]
fn double_loop_accumulates_under_nonzero_rule() {
    // The same square traversed twice winds twice.
    let mut twice = square(0.0, 0.0, 2.0, 2.0);
    twice.extend(square(0.0, 0.0, 2.0, 2.0));
    assert_eq!(
        winding_number(&twice, pt(1.0, 1.0)).abs(),
        2 * winding_number(&square(0.0, 0.0, 2.0, 2.0), pt(1.0, 1.0)).abs()
    );
}

#[test]
fn self_intersecting_star_center_is_filled() {
    // Pentagram: the even-odd rule would leave the center empty, nonzero fills it.
    let c = pt(5.0, 5.0);
    let star: Vec<Point> = (0..5)
        .map(|i| {
            let a = std::f64::consts::FRAC_PI_2 + f64::from(i * 2) * std::f64::consts::TAU / 5.0;
            pt(c.x + 4.0 * a.cos(), c.y - 4.0 * a.sin())
        })
        .collect();
    assert_eq!(winding_number(&star, c).abs(), 2);
}

#[test]
fn degenerate_rings_never_contain() {
    assert_eq!(winding_number(&[], pt(0.0, 0.0)), 0);
    assert_eq!(winding_number(&[pt(0.0, 0.0)], pt(0.0, 0.0)), 0);
    assert_eq!(
        winding_number(&[pt(0.0, 0.0), pt(4.0, 4.0)], pt(2.0, 1.0)),
        0
    );
}
