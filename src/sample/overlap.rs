use crate::{foundation::core::Point, geom::flatten::Containment};

/// Samples per axis for the coverage estimate.
pub const OVERLAP_GRID: u32 = 5;

/// Percentage (0..=100) of a 5×5 sample grid over the cell that lies inside `path`.
pub fn cell_overlap_percent<C: Containment + ?Sized>(cell_x: i32, cell_y: i32, path: &C) -> f64 {
    let ox = f64::from(cell_x);
    let oy = f64::from(cell_y);
    let n = f64::from(OVERLAP_GRID);
    let mut inside = 0u32;
    for j in 0..OVERLAP_GRID {
        for i in 0..OVERLAP_GRID {
            let p = Point::new(
                ox + (f64::from(i) + 0.5) / n,
                oy + (f64::from(j) + 0.5) / n,
            );
            if path.contains_point(p) {
                inside += 1;
            }
        }
    }
    100.0 * f64::from(inside) / f64::from(OVERLAP_GRID * OVERLAP_GRID)
}

/// Cell-center containment; the cheapest test, used by constant fill.
pub fn is_cell_inside<C: Containment + ?Sized>(cell_x: i32, cell_y: i32, path: &C) -> bool {
    path.contains_point(Point::new(
        f64::from(cell_x) + 0.5,
        f64::from(cell_y) + 0.5,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/sample/overlap.rs"]
mod tests;
