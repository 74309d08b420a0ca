pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Dimensions of the character grid, in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct GridSize {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl GridSize {
    /// Construct a grid size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `true` when the grid has no addressable cells.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Total number of cells.
    pub fn area(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Integer grid coordinate of one cell (top-left origin, `y` grows downward).
///
/// Ordering is row-major (`y` first) so ordered maps iterate the way a grid is read.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct CellCoord {
    /// Row.
    pub y: u32,
    /// Column.
    pub x: u32,
}

impl CellCoord {
    /// Construct a coordinate from column and row.
    pub fn new(x: u32, y: u32) -> Self {
        Self { y, x }
    }
}
