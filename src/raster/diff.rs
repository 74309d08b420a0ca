use std::collections::{BTreeMap, HashMap};

use crate::foundation::core::{CellCoord, GridSize};

/// One emitted grid cell.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Cell {
    /// Display character.
    pub ch: char,
    /// Foreground color, passed through unmodified.
    pub color: String,
    /// Background color, passed through unmodified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
}

/// Flat JSON form of one diff entry.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CellEntry {
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
    /// Display character.
    pub ch: char,
    /// Foreground color.
    pub color: String,
    /// Background color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
}

/// Destination a diff can be merged into (the live canvas, a preview layer, ...).
pub trait CellStore {
    /// Overwrite the cell at `at`.
    fn put_cell(&mut self, at: CellCoord, cell: Cell);
}

impl CellStore for BTreeMap<CellCoord, Cell> {
    fn put_cell(&mut self, at: CellCoord, cell: Cell) {
        self.insert(at, cell);
    }
}

impl CellStore for HashMap<CellCoord, Cell> {
    fn put_cell(&mut self, at: CellCoord, cell: Cell) {
        self.insert(at, cell);
    }
}

/// Sparse rasterization result: coordinate → cell, iterated row-major.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "Vec<CellEntry>", into = "Vec<CellEntry>")]
pub struct CellDiff {
    cells: BTreeMap<CellCoord, Cell>,
}

impl CellDiff {
    /// Empty diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a cell, replacing any earlier value at the same coordinate.
    pub fn insert(&mut self, at: CellCoord, cell: Cell) {
        self.cells.insert(at, cell);
    }

    /// Cell at `(x, y)`, if emitted.
    pub fn get(&self, x: u32, y: u32) -> Option<&Cell> {
        self.cells.get(&CellCoord::new(x, y))
    }

    /// Number of emitted cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` when nothing was emitted.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Emitted cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellCoord, &Cell)> {
        self.cells.iter().map(|(k, v)| (*k, v))
    }

    /// Copy every cell into `store`. The diff stays usable afterwards.
    pub fn apply_to<S: CellStore + ?Sized>(&self, store: &mut S) {
        for (at, cell) in &self.cells {
            store.put_cell(*at, cell.clone());
        }
    }

    /// Plain-text preview of the diff over a `canvas`-sized grid.
    ///
    /// Cells the diff does not touch render as `blank`. Rows are joined with `\n`.
    pub fn to_text(&self, canvas: GridSize, blank: char) -> String {
        let mut out = String::with_capacity(canvas.area() as usize + canvas.height as usize);
        for y in 0..canvas.height {
            if y > 0 {
                out.push('\n');
            }
            for x in 0..canvas.width {
                out.push(self.get(x, y).map_or(blank, |c| c.ch));
            }
        }
        out
    }
}

impl From<Vec<CellEntry>> for CellDiff {
    fn from(entries: Vec<CellEntry>) -> Self {
        let mut diff = Self::new();
        for e in entries {
            diff.insert(
                CellCoord::new(e.x, e.y),
                Cell {
                    ch: e.ch,
                    color: e.color,
                    bg_color: e.bg_color,
                },
            );
        }
        diff
    }
}

impl From<CellDiff> for Vec<CellEntry> {
    fn from(diff: CellDiff) -> Self {
        diff.cells
            .into_iter()
            .map(|(at, c)| CellEntry {
                x: at.x,
                y: at.y,
                ch: c.ch,
                color: c.color,
                bg_color: c.bg_color,
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/diff.rs"]
mod tests;
