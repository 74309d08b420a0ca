use std::fmt;

use crate::{foundation::core::Point, geom::flatten::Containment};

/// One of the nine fixed sub-cell regions of a 3×3 subdivision.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum RegionName {
    /// Top-left.
    TL,
    /// Top-center.
    TC,
    /// Top-right.
    TR,
    /// Middle-left.
    ML,
    /// Middle-center.
    MC,
    /// Middle-right.
    MR,
    /// Bottom-left.
    BL,
    /// Bottom-center.
    BC,
    /// Bottom-right.
    BR,
}

impl RegionName {
    /// All regions in row-major order.
    pub const ALL: [RegionName; 9] = [
        Self::TL,
        Self::TC,
        Self::TR,
        Self::ML,
        Self::MC,
        Self::MR,
        Self::BL,
        Self::BC,
        Self::BR,
    ];

    fn index(self) -> u16 {
        self as u16
    }

    /// Column (0..3) of the region inside its cell.
    pub fn column(self) -> u8 {
        (self.index() % 3) as u8
    }

    /// Row (0..3) of the region inside its cell.
    pub fn row(self) -> u8 {
        (self.index() / 3) as u8
    }

    /// Sample offset of the region center, relative to the cell's top-left corner.
    pub fn sample_offset(self) -> (f64, f64) {
        (
            (2.0 * f64::from(self.column()) + 1.0) / 6.0,
            (2.0 * f64::from(self.row()) + 1.0) / 6.0,
        )
    }

    /// Short label (`"TL"` .. `"BR"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TL => "TL",
            Self::TC => "TC",
            Self::TR => "TR",
            Self::ML => "ML",
            Self::MC => "MC",
            Self::MR => "MR",
            Self::BL => "BL",
            Self::BC => "BC",
            Self::BR => "BR",
        }
    }
}

/// Set of covered regions, stored as a 9-bit mask.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionSet(u16);

impl RegionSet {
    /// No regions.
    pub const EMPTY: RegionSet = RegionSet(0);
    /// All nine regions.
    pub const FULL: RegionSet = RegionSet(0x1FF);

    /// Build from a list of names; duplicates collapse.
    pub fn from_names(names: &[RegionName]) -> Self {
        names.iter().copied().collect()
    }

    /// Raw mask, bit `i` set for `RegionName::ALL[i]`.
    pub fn bits(self) -> u16 {
        self.0
    }

    /// Build from a raw mask; bits above the ninth are dropped.
    pub fn from_bits(bits: u16) -> Self {
        Self(bits & Self::FULL.0)
    }

    /// Add a region.
    pub fn insert(&mut self, r: RegionName) {
        self.0 |= 1 << r.index();
    }

    /// Membership test.
    pub fn contains(self, r: RegionName) -> bool {
        self.0 & (1 << r.index()) != 0
    }

    /// Number of covered regions.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// `true` when no region is covered.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Covered regions in row-major order.
    pub fn iter(self) -> impl Iterator<Item = RegionName> {
        RegionName::ALL.into_iter().filter(move |r| self.contains(*r))
    }
}

impl FromIterator<RegionName> for RegionSet {
    fn from_iter<I: IntoIterator<Item = RegionName>>(iter: I) -> Self {
        let mut s = Self::EMPTY;
        for r in iter {
            s.insert(r);
        }
        s
    }
}

impl fmt::Debug for RegionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl serde::Serialize for RegionSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> serde::Deserialize<'de> for RegionSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = Vec::<RegionName>::deserialize(deserializer)?;
        Ok(names.into_iter().collect())
    }
}

/// Which of the nine regions of cell `(cell_x, cell_y)` have their center sample inside `path`.
///
/// Each region is binary: covered iff its single center sample is inside.
pub fn detect_regions<C: Containment + ?Sized>(cell_x: i32, cell_y: i32, path: &C) -> RegionSet {
    let ox = f64::from(cell_x);
    let oy = f64::from(cell_y);
    RegionName::ALL
        .into_iter()
        .filter(|r| {
            let (dx, dy) = r.sample_offset();
            path.contains_point(Point::new(ox + dx, oy + dy))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/sample/regions.rs"]
mod tests;
