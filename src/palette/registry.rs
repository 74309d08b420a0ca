use std::sync::OnceLock;

use crate::{
    foundation::error::{CellcurveError, CellcurveResult},
    palette::tables,
    sample::regions::RegionSet,
};

/// Character emitted whenever a lookup has no answer.
pub const FALLBACK_CHAR: char = ' ';

/// Density ramp used by graduated fill when a palette declares none.
pub const DEFAULT_RAMP: &str = " .:-=+*#%@";

/// Maps one exact coverage set to a display character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegionPattern {
    /// Region set this pattern matches exactly.
    pub regions: RegionSet,
    /// Character to emit.
    pub character: char,
    /// Tie-break among patterns sharing the same region set; higher wins.
    #[serde(default)]
    pub priority: i32,
}

/// Named, ordered pattern table.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    /// Lookup key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Patterns in declaration order.
    pub patterns: Vec<RegionPattern>,
    /// Sparse-to-dense characters for graduated fill; empty means [`DEFAULT_RAMP`].
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ramp: String,
}

impl Palette {
    /// Exact-set lookup.
    ///
    /// When several patterns carry the same set the highest priority wins and equal
    /// priorities resolve to the earliest declaration.
    pub fn lookup(&self, regions: RegionSet) -> Option<char> {
        let mut best: Option<&RegionPattern> = None;
        for p in self.patterns.iter().filter(|p| p.regions == regions) {
            if best.is_none_or(|b| p.priority > b.priority) {
                best = Some(p);
            }
        }
        best.map(|p| p.character)
    }

    /// Character for `regions`, or [`FALLBACK_CHAR`] when nothing matches.
    pub fn character_for(&self, regions: RegionSet) -> char {
        self.lookup(regions).unwrap_or(FALLBACK_CHAR)
    }

    /// Ramp characters used by graduated fill, at least two long.
    pub fn ramp_chars(&self) -> Vec<char> {
        let chars: Vec<char> = self.ramp.chars().collect();
        if chars.len() >= 2 {
            chars
        } else {
            DEFAULT_RAMP.chars().collect()
        }
    }

    fn validate(&self) -> CellcurveResult<()> {
        if self.id.trim().is_empty() {
            return Err(CellcurveError::validation("palette id must be non-empty"));
        }
        if self.patterns.is_empty() {
            return Err(CellcurveError::validation(format!(
                "palette '{}' must declare at least one pattern",
                self.id
            )));
        }
        Ok(())
    }
}

/// Palettes shipped with the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinPalette {
    /// Unicode quadrant and eighth blocks.
    Block,
    /// Printable ASCII only.
    Ansi,
    /// Box-drawing lines.
    Line,
}

impl BuiltinPalette {
    /// Every built-in, in catalog order.
    pub const ALL: [BuiltinPalette; 3] = [Self::Block, Self::Ansi, Self::Line];

    /// Registry id.
    pub fn id(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Ansi => "ansi",
            Self::Line => "line",
        }
    }

    /// Resolve an id to a built-in.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    /// Materialize the palette table.
    pub fn palette(self) -> Palette {
        let (name, description, table, ramp) = match self {
            Self::Block => (
                "Block",
                "Quadrant and edge block elements",
                tables::BLOCK,
                tables::BLOCK_RAMP,
            ),
            Self::Ansi => (
                "ANSI",
                "Plain ASCII characters that survive any terminal",
                tables::ANSI,
                tables::ANSI_RAMP,
            ),
            Self::Line => (
                "Line",
                "Box-drawing strokes for outlines and wireframes",
                tables::LINE,
                tables::LINE_RAMP,
            ),
        };
        Palette {
            id: self.id().to_string(),
            name: name.to_string(),
            description: description.to_string(),
            patterns: table
                .iter()
                .map(|&(regions, character, priority)| RegionPattern {
                    regions: RegionSet::from_names(regions),
                    character,
                    priority,
                })
                .collect(),
            ramp: ramp.to_string(),
        }
    }
}

/// Palette lookup table: the built-ins plus any registered custom palettes.
#[derive(Clone, Debug)]
pub struct PaletteCatalog {
    palettes: Vec<Palette>,
}

impl Default for PaletteCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PaletteCatalog {
    /// Catalog containing only the built-in palettes.
    pub fn builtin() -> Self {
        Self {
            palettes: BuiltinPalette::ALL.iter().map(|p| p.palette()).collect(),
        }
    }

    /// Catalog with no palettes at all.
    pub fn empty() -> Self {
        Self {
            palettes: Vec::new(),
        }
    }

    /// Append a palette. Ids must be unique within the catalog.
    pub fn register(&mut self, palette: Palette) -> CellcurveResult<()> {
        palette.validate()?;
        if self.get(&palette.id).is_some() {
            return Err(CellcurveError::validation(format!(
                "palette '{}' is already registered",
                palette.id
            )));
        }
        tracing::debug!(id = %palette.id, patterns = palette.patterns.len(), "registered palette");
        self.palettes.push(palette);
        Ok(())
    }

    /// Lookup by id.
    pub fn get(&self, id: &str) -> Option<&Palette> {
        self.palettes.iter().find(|p| p.id == id)
    }

    /// Registered palettes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Palette> {
        self.palettes.iter()
    }

    /// Number of registered palettes.
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    /// `true` when no palette is registered.
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    /// Character for `regions` in palette `palette_id`.
    ///
    /// An unknown id logs a warning and yields [`FALLBACK_CHAR`]; so does an unmatched set.
    pub fn character_for(&self, palette_id: &str, regions: RegionSet) -> char {
        match self.get(palette_id) {
            Some(p) => p.character_for(regions),
            None => {
                tracing::warn!(palette_id, "unknown palette id; emitting blanks");
                FALLBACK_CHAR
            }
        }
    }
}

fn builtin_catalog() -> &'static PaletteCatalog {
    static CATALOG: OnceLock<PaletteCatalog> = OnceLock::new();
    CATALOG.get_or_init(PaletteCatalog::builtin)
}

/// [`PaletteCatalog::character_for`] against the built-in palettes.
pub fn character_for(palette_id: &str, regions: RegionSet) -> char {
    builtin_catalog().character_for(palette_id, regions)
}

#[cfg(test)]
#[path = "../../tests/unit/palette/registry.rs"]
mod tests;
