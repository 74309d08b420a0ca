//! Built-in palette data.
//!
//! Rows are `(regions, character, priority)`. Each region set appears at most once per
//! palette; sets not listed fall back to a blank.

use crate::sample::regions::RegionName::{self, BC, BL, BR, MC, ML, MR, TC, TL, TR};

pub(crate) type PatternRow = (&'static [RegionName], char, i32);

const FULL: &[RegionName] = &[TL, TC, TR, ML, MC, MR, BL, BC, BR];
const TOP_SIX: &[RegionName] = &[TL, TC, TR, ML, MC, MR];
const BOTTOM_SIX: &[RegionName] = &[ML, MC, MR, BL, BC, BR];
const LEFT_SIX: &[RegionName] = &[TL, TC, ML, MC, BL, BC];
const RIGHT_SIX: &[RegionName] = &[TC, TR, MC, MR, BC, BR];
const TOP_ROW: &[RegionName] = &[TL, TC, TR];
const MID_ROW: &[RegionName] = &[ML, MC, MR];
const BOTTOM_ROW: &[RegionName] = &[BL, BC, BR];
const LEFT_COL: &[RegionName] = &[TL, ML, BL];
const MID_COL: &[RegionName] = &[TC, MC, BC];
const RIGHT_COL: &[RegionName] = &[TR, MR, BR];
const DIAG_DOWN: &[RegionName] = &[TL, MC, BR];
const DIAG_UP: &[RegionName] = &[TR, MC, BL];
const CROSS: &[RegionName] = &[TC, ML, MC, MR, BC];
const SALTIRE: &[RegionName] = &[TL, TR, MC, BL, BR];
const QUAD_TL: &[RegionName] = &[TL, TC, ML, MC];
const QUAD_TR: &[RegionName] = &[TC, TR, MC, MR];
const QUAD_BL: &[RegionName] = &[ML, MC, BL, BC];
const QUAD_BR: &[RegionName] = &[MC, MR, BC, BR];
const TRI_TL: &[RegionName] = &[TL, TC, TR, ML, MC, BL];
const TRI_TR: &[RegionName] = &[TL, TC, TR, MC, MR, BR];
const TRI_BL: &[RegionName] = &[TL, ML, MC, BL, BC, BR];
const TRI_BR: &[RegionName] = &[TR, MC, MR, BL, BC, BR];
const NO_TL: &[RegionName] = &[TC, TR, ML, MC, MR, BL, BC, BR];
const NO_TR: &[RegionName] = &[TL, TC, ML, MC, MR, BL, BC, BR];
const NO_BL: &[RegionName] = &[TL, TC, TR, ML, MC, MR, BC, BR];
const NO_BR: &[RegionName] = &[TL, TC, TR, ML, MC, MR, BL, BC];
const NO_MC: &[RegionName] = &[TL, TC, TR, ML, MR, BL, BC, BR];

pub(crate) const BLOCK: &[PatternRow] = &[
    (&[], ' ', 0),
    (FULL, '█', 100),
    (NO_MC, '█', 95),
    (NO_BR, '▛', 90),
    (NO_BL, '▜', 90),
    (NO_TR, '▙', 90),
    (NO_TL, '▟', 90),
    (TOP_SIX, '▀', 80),
    (BOTTOM_SIX, '▄', 80),
    (LEFT_SIX, '▌', 80),
    (RIGHT_SIX, '▐', 80),
    (TRI_TL, '▛', 75),
    (TRI_TR, '▜', 75),
    (TRI_BL, '▙', 75),
    (TRI_BR, '▟', 75),
    (QUAD_TL, '▘', 60),
    (QUAD_TR, '▝', 60),
    (QUAD_BL, '▖', 60),
    (QUAD_BR, '▗', 60),
    (&[TL, TC, ML], '▘', 55),
    (&[TC, TR, MR], '▝', 55),
    (&[ML, BL, BC], '▖', 55),
    (&[MR, BC, BR], '▗', 55),
    (&[TL], '▘', 50),
    (&[TR], '▝', 50),
    (&[BL], '▖', 50),
    (&[BR], '▗', 50),
    (DIAG_DOWN, '▚', 45),
    (DIAG_UP, '▞', 45),
    (TOP_ROW, '▔', 40),
    (BOTTOM_ROW, '▁', 40),
    (LEFT_COL, '▏', 40),
    (RIGHT_COL, '▕', 40),
    (MID_ROW, '▬', 30),
    (MID_COL, '▮', 30),
    (&[MC], '▪', 20),
];

pub(crate) const BLOCK_RAMP: &str = " ░▒▓█";

pub(crate) const ANSI: &[PatternRow] = &[
    (&[], ' ', 0),
    (FULL, '#', 100),
    (NO_MC, '#', 95),
    (NO_TL, '#', 90),
    (NO_TR, '#', 90),
    (NO_BL, '#', 90),
    (NO_BR, '#', 90),
    (TOP_SIX, '"', 80),
    (BOTTOM_SIX, 'o', 80),
    (LEFT_SIX, '[', 80),
    (RIGHT_SIX, ']', 80),
    (TRI_TL, 'F', 75),
    (TRI_TR, '7', 75),
    (TRI_BL, 'L', 75),
    (TRI_BR, 'J', 75),
    (QUAD_TL, 'F', 60),
    (QUAD_TR, '7', 60),
    (QUAD_BL, 'L', 60),
    (QUAD_BR, 'J', 60),
    (CROSS, '+', 55),
    (SALTIRE, 'x', 55),
    (&[TL], '`', 50),
    (&[TR], '\'', 50),
    (&[BL], ',', 50),
    (&[BR], '.', 50),
    (DIAG_DOWN, '\\', 45),
    (DIAG_UP, '/', 45),
    (TOP_ROW, '~', 40),
    (MID_ROW, '-', 40),
    (BOTTOM_ROW, '_', 40),
    (LEFT_COL, '|', 40),
    (MID_COL, '|', 40),
    (RIGHT_COL, '|', 40),
    (&[MC], '*', 20),
];

pub(crate) const ANSI_RAMP: &str = " .:-=+*#%@";

pub(crate) const LINE: &[PatternRow] = &[
    (&[], ' ', 0),
    (FULL, '▓', 100),
    (TOP_SIX, '─', 80),
    (BOTTOM_SIX, '─', 80),
    (LEFT_SIX, '│', 80),
    (RIGHT_SIX, '│', 80),
    (CROSS, '┼', 70),
    (SALTIRE, '╳', 70),
    (&[ML, MC, MR, BC], '┬', 65),
    (&[TC, ML, MC, MR], '┴', 65),
    (&[TC, MC, MR, BC], '├', 65),
    (&[TC, ML, MC, BC], '┤', 65),
    (&[MC, MR, BC], '┌', 60),
    (&[ML, MC, BC], '┐', 60),
    (&[TC, MC, MR], '└', 60),
    (&[TC, ML, MC], '┘', 60),
    (DIAG_DOWN, '╲', 45),
    (DIAG_UP, '╱', 45),
    (TOP_ROW, '─', 40),
    (MID_ROW, '─', 40),
    (BOTTOM_ROW, '─', 40),
    (LEFT_COL, '│', 40),
    (MID_COL, '│', 40),
    (RIGHT_COL, '│', 40),
    (&[MC], '·', 20),
];

pub(crate) const LINE_RAMP: &str = " ·─━█";
