use std::collections::BTreeSet;

use super::*;
use crate::sample::regions::RegionName::{self, *};

fn set(names: &[RegionName]) -> RegionSet {
    RegionSet::from_names(names)
}

#[test]
fn builtin_lookups_follow_the_tables() {
    assert_eq!(character_for("block", set(&[TL])), '▘');
    assert_eq!(character_for("block", RegionSet::FULL), '█');
    assert_eq!(character_for("ansi", RegionSet::FULL), '#');
    assert_eq!(character_for("block", set(&[TL, TC, TR, ML, MC, MR])), '▀');
    assert_eq!(character_for("line", set(&[ML, MC, MR])), '─');
}

#[test]
fn unknown_palette_and_unmatched_set_fall_back_to_blank() {
    assert_eq!(character_for("nonexistent-palette", RegionSet::EMPTY), ' ');
    assert_eq!(character_for("nonexistent-palette", RegionSet::FULL), ' ');
    // {TL, BR} is not in the block table.
    assert_eq!(character_for("block", set(&[TL, BR])), ' ');
}

#[test]
fn lookup_is_exact_not_subset() {
    // {TL, TC} is a subset of the TL quadrant and of the top row, yet matches neither.
    let block = BuiltinPalette::Block.palette();
    assert_eq!(block.lookup(set(&[TL, TC])), None);
    assert_eq!(block.lookup(set(&[TL, TC, ML, MC])), Some('▘'));
}

#[test]
fn every_builtin_maps_empty_to_blank_and_has_unique_sets() {
    for builtin in BuiltinPalette::ALL {
        let p = builtin.palette();
        assert_eq!(p.lookup(RegionSet::EMPTY), Some(' '), "{}", p.id);
        assert!(p.lookup(RegionSet::FULL).is_some(), "{}", p.id);
        let distinct: BTreeSet<u16> = p.patterns.iter().map(|r| r.regions.bits()).collect();
        assert_eq!(distinct.len(), p.patterns.len(), "{}", p.id);
        assert_eq!(BuiltinPalette::from_id(builtin.id()), Some(builtin));
    }
    assert_eq!(BuiltinPalette::from_id("Block"), None);
}

#[test]
fn duplicate_sets_resolve_by_priority_then_order() {
    let pat = |character, priority| RegionPattern {
        regions: set(&[MC]),
        character,
        priority,
    };
    let p = Palette {
        id: "dup".to_string(),
        name: "Dup".to_string(),
        description: String::new(),
        patterns: vec![pat('a', 1), pat('b', 5), pat('c', 5), pat('d', 2)],
        ramp: String::new(),
    };
    assert_eq!(p.lookup(set(&[MC])), Some('b'));
}

#[test]
fn register_rejects_duplicates_and_empty_tables() {
    let mut cat = PaletteCatalog::builtin();
    let n = cat.len();
    let custom = Palette {
        id: "dots".to_string(),
        name: "Dots".to_string(),
        description: "single dot".to_string(),
        patterns: vec![RegionPattern {
            regions: RegionSet::FULL,
            character: 'o',
            priority: 0,
        }],
        ramp: String::new(),
    };
    cat.register(custom.clone()).unwrap();
    assert_eq!(cat.len(), n + 1);
    assert_eq!(cat.character_for("dots", RegionSet::FULL), 'o');
    assert!(cat.register(custom).is_err());

    let empty = Palette {
        id: "nothing".to_string(),
        name: "Nothing".to_string(),
        description: String::new(),
        patterns: vec![],
        ramp: String::new(),
    };
    assert!(cat.register(empty).is_err());
    assert!(PaletteCatalog::empty().is_empty());
}

#[test]
fn ramp_falls_back_to_default() {
    let mut p = BuiltinPalette::Ansi.palette();
    assert_eq!(p.ramp_chars().first(), Some(&' '));
    p.ramp = "x".to_string();
    assert_eq!(p.ramp_chars(), DEFAULT_RAMP.chars().collect::<Vec<_>>());
    assert_eq!(BuiltinPalette::Block.palette().ramp_chars().last(), Some(&'█'));
}

#[test]
fn palette_json_round_trip_keeps_patterns() {
    let json = r#"{
        "id": "tiny",
        "name": "Tiny",
        "patterns": [
            { "regions": [], "character": " " },
            { "regions": ["TL", "TC", "TR"], "character": "=", "priority": 3 }
        ]
    }"#;
    let p: Palette = serde_json::from_str(json).unwrap();
    assert_eq!(p.description, "");
    assert_eq!(p.lookup(set(&[TL, TC, TR])), Some('='));
    assert_eq!(p.patterns[1].priority, 3);
}
