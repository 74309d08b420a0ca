use super::*;
use crate::curve::anchor::AnchorId;
use crate::foundation::core::{Point, Vec2};
use crate::palette::registry::RegionPattern;
use crate::sample::regions::RegionSet;

const SQUARE: &str = r#"{
    "canvas": { "width": 10, "height": 6 },
    "curve": {
        "anchors": [
            { "id": 0, "position": [1.0, 1.0] },
            { "id": 1, "position": [5.0, 1.0] },
            { "id": 2, "position": [5.0, 4.0] },
            { "id": 3, "position": [1.0, 4.0] }
        ],
        "closed": true
    }
}"#;

#[test]
fn minimal_document_uses_default_settings() {
    let doc = ShapeDocument::from_json(SQUARE).unwrap();
    assert_eq!(doc.canvas, GridSize::new(10, 6));
    assert_eq!(doc.curve.len(), 4);
    assert!(doc.curve.closed);
    assert_eq!(doc.settings, RasterSettings::default());
    assert!(doc.palettes.is_empty());
    doc.validate().unwrap();

    let diff = doc.rasterize().unwrap();
    assert_eq!(diff.len(), 12);
    assert!(diff.iter().all(|(_, c)| c.ch == '█'));
}

#[test]
fn handles_are_optional_offsets() {
    let doc = ShapeDocument::from_json(
        r#"{
            "canvas": { "width": 8, "height": 8 },
            "curve": {
                "anchors": [
                    { "id": 7, "position": [1.0, 1.0], "handle_out": [2.0, 0.0] },
                    { "id": 9, "position": [6.0, 6.0], "handle_in": [0.0, -2.0] }
                ]
            }
        }"#,
    )
    .unwrap();
    assert!(!doc.curve.closed);
    let a = doc.curve.anchor(AnchorId(7)).unwrap();
    assert_eq!(a.handle_out_point(), Some(Point::new(3.0, 1.0)));
    assert_eq!(a.handle_in, None);
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = ShapeDocument::from_json("{ \"canvas\": 3 }").unwrap_err();
    assert!(matches!(err, CellcurveError::Serde(_)), "{err}");
}

#[test]
fn missing_file_reports_the_path() {
    let err = ShapeDocument::from_path("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, CellcurveError::Other(_)));
    assert!(format!("{err:#}").contains("/definitely/not/here.json"));
}

#[test]
fn zero_canvas_is_rejected() {
    let mut doc = ShapeDocument::from_json(SQUARE).unwrap();
    doc.canvas = GridSize::new(0, 6);
    assert!(matches!(doc.validate(), Err(CellcurveError::Validation(_))));
    assert!(doc.rasterize().is_err());
}

#[test]
fn non_finite_anchor_is_rejected() {
    let mut doc = ShapeDocument::from_json(SQUARE).unwrap();
    doc.curve.set_handles(AnchorId(1), Some(Vec2::new(f64::NAN, 0.0)), None);
    let err = doc.validate().unwrap_err();
    assert!(err.to_string().contains("anchor 1"), "{err}");
}

#[test]
fn unknown_palette_is_allowed() {
    let mut doc = ShapeDocument::from_json(SQUARE).unwrap();
    doc.settings.palette_id = "missing".to_string();
    doc.validate().unwrap();
    let diff = doc.rasterize().unwrap();
    assert_eq!(diff.len(), 12);
    assert!(diff.iter().all(|(_, c)| c.ch == ' '));
}

#[test]
fn custom_palettes_join_the_catalog() {
    let mut doc = ShapeDocument::from_json(SQUARE).unwrap();
    doc.settings.palette_id = "hash".to_string();
    doc.palettes.push(Palette {
        id: "hash".to_string(),
        name: "Hash".to_string(),
        description: String::new(),
        patterns: vec![RegionPattern {
            regions: RegionSet::FULL,
            character: 'H',
            priority: 0,
        }],
        ramp: String::new(),
    });
    let catalog = doc.catalog().unwrap();
    assert!(catalog.get("hash").is_some());
    assert!(catalog.get("block").is_some());
    assert!(doc.rasterize().unwrap().iter().all(|(_, c)| c.ch == 'H'));

    // Shadowing a built-in id is refused.
    doc.palettes[0].id = "block".to_string();
    assert!(doc.catalog().is_err());
}

#[test]
fn pretty_json_reloads_identically() {
    let doc = ShapeDocument::from_json(SQUARE).unwrap();
    let text = doc.to_json_pretty().unwrap();
    assert!(!text.contains("palettes"));
    assert_eq!(ShapeDocument::from_json(&text).unwrap(), doc);
}
