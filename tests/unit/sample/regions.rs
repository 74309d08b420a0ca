use super::*;
use crate::curve::anchor::Curve;
use crate::geom::flatten::FlattenedPath;
use super::RegionName::*;

fn rect_path(x0: f64, y0: f64, x1: f64, y1: f64) -> FlattenedPath {
    let c = Curve::polygon([
        Point::new(x0, y0),
        Point::new(x1, y0),
        Point::new(x1, y1),
        Point::new(x0, y1),
    ]);
    FlattenedPath::from_segments(&c.segments())
}

#[test]
fn sample_offsets_are_region_centers() {
    assert_eq!(TL.sample_offset(), (1.0 / 6.0, 1.0 / 6.0));
    assert_eq!(MC.sample_offset(), (3.0 / 6.0, 3.0 / 6.0));
    assert_eq!(BR.sample_offset(), (5.0 / 6.0, 5.0 / 6.0));
    assert_eq!(TR.sample_offset(), (5.0 / 6.0, 1.0 / 6.0));
    assert_eq!(BL.sample_offset(), (1.0 / 6.0, 5.0 / 6.0));
}

#[test]
fn top_two_thirds_square_yields_top_and_middle_rows() {
    let path = rect_path(3.0, 4.0, 4.0, 4.0 + 2.0 / 3.0);
    let got = detect_regions(3, 4, &path);
    assert_eq!(got, RegionSet::from_names(&[TL, TC, TR, ML, MC, MR]));
    assert_eq!(got.len(), 6);
}

#[test]
fn enclosing_shape_covers_all_nine() {
    let path = rect_path(-1.0, -1.0, 3.0, 3.0);
    assert_eq!(detect_regions(1, 1, &path), RegionSet::FULL);
    assert_eq!(detect_regions(5, 5, &path), RegionSet::EMPTY);
}

#[test]
fn left_third_and_single_corner() {
    let path = rect_path(0.0, 0.0, 1.0 / 3.0, 1.0);
    assert_eq!(detect_regions(0, 0, &path), RegionSet::from_names(&[TL, ML, BL]));

    let corner = rect_path(2.0 / 3.0, 2.0 / 3.0, 1.0, 1.0);
    assert_eq!(detect_regions(0, 0, &corner), RegionSet::from_names(&[BR]));
}

#[test]
fn region_set_bit_operations() {
    let mut s = RegionSet::EMPTY;
    assert!(s.is_empty());
    s.insert(MC);
    s.insert(MC);
    s.insert(TL);
    assert_eq!(s.len(), 2);
    assert!(s.contains(TL) && s.contains(MC) && !s.contains(BR));
    assert_eq!(s.iter().collect::<Vec<_>>(), vec![TL, MC]);
    assert_eq!(RegionSet::from_bits(0xFFFF), RegionSet::FULL);
    assert_eq!(RegionSet::FULL.len(), 9);
}

#[test]
fn region_set_serializes_as_name_list() {
    let s = RegionSet::from_names(&[BR, TL]);
    assert_eq!(serde_json::to_string(&s).unwrap(), r#"["TL","BR"]"#);
    let back: RegionSet = serde_json::from_str(r#"["BR","TL","TL"]"#).unwrap();
    assert_eq!(back, s);
    assert!(serde_json::from_str::<RegionSet>(r#"["XX"]"#).is_err());
}
