//! Integration tests for rotation normalization across both sheet formats.
//!
//! These tests verify that:
//! - Keyword and numeric specifications parse to the same canonical angles
//! - Each format's band table is applied exactly, including the gaps
//! - Workbook handles pick the right table

use pretty_assertions::assert_eq;

use report_rotation::{
    is_rotation_over_x_axis, is_vertical_orientation, is_xls_type, is_xlsx_type,
    map_to_xls_range, map_to_xlsx_range, parse_rotation, rotation_matrix, CellRotation,
    SheetFormat, Workbook, WorkbookHandle,
};

/// Map a list of specs for one format
fn map_all(format: SheetFormat, specs: &[&str]) -> Vec<f32> {
    specs.iter().map(|s| format.map_rotation(Some(s))).collect()
}

#[test]
fn test_quarter_turn_keywords_match_numbers() {
    assert_eq!(parse_rotation(Some("left")), parse_rotation(Some("90")));
    assert_eq!(parse_rotation(Some("right")), parse_rotation(Some("-90")));
    assert_eq!(parse_rotation(Some("450")), 90.0);
    assert_eq!(parse_rotation(Some("-450")), -90.0);
}

#[test]
fn test_xls_mapping_across_a_full_turn() {
    let specs = ["-315", "-270", "-180", "-90", "0", "45", "90", "135", "180", "225", "270", "315"];
    assert_eq!(
        map_all(SheetFormat::Xls, &specs),
        vec![45.0, 90.0, 0.0, -90.0, 0.0, 45.0, 90.0, 0.0, 0.0, 0.0, -90.0, -45.0]
    );
}

#[test]
fn test_xlsx_mapping_across_a_full_turn() {
    let specs = ["-315", "-270", "-180", "-90", "0", "45", "90", "135", "180", "225", "270", "315"];
    assert_eq!(
        map_all(SheetFormat::Xlsx, &specs),
        vec![0.0, 0.0, 0.0, 180.0, 0.0, 45.0, 90.0, 0.0, 0.0, 0.0, 180.0, 135.0]
    );
}

#[test]
fn test_public_mapping_functions_parse_first() {
    assert_eq!(map_to_xls_range(Some("-450")), -90.0);
    assert_eq!(map_to_xlsx_range(Some("-450")), 180.0);
    assert_eq!(map_to_xls_range(Some("garbage")), 0.0);
    assert_eq!(map_to_xlsx_range(None), 0.0);
}

#[test]
fn test_vertical_text_matrix() {
    let angle = parse_rotation(Some("left"));
    assert!(is_rotation_over_x_axis(angle));
    assert!(is_vertical_orientation(angle));
    assert_eq!(rotation_matrix(angle).components(), [0.0, 1.0, -1.0, 0.0]);
}

#[test]
fn test_workbook_drives_format_choice() {
    let xls = WorkbookHandle::for_path("quarterly.xls").unwrap();
    let xlsx = WorkbookHandle::for_path("quarterly.xlsx").unwrap();

    assert!(is_xls_type(Some(&xls)));
    assert!(is_xlsx_type(Some(&xlsx)));
    assert_eq!(xls.format(), SheetFormat::Xls);

    let for_xls = CellRotation::for_workbook(Some("right"), Some(&xls)).unwrap();
    let for_xlsx = CellRotation::for_workbook(Some("right"), Some(&xlsx)).unwrap();
    assert_eq!(for_xls.degrees, -90.0);
    assert_eq!(for_xlsx.degrees, 180.0);
    assert_eq!(for_xls.matrix(), for_xlsx.matrix());
}
