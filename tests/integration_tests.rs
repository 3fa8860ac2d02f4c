//! Integration tests for content-box metrics on box trees loaded from TOML

use std::path::Path;

use pretty_assertions::assert_eq;

use report_rotation::report::box_report;
use report_rotation::{
    content_height, content_width, BoxDefinition, BoxNode, BoxTree, LoadError,
    StaticBoxLayoutProperties,
};

fn load_invoice() -> BoxTree {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/invoice.toml");
    BoxTree::from_file(&path).expect("fixture should load")
}

/// (content width, content height) for a named box
fn extents(tree: &BoxTree, name: &str) -> (i64, i64) {
    let id = tree.lookup(name);
    assert!(id.is_some(), "{} should exist", name);
    (content_width(tree, id), content_height(tree, id))
}

#[test]
fn test_fixture_extents() {
    let tree = load_invoice();

    assert_eq!(extents(&tree, "header-band"), (398, 108));
    // own padding, parent border and margin
    assert_eq!(extents(&tree, "header-cell"), (374, 78));
    // only the parent's padding; the grandparent border is out of reach
    assert_eq!(extents(&tree, "footnote"), (196, 20));
}

#[test]
fn test_fixture_rotations() {
    let tree = load_invoice();
    let cell = tree.lookup("header-cell");
    let note = tree.lookup("footnote");

    assert!(tree.is_vertical_orientation(cell));
    assert_eq!(tree.rotation(note), -30.0);
    assert!(!tree.is_vertical_orientation(note));
    assert!(!tree.is_horizontal_orientation(note));
}

#[test]
fn test_fixture_report() {
    let tree = load_invoice();
    let ids: Vec<_> = tree.ids().collect();

    insta::assert_snapshot!(box_report(&tree, &ids), @r"
    header-cell: content 374x78, rotation 90.0 (vertical)
    header-band: content 398x108, rotation 0.0 (horizontal)
    footnote: content 196x20, rotation -30.0 (oblique)
    ");
}

#[test]
fn test_missing_file_is_io_error() {
    let err = BoxTree::from_file(Path::new("tests/fixtures/does-not-exist.toml")).unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}

#[test]
fn test_null_box_is_zero() {
    let tree = load_invoice();
    assert_eq!(content_height(&tree, None), 0);
    assert_eq!(content_width(&tree, None), 0);
}

#[test]
fn test_parent_border_fills_in_for_collapsed_child() {
    let mut tree = BoxTree::new();
    let parent = tree.add(BoxNode::new(0, 0).with_static_properties(StaticBoxLayoutProperties {
        border_top: 5,
        ..Default::default()
    }));
    let child = tree.add(
        BoxNode::new(0, 100)
            .with_parent(parent)
            .with_box_definition(BoxDefinition {
                padding_top: 10,
                ..Default::default()
            }),
    );

    assert_eq!(content_height(&tree, Some(child)), 100 - 10 - 5);
}

#[test]
fn test_tree_is_shareable_across_threads() {
    let tree = std::sync::Arc::new(load_invoice());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let tree = std::sync::Arc::clone(&tree);
            std::thread::spawn(move || extents(&tree, "header-cell"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), (374, 78));
    }
}
