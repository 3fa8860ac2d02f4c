//! Plain-text summaries printed by the command line tool

use crate::layout::{BoxId, BoxTree};
use crate::rotation::{
    parse_rotation, rotation_as_string, CellRotation, Orientation, RotationMatrix, SheetFormat,
};

/// Summarize how a rotation specification resolves for each format.
///
/// ```rust
/// use report_rotation::report::rotation_report;
/// use report_rotation::SheetFormat;
///
/// let text = rotation_report(Some("right"), &[SheetFormat::Xlsx]);
/// assert!(text.contains("xlsx: 180.0"));
/// ```
pub fn rotation_report(spec: Option<&str>, formats: &[SheetFormat]) -> String {
    let angle = parse_rotation(spec);

    let mut lines = vec![
        format!("spec: {}", spec.unwrap_or("<none>")),
        format!("angle: {}", rotation_as_string(angle)),
        format!("orientation: {}", Orientation::of(angle)),
        format!("matrix: {}", RotationMatrix::for_angle(angle)),
    ];
    for format in formats {
        let cell = CellRotation::from_angle(angle, *format);
        lines.push(format!("{}: {}", format.extension(), cell));
    }

    lines.join("\n")
}

/// One line per box: content extents and rotation
pub fn box_report(tree: &BoxTree, ids: &[BoxId]) -> String {
    ids.iter()
        .map(|id| {
            let name = tree
                .name_of(*id)
                .map(str::to_string)
                .unwrap_or_else(|| format!("#{}", id.0));
            let angle = tree.rotation(Some(*id));
            format!(
                "{}: content {}x{}, rotation {} ({})",
                name,
                tree.content_width(Some(*id)),
                tree.content_height(Some(*id)),
                rotation_as_string(angle),
                Orientation::of(angle),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{BoxDefinition, BoxNode};

    #[test]
    fn test_rotation_report_for_both_formats() {
        let report = rotation_report(Some("left"), &SheetFormat::ALL);
        insta::assert_snapshot!(report, @r"
        spec: left
        angle: 90.0
        orientation: vertical
        matrix: [0, 1, -1, 0]
        xls: 90.0
        xlsx: 90.0
        ");
    }

    #[test]
    fn test_rotation_report_out_of_band() {
        let report = rotation_report(Some("135"), &[SheetFormat::Xls]);
        assert!(report.contains("orientation: oblique"));
        assert!(report.ends_with("xls: 0.0"));
    }

    #[test]
    fn test_rotation_report_without_spec() {
        let report = rotation_report(None, &[]);
        insta::assert_snapshot!(report, @r"
        spec: <none>
        angle: 0.0
        orientation: horizontal
        matrix: [0, 0, 0, 0]
        ");
    }

    #[test]
    fn test_box_report_names_boxes() {
        let mut tree = BoxTree::new();
        let named = tree.add_named(
            "title",
            BoxNode::new(100, 40)
                .with_box_definition(BoxDefinition::uniform(5))
                .with_rotation("right"),
        );
        let anonymous = tree.add(BoxNode::new(10, 10));

        let report = box_report(&tree, &[named, anonymous]);
        insta::assert_snapshot!(report, @r"
        title: content 90x30, rotation -90.0 (vertical)
        #1: content 10x10, rotation 0.0 (horizontal)
        ");
    }
}
