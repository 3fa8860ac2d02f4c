//! Report Rotation - cell rotation and content-box metrics for spreadsheet export
//!
//! This library normalizes the rotation requested for a report cell into the
//! angle each spreadsheet format can store, and measures the content box of
//! rendered layout nodes.
//!
//! Nothing here fails: malformed rotations resolve to no rotation and missing
//! boxes measure zero, so cosmetic problems never abort an export.
//!
//! # Example
//!
//! ```rust
//! use report_rotation::{map_to_xls_range, map_to_xlsx_range, parse_rotation};
//!
//! assert_eq!(parse_rotation(Some("right")), -90.0);
//! assert_eq!(map_to_xls_range(Some("right")), -90.0);
//! assert_eq!(map_to_xlsx_range(Some("right")), 180.0);
//! ```

pub mod error;
pub mod layout;
pub mod report;
pub mod rotation;
pub mod workbook;

pub use error::UnknownFormat;
pub use layout::{BoxDefinition, BoxId, BoxNode, BoxTree, LoadError, StaticBoxLayoutProperties};
pub use rotation::{
    has_rotation, is_horizontal_orientation, is_rotation_over_x_axis, is_valid_number,
    is_vertical_orientation, map_to_xls_range, map_to_xlsx_range, parse_rotation,
    rotation_as_string, rotation_matrix, CellRotation, Orientation, RotationMatrix, SheetFormat,
    NO_ROTATION,
};
pub use workbook::{is_xls_type, is_xlsx_type, Workbook, WorkbookHandle};

/// Content height of a box in `tree`; `0` when `id` is `None` or dangling
///
/// # Example
///
/// ```rust
/// use report_rotation::{content_height, BoxDefinition, BoxNode, BoxTree};
///
/// let mut tree = BoxTree::new();
/// let id = tree.add(BoxNode::new(200, 100).with_box_definition(BoxDefinition::uniform(10)));
///
/// assert_eq!(content_height(&tree, Some(id)), 80);
/// assert_eq!(content_height(&tree, None), 0);
/// ```
pub fn content_height(tree: &BoxTree, id: Option<BoxId>) -> i64 {
    tree.content_height(id)
}

/// Content width of a box in `tree`; `0` when `id` is `None` or dangling
pub fn content_width(tree: &BoxTree, id: Option<BoxId>) -> i64 {
    tree.content_width(id)
}
