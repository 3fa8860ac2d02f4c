//! Rotation specifications for spreadsheet cells.
//!
//! A rotation arrives as a string (`"left"`, `"right"`, `"none"`, or a number
//! of degrees), is parsed into a canonical angle, and is then remapped into
//! the range the target spreadsheet format accepts.

pub mod angle;
pub mod cell;
pub mod lexer;
pub mod matrix;
pub mod range;

pub use angle::{
    has_rotation, is_horizontal_orientation, is_rotation_over_x_axis, is_valid_number,
    is_vertical_orientation, parse_rotation, rotation_as_string, Orientation, FULL_ROTATION,
    NO_ROTATION, ROTATE_LEFT, ROTATE_NONE, ROTATE_NULL, ROTATE_RIGHT,
};
pub use cell::CellRotation;
pub use matrix::{rotation_matrix, RotationMatrix};
pub use range::{map_to_xls_range, map_to_xlsx_range, Band, Remap, SheetFormat};
