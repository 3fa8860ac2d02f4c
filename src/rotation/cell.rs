//! The rotation value handed to a cell-style producer

use std::fmt;

use super::angle::{has_rotation, parse_rotation, rotation_as_string, Orientation};
use super::matrix::RotationMatrix;
use super::range::SheetFormat;
use crate::workbook::Workbook;

/// A requested rotation resolved against one output format
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRotation {
    /// Canonical angle parsed from the specification
    pub requested: f32,
    /// Format the angle was remapped for
    pub format: SheetFormat,
    /// Angle inside the format's accepted range
    pub degrees: f32,
}

impl CellRotation {
    /// Parse `spec` and remap it for `format`
    pub fn resolve(spec: Option<&str>, format: SheetFormat) -> Self {
        Self::from_angle(parse_rotation(spec), format)
    }

    /// Remap an already canonical angle for `format`
    pub fn from_angle(requested: f32, format: SheetFormat) -> Self {
        Self {
            requested,
            format,
            degrees: format.map_angle(requested),
        }
    }

    /// Resolve against a workbook's encoding; `None` when there is no workbook
    pub fn for_workbook(spec: Option<&str>, workbook: Option<&dyn Workbook>) -> Option<Self> {
        workbook.map(|w| Self::resolve(spec, w.format()))
    }

    /// Whether the stored cell angle rotates anything; out-of-band
    /// requests collapse to no rotation
    pub fn is_rotated(&self) -> bool {
        has_rotation(self.degrees)
    }

    /// Orientation of the requested angle, before remapping
    pub fn orientation(&self) -> Orientation {
        Orientation::of(self.requested)
    }

    /// Matrix of the requested angle, before remapping
    pub fn matrix(&self) -> RotationMatrix {
        RotationMatrix::for_angle(self.requested)
    }
}

impl fmt::Display for CellRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&rotation_as_string(self.degrees))
    }
}
