//! Remapping canonical angles into the range each spreadsheet format accepts.
//!
//! XLS rejects rotations outside `[-90, 90]`. XLSX writers mishandle negative
//! rotations, so XLSX angles are folded into `[0, 180]` instead, where values
//! above 90 encode a downward tilt. Each format carries a table of bands; an
//! angle inside a band is remapped by that band's rule and an angle outside
//! every band collapses to [`NO_ROTATION`].

use std::fmt;
use std::ops::Bound::{self, Excluded, Included};
use std::ops::RangeBounds;
use std::str::FromStr;

use log::info;

use super::angle::{parse_rotation, NO_ROTATION};
use crate::error::UnknownFormat;

/// How an angle inside a band is rewritten
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Remap {
    /// Keep the angle as is
    Keep,
    /// Add a fixed offset: `angle + offset`
    Shift(f32),
    /// Add an offset and drop the sign: `|angle + offset|`
    ShiftAbs(f32),
    /// Reflect about a pivot: `pivot - angle`
    Mirror(f32),
}

impl Remap {
    /// Rewrite an angle already known to lie inside the band
    pub fn apply(self, angle: f32) -> f32 {
        match self {
            Remap::Keep => angle,
            Remap::Shift(offset) => angle + offset,
            Remap::ShiftAbs(offset) => (angle + offset).abs(),
            Remap::Mirror(pivot) => pivot - angle,
        }
    }
}

/// A span of canonical angles sharing one remap rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub lower: Bound<f32>,
    pub upper: Bound<f32>,
    pub remap: Remap,
}

impl Band {
    const fn new(lower: Bound<f32>, upper: Bound<f32>, remap: Remap) -> Self {
        Self {
            lower,
            upper,
            remap,
        }
    }

    pub fn contains(&self, angle: f32) -> bool {
        (self.lower, self.upper).contains(&angle)
    }
}

const XLS_BANDS: &[Band] = &[
    Band::new(Included(-90.0), Included(90.0), Remap::Keep),
    Band::new(Included(270.0), Excluded(360.0), Remap::Shift(-360.0)),
    Band::new(Excluded(-360.0), Included(-270.0), Remap::Shift(360.0)),
];

const XLSX_BANDS: &[Band] = &[
    Band::new(Included(0.0), Included(90.0), Remap::Keep),
    Band::new(Included(-90.0), Excluded(0.0), Remap::ShiftAbs(-90.0)),
    Band::new(Included(270.0), Excluded(360.0), Remap::Mirror(450.0)),
];

/// Target spreadsheet encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetFormat {
    /// Legacy binary workbook
    Xls,
    /// XML-based workbook
    Xlsx,
}

impl SheetFormat {
    pub const ALL: [SheetFormat; 2] = [SheetFormat::Xls, SheetFormat::Xlsx];

    /// Closed interval of degrees the format can store
    pub fn accepted_range(self) -> (f32, f32) {
        match self {
            SheetFormat::Xls => (-90.0, 90.0),
            SheetFormat::Xlsx => (0.0, 180.0),
        }
    }

    /// The remap table, checked in order
    pub fn bands(self) -> &'static [Band] {
        match self {
            SheetFormat::Xls => XLS_BANDS,
            SheetFormat::Xlsx => XLSX_BANDS,
        }
    }

    /// Remap a canonical angle into [`accepted_range`](Self::accepted_range).
    pub fn map_angle(self, angle: f32) -> f32 {
        let mapped = self
            .bands()
            .iter()
            .find(|band| band.contains(angle))
            .map(|band| band.remap.apply(angle))
            .unwrap_or(NO_ROTATION);

        info!("{}", self.remap_message(angle, mapped));
        mapped
    }

    /// The diagnostic logged by [`map_angle`](Self::map_angle)
    pub fn remap_message(self, requested: f32, mapped: f32) -> String {
        let (lower, upper) = self.accepted_range();
        format!(
            "Requested rotation of {} degrees will be mapped to {}, to comply to the {} accepted range of [{},{}] degrees",
            requested, mapped, self, lower, upper
        )
    }

    /// Parse a rotation specification and remap it for this format
    pub fn map_rotation(self, spec: Option<&str>) -> f32 {
        self.map_angle(parse_rotation(spec))
    }

    /// Lowercase file extension without the dot
    pub fn extension(self) -> &'static str {
        match self {
            SheetFormat::Xls => "xls",
            SheetFormat::Xlsx => "xlsx",
        }
    }

    /// Infer the format from a file name's extension, ignoring case
    pub fn from_extension(path: &std::path::Path) -> Result<Self, UnknownFormat> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        ext.parse()
            .map_err(|_| UnknownFormat::new(path.display().to_string()))
    }
}

impl fmt::Display for SheetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetFormat::Xls => f.write_str("XLS"),
            SheetFormat::Xlsx => f.write_str("XLSX"),
        }
    }
}

impl FromStr for SheetFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("xls") {
            Ok(SheetFormat::Xls)
        } else if s.eq_ignore_ascii_case("xlsx") {
            Ok(SheetFormat::Xlsx)
        } else {
            Err(UnknownFormat::new(s))
        }
    }
}

/// Parse a specification and fold it into `[-90, 90]` for XLS output
pub fn map_to_xls_range(spec: Option<&str>) -> f32 {
    SheetFormat::Xls.map_rotation(spec)
}

/// Parse a specification and fold it into `[0, 180]` for XLSX output
pub fn map_to_xlsx_range(spec: Option<&str>) -> f32 {
    SheetFormat::Xlsx.map_rotation(spec)
}
