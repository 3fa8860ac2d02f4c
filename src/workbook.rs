//! Workbook handles and their encoding discriminators

use std::path::{Path, PathBuf};

use crate::error::UnknownFormat;
use crate::rotation::SheetFormat;

/// An opaque workbook owned by whatever writes the spreadsheet.
///
/// The only thing this crate needs to know about it is which encoding it
/// will be serialized to.
pub trait Workbook {
    fn format(&self) -> SheetFormat;
}

impl Workbook for SheetFormat {
    fn format(&self) -> SheetFormat {
        *self
    }
}

/// A workbook identified by its output path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkbookHandle {
    path: PathBuf,
    format: SheetFormat,
}

impl WorkbookHandle {
    /// Create a handle, inferring the encoding from the file extension
    pub fn for_path(path: impl Into<PathBuf>) -> Result<Self, UnknownFormat> {
        let path = path.into();
        let format = SheetFormat::from_extension(&path)?;
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Workbook for WorkbookHandle {
    fn format(&self) -> SheetFormat {
        self.format
    }
}

/// True only for a present, legacy binary workbook
pub fn is_xls_type(workbook: Option<&dyn Workbook>) -> bool {
    workbook.is_some_and(|w| w.format() == SheetFormat::Xls)
}

/// True only for a present, XML-based workbook
pub fn is_xlsx_type(workbook: Option<&dyn Workbook>) -> bool {
    workbook.is_some_and(|w| w.format() == SheetFormat::Xlsx)
}
