//! Error types shared across the crate

use thiserror::Error;

/// A name or file extension that is not a supported spreadsheet format
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown sheet format '{name}' (expected 'xls' or 'xlsx')")]
pub struct UnknownFormat {
    pub name: String,
}

impl UnknownFormat {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
