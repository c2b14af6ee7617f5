use thiserror::Error;

/// Errors that can occur when interpreting translation data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringModelError {
    /// A file type tag was neither `proposed` nor `solution`.
    #[error("Unknown file type: {0}")]
    UnknownFileType(String),
}
