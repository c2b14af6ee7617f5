use thiserror::Error;

/// Errors that can occur when selecting a dimension.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DimensionError {
    /// No dimension is known by the requested name.
    #[error("Unknown dimension: {name}")]
    UnknownDimension {
        /// The name that was requested.
        name: String,
    },
}
