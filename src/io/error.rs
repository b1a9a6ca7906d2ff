//! Error types for configuration, rendering and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all apparatus operations
#[derive(Debug)]
pub enum ApparatusError {
    /// Generation or animation parameter validation failed
    InvalidConfiguration {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A part refers to a color the palette does not define
    InvalidColorIndex {
        /// The offending color id
        index: usize,
        /// Number of colors in the palette
        palette_size: usize,
    },

    /// Nothing to render because the apparatus has no parts
    EmptyApparatus,

    /// Failed to parse a settings file
    ConfigParse {
        /// Path to the settings file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for ApparatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid configuration '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidColorIndex {
                index,
                palette_size,
            } => {
                write!(
                    f,
                    "Color id {index} is out of bounds (palette has {palette_size} colors)"
                )
            }
            Self::EmptyApparatus => write!(f, "Apparatus contains no parts"),
            Self::ConfigParse { path, source } => {
                write!(
                    f,
                    "Failed to parse settings '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ApparatusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ConfigParse { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for apparatus results
pub type Result<T> = std::result::Result<T, ApparatusError>;

impl From<std::io::Error> for ApparatusError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid configuration error
pub fn invalid_configuration(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ApparatusError {
    ApparatusError::InvalidConfiguration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Wrap an I/O error with the path and operation it occurred in
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> ApparatusError {
    ApparatusError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
