//! Error types for menuify.

use thiserror::Error;

use crate::types::{Axis, ContentRect, Viewport};

/// Errors returned by a single render invocation.
///
/// None of these leave the [`Grid`](crate::Grid) in a bad state; fix the
/// configuration and render again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Border style identifier not in the catalog.
    #[error("unknown border style: {0:?}")]
    UnknownStyle(String),

    /// Console size could not be determined in auto mode.
    #[error("console viewport unavailable: {0}")]
    ViewportUnavailable(String),

    /// Margins leave a negative content dimension.
    #[error("margins overflow the viewport: content {axis} would be {value}")]
    MarginOverflow { axis: Axis, value: i32 },

    /// Content rectangle too small to hold a border.
    #[error("content rectangle {width}x{height} is too small for a border (minimum 2x2)")]
    DegenerateRectangle { width: u16, height: u16 },

    /// Internal consistency check; margin validation let a bad rect through.
    #[error("content rectangle {rect} exceeds the {viewport} viewport")]
    RectangleOutOfBounds { rect: ContentRect, viewport: Viewport },
}

/// Errors loading a grid configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed TOML.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Well-formed config describing an invalid grid.
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Errors compiling a launcher project.
#[derive(Debug, Error)]
pub enum CompileError {
    /// Project has nothing to compile.
    #[error("the project {project:?} does not contain any buttons to be processed, aborting")]
    NoButtons { project: String },

    /// Button id would not name a file inside the output directory.
    #[error("button id {id:?} is not a plain file name")]
    InvalidButtonId { id: String },

    /// IO error writing scripts or the manifest.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Project or manifest (de)serialization failed.
    #[error("invalid project data: {0}")]
    Json(#[from] serde_json::Error),
}

impl CompileError {
    /// Numeric error code reported to the user.
    pub fn code(&self) -> u32 {
        match self {
            Self::NoButtons { .. } => 1302,
            Self::InvalidButtonId { .. } => 1303,
            Self::Io(_) => 1300,
            Self::Json(_) => 1301,
        }
    }
}
