//! Error types for snip-tsv.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The part a column plays in a run, used to make shape and parse errors
/// point at the right flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Crop,
    PlotX,
    PlotY,
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnRole::Crop => write!(f, "crop column"),
            ColumnRole::PlotX => write!(f, "plot x column"),
            ColumnRole::PlotY => write!(f, "plot y column"),
        }
    }
}

/// Main error type for snip-tsv operations.
#[derive(Debug, Error)]
pub enum SnipError {
    /// A row is too narrow for one of the requested columns.
    #[error("line {line}: {role} {column} requested but the row only has {width} field(s)")]
    InputShape {
        line: u64,
        role: ColumnRole,
        column: usize,
        width: usize,
    },

    /// A field that must be numeric is not.
    #[error("line {line}: {role} {column} value '{value}' is not a number")]
    ValueParse {
        line: u64,
        role: ColumnRole,
        column: usize,
        value: String,
    },

    /// Invalid combination of options, caught before any row is read.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error opening or creating a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library while reading or writing rows.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error encoding or saving a plot image.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// The plot window could not be opened.
    #[error("Plot window error: {0}")]
    Display(String),
}

/// Result type alias for snip-tsv operations.
pub type Result<T> = std::result::Result<T, SnipError>;
