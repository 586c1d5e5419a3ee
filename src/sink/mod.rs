//! Output side of the pipeline: delimited text, a plot window, or an image.

pub mod image;
pub mod text;

use std::path::{Path, PathBuf};

use ::image::ImageFormat;

use crate::error::{Result, SnipError};

/// What the caller wants out of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputIntent {
    Text,
    Plot,
}

/// How the plotted series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotStyle {
    #[default]
    Line,
    Scatter,
}

/// Where text output goes. `-` on the command line means standard output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    Path(PathBuf),
}

/// The concrete output chosen for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Text(Destination),
    Display,
    Image { path: PathBuf, format: ImageFormat },
}

impl Sink {
    /// Pick a sink from the declared intent and the shape of the destination.
    ///
    /// Text goes to stdout unless a path is given. Plots open a window unless
    /// a path is given, in which case its extension must name a supported
    /// image format.
    pub fn select(intent: OutputIntent, destination: Option<&Path>) -> Result<Self> {
        let path = destination.filter(|p| *p != Path::new("-"));
        match (intent, path) {
            (OutputIntent::Text, None) => Ok(Sink::Text(Destination::Stdout)),
            (OutputIntent::Text, Some(path)) => Ok(Sink::Text(Destination::Path(path.to_path_buf()))),
            (OutputIntent::Plot, None) => Ok(Sink::Display),
            (OutputIntent::Plot, Some(path)) => {
                let format = image_format(path)?;
                Ok(Sink::Image {
                    path: path.to_path_buf(),
                    format,
                })
            }
        }
    }
}

fn image_format(path: &Path) -> Result<ImageFormat> {
    match ImageFormat::from_path(path) {
        Ok(format @ (ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::Bmp)) => Ok(format),
        _ => Err(SnipError::Config(format!(
            "cannot plot to '{}': expected a .png, .jpg or .bmp file",
            path.display()
        ))),
    }
}
