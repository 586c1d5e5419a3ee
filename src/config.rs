//! Run configuration and its validation.

use std::path::PathBuf;

use crate::data::loader::Input;
use crate::data::model::{CropSpec, Header};
use crate::data::projection::PlotColumns;
use crate::error::{ColumnRole, Result, SnipError};
use crate::sink::{OutputIntent, PlotStyle, Sink};

/// Default values for every option.
pub struct Defaults;

impl Defaults {
    pub const DELIMITER: u8 = b'\t';
    pub const HEADER: bool = false;
    pub const PLOT_X: usize = 0;
    pub const PLOT_Y: usize = 1;
    pub const CROP_COL: usize = 0;
}

/// Everything a run needs, independent of how it was collected.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input: Input,
    pub delimiter: u8,
    pub header: bool,
    pub plot_x: usize,
    pub plot_y: usize,
    pub crop_col: usize,
    pub crop_start: Option<String>,
    pub crop_end: Option<String>,
    /// Plot the cropped range instead of writing it as text.
    pub plot: bool,
    pub style: PlotStyle,
    pub out_file: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: Input::Stdin,
            delimiter: Defaults::DELIMITER,
            header: Defaults::HEADER,
            plot_x: Defaults::PLOT_X,
            plot_y: Defaults::PLOT_Y,
            crop_col: Defaults::CROP_COL,
            crop_start: None,
            crop_end: None,
            plot: false,
            style: PlotStyle::default(),
            out_file: None,
        }
    }
}

/// A validated run: the optional crop and the sink to feed.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub crop: Option<CropSpec>,
    pub sink: Sink,
    pub plot_columns: PlotColumns,
}

impl Plan {
    /// Columns this plan will index into, with the role each plays.
    pub fn required_columns(&self) -> Vec<(ColumnRole, usize)> {
        let mut columns = Vec::new();
        if let Some(spec) = &self.crop {
            columns.push((ColumnRole::Crop, spec.column));
        }
        if !matches!(self.sink, Sink::Text(_)) {
            columns.push((ColumnRole::PlotX, self.plot_columns.x));
            columns.push((ColumnRole::PlotY, self.plot_columns.y));
        }
        columns
    }

    /// Reject column indices the header says do not exist.
    pub fn check_header(&self, header: &Header) -> Result<()> {
        for (role, column) in self.required_columns() {
            if column >= header.len() {
                return Err(SnipError::Config(format!(
                    "{role} {column} is out of range for header [{}]",
                    header.names().join(", ")
                )));
            }
        }
        Ok(())
    }
}

impl RunConfig {
    /// Validate option combinations and choose the sink. Reads no data.
    ///
    /// A crop start without `plot` writes text; no crop start, or `plot`,
    /// draws a chart.
    pub fn plan(&self) -> Result<Plan> {
        let crop = match (&self.crop_start, &self.crop_end) {
            (Some(start), end) => {
                let spec = CropSpec::new(self.crop_col, start.as_str());
                Some(match end {
                    Some(end) => spec.with_end(end.as_str()),
                    None => spec,
                })
            }
            (None, Some(_)) => {
                return Err(SnipError::Config(
                    "--crop-end requires --crop-start".to_string(),
                ))
            }
            (None, None) => None,
        };

        let intent = if crop.is_some() && !self.plot {
            OutputIntent::Text
        } else {
            OutputIntent::Plot
        };
        let sink = Sink::select(intent, self.out_file.as_deref())?;

        Ok(Plan {
            crop,
            sink,
            plot_columns: PlotColumns {
                x: self.plot_x,
                y: self.plot_y,
            },
        })
    }
}

/// Parse a delimiter argument: a single byte, or one of the escapes `\t`
/// and `\\`.
pub fn parse_delimiter(arg: &str) -> Result<u8> {
    match arg {
        "\\t" => Ok(b'\t'),
        "\\\\" => Ok(b'\\'),
        _ if arg.len() == 1 => Ok(arg.as_bytes()[0]),
        _ => Err(SnipError::Config(format!(
            "delimiter must be a single byte, got {arg:?}"
        ))),
    }
}
