//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use snip_tsv::config::parse_delimiter;
use snip_tsv::{Defaults, Input, PlotStyle, RunConfig};

/// Crop delimited data to a range of rows, or plot two of its columns.
///
/// With --crop-start the rows from the first value >= start up to (not
/// including) the first value >= end are written out. Without it, or with
/// --plot, the x/y columns are plotted in a window or to an image file.
#[derive(Parser, Debug)]
#[command(name = "snip-tsv")]
#[command(version, about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(arg(
    clap::Arg::new("version")
        .short('v')
        .long("version")
        .action(ArgAction::Version)
        .help("Print version")
))]
pub struct Cli {
    /// Input data file, `-` for standard input
    #[arg(value_name = "IN_FILE", default_value = "-")]
    pub in_file: PathBuf,

    /// Treat the first row as a header
    #[arg(long)]
    pub header: bool,

    /// Field delimiter, a single character (`\t` for tab)
    #[arg(short, long, default_value = "\\t", value_parser = delimiter_arg)]
    pub delimiter: u8,

    /// Column for the x-axis (0-indexed)
    #[arg(short = 'x', long, default_value_t = Defaults::PLOT_X)]
    pub plot_x: usize,

    /// Column for the y-axis (0-indexed)
    #[arg(short = 'y', long, default_value_t = Defaults::PLOT_Y)]
    pub plot_y: usize,

    /// Column compared against --crop-start/--crop-end (0-indexed)
    #[arg(short, long, default_value_t = Defaults::CROP_COL)]
    pub crop_col: usize,

    /// First value to keep (inclusive)
    #[arg(short = 's', long, allow_hyphen_values = true)]
    pub crop_start: Option<String>,

    /// Value to stop at (exclusive); omit to keep rows to the end of the input
    #[arg(short = 'e', long, allow_hyphen_values = true)]
    pub crop_end: Option<String>,

    /// Output file: delimited text when cropping, an image (.png/.jpg/.bmp)
    /// when plotting. Defaults to stdout or a plot window
    #[arg(short, long, value_name = "OUT_FILE")]
    pub out_file: Option<PathBuf>,

    /// Plot the cropped rows instead of writing them
    #[arg(long)]
    pub plot: bool,

    /// How to draw the plot
    #[arg(long, default_value = "line")]
    pub style: StyleChoice,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StyleChoice {
    Line,
    Scatter,
}

impl From<StyleChoice> for PlotStyle {
    fn from(choice: StyleChoice) -> Self {
        match choice {
            StyleChoice::Line => PlotStyle::Line,
            StyleChoice::Scatter => PlotStyle::Scatter,
        }
    }
}

fn delimiter_arg(arg: &str) -> Result<u8, String> {
    parse_delimiter(arg).map_err(|e| e.to_string())
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        RunConfig {
            input: Input::from_arg(Some(cli.in_file.as_path())),
            delimiter: cli.delimiter,
            header: cli.header,
            plot_x: cli.plot_x,
            plot_y: cli.plot_y,
            crop_col: cli.crop_col,
            crop_start: cli.crop_start,
            crop_end: cli.crop_end,
            plot: cli.plot,
            style: cli.style.into(),
            out_file: cli.out_file,
        }
    }
}
