//! Crop delimited time-series data to a row range, then write the rows back
//! out or plot two of their columns.
//!
//! ```text
//!  RowSource ──► crop ──► text sink
//!                  │
//!                  └───► project ──► plot window / image file
//! ```

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod sink;
pub mod ui;

pub use config::{Defaults, Plan, RunConfig};
pub use data::filter::{crop, Crop};
pub use data::loader::{Input, RowSource, Rows};
pub use data::model::{Bound, CropSpec, FieldKey, Header, Row};
pub use data::projection::{project, PlotColumns, PlotSeries};
pub use error::{ColumnRole, Result, SnipError};
pub use pipeline::{run, Outcome};
pub use sink::{Destination, OutputIntent, PlotStyle, Sink};
