//! Wires the row source, the crop engine and the chosen sink together.

use crate::app::{self, PlotView};
use crate::config::{Plan, RunConfig};
use crate::data::filter::crop;
use crate::data::loader::RowSource;
use crate::data::model::{Header, Row};
use crate::data::projection::project;
use crate::error::Result;
use crate::sink::{image, text, Sink};

/// What a finished run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    RowsWritten(usize),
    Plotted(usize),
}

/// Run one invocation end to end.
pub fn run(config: &RunConfig) -> Result<Outcome> {
    let plan = config.plan()?;
    log::debug!("plan: {plan:?}");

    let source = RowSource::open(&config.input, config.delimiter, config.header)?;
    if let Some(header) = source.header() {
        plan.check_header(header)?;
    }
    let (header, rows) = source.into_parts();
    execute(&plan, config, header, rows)
}

/// Run `plan` over rows that have already been read up to the header.
pub fn execute<I>(
    plan: &Plan,
    config: &RunConfig,
    header: Option<Header>,
    rows: I,
) -> Result<Outcome>
where
    I: IntoIterator<Item = Result<Row>>,
    I::IntoIter: 'static,
{
    let rows = rows.into_iter();
    let rows: Box<dyn Iterator<Item = Result<Row>>> = match &plan.crop {
        Some(spec) => {
            log::info!("cropping {spec}");
            Box::new(crop(rows, spec.clone()))
        }
        None => Box::new(rows),
    };

    match &plan.sink {
        Sink::Text(destination) => {
            let out = destination.open()?;
            let written = text::write_rows(out, config.delimiter, header.as_ref(), rows)?;
            log::info!("wrote {written} rows");
            Ok(Outcome::RowsWritten(written))
        }
        Sink::Display => {
            let series = project(rows, plan.plot_columns)?;
            let points = series.len();
            app::show(PlotView {
                title: format!("snip-tsv – {}", config.input),
                x_label: axis_label(header.as_ref(), plan.plot_columns.x),
                y_label: axis_label(header.as_ref(), plan.plot_columns.y),
                series,
                style: config.style,
            })?;
            Ok(Outcome::Plotted(points))
        }
        Sink::Image { path, format } => {
            let series = project(rows, plan.plot_columns)?;
            image::save(&series, config.style, path, *format)?;
            Ok(Outcome::Plotted(series.len()))
        }
    }
}

/// Header name for `column`, or `column N` without a header.
pub fn axis_label(header: Option<&Header>, column: usize) -> String {
    header
        .and_then(|h| h.name(column))
        .map(String::from)
        .unwrap_or_else(|| format!("column {column}"))
}
