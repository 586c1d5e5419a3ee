/// Data layer: rows, cropping, and plot projection.
///
/// Architecture:
/// ```text
///  file / stdin (delimited)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  records → Row (+ optional Header)
///   └──────────┘
///        │  one Row at a time
///        ▼
///   ┌──────────┐
///   │  filter   │  crop column in [start, end), stops at end
///   └──────────┘
///        │
///        ├──────────────► text sink
///        ▼
///   ┌────────────┐
///   │ projection │  (x, y) columns → PlotSeries
///   └────────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod projection;
