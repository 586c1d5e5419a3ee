use crate::error::{ColumnRole, Result, SnipError};

use super::model::{parse_number, Row};

/// Which columns feed the x and y axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotColumns {
    pub x: usize,
    pub y: usize,
}

/// Two index-aligned numeric series ready for plotting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotSeries {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl PlotSeries {
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.xs.iter().zip(&self.ys).map(|(&x, &y)| [x, y])
    }

    /// `(min, max)` over the finite values of each axis, or `None` when there
    /// are no finite points.
    pub fn bounds(&self) -> Option<([f64; 2], [f64; 2])> {
        let mut finite = self
            .points()
            .filter(|[x, y]| x.is_finite() && y.is_finite());
        let [x0, y0] = finite.next()?;
        Some(finite.fold(([x0, x0], [y0, y0]), |([xl, xh], [yl, yh]), [x, y]| {
            ([xl.min(x), xh.max(x)], [yl.min(y), yh.max(y)])
        }))
    }
}

/// Materialize `rows` into a [`PlotSeries`].
///
/// Every row must have a numeric value in both columns; the first row that
/// does not fails the whole projection.
pub fn project<I>(rows: I, columns: PlotColumns) -> Result<PlotSeries>
where
    I: IntoIterator<Item = Result<Row>>,
{
    let mut series = PlotSeries::default();
    for row in rows {
        let row = row?;
        series.xs.push(numeric_field(&row, columns.x, ColumnRole::PlotX)?);
        series.ys.push(numeric_field(&row, columns.y, ColumnRole::PlotY)?);
    }
    log::debug!("projected {} points", series.len());
    Ok(series)
}

fn numeric_field(row: &Row, column: usize, role: ColumnRole) -> Result<f64> {
    let raw = row.field(column, role)?;
    parse_number(raw).ok_or_else(|| SnipError::ValueParse {
        line: row.line(),
        role,
        column,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(line: u64, fields: &[&str]) -> Result<Row> {
        Ok(Row::new(line, fields.iter().map(|s| s.to_string()).collect()))
    }

    const COLS: PlotColumns = PlotColumns { x: 0, y: 1 };

    #[test]
    fn test_projects_both_columns() {
        let series = project(vec![row(1, &["0", "5"]), row(2, &["1", "10.5"])], COLS).unwrap();
        assert_eq!(series.xs, vec![0.0, 1.0]);
        assert_eq!(series.ys, vec![5.0, 10.5]);
    }

    #[test]
    fn test_swapped_columns() {
        let cols = PlotColumns { x: 1, y: 0 };
        let series = project(vec![row(1, &["0", "5"])], cols).unwrap();
        assert_eq!(series.xs, vec![5.0]);
        assert_eq!(series.ys, vec![0.0]);
    }

    #[test]
    fn test_non_numeric_value_fails() {
        let err = project(vec![row(1, &["0", "5"]), row(2, &["1", "x"])], COLS).unwrap_err();
        match err {
            SnipError::ValueParse { line, role, value, .. } => {
                assert_eq!(line, 2);
                assert_eq!(role, ColumnRole::PlotY);
                assert_eq!(value, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_narrow_row_fails() {
        let err = project(vec![row(4, &["0"])], COLS).unwrap_err();
        assert!(matches!(
            err,
            SnipError::InputShape { line: 4, role: ColumnRole::PlotY, .. }
        ));
    }

    #[test]
    fn test_bounds_skip_non_finite() {
        let series = PlotSeries {
            xs: vec![0.0, f64::NAN, 2.0],
            ys: vec![1.0, 100.0, -1.0],
        };
        assert_eq!(series.bounds(), Some(([0.0, 2.0], [-1.0, 1.0])));
        assert_eq!(PlotSeries::default().bounds(), None);
    }
}
