use crate::error::{ColumnRole, Result};

use super::model::{CropSpec, FieldKey, Row};

// ---------------------------------------------------------------------------
// Crop engine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    /// Skipping rows below `start`.
    Seeking,
    /// Inside the range; every row is emitted until one reaches `end`.
    Emitting,
    /// Input exhausted, `end` reached, or an error was yielded.
    Done,
}

/// Lazy crop over a row stream. Built by [`crop`].
pub struct Crop<I> {
    rows: I,
    spec: CropSpec,
    cursor: Cursor,
}

/// Crop `rows` to the range described by `spec`.
///
/// Rows are pulled one at a time. The crop column is assumed to be
/// non-decreasing: once a row reaches `end` nothing more is read from the
/// source, and once `start` has been reached every following row is passed
/// through until then. With unsorted input, rows that would qualify after an
/// out-of-range value are therefore missed (or rows below `start` kept).
///
/// A row too narrow for `spec.column` yields [`crate::SnipError::InputShape`]
/// and ends the stream.
pub fn crop<I>(rows: I, spec: CropSpec) -> Crop<I::IntoIter>
where
    I: IntoIterator<Item = Result<Row>>,
{
    Crop {
        rows: rows.into_iter(),
        spec,
        cursor: Cursor::Seeking,
    }
}

impl<I> Crop<I> {
    pub fn spec(&self) -> &CropSpec {
        &self.spec
    }
}

impl<I> Iterator for Crop<I>
where
    I: Iterator<Item = Result<Row>>,
{
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor != Cursor::Done {
            let row = match self.rows.next() {
                Some(Ok(row)) => row,
                Some(Err(e)) => {
                    self.cursor = Cursor::Done;
                    return Some(Err(e));
                }
                None => {
                    self.cursor = Cursor::Done;
                    return None;
                }
            };

            let (past_end, reaches_start) = match row.field(self.spec.column, ColumnRole::Crop) {
                Ok(value) => {
                    let key = FieldKey::parse(value);
                    (self.spec.is_past_end(&key), self.spec.reaches_start(&key))
                }
                Err(e) => {
                    self.cursor = Cursor::Done;
                    return Some(Err(e));
                }
            };

            if past_end {
                log::debug!("line {}: reached crop end, stopping", row.line());
                self.cursor = Cursor::Done;
                return None;
            }
            if self.cursor == Cursor::Seeking {
                if !reaches_start {
                    continue;
                }
                log::debug!("line {}: reached crop start", row.line());
                self.cursor = Cursor::Emitting;
            }
            return Some(Ok(row));
        }
        None
    }
}

impl<I> std::iter::FusedIterator for Crop<I> where I: Iterator<Item = Result<Row>> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::RowSource;
    use crate::error::SnipError;

    fn rows(values: &[&str]) -> Vec<Result<Row>> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Ok(Row::new(i as u64 + 1, vec![v.to_string()])))
            .collect()
    }

    fn values(cropped: impl Iterator<Item = Result<Row>>) -> Vec<String> {
        cropped
            .map(|r| r.unwrap().into_fields().remove(0))
            .collect()
    }

    #[test]
    fn test_start_included_end_excluded() {
        let spec = CropSpec::new(0, "1").with_end("3");
        let out = values(crop(rows(&["0", "1", "2", "3", "4"]), spec));
        assert_eq!(out, vec!["1", "2"]);
    }

    #[test]
    fn test_numeric_beats_lexicographic() {
        let spec = CropSpec::new(0, "1").with_end("9");
        let out = values(crop(rows(&["2", "10"]), spec));
        assert_eq!(out, vec!["2"]);
    }

    #[test]
    fn test_unbounded_end_runs_to_last_row() {
        let spec = CropSpec::new(0, "2");
        let out = values(crop(rows(&["1", "2", "5", "0", "3"]), spec));
        assert_eq!(out, vec!["2", "5", "0", "3"]);
    }

    #[test]
    fn test_stops_pulling_after_end() {
        let spec = CropSpec::new(0, "1").with_end("2");
        let mut pulled = 0;
        let source = rows(&["1", "2", "3", "4"]).into_iter().inspect(|_| pulled += 1);
        let out = values(crop(source, spec));
        assert_eq!(out, vec!["1"]);
        assert_eq!(pulled, 2);
    }

    #[test]
    fn test_start_after_end_is_empty() {
        let spec = CropSpec::new(0, "5").with_end("3");
        assert_eq!(crop(rows(&["1", "4", "6"]), spec).count(), 0);
    }

    #[test]
    fn test_short_row_halts() {
        let input = vec![
            Ok(Row::new(1, vec!["0".into(), "a".into()])),
            Ok(Row::new(2, vec!["1".into()])),
            Ok(Row::new(3, vec!["2".into(), "b".into()])),
        ];
        let spec = CropSpec::new(1, "");
        let out: Vec<Result<Row>> = crop(input, spec).collect();
        assert_eq!(out.len(), 2);
        assert!(out[0].is_ok());
        assert!(matches!(
            out[1],
            Err(SnipError::InputShape { line: 2, column: 1, width: 1, .. })
        ));
    }

    #[test]
    fn test_blank_line_in_range_halts() {
        let source = RowSource::from_reader("0\t5\n\n2\t15\n3\t20\n".as_bytes(), b'\t', false).unwrap();
        let (_, input) = source.into_parts();
        let out: Vec<Result<Row>> = crop(input, CropSpec::new(0, "0").with_end("3")).collect();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].as_ref().unwrap().fields(), ["0", "5"]);
        assert!(matches!(
            out[1],
            Err(SnipError::InputShape { line: 2, column: 0, width: 0, .. })
        ));
    }

    #[test]
    fn test_source_error_is_passed_through_once() {
        let input = vec![
            Ok(Row::new(1, vec!["1".into()])),
            Err(SnipError::Config("boom".into())),
            Ok(Row::new(3, vec!["2".into()])),
        ];
        let out: Vec<Result<Row>> = crop(input, CropSpec::new(0, "0")).collect();
        assert_eq!(out.len(), 2);
        assert!(out[1].is_err());
    }
}
