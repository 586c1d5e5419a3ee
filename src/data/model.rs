use std::cmp::Ordering;
use std::fmt;

use crate::error::{ColumnRole, Result, SnipError};

// ---------------------------------------------------------------------------
// FieldKey – a single cell seen through the crop comparison
// ---------------------------------------------------------------------------

/// A field value tagged for comparison against a crop bound.
///
/// Values that parse as `f64` are `Numeric`, everything else is `Textual`.
/// The raw text is kept in both cases because a numeric key compared with a
/// textual one falls back to string ordering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKey<'a> {
    Numeric { raw: &'a str, value: f64 },
    Textual(&'a str),
}

impl<'a> FieldKey<'a> {
    pub fn parse(raw: &'a str) -> Self {
        match parse_number(raw) {
            Some(value) => FieldKey::Numeric { raw, value },
            None => FieldKey::Textual(raw),
        }
    }

    pub fn raw(&self) -> &'a str {
        match *self {
            FieldKey::Numeric { raw, .. } | FieldKey::Textual(raw) => raw,
        }
    }

    /// Numeric ordering when both sides are numbers, byte-wise string
    /// ordering otherwise. NaN has no numeric order and also falls back to
    /// the raw text.
    pub fn compare(&self, other: &FieldKey<'_>) -> Ordering {
        match (self, other) {
            (FieldKey::Numeric { value: a, .. }, FieldKey::Numeric { value: b, .. }) => a
                .partial_cmp(b)
                .unwrap_or_else(|| self.raw().cmp(other.raw())),
            _ => self.raw().cmp(other.raw()),
        }
    }
}

/// Parse a field as a float, ignoring surrounding whitespace.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

// ---------------------------------------------------------------------------
// Row / Header
// ---------------------------------------------------------------------------

/// One record of the input: its fields in order plus the line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    line: u64,
    fields: Vec<String>,
}

impl Row {
    pub fn new(line: u64, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    /// 1-based line in the source where this record started.
    pub fn line(&self) -> u64 {
        self.line
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field at `column`, or an [`SnipError::InputShape`] naming `role` if
    /// the row is too short.
    pub fn field(&self, column: usize, role: ColumnRole) -> Result<&str> {
        self.fields
            .get(column)
            .map(String::as_str)
            .ok_or(SnipError::InputShape {
                line: self.line,
                role,
                column,
                width: self.fields.len(),
            })
    }
}

/// Column names taken from the first record when `--header` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header(Vec<String>);

impl Header {
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn name(&self, column: usize) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ---------------------------------------------------------------------------
// CropSpec – which column and which range
// ---------------------------------------------------------------------------

/// A crop bound as typed on the command line, with its numeric reading cached.
#[derive(Debug, Clone, PartialEq)]
pub struct Bound {
    raw: String,
    number: Option<f64>,
}

impl Bound {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let number = parse_number(&raw);
        Self { raw, number }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn key(&self) -> FieldKey<'_> {
        match self.number {
            Some(value) => FieldKey::Numeric {
                raw: &self.raw,
                value,
            },
            None => FieldKey::Textual(&self.raw),
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// The half-open range `[start, end)` on one column. `end: None` runs to the
/// end of the input.
#[derive(Debug, Clone, PartialEq)]
pub struct CropSpec {
    pub column: usize,
    pub start: Bound,
    pub end: Option<Bound>,
}

impl CropSpec {
    pub fn new(column: usize, start: impl Into<String>) -> Self {
        Self {
            column,
            start: Bound::new(start),
            end: None,
        }
    }

    pub fn with_end(mut self, end: impl Into<String>) -> Self {
        self.end = Some(Bound::new(end));
        self
    }

    pub fn reaches_start(&self, key: &FieldKey<'_>) -> bool {
        key.compare(&self.start.key()) != Ordering::Less
    }

    pub fn is_past_end(&self, key: &FieldKey<'_>) -> bool {
        self.end
            .as_ref()
            .is_some_and(|end| key.compare(&end.key()) != Ordering::Less)
    }

    /// The range test on its own: `start <= key < end`.
    pub fn contains(&self, key: &FieldKey<'_>) -> bool {
        self.reaches_start(key) && !self.is_past_end(key)
    }
}

impl fmt::Display for CropSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.end {
            Some(end) => write!(f, "column {} in [{}, {})", self.column, self.start, end),
            None => write!(f, "column {} from {}", self.column, self.start),
        }
    }
}
