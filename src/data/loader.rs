use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use crate::error::{Result, SnipError};

use super::model::{Header, Row};

// ---------------------------------------------------------------------------
// Input selection
// ---------------------------------------------------------------------------

/// Where rows are read from. `-` on the command line means standard input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Input {
    #[default]
    Stdin,
    Path(PathBuf),
}

impl Input {
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            Some(path) if path != Path::new("-") => Input::Path(path.to_path_buf()),
            _ => Input::Stdin,
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Stdin => write!(f, "<stdin>"),
            Input::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

// ---------------------------------------------------------------------------
// Row source
// ---------------------------------------------------------------------------

/// Streaming reader over delimited records.
///
/// The header (if requested) is read eagerly when the source is opened; data
/// rows are only read as [`Rows`] is pulled.
pub struct RowSource {
    header: Option<Header>,
    rows: Rows,
}

impl RowSource {
    /// Open a file or standard input.
    pub fn open(input: &Input, delimiter: u8, has_header: bool) -> Result<Self> {
        match input {
            Input::Stdin => Self::from_reader(io::stdin(), delimiter, has_header),
            Input::Path(path) => {
                let file = File::open(path).map_err(|e| SnipError::Io {
                    path: path.clone(),
                    source: e,
                })?;
                Self::from_reader(file, delimiter, has_header)
            }
        }
    }

    pub fn from_reader<R: Read + 'static>(
        reader: R,
        delimiter: u8,
        has_header: bool,
    ) -> Result<Self> {
        let mut rows = Rows {
            lines: Box::new(BufReader::new(reader)),
            delimiter,
            line: 0,
            done: false,
        };

        let header = if has_header {
            match rows.next() {
                Some(row) => Some(Header::new(row?.into_fields())),
                None => {
                    log::warn!("--header given but the input is empty");
                    None
                }
            }
        } else {
            None
        };

        Ok(Self { header, rows })
    }

    pub fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    pub fn into_parts(self) -> (Option<Header>, Rows) {
        (self.header, self.rows)
    }
}

/// Data rows of a [`RowSource`], one `Result<Row>` per record.
///
/// Input is split into physical lines here and each record is handed to csv
/// on its own, because csv drops blank lines. A blank line becomes a row with
/// no fields so that it fails the column checks downstream.
pub struct Rows {
    lines: Box<dyn BufRead>,
    delimiter: u8,
    /// Physical lines consumed so far.
    line: u64,
    done: bool,
}

impl Rows {
    /// Raw bytes of the next record and the line it starts on. A record
    /// spans several lines while a quoted field is open.
    fn next_record(&mut self) -> Result<Option<(u64, Vec<u8>)>> {
        let start = self.line + 1;
        let mut buf = Vec::new();
        loop {
            let read = self
                .lines
                .read_until(b'\n', &mut buf)
                .map_err(csv::Error::from)?;
            if read == 0 {
                return Ok((!buf.is_empty()).then_some((start, buf)));
            }
            self.line += 1;
            // Doubled quotes inside a quoted field keep the count even.
            if buf.iter().filter(|&&b| b == b'"').count() % 2 == 0 {
                return Ok(Some((start, buf)));
            }
        }
    }

    fn parse_fields(&self, bytes: &[u8]) -> Result<Vec<String>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes);
        match reader.records().next() {
            Some(record) => Ok(record?.iter().map(String::from).collect()),
            None => Ok(Vec::new()),
        }
    }
}

impl Iterator for Rows {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let row = self.next_record().and_then(|record| match record {
            Some((line, bytes)) => Ok(Some(Row::new(line, self.parse_fields(&bytes)?))),
            None => Ok(None),
        });
        match row {
            Ok(Some(row)) => Some(Ok(row)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
