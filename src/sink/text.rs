use std::fs::File;
use std::io::{self, Write};

use crate::data::model::{Header, Row};
use crate::error::{Result, SnipError};

use super::Destination;

impl Destination {
    /// Open the destination for writing. Files are created or truncated.
    pub fn open(&self) -> Result<Box<dyn Write>> {
        match self {
            Destination::Stdout => Ok(Box::new(io::stdout().lock())),
            Destination::Path(path) => {
                let file = File::create(path).map_err(|e| SnipError::Io {
                    path: path.clone(),
                    source: e,
                })?;
                Ok(Box::new(io::BufWriter::new(file)))
            }
        }
    }
}

/// Write `header` (if any) and then each row, delimiter-joined, one per line.
///
/// Rows are written as they are pulled. If a row fails, everything written
/// before it is flushed and stays in the output; the error is then returned.
/// Returns the number of data rows written.
pub fn write_rows<W, I>(out: W, delimiter: u8, header: Option<&Header>, rows: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Result<Row>>,
{
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_writer(out);

    if let Some(header) = header {
        writer.write_record(header.names())?;
    }

    let mut written = 0;
    for row in rows {
        match row {
            Ok(row) => {
                writer.write_record(row.fields())?;
                written += 1;
            }
            Err(e) => {
                writer.flush().map_err(csv::Error::from)?;
                return Err(e);
            }
        }
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(written)
}
