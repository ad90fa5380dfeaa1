use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use super::{header_from_reader, open, ReaderError};
use crate::schema::ColumnSchema;
use crate::tokenizer::{Fields, LineTokenizer};

/// One validated data row of a simulated table.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    /// 1-based physical line number within the file
    pub line_number: usize,
    /// Fields of the row, borrowed from the shared line buffer
    pub fields: Fields<'a>,
}

/// Streaming reader over the data rows of one simulated table.
///
/// Blank lines are skipped. Every other row must have as many fields as the
/// header; the first one that does not ends the stream with
/// [`ReaderError::FieldCount`]. The file is closed when the reader is dropped.
pub struct SimulatedStatsReader<R: BufRead = BufReader<File>> {
    reader: R,
    path: Arc<Path>,
    header: ColumnSchema,
    line_number: usize,
}

impl SimulatedStatsReader<BufReader<File>> {
    /// Open a simulated table and consume its header line
    pub fn open<P: AsRef<Path>>(path: P, tokenizer: &mut LineTokenizer) -> Result<Self, ReaderError> {
        let path = path.as_ref();
        let reader = open(path)?;
        Self::from_reader(reader, path, tokenizer)
    }
}

impl<R: BufRead> SimulatedStatsReader<R> {
    /// Wrap a buffered source and consume its header line.
    ///
    /// `path` labels errors and retained rows.
    pub fn from_reader(
        mut reader: R,
        path: &Path,
        tokenizer: &mut LineTokenizer,
    ) -> Result<Self, ReaderError> {
        let header = header_from_reader(&mut reader, path, tokenizer)?;
        Ok(Self {
            reader,
            path: Arc::from(path),
            header,
            line_number: 1,
        })
    }

    /// Header of this table
    pub fn header(&self) -> &ColumnSchema {
        &self.header
    }

    /// Shared handle to the table's path
    pub fn path(&self) -> &Arc<Path> {
        &self.path
    }

    /// Line number of the most recently read line
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Advance to the next non-blank data row.
    pub fn next_record<'t>(
        &mut self,
        tokenizer: &'t mut LineTokenizer,
    ) -> Result<Option<Record<'t>>, ReaderError> {
        let expected = self.header.len();
        loop {
            // Probe with a short borrow so a blank line can loop again.
            let found = match tokenizer.read_line(&mut self.reader) {
                Ok(Some(fields)) => fields.len(),
                Ok(None) => return Ok(None),
                Err(source) => {
                    return Err(ReaderError::Io {
                        path: self.path.to_path_buf(),
                        source,
                    })
                }
            };
            self.line_number += 1;

            if found == 0 {
                continue;
            }
            if found != expected {
                return Err(ReaderError::FieldCount {
                    path: self.path.to_path_buf(),
                    line: self.line_number,
                    found,
                    expected,
                });
            }
            return Ok(Some(Record {
                line_number: self.line_number,
                fields: tokenizer.fields(),
            }));
        }
    }
}
