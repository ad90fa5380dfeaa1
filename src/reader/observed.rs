use std::io::BufRead;
use std::path::{Path, PathBuf};

use super::{open, ReaderError};
use crate::schema::ColumnSchema;
use crate::tokenizer::{lossy, LineTokenizer};

/// The single observed row: header plus one value per column.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservedStats {
    /// File the values were read from
    pub path: PathBuf,
    /// Observed column names
    pub header: ColumnSchema,
    /// Raw (unstandardized) observed values, in header order
    pub values: Vec<f64>,
}

impl ObservedStats {
    /// Parse an observed-statistics file
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        tokenizer: &mut LineTokenizer,
    ) -> Result<Self, ReaderError> {
        let path = path.as_ref();
        let mut reader = open(path)?;
        Self::from_reader(&mut reader, path, tokenizer)
    }

    /// Parse observed statistics from any buffered source.
    ///
    /// `path` labels error messages only.
    pub fn from_reader<R: BufRead>(
        reader: &mut R,
        path: &Path,
        tokenizer: &mut LineTokenizer,
    ) -> Result<Self, ReaderError> {
        let io_err = |source| ReaderError::Io {
            path: path.to_path_buf(),
            source,
        };

        let header = match tokenizer.read_line(reader).map_err(io_err)? {
            Some(fields) if fields.is_empty() => {
                return Err(ReaderError::EmptyHeader(path.to_path_buf()))
            }
            Some(fields) => ColumnSchema::from_fields(&fields),
            None => return Err(ReaderError::NoHeader(path.to_path_buf())),
        };

        let fields = tokenizer
            .read_line(reader)
            .map_err(io_err)?
            .ok_or_else(|| ReaderError::NoStats(path.to_path_buf()))?;

        if fields.len() != header.len() {
            return Err(ReaderError::ObservedCountMismatch {
                path: path.to_path_buf(),
                headers: header.len(),
                stats: fields.len(),
            });
        }

        let values = fields
            .iter()
            .zip(header.iter())
            .map(|(token, column)| {
                fast_float::parse::<f64, _>(token).map_err(|_| ReaderError::InvalidObservedValue {
                    path: path.to_path_buf(),
                    column: column.to_string(),
                    value: lossy(token).into_owned(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            path: path.to_path_buf(),
            header,
            values,
        })
    }

    /// Number of observed statistics
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no statistics were observed
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
