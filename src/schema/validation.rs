use std::path::{Path, PathBuf};

use log::debug;

use super::ColumnSchema;
use crate::reader::{self, ReaderError};
use crate::tokenizer::LineTokenizer;

/// Read the header of every simulated table and require them to be identical.
///
/// Returns the shared header. Mismatches name the first file and the
/// offending one.
pub fn validate_simulated_headers<P: AsRef<Path>>(
    paths: &[P],
    tokenizer: &mut LineTokenizer,
) -> Result<ColumnSchema, SchemaError> {
    let (first, rest) = paths.split_first().ok_or(SchemaError::NoSimulatedFiles)?;
    let first = first.as_ref();
    let schema = reader::read_header(first, tokenizer)?;
    debug!("{}: {} columns", first.display(), schema.len());

    for other in rest {
        let other = other.as_ref();
        let candidate = reader::read_header(other, tokenizer)?;
        if candidate != schema {
            return Err(SchemaError::HeaderMismatch {
                first: first.to_path_buf(),
                other: other.to_path_buf(),
            });
        }
    }

    Ok(schema)
}

/// Errors that can occur during schema validation
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// No simulated tables were given
    #[error("No simulated stats files provided")]
    NoSimulatedFiles,

    /// Two simulated tables disagree on their header
    #[error("Files {} and {} have different headers", first.display(), other.display())]
    HeaderMismatch {
        /// First simulated file of the run
        first: PathBuf,
        /// File whose header differs from the first
        other: PathBuf,
    },

    /// An observed column is absent from the simulated header
    #[error("Observed column '{0}' was not found in the simulated header")]
    MissingColumn(String),

    /// An observed column occurs more than once in the simulated header
    #[error("Observed column '{0}' was found more than once in the simulated header")]
    DuplicateColumn(String),

    /// Failure while reading a header line
    #[error(transparent)]
    Reader(#[from] ReaderError),
}
