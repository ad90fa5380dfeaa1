//! # Stats Table Readers
//!
//! Plain-text summary-statistic tables come in two shapes:
//!
//! - **Observed**: line 1 is the header, line 2 the single row of observed
//!   values. Parsed eagerly by [`ObservedStats`].
//! - **Simulated**: line 1 is the header, every further non-blank line a draw
//!   with exactly one field per header column. Streamed by
//!   [`SimulatedStatsReader`], one row at a time through a shared
//!   [`LineTokenizer`](crate::tokenizer::LineTokenizer).
//!
//! Line numbers are physical and 1-based: the header is line 1 and blank
//! lines still count.
//!
//! ## Example
//!
//! ```rust,no_run
//! use eureject::reader::{ObservedStats, SimulatedStatsReader};
//! use eureject::tokenizer::LineTokenizer;
//!
//! let mut tokenizer = LineTokenizer::new();
//! let observed = ObservedStats::from_path("observed.txt", &mut tokenizer)?;
//!
//! let mut sims = SimulatedStatsReader::open("sims.txt", &mut tokenizer)?;
//! while let Some(record) = sims.next_record(&mut tokenizer)? {
//!     println!("line {}: {} fields", record.line_number, record.fields.len());
//! }
//! # let _ = observed;
//! # Ok::<(), eureject::reader::ReaderError>(())
//! ```

mod error;
mod observed;
mod simulated;


pub use error::ReaderError;
pub use observed::ObservedStats;
pub use simulated::{Record, SimulatedStatsReader};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::schema::ColumnSchema;
use crate::tokenizer::LineTokenizer;

/// Read only the header line of a simulated table.
///
/// The file handle is closed before returning.
pub fn read_header<P: AsRef<Path>>(
    path: P,
    tokenizer: &mut LineTokenizer,
) -> Result<ColumnSchema, ReaderError> {
    let path = path.as_ref();
    let mut reader = open(path)?;
    header_from_reader(&mut reader, path, tokenizer)
}

pub(crate) fn open(path: &Path) -> Result<BufReader<File>, ReaderError> {
    let file = File::open(path).map_err(|source| ReaderError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(crate) fn header_from_reader<R: BufRead>(
    reader: &mut R,
    path: &Path,
    tokenizer: &mut LineTokenizer,
) -> Result<ColumnSchema, ReaderError> {
    let fields = tokenizer
        .read_line(reader)
        .map_err(|source| ReaderError::Io {
            path: path.to_path_buf(),
            source,
        })?
        .ok_or_else(|| ReaderError::Empty(path.to_path_buf()))?;
    if fields.is_empty() {
        return Err(ReaderError::EmptyHeader(path.to_path_buf()));
    }
    Ok(ColumnSchema::from_fields(&fields))
}
