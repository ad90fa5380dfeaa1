use std::path::PathBuf;

/// Errors that can occur while reading stats tables
#[derive(Debug, thiserror::Error)]
pub enum ReaderError {
    /// File could not be opened
    #[error("{}: {source}", path.display())]
    Open {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying OS error
        source: std::io::Error,
    },

    /// Read failed part way through a file
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying OS error
        source: std::io::Error,
    },

    /// Simulated table without a single line
    #[error("found no lines in {}", .0.display())]
    Empty(PathBuf),

    /// Observed table without a header line
    #[error("found no header in {}", .0.display())]
    NoHeader(PathBuf),

    /// Header line present but blank
    #[error("header line of {} names no columns", .0.display())]
    EmptyHeader(PathBuf),

    /// Observed table without a values line
    #[error("found no stats in {}", .0.display())]
    NoStats(PathBuf),

    /// Observed header and values disagree in length
    #[error("found {headers} column headers, but {stats} stats in file {}", path.display())]
    ObservedCountMismatch {
        /// Observed table
        path: PathBuf,
        /// Number of header columns
        headers: usize,
        /// Number of values on the stats line
        stats: usize,
    },

    /// Observed value that is not a number
    #[error("observed stat '{column}' in {} is not a valid number: '{value}'", path.display())]
    InvalidObservedValue {
        /// Observed table
        path: PathBuf,
        /// Column holding the value
        column: String,
        /// Offending text
        value: String,
    },

    /// Data row whose field count differs from the header
    #[error("file {} line {line} has {found} columns (expected {expected})", path.display())]
    FieldCount {
        /// File containing the row
        path: PathBuf,
        /// 1-based physical line number
        line: usize,
        /// Fields found on the line
        found: usize,
        /// Fields declared by the header
        expected: usize,
    },
}
