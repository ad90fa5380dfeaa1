use std::path::PathBuf;

use crate::reader::ReaderError;

/// Errors that can occur while estimating or applying standardization
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    /// Vector length differs from the number of standardized columns
    #[error("expected {expected} values, found {found}")]
    LengthMismatch {
        /// Number of standardized columns
        expected: usize,
        /// Length of the offending vector
        found: usize,
    },

    /// Supplied means and standard deviations differ in count
    #[error("got {means} means but {std_devs} standard deviations")]
    SuppliedCountMismatch {
        /// Number of means supplied
        means: usize,
        /// Number of standard deviations supplied
        std_devs: usize,
    },

    /// Supplied values do not cover the observed columns
    #[error("{supplied} means/standard deviations supplied for {columns} observed stats columns")]
    SuppliedColumnMismatch {
        /// Number of observed columns
        columns: usize,
        /// Number of values supplied
        supplied: usize,
    },

    /// Fewer than two rows contributed to a column's standard deviation
    #[error("standard deviation of '{column}' is undefined: {rows} rows contributed (need at least 2)")]
    UndefinedStdDev {
        /// Column name
        column: String,
        /// Rows that contributed to the estimate
        rows: usize,
    },

    /// Standard deviation that cannot be divided by
    #[error("standard deviation of '{column}' is {value}; it must be positive and finite")]
    DegenerateStdDev {
        /// Column name
        column: String,
        /// Offending value
        value: f64,
    },

    /// Non-numeric stat values while estimating means and standard deviations
    #[error("file {} line {line} has {count} invalid stats columns", path.display())]
    InvalidStats {
        /// File containing the row
        path: PathBuf,
        /// 1-based physical line number
        line: usize,
        /// Columns without a numeric value
        count: usize,
    },

    /// Failure reading a simulated table
    #[error(transparent)]
    Reader(#[from] ReaderError),
}
