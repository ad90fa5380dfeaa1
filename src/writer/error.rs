/// Errors that can occur while writing output
#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    /// I/O error on the output stream
    #[error("I/O error writing output: {0}")]
    IoError(#[from] std::io::Error),

    /// Estimate vectors do not match the header
    #[error("header has {header} columns but got {means} means and {std_devs} standard deviations")]
    EstimateLength {
        /// Columns in the header
        header: usize,
        /// Means provided
        means: usize,
        /// Standard deviations provided
        std_devs: usize,
    },
}
