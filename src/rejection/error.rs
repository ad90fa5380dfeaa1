use crate::distance::DistanceError;
use crate::reader::ReaderError;
use crate::schema::SchemaError;
use crate::stats::StatsError;
use crate::writer::WriterError;

/// Errors that abort a rejection run
#[derive(Debug, thiserror::Error)]
pub enum RejectionError {
    /// Configuration rejected before any file was read
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading a stats table failed
    #[error(transparent)]
    Reader(#[from] ReaderError),

    /// Headers did not line up
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Standardization could not be estimated or applied
    #[error(transparent)]
    Stats(#[from] StatsError),

    /// Scoring failed
    #[error(transparent)]
    Distance(#[from] DistanceError),

    /// Writing output failed
    #[error(transparent)]
    Writer(#[from] WriterError),
}
