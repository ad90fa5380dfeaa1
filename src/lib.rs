//! # EuReject - Euclidean-Distance Rejection for ABC
//!
//! `eureject` implements the rejection step of Approximate Bayesian Computation.
//! Given one observed summary-statistics vector and many simulated rows, it
//! standardizes the statistics, scores every simulated row by its Euclidean
//! distance to the observed vector, and keeps the `K` closest rows.
//!
//! ## Key Features
//!
//! - **Streaming**: simulated tables are read one line at a time through a
//!   reusable tokenizer, so memory is bounded by `K` retained rows.
//!
//! - **Column Matching by Name**: observed statistics are located in the
//!   simulated header by name; extra simulated columns (parameters, models)
//!   are carried through untouched.
//!
//! - **Stable Selection**: equal distances keep encounter order, so output is
//!   identical across runs on the same input.
//!
//! - **Estimate-Only Mode**: with `K = 0` the standardization parameters are
//!   reported instead of retained rows.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use eureject::rejection::{run, RunConfig, StandardizationSource};
//!
//! let config = RunConfig::new("observed.txt", vec!["sims-1.txt".into(), "sims-2.txt".into()])
//!     .with_num_retain(1000)
//!     .with_standardization(StandardizationSource::Estimate { subsample: 10_000 })
//!     .with_distance(true);
//!
//! let summary = run(&config, std::io::stdout().lock())?;
//! eprintln!("{}", summary);
//! # Ok::<(), eureject::rejection::RejectionError>(())
//! ```
//!
//! ## File Formats
//!
//! Both inputs are whitespace-separated text with a header line.
//!
//! ```text
//! # observed.txt
//! pi.1    wattTheta.1
//! 0.0132  0.0097
//!
//! # sims-1.txt
//! PRI.Psi PRI.omega   pi.1    wattTheta.1
//! 2       0.41        0.0151  0.0102
//! 1       0.07        0.0411  0.0380
//! ```
//!
//! ## Architecture
//!
//! - [`tokenizer`]: reusable whitespace line splitter
//! - [`reader`]: observed and simulated stats file readers
//! - [`schema`]: column headers, name matching and cross-file validation
//! - [`stats`]: running moments and z-score standardization
//! - [`distance`]: Euclidean scoring against the observed vector
//! - [`retention`]: bounded, stable, sorted top-`K` selection
//! - [`writer`]: tab-separated output
//! - [`rejection`]: the run driver tying the stages together

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod distance;
pub mod reader;
pub mod rejection;
pub mod retention;
pub mod schema;
pub mod stats;
pub mod tokenizer;
pub mod writer;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::distance::{euclidean_distance, DistanceError, DistanceScorer};
    pub use crate::reader::{ObservedStats, ReaderError, SimulatedStatsReader};
    pub use crate::rejection::{
        run, RejectionError, RunConfig, RunSummary, StandardizationSource, DEFAULT_NUM_RETAIN,
    };
    pub use crate::retention::{Insertion, RetainedSet, ScoredRow};
    pub use crate::schema::{ColumnIndexMap, ColumnSchema, SchemaError};
    pub use crate::stats::{
        estimate_moments, Estimate, Moments, Standardization, StatsError, DEFAULT_SUBSAMPLE,
    };
    pub use crate::tokenizer::LineTokenizer;
    pub use crate::writer::{OutputWriter, WriterError};
}
