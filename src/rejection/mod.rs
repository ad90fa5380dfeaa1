//! # Rejection Run
//!
//! Drives one complete rejection pass over a set of simulated tables.
//!
//! ## Phases
//!
//! ```text
//! Init -> ValidateSchemas -> EstimateStandardization (skipped when supplied)
//!      -> EmitEstimates -> Done                          (retain count 0)
//!      -> StandardizeObserved -> ScoreAndSelect -> EmitRetained -> Done
//! ```
//!
//! No phase is revisited and the first error ends the run. Nothing is written
//! to the output until every input has been read, so a failed run leaves the
//! output empty.
//!
//! ## Example
//!
//! ```rust,no_run
//! use eureject::rejection::{run, RunConfig};
//!
//! let config = RunConfig::new("observed.txt", vec!["sims.txt".into()]).with_num_retain(500);
//! let summary = run(&config, std::io::stdout().lock())?;
//! eprintln!("{}", summary);
//! # Ok::<(), eureject::rejection::RejectionError>(())
//! ```

mod config;
mod error;
mod summary;


pub use config::{RunConfig, StandardizationSource, DEFAULT_NUM_RETAIN};
pub use error::RejectionError;
pub use summary::RunSummary;

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use log::{debug, info, warn};

use crate::distance::DistanceScorer;
use crate::reader::{ObservedStats, SimulatedStatsReader};
use crate::retention::{RetainedSet, ScoredRow};
use crate::schema::{validate_simulated_headers, ColumnIndexMap};
use crate::stats::{estimate_moments, Estimate, Moments, Standardization};
use crate::tokenizer::LineTokenizer;
use crate::writer::OutputWriter;

/// Stages of a run, in the only order they can occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Configuration accepted
    Init,
    /// Reading headers and matching observed columns
    ValidateSchemas,
    /// Accumulating means and standard deviations
    EstimateStandardization,
    /// Writing header, means and standard deviations
    EmitEstimates,
    /// Standardizing the observed vector
    StandardizeObserved,
    /// Streaming every simulated row through scorer and selector
    ScoreAndSelect,
    /// Writing the retained rows
    EmitRetained,
    /// Finished successfully
    Done,
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunPhase::Init => "init",
            RunPhase::ValidateSchemas => "validate schemas",
            RunPhase::EstimateStandardization => "estimate standardization",
            RunPhase::EmitEstimates => "emit estimates",
            RunPhase::StandardizeObserved => "standardize observed",
            RunPhase::ScoreAndSelect => "score and select",
            RunPhase::EmitRetained => "emit retained",
            RunPhase::Done => "done",
        };
        f.write_str(name)
    }
}

fn enter(phase: RunPhase) {
    debug!("phase: {}", phase);
}

enum Parameters<'a> {
    Supplied { means: &'a [f64], std_devs: &'a [f64] },
    Estimated(Moments),
}

/// Run the whole pipeline described by `config`, writing the result to `out`.
pub fn run<W: Write>(config: &RunConfig, out: W) -> Result<RunSummary, RejectionError> {
    enter(RunPhase::Init);
    config.validate()?;
    let mut summary = RunSummary {
        estimate_only: config.is_estimate_only(),
        ..RunSummary::default()
    };
    let mut tokenizer = LineTokenizer::new();

    enter(RunPhase::ValidateSchemas);
    let observed = ObservedStats::from_path(&config.observed_path, &mut tokenizer)?;
    let simulated_header = validate_simulated_headers(&config.simulated_paths, &mut tokenizer)?;
    let index_map = ColumnIndexMap::build(&observed.header, &simulated_header)?;
    info!(
        "{} observed stats matched in {} simulated columns",
        index_map.len(),
        simulated_header.len()
    );

    let parameters = match &config.standardization {
        StandardizationSource::Supplied { means, std_devs } => {
            // positivity is checked only once the values are divided by
            Standardization::check_supplied(&observed.header, means, std_devs)?;
            Parameters::Supplied { means, std_devs }
        }
        StandardizationSource::Estimate { subsample } => {
            enter(RunPhase::EstimateStandardization);
            let moments = estimate_moments(
                &config.simulated_paths,
                &index_map,
                &mut tokenizer,
                *subsample,
            )?;
            summary.estimate_rows = Some(moments.rows);
            Parameters::Estimated(moments)
        }
    };

    let mut writer = OutputWriter::new(out, config.include_distance);

    if config.is_estimate_only() {
        enter(RunPhase::EmitEstimates);
        match &parameters {
            Parameters::Supplied { means, std_devs } => {
                let std_devs: Vec<Estimate> =
                    std_devs.iter().copied().map(Estimate::Defined).collect();
                writer.write_estimates(&observed.header, means, &std_devs)?;
            }
            Parameters::Estimated(moments) => {
                for (column, sd) in observed.header.iter().zip(&moments.std_devs) {
                    if !sd.is_defined() {
                        warn!(
                            "standard deviation of '{}' is undefined ({} rows)",
                            column, moments.rows
                        );
                    }
                }
                writer.write_estimates(&observed.header, &moments.means, &moments.std_devs)?;
            }
        }
        enter(RunPhase::Done);
        return Ok(summary);
    }

    enter(RunPhase::StandardizeObserved);
    let standardization = match parameters {
        Parameters::Supplied { means, std_devs } => {
            Standardization::supplied(&observed.header, means.to_vec(), std_devs.to_vec())?
        }
        Parameters::Estimated(moments) => Standardization::from_moments(&observed.header, &moments)?,
    };
    let scorer = DistanceScorer::new(standardization, &observed.values)?;

    enter(RunPhase::ScoreAndSelect);
    let mut retained = RetainedSet::new(config.num_retain, simulated_header);
    let mut values = Vec::with_capacity(index_map.len());
    for path in &config.simulated_paths {
        let mut reader = SimulatedStatsReader::open(path, &mut tokenizer)?;
        while let Some(record) = reader.next_record(&mut tokenizer)? {
            let invalid = index_map.extract(&record.fields, &mut values);
            if invalid > 0 {
                // Scored anyway: the row keeps 0.0 in place of each bad value.
                warn!(
                    "file {} line {} contains {} invalid stats columns",
                    reader.path().display(),
                    record.line_number,
                    invalid
                );
                summary.invalid_values += invalid;
            }
            let distance = scorer.score(&mut values)?;
            summary.rows_scored += 1;
            if retained.admits(distance) {
                retained.insert(ScoredRow {
                    distance,
                    source_file: Arc::clone(reader.path()),
                    line_number: record.line_number,
                    fields: record.fields.to_owned_fields(),
                });
            }
        }
        summary.files_scored += 1;
        debug!(
            "{}: done at line {}, {} rows retained",
            reader.path().display(),
            reader.line_number(),
            retained.len()
        );
    }
    if summary.invalid_values > 0 {
        warn!(
            "{} stat values could not be parsed and were scored as 0",
            summary.invalid_values
        );
    }

    enter(RunPhase::EmitRetained);
    summary.rows_retained = writer.write_retained(&retained)?;

    enter(RunPhase::Done);
    info!("{}", summary);
    Ok(summary)
}
