use std::fmt;
use std::path::PathBuf;

use super::RejectionError;
use crate::stats::DEFAULT_SUBSAMPLE;
use crate::writer::FixedPoint;

/// Rows retained unless told otherwise.
pub const DEFAULT_NUM_RETAIN: usize = 1000;

/// Where the z-score parameters come from.
#[derive(Debug, Clone, PartialEq)]
pub enum StandardizationSource {
    /// Caller-supplied means and standard deviations, in observed-column order
    Supplied {
        /// Per-column means
        means: Vec<f64>,
        /// Per-column standard deviations
        std_devs: Vec<f64>,
    },
    /// Estimate from the first `subsample` simulated rows
    Estimate {
        /// Rows to accumulate
        subsample: usize,
    },
}

impl Default for StandardizationSource {
    fn default() -> Self {
        Self::Estimate {
            subsample: DEFAULT_SUBSAMPLE,
        }
    }
}

/// Everything one rejection run needs, built once and passed by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Observed-statistics file
    pub observed_path: PathBuf,
    /// Simulated-statistics files, processed in this order
    pub simulated_paths: Vec<PathBuf>,
    /// Rows to retain; 0 only reports the standardization parameters
    pub num_retain: usize,
    /// Source of means and standard deviations
    pub standardization: StandardizationSource,
    /// Prefix each retained row with its distance
    pub include_distance: bool,
}

impl RunConfig {
    /// Configuration with default retain count and estimated standardization
    pub fn new(observed_path: impl Into<PathBuf>, simulated_paths: Vec<PathBuf>) -> Self {
        Self {
            observed_path: observed_path.into(),
            simulated_paths,
            num_retain: DEFAULT_NUM_RETAIN,
            standardization: StandardizationSource::default(),
            include_distance: false,
        }
    }

    /// Set the number of rows to retain
    pub fn with_num_retain(mut self, num_retain: usize) -> Self {
        self.num_retain = num_retain;
        self
    }

    /// Set the standardization source
    pub fn with_standardization(mut self, standardization: StandardizationSource) -> Self {
        self.standardization = standardization;
        self
    }

    /// Prefix retained rows with their distance
    pub fn with_distance(mut self, include_distance: bool) -> Self {
        self.include_distance = include_distance;
        self
    }

    /// True when only means and standard deviations are reported
    pub fn is_estimate_only(&self) -> bool {
        self.num_retain == 0
    }

    /// Check the parts of the configuration that need no file access.
    pub fn validate(&self) -> Result<(), RejectionError> {
        if self.simulated_paths.is_empty() {
            return Err(RejectionError::InvalidConfig(
                "at least one simulated stats file is required".to_string(),
            ));
        }
        match &self.standardization {
            StandardizationSource::Supplied { means, std_devs } if means.len() != std_devs.len() => {
                Err(RejectionError::InvalidConfig(format!(
                    "got {} means but {} standard deviations",
                    means.len(),
                    std_devs.len()
                )))
            }
            StandardizationSource::Estimate { subsample: 0 } => Err(RejectionError::InvalidConfig(
                "subsample size must be a positive integer".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

/// The run configuration summary written to standard error before a run.
impl fmt::Display for RunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subsample = match self.standardization {
            StandardizationSource::Estimate { subsample } => subsample,
            StandardizationSource::Supplied { .. } => 0,
        };
        writeln!(f, "Number of samples to retain: {}", self.num_retain)?;
        writeln!(f, "Number of samples to use for standardization: {}", subsample)?;
        writeln!(f, "Observed stats path: {}", self.observed_path.display())?;
        let paths: Vec<String> = self
            .simulated_paths
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        writeln!(f, "Path(s) to file(s) with simulated draws: {}", paths.join(", "))?;
        match &self.standardization {
            StandardizationSource::Supplied { means, std_devs } => {
                writeln!(f, "Means for standardization: {}", join_fixed(means))?;
                write!(f, "Standard deviations for standardization: {}", join_fixed(std_devs))
            }
            StandardizationSource::Estimate { .. } => {
                writeln!(f, "Means for standardization: None")?;
                write!(f, "Standard deviations for standardization: None")
            }
        }
    }
}

fn join_fixed(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| FixedPoint(*v).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
