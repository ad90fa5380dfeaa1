use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::io::{self, BufWriter};
use std::path::PathBuf;

use eureject::rejection::{self, RunConfig, StandardizationSource, DEFAULT_NUM_RETAIN};
use eureject::stats::DEFAULT_SUBSAMPLE;

mod config;

use config::{Config, RejectionConfig};

/// EuReject - Euclidean-distance rejection sampling for ABC
#[derive(Parser, Debug)]
#[command(name = "eureject")]
#[command(author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// File with the observed summary statistics (header line, then one row)
    #[arg(short = 'f', long = "observed", value_name = "OBSERVED_PATH")]
    observed: PathBuf,

    /// Number of closest simulated rows to retain (0 reports means and standard deviations only)
    #[arg(short = 'k', long = "num-retain", value_name = "N")]
    num_retain: Option<usize>,

    /// Number of simulated rows used to estimate means and standard deviations
    #[arg(short = 'n', long = "num-subsample", value_name = "N", value_parser = positive_count)]
    num_subsample: Option<usize>,

    /// Comma-separated means for standardization, one per observed column
    #[arg(
        short = 'm',
        long = "means",
        value_name = "M1,M2,...",
        value_delimiter = ',',
        requires = "std_devs"
    )]
    means: Vec<f64>,

    /// Comma-separated standard deviations for standardization, one per observed column
    #[arg(
        short = 's',
        long = "std-devs",
        value_name = "S1,S2,...",
        value_delimiter = ',',
        requires = "means"
    )]
    std_devs: Vec<f64>,

    /// Prefix each retained row with its distance
    #[arg(short = 'e', long = "include-distance")]
    include_distance: bool,

    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Files with simulated draws, all sharing one header
    #[arg(value_name = "SIMFILE", required = true, num_args = 1..)]
    simulated: Vec<PathBuf>,
}

fn positive_count(s: &str) -> std::result::Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be a positive integer".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    /// Usage checks clap cannot express on its own.
    pub fn check_usage(&self) -> std::result::Result<(), clap::Error> {
        if self.means.len() != self.std_devs.len() {
            return Err(Cli::command().error(
                ErrorKind::WrongNumberOfValues,
                format!(
                    "got {} means but {} standard deviations",
                    self.means.len(),
                    self.std_devs.len()
                ),
            ));
        }
        Ok(())
    }

    /// Merge flags over config-file values over built-in defaults.
    fn run_config(self, file: &RejectionConfig) -> RunConfig {
        let num_retain = self
            .num_retain
            .or(file.num_retain)
            .unwrap_or(DEFAULT_NUM_RETAIN);
        let include_distance = self.include_distance || file.include_distance.unwrap_or(false);
        let standardization = if self.means.is_empty() {
            StandardizationSource::Estimate {
                subsample: self
                    .num_subsample
                    .or(file.num_subsample)
                    .unwrap_or(DEFAULT_SUBSAMPLE),
            }
        } else {
            StandardizationSource::Supplied {
                means: self.means,
                std_devs: self.std_devs,
            }
        };

        RunConfig::new(self.observed, self.simulated)
            .with_num_retain(num_retain)
            .with_standardization(standardization)
            .with_distance(include_distance)
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let file_config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let config = cli.run_config(&file_config.rejection);

    eprintln!("{}", config);

    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());
    rejection::run(&config, out).context("Rejection failed")?;

    Ok(())
}
