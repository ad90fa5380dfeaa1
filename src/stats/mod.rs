//! # Standardization
//!
//! Summary statistics live on very different scales (segregating sites in the
//! hundreds, nucleotide diversity near zero), so every statistic is converted to
//! a z-score `(x - mean) / std_dev` before distances are taken.
//!
//! The means and standard deviations either come from the caller
//! ([`Standardization::supplied`]) or are estimated in one streaming pass over
//! the first N simulated rows ([`estimate_moments`]). An estimated standard
//! deviation is an [`Estimate`]: it is [`Estimate::Undefined`] when fewer than
//! two rows contributed, and an undefined or non-positive value can never be
//! used to standardize.

mod error;
mod estimator;
mod running;
mod standardization;


pub use error::StatsError;
pub use estimator::{estimate_moments, DEFAULT_SUBSAMPLE};
pub use running::{Estimate, RunningColumnStats, RunningStats};
pub use standardization::{Moments, Standardization, StandardizedVector};
