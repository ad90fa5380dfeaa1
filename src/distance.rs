//! Euclidean distance between standardized statistic vectors.

use crate::stats::{Standardization, StandardizedVector, StatsError};

/// Errors that can occur while scoring
#[derive(Debug, thiserror::Error)]
pub enum DistanceError {
    /// Vectors of different length cannot be compared
    #[error("cannot compare vectors of length {left} and {right}")]
    LengthMismatch {
        /// Length of the first vector
        left: usize,
        /// Length of the second vector
        right: usize,
    },

    /// Standardizing a vector failed
    #[error(transparent)]
    Stats(#[from] StatsError),
}

/// `sqrt(sum((a_i - b_i)^2))`
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> Result<f64, DistanceError> {
    if a.len() != b.len() {
        return Err(DistanceError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    let sum_of_squares: f64 = a
        .iter()
        .zip(b)
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum();
    Ok(sum_of_squares.sqrt())
}

/// Scores simulated rows against the observed statistics.
///
/// The observed vector is standardized once at construction; every scored
/// row is standardized with the same parameters.
#[derive(Debug, Clone)]
pub struct DistanceScorer {
    standardization: Standardization,
    observed: StandardizedVector,
}

impl DistanceScorer {
    /// Standardize the raw observed values and keep them for scoring
    pub fn new(standardization: Standardization, observed: &[f64]) -> Result<Self, DistanceError> {
        let observed = standardization.standardize(observed)?;
        Ok(Self {
            standardization,
            observed,
        })
    }

    /// The standardized observed vector
    pub fn observed(&self) -> &StandardizedVector {
        &self.observed
    }

    /// The standardization parameters
    pub fn standardization(&self) -> &Standardization {
        &self.standardization
    }

    /// Distance of a raw row from the observed statistics.
    ///
    /// `raw` is standardized in place.
    pub fn score(&self, raw: &mut [f64]) -> Result<f64, DistanceError> {
        self.standardization.standardize_in_place(raw)?;
        let distance = euclidean_distance(self.observed.as_slice(), raw)?;
        // drop the sign of a NaN carried in from a `-nan` field
        Ok(if distance.is_nan() { distance.abs() } else { distance })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnSchema;

    fn unit_scorer(observed: &[f64]) -> DistanceScorer {
        let columns = ColumnSchema::new(["stat.1", "stat.2"]);
        let std = Standardization::supplied(&columns, vec![1.0, 1.0], vec![1.0, 1.0]).unwrap();
        DistanceScorer::new(std, observed).unwrap()
    }

    #[test]
    fn test_euclidean_distance() {
        assert_eq!(euclidean_distance(&[0.0, 0.0], &[3.0, 4.0]).unwrap(), 5.0);
        assert_eq!(euclidean_distance(&[], &[]).unwrap(), 0.0);
        assert!(matches!(
            euclidean_distance(&[1.0], &[1.0, 2.0]),
            Err(DistanceError::LengthMismatch { left: 1, right: 2 })
        ));
    }

    #[test]
    fn test_score_against_standardized_observed() {
        let scorer = unit_scorer(&[1.0, 2.0]);
        assert_eq!(scorer.observed().as_slice(), &[0.0, 1.0]);

        assert_eq!(scorer.score(&mut [1.0, 2.0]).unwrap(), 0.0);
        // (2, 3) vs (0, 1)
        assert!((scorer.score(&mut [3.0, 4.0]).unwrap() - 8f64.sqrt()).abs() < 1e-12);
        // (-1, -1) vs (0, 1)
        assert!((scorer.score(&mut [0.0, 0.0]).unwrap() - 5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_negative_nan_scores_as_nan() {
        let scorer = unit_scorer(&[1.0, 2.0]);
        let distance = scorer.score(&mut [-f64::NAN, 2.0]).unwrap();
        assert!(distance.is_nan());
        assert!(distance.is_sign_positive());
    }

    #[test]
    fn test_score_rejects_wrong_width() {
        let scorer = unit_scorer(&[1.0, 2.0]);
        assert!(matches!(scorer.score(&mut [1.0]), Err(DistanceError::Stats(_))));
    }
}
