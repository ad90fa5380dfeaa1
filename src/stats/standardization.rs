use super::{Estimate, RunningStats, StatsError};
use crate::schema::ColumnSchema;

/// Means and standard deviations as estimated from a subsample.
#[derive(Debug, Clone, PartialEq)]
pub struct Moments {
    /// Per-column means
    pub means: Vec<f64>,
    /// Per-column standard deviations
    pub std_devs: Vec<Estimate>,
    /// Rows the estimate is based on
    pub rows: usize,
}

impl From<&RunningStats> for Moments {
    fn from(stats: &RunningStats) -> Self {
        Self {
            means: stats.means(),
            std_devs: stats.std_devs(),
            rows: stats.rows(),
        }
    }
}

/// Validated z-score parameters, one pair per observed column.
///
/// Every standard deviation is finite and strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct Standardization {
    means: Vec<f64>,
    std_devs: Vec<f64>,
}

impl Standardization {
    /// Use caller-supplied means and standard deviations for `columns`.
    pub fn supplied(
        columns: &ColumnSchema,
        means: Vec<f64>,
        std_devs: Vec<f64>,
    ) -> Result<Self, StatsError> {
        Self::check_supplied(columns, &means, &std_devs)?;
        let std_devs = std_devs.into_iter().map(Estimate::Defined).collect();
        Self::validated(columns, means, std_devs, 0)
    }

    /// Check only that supplied values cover `columns` one to one.
    ///
    /// Unlike [`Standardization::supplied`] the values themselves are not
    /// inspected, so a zero standard deviation passes.
    pub fn check_supplied(
        columns: &ColumnSchema,
        means: &[f64],
        std_devs: &[f64],
    ) -> Result<(), StatsError> {
        if means.len() != std_devs.len() {
            return Err(StatsError::SuppliedCountMismatch {
                means: means.len(),
                std_devs: std_devs.len(),
            });
        }
        if means.len() != columns.len() {
            return Err(StatsError::SuppliedColumnMismatch {
                columns: columns.len(),
                supplied: means.len(),
            });
        }
        Ok(())
    }

    /// Use estimated moments for `columns`, rejecting undefined values.
    pub fn from_moments(columns: &ColumnSchema, moments: &Moments) -> Result<Self, StatsError> {
        if moments.means.len() != columns.len() || moments.std_devs.len() != columns.len() {
            return Err(StatsError::LengthMismatch {
                expected: columns.len(),
                found: moments.means.len().min(moments.std_devs.len()),
            });
        }
        Self::validated(
            columns,
            moments.means.clone(),
            moments.std_devs.clone(),
            moments.rows,
        )
    }

    fn validated(
        columns: &ColumnSchema,
        means: Vec<f64>,
        std_devs: Vec<Estimate>,
        rows: usize,
    ) -> Result<Self, StatsError> {
        let std_devs = std_devs
            .into_iter()
            .zip(columns.iter())
            .map(|(sd, column)| match sd {
                Estimate::Defined(v) if v.is_finite() && v > 0.0 => Ok(v),
                Estimate::Defined(value) => Err(StatsError::DegenerateStdDev {
                    column: column.to_string(),
                    value,
                }),
                Estimate::Undefined => Err(StatsError::UndefinedStdDev {
                    column: column.to_string(),
                    rows,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { means, std_devs })
    }

    /// Number of standardized columns
    pub fn len(&self) -> usize {
        self.means.len()
    }

    /// True when there are no columns
    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }

    /// Per-column means
    pub fn means(&self) -> &[f64] {
        &self.means
    }

    /// Per-column standard deviations
    pub fn std_devs(&self) -> &[f64] {
        &self.std_devs
    }

    /// Replace each value with its z-score
    pub fn standardize_in_place(&self, values: &mut [f64]) -> Result<(), StatsError> {
        if values.len() != self.len() {
            return Err(StatsError::LengthMismatch {
                expected: self.len(),
                found: values.len(),
            });
        }
        for ((x, mean), sd) in values.iter_mut().zip(&self.means).zip(&self.std_devs) {
            *x = (*x - mean) / sd;
        }
        Ok(())
    }

    /// Standardized copy of `values`
    pub fn standardize(&self, values: &[f64]) -> Result<StandardizedVector, StatsError> {
        let mut out = values.to_vec();
        self.standardize_in_place(&mut out)?;
        Ok(StandardizedVector(out))
    }
}

/// A vector of z-scores produced by a [`Standardization`].
#[derive(Debug, Clone, PartialEq)]
pub struct StandardizedVector(Vec<f64>);

impl StandardizedVector {
    /// The z-scores
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
