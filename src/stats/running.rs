use super::StatsError;

/// A derived statistic that may not exist for the data seen so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Estimate {
    /// Value computed from enough observations
    Defined(f64),
    /// Too few observations to compute a value
    Undefined,
}

impl Estimate {
    /// The value, if defined
    pub fn value(self) -> Option<f64> {
        match self {
            Estimate::Defined(v) => Some(v),
            Estimate::Undefined => None,
        }
    }

    /// True for [`Estimate::Defined`]
    pub fn is_defined(self) -> bool {
        matches!(self, Estimate::Defined(_))
    }
}

/// Count, sum and sum of squares for one column.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunningColumnStats {
    n: usize,
    sum: f64,
    sum_of_squares: f64,
}

impl RunningColumnStats {
    /// Empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one observation in
    pub fn update(&mut self, x: f64) {
        self.n += 1;
        self.sum += x;
        self.sum_of_squares += x * x;
    }

    /// Number of observations
    pub fn count(&self) -> usize {
        self.n
    }

    /// Arithmetic mean; 0.0 before any observation
    pub fn mean(&self) -> f64 {
        if self.n == 0 {
            return 0.0;
        }
        self.sum / self.n as f64
    }

    /// Unbiased sample variance, defined from two observations on
    pub fn sample_variance(&self) -> Estimate {
        if self.n < 2 {
            return Estimate::Undefined;
        }
        let mean = self.mean();
        // cancellation can leave a constant column slightly negative
        let variance = (self.sum_of_squares - mean * self.sum) / (self.n - 1) as f64;
        Estimate::Defined(variance.max(0.0))
    }

    /// Sample standard deviation, defined from two observations on
    pub fn std_dev(&self) -> Estimate {
        match self.sample_variance() {
            Estimate::Defined(var) => Estimate::Defined(var.sqrt()),
            Estimate::Undefined => Estimate::Undefined,
        }
    }
}

/// One [`RunningColumnStats`] per matched column, updated a row at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct RunningStats {
    columns: Vec<RunningColumnStats>,
    rows: usize,
}

impl RunningStats {
    /// Accumulators for `width` columns
    pub fn new(width: usize) -> Self {
        Self {
            columns: vec![RunningColumnStats::new(); width],
            rows: 0,
        }
    }

    /// Fold one row in; `row` must have one value per column.
    pub fn update(&mut self, row: &[f64]) -> Result<(), StatsError> {
        if row.len() != self.columns.len() {
            return Err(StatsError::LengthMismatch {
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        for (column, &x) in self.columns.iter_mut().zip(row) {
            column.update(x);
        }
        self.rows += 1;
        Ok(())
    }

    /// Rows folded in so far
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Per-column accumulators
    pub fn columns(&self) -> &[RunningColumnStats] {
        &self.columns
    }

    /// Per-column means
    pub fn means(&self) -> Vec<f64> {
        self.columns.iter().map(RunningColumnStats::mean).collect()
    }

    /// Per-column standard deviations
    pub fn std_devs(&self) -> Vec<Estimate> {
        self.columns.iter().map(RunningColumnStats::std_dev).collect()
    }
}
