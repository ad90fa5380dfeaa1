use std::fmt;

/// Counters from a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Rows used to estimate means and standard deviations, if estimated
    pub estimate_rows: Option<usize>,
    /// Simulated files streamed during scoring
    pub files_scored: usize,
    /// Simulated rows scored
    pub rows_scored: usize,
    /// Rows written to the output
    pub rows_retained: usize,
    /// Stat values that failed numeric conversion while scoring
    pub invalid_values: usize,
    /// True when the run only reported the standardization parameters
    pub estimate_only: bool,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.estimate_only {
            return match self.estimate_rows {
                Some(rows) => write!(f, "Reported means and standard deviations from {} rows", rows),
                None => write!(f, "Reported supplied means and standard deviations"),
            };
        }
        write!(
            f,
            "Scored {} rows from {} files, retained {}",
            self.rows_scored, self.files_scored, self.rows_retained
        )?;
        if self.invalid_values > 0 {
            write!(f, " ({} invalid stat values)", self.invalid_values)?;
        }
        Ok(())
    }
}
