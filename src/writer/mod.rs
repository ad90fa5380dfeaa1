//! # Output Writer
//!
//! Emits the data product of a run as tab-separated text.
//!
//! - **Rejection mode**: the simulated header, then every retained row in
//!   ascending-distance order. With `include_distance` each line is prefixed by
//!   a `distance` column.
//! - **Estimate-only mode**: three lines, the observed header, the means and
//!   the standard deviations.
//!
//! Numbers are fixed-point with six decimals. Retained fields are written
//! exactly as read.

mod error;

pub use error::WriterError;

use std::io::Write;

use crate::retention::{RetainedSet, ScoredRow};
use crate::schema::ColumnSchema;
use crate::stats::Estimate;

/// Header of the optional distance column
pub const DISTANCE_COLUMN: &str = "distance";

/// Writes run output to any byte sink.
pub struct OutputWriter<W: Write> {
    out: W,
    include_distance: bool,
}

impl<W: Write> OutputWriter<W> {
    /// Wrap `out`; `include_distance` prefixes rows with their distance
    pub fn new(out: W, include_distance: bool) -> Self {
        Self {
            out,
            include_distance,
        }
    }

    /// Header line, then every retained row best first.
    ///
    /// Returns the number of rows written.
    pub fn write_retained(&mut self, retained: &RetainedSet) -> Result<usize, WriterError> {
        if self.include_distance {
            write!(self.out, "{}\t", DISTANCE_COLUMN)?;
        }
        writeln!(self.out, "{}", retained.header())?;
        for row in retained {
            self.write_row(row)?;
        }
        self.out.flush()?;
        Ok(retained.len())
    }

    fn write_row(&mut self, row: &ScoredRow) -> Result<(), WriterError> {
        if self.include_distance {
            write!(self.out, "{}\t", FixedPoint(row.distance))?;
        }
        for (i, field) in row.fields.iter().enumerate() {
            if i > 0 {
                self.out.write_all(b"\t")?;
            }
            self.out.write_all(field)?;
        }
        self.out.write_all(b"\n")?;
        Ok(())
    }

    /// Header, means and standard deviations as three lines.
    ///
    /// An undefined standard deviation is written as `nan`.
    pub fn write_estimates(
        &mut self,
        header: &ColumnSchema,
        means: &[f64],
        std_devs: &[Estimate],
    ) -> Result<(), WriterError> {
        if means.len() != header.len() || std_devs.len() != header.len() {
            return Err(WriterError::EstimateLength {
                header: header.len(),
                means: means.len(),
                std_devs: std_devs.len(),
            });
        }
        writeln!(self.out, "{}", header)?;
        self.write_values(means.iter().copied())?;
        self.write_values(std_devs.iter().map(|sd| sd.value().unwrap_or(f64::NAN)))?;
        self.out.flush()?;
        Ok(())
    }

    fn write_values(&mut self, values: impl Iterator<Item = f64>) -> Result<(), WriterError> {
        for (i, v) in values.enumerate() {
            if i > 0 {
                self.out.write_all(b"\t")?;
            }
            write!(self.out, "{}", FixedPoint(v))?;
        }
        self.out.write_all(b"\n")?;
        Ok(())
    }

    /// Recover the underlying sink
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// `%lf`-style rendering: six decimals, lowercase `nan`/`inf`.
#[derive(Debug, Clone, Copy)]
pub struct FixedPoint(pub f64);

impl std::fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let v = self.0;
        if v.is_nan() {
            f.write_str("nan")
        } else if v.is_infinite() {
            f.write_str(if v > 0.0 { "inf" } else { "-inf" })
        } else {
            write!(f, "{:.6}", v)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::sync::Arc;

    fn retained() -> RetainedSet {
        let mut set = RetainedSet::new(2, ColumnSchema::new(["p", "s"]));
        for (distance, fields) in [(0.5, ["0.10", "1e3"]), (0.25, ["0.20", "abc"])] {
            set.insert(ScoredRow {
                distance,
                source_file: Arc::from(Path::new("sims.txt")),
                line_number: 2,
                fields: fields.iter().map(|f| Box::from(f.as_bytes())).collect(),
            });
        }
        set
    }

    fn render(include_distance: bool) -> String {
        let mut writer = OutputWriter::new(Vec::new(), include_distance);
        assert_eq!(writer.write_retained(&retained()).unwrap(), 2);
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_retained_rows_are_verbatim() {
        assert_eq!(render(false), "p\ts\n0.20\tabc\n0.10\t1e3\n");
    }

    #[test]
    fn test_distance_column() {
        assert_eq!(
            render(true),
            "distance\tp\ts\n0.250000\t0.20\tabc\n0.500000\t0.10\t1e3\n"
        );
    }

    #[test]
    fn test_estimates_are_three_lines() {
        let mut writer = OutputWriter::new(Vec::new(), true);
        writer
            .write_estimates(
                &ColumnSchema::new(["a", "b"]),
                &[1.5, -2.0],
                &[Estimate::Defined(0.125), Estimate::Undefined],
            )
            .unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(text, "a\tb\n1.500000\t-2.000000\n0.125000\tnan\n");
    }

    #[test]
    fn test_estimates_length_checked() {
        let mut writer = OutputWriter::new(Vec::new(), false);
        let err = writer
            .write_estimates(&ColumnSchema::new(["a"]), &[1.0, 2.0], &[Estimate::Undefined])
            .unwrap_err();
        assert!(matches!(err, WriterError::EstimateLength { header: 1, means: 2, std_devs: 1 }));
    }

    #[test]
    fn test_fixed_point() {
        assert_eq!(FixedPoint(2f64.sqrt()).to_string(), "1.414214");
        assert_eq!(FixedPoint(f64::INFINITY).to_string(), "inf");
        assert_eq!(FixedPoint(f64::NEG_INFINITY).to_string(), "-inf");
        assert_eq!(FixedPoint(0.0).to_string(), "0.000000");
    }
}
