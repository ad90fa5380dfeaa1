use std::path::Path;

use log::{debug, info};

use super::{Moments, RunningStats, StatsError};
use crate::reader::SimulatedStatsReader;
use crate::schema::ColumnIndexMap;
use crate::tokenizer::LineTokenizer;

/// Rows used to estimate means and standard deviations unless told otherwise.
pub const DEFAULT_SUBSAMPLE: usize = 10_000;

/// Estimate per-column moments from the first `subsample` simulated rows.
///
/// Files are read in order and rows within a file in line order. The pass
/// stops as soon as `subsample` rows have been folded in, even mid-file, or
/// when the files run out. A row with a non-numeric stat column aborts the
/// estimate.
pub fn estimate_moments<P: AsRef<Path>>(
    paths: &[P],
    index_map: &ColumnIndexMap,
    tokenizer: &mut LineTokenizer,
    subsample: usize,
) -> Result<Moments, StatsError> {
    let mut stats = RunningStats::new(index_map.len());
    let mut values = Vec::with_capacity(index_map.len());

    for path in paths {
        if stats.rows() >= subsample {
            break;
        }
        let mut reader = SimulatedStatsReader::open(path, tokenizer)?;
        while stats.rows() < subsample {
            let Some(record) = reader.next_record(tokenizer)? else {
                break;
            };
            let invalid = index_map.extract(&record.fields, &mut values);
            if invalid > 0 {
                return Err(StatsError::InvalidStats {
                    path: reader.path().to_path_buf(),
                    line: record.line_number,
                    count: invalid,
                });
            }
            stats.update(&values)?;
        }
        debug!(
            "{}: {} rows accumulated after line {}",
            reader.path().display(),
            stats.rows(),
            reader.line_number()
        );
    }

    info!("Estimated means and standard deviations from {} rows", stats.rows());
    Ok(Moments::from(&stats))
}
