//! # Retention Selector
//!
//! [`RetainedSet`] keeps the K lowest-distance rows seen so far in a stream,
//! sorted ascending by distance, in a fixed-capacity buffer.
//!
//! ## Insertion
//!
//! 1. Empty set: the row goes to position 0.
//! 2. Distance not below the current worst: appended while there is room,
//!    otherwise rejected. Once the set is full this is the usual outcome and
//!    costs one comparison.
//! 3. Otherwise the row goes in front of the first retained row with a
//!    strictly greater distance, shifting the tail right and evicting the worst
//!    row when full.
//!
//! Ties never displace a row already retained, so rows of equal distance keep
//! stream-encounter order. Every NaN, whatever its sign or payload, sorts
//! after every number and ties with other NaNs.
//!
//! Insertion is O(1) on the reject path and O(K) when the tail shifts. A
//! heap or tree of K entries would make the shift logarithmic without changing
//! which rows are kept.

use std::cmp::Ordering;
use std::path::Path;
use std::sync::Arc;

use crate::schema::ColumnSchema;


const INITIAL_ROWS: usize = 4096;

/// Ascending distance order with all NaNs last and equal to each other.
///
/// `f64::total_cmp` alone would put a sign-bit NaN (`-nan`) below `-inf`.
pub fn compare_distances(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// A scored simulated row, kept verbatim for re-emission.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRow {
    /// Euclidean distance to the observed statistics
    pub distance: f64,
    /// File the row came from
    pub source_file: Arc<Path>,
    /// 1-based physical line number within `source_file`
    pub line_number: usize,
    /// Every field of the row, byte for byte as it appeared in the file
    pub fields: Vec<Box<[u8]>>,
}

/// Result of offering a row to a [`RetainedSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The row now sits at this index
    Inserted(usize),
    /// The row was not kept and has been dropped
    Rejected,
}

impl Insertion {
    /// True for [`Insertion::Inserted`]
    pub fn is_inserted(self) -> bool {
        matches!(self, Insertion::Inserted(_))
    }
}

/// Fixed-capacity, ascending-by-distance set of the best rows seen so far.
#[derive(Debug, Clone)]
pub struct RetainedSet {
    rows: Vec<ScoredRow>,
    capacity: usize,
    header: ColumnSchema,
}

impl RetainedSet {
    /// Empty set holding at most `capacity` rows of a table with `header`.
    pub fn new(capacity: usize, header: ColumnSchema) -> Self {
        Self {
            // grows on demand past this; K may far exceed the row count
            rows: Vec::with_capacity(capacity.min(INITIAL_ROWS)),
            capacity,
            header,
        }
    }

    /// Maximum number of rows kept
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of rows currently kept
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no row is kept
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True once `capacity` rows are kept
    pub fn is_full(&self) -> bool {
        self.rows.len() >= self.capacity
    }

    /// Header of the table the rows belong to
    pub fn header(&self) -> &ColumnSchema {
        &self.header
    }

    /// Distance of the worst kept row
    pub fn worst_distance(&self) -> Option<f64> {
        self.rows.last().map(|row| row.distance)
    }

    /// Whether a row at `distance` would be kept.
    ///
    /// Lets callers skip building a [`ScoredRow`] that would be rejected.
    pub fn admits(&self, distance: f64) -> bool {
        if self.capacity == 0 {
            return false;
        }
        match self.worst_distance() {
            None => true,
            Some(worst) => !self.is_full() || compare_distances(distance, worst) == Ordering::Less,
        }
    }

    /// Offer a row; rejected rows are dropped here.
    pub fn insert(&mut self, row: ScoredRow) -> Insertion {
        if self.capacity == 0 {
            return Insertion::Rejected;
        }

        let Some(worst) = self.worst_distance() else {
            self.rows.push(row);
            return Insertion::Inserted(0);
        };

        if compare_distances(row.distance, worst) != Ordering::Less {
            if self.is_full() {
                return Insertion::Rejected;
            }
            self.rows.push(row);
            return Insertion::Inserted(self.rows.len() - 1);
        }

        let index = self
            .rows
            .partition_point(|kept| compare_distances(kept.distance, row.distance) != Ordering::Greater);
        if self.is_full() {
            self.rows.pop();
        }
        self.rows.insert(index, row);
        Insertion::Inserted(index)
    }

    /// Kept rows, best first
    pub fn rows(&self) -> &[ScoredRow] {
        &self.rows
    }

    /// Iterate over kept rows, best first
    pub fn iter(&self) -> std::slice::Iter<'_, ScoredRow> {
        self.rows.iter()
    }

    /// Consume the set, yielding its rows best first
    pub fn into_rows(self) -> Vec<ScoredRow> {
        self.rows
    }
}

impl<'a> IntoIterator for &'a RetainedSet {
    type Item = &'a ScoredRow;
    type IntoIter = std::slice::Iter<'a, ScoredRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
