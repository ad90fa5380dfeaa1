//! # Column Schemas
//!
//! Every summary-statistic table starts with a header line naming its columns.
//! This module models that header ([`ColumnSchema`]), checks that all simulated
//! tables of a run share one header, and resolves where each observed statistic
//! lives inside the simulated rows ([`ColumnIndexMap`]).
//!
//! ## Rules
//!
//! | Check | Failure |
//! |-------|---------|
//! | All simulated headers identical (names and order) | [`SchemaError::HeaderMismatch`] |
//! | Each observed column present in the simulated header | [`SchemaError::MissingColumn`] |
//! | Each observed column present only once | [`SchemaError::DuplicateColumn`] |
//!
//! Simulated tables usually carry parameter columns (e.g. `PRI.theta`) ahead of
//! the statistics, so the simulated header is typically a superset of the
//! observed one, in any order.

mod columns;
mod index_map;
mod validation;

#[cfg(test)]
mod tests;

pub use columns::ColumnSchema;
pub use index_map::ColumnIndexMap;
pub use validation::{validate_simulated_headers, SchemaError};
