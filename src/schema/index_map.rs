use crate::tokenizer::Fields;

use super::{ColumnSchema, SchemaError};

/// Position of each observed column inside the simulated header.
///
/// Entry `i` is the simulated-row index holding observed column `i`. One map
/// serves every simulated file of a run once their headers are validated equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndexMap {
    indices: Vec<usize>,
}

impl ColumnIndexMap {
    /// Resolve every observed column name against the simulated header.
    ///
    /// Each observed name must occur exactly once in `simulated`.
    pub fn build(observed: &ColumnSchema, simulated: &ColumnSchema) -> Result<Self, SchemaError> {
        let mut indices = Vec::with_capacity(observed.len());
        for name in observed.iter() {
            let mut positions = simulated.positions(name);
            let index = positions
                .next()
                .ok_or_else(|| SchemaError::MissingColumn(name.to_string()))?;
            if positions.next().is_some() {
                return Err(SchemaError::DuplicateColumn(name.to_string()));
            }
            indices.push(index);
        }
        Ok(Self { indices })
    }

    /// Number of matched columns
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True when no columns are matched
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Simulated-row indices in observed-column order
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Parse the matched columns of a simulated row into `out`.
    ///
    /// Parsing follows C `strtod`: the longest numeric prefix of a field is
    /// used, and a field without one contributes 0.0. Returns the number of
    /// fields that had no numeric prefix.
    pub fn extract(&self, fields: &Fields<'_>, out: &mut Vec<f64>) -> usize {
        out.clear();
        let mut invalid = 0;
        for &index in &self.indices {
            let value = fields.get(index).and_then(parse_leading_f64);
            match value {
                Some(v) => out.push(v),
                None => {
                    invalid += 1;
                    out.push(0.0);
                }
            }
        }
        invalid
    }
}

fn parse_leading_f64(token: &[u8]) -> Option<f64> {
    match fast_float::parse_partial::<f64, _>(token) {
        Ok((value, consumed)) if consumed > 0 => Some(value),
        _ => None,
    }
}
