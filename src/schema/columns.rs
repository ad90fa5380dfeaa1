use std::fmt;

use crate::tokenizer::Fields;

/// Ordered column names read from the first line of a stats table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSchema {
    names: Vec<String>,
}

impl ColumnSchema {
    /// Create a schema from column names
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a schema from a tokenized header line.
    ///
    /// Names that are not UTF-8 are decoded lossily.
    pub fn from_fields(fields: &Fields<'_>) -> Self {
        Self {
            names: fields.to_strings(),
        }
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if the header named no columns
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Column names in header order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterate over column names
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Every index at which `name` occurs.
    pub fn positions<'a>(&'a self, name: &'a str) -> impl Iterator<Item = usize> + 'a {
        self.names
            .iter()
            .enumerate()
            .filter(move |(_, n)| n.as_str() == name)
            .map(|(i, _)| i)
    }
}

/// Tab-joined column names, the form used on output.
impl fmt::Display for ColumnSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                f.write_str("\t")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}
