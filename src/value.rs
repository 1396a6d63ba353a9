//! The labeled-array values a [`LabeledDict`](crate::LabeledDict) holds.
//!
//! [`Value`] is a sum over the three supported shapes:
//!
//! - [`Series`]: one scalar per row label
//! - [`Table`]: a grid with row and column labels
//! - [`Labels`]: a bare label sequence
//!
//! ## Usage Patterns
//!
//! ```rust
//! use fancy_collections::{labels, Series, Table, Value};
//!
//! let series = Value::from(Series::from_values([1, 2, 3]));
//! let table = Value::from(Table::from_columns([("c0", vec![1])]).unwrap());
//! let axis = Value::from(labels!["a", "b"]);
//!
//! assert!(series.is_series());
//! assert_eq!(table.column_labels(), Some(&labels!["c0"]));
//! assert_eq!(axis.row_labels(), &labels!["a", "b"]);
//! ```

use crate::label::Labels;
use crate::options::FormatOptions;
use crate::render;
use crate::scalar::Dtype;
use crate::series::Series;
use crate::table::Table;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A labeled-array value: a series, a table or a label sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Series(Series),
    Table(Table),
    Labels(Labels),
}

impl Value {
    /// Name of the concrete variant, as used in `"Empty <name>"` renderings.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Series(_) => "Series",
            Value::Table(_) => "Table",
            Value::Labels(_) => "Labels",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_series(&self) -> bool {
        matches!(self, Value::Series(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self, Value::Table(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_labels(&self) -> bool {
        matches!(self, Value::Labels(_))
    }

    #[inline]
    #[must_use]
    pub fn as_series(&self) -> Option<&Series> {
        match self {
            Value::Series(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Value::Table(t) => Some(t),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_labels(&self) -> Option<&Labels> {
        match self {
            Value::Labels(l) => Some(l),
            _ => None,
        }
    }

    /// The row axis: a label sequence is its own axis.
    #[must_use]
    pub fn row_labels(&self) -> &Labels {
        match self {
            Value::Series(s) => s.index(),
            Value::Table(t) => t.index(),
            Value::Labels(l) => l,
        }
    }

    /// The column axis, which only tables have.
    #[must_use]
    pub fn column_labels(&self) -> Option<&Labels> {
        match self {
            Value::Table(t) => Some(t.columns()),
            _ => None,
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.row_labels().len()
    }

    /// Whether the value holds no data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Series(s) => s.is_empty(),
            Value::Table(t) => t.is_empty(),
            Value::Labels(l) => l.is_empty(),
        }
    }

    /// Single aggregate dtype; tables have per-column [`Value::dtypes`] instead.
    #[must_use]
    pub fn dtype(&self) -> Option<Dtype> {
        match self {
            Value::Series(s) => Some(s.dtype()),
            Value::Labels(l) => Some(l.dtype()),
            Value::Table(_) => None,
        }
    }

    #[must_use]
    pub fn dtypes(&self) -> Option<Vec<Dtype>> {
        match self {
            Value::Table(t) => Some(t.dtypes()),
            _ => None,
        }
    }

    /// Renders the value as text lines honoring `options`.
    #[must_use]
    pub fn to_lines(&self, options: &FormatOptions) -> Vec<String> {
        match self {
            Value::Series(s) => render::series_lines(s, options),
            Value::Table(t) => render::table_lines(t, options),
            Value::Labels(l) => render::labels_lines(l, options),
        }
    }

    /// Renders the value as a single string honoring `options`.
    #[must_use]
    pub fn to_string_with(&self, options: &FormatOptions) -> String {
        self.to_lines(options).join("\n")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&FormatOptions::console()))
    }
}

impl From<Series> for Value {
    fn from(value: Series) -> Self {
        Value::Series(value)
    }
}

impl From<Table> for Value {
    fn from(value: Table) -> Self {
        Value::Table(value)
    }
}

impl From<Labels> for Value {
    fn from(value: Labels) -> Self {
        Value::Labels(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::Label;

    #[test]
    fn test_row_labels_extraction() {
        let table = Table::from_columns([("c0", vec![1, 2])]).unwrap();
        let value = Value::from(table);
        assert_eq!(value.row_labels(), &Labels::range(0, 2));
        assert_eq!(value.column_labels(), Some(&Labels::from(vec!["c0"])));
        assert_eq!(value.len(), 2);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::from(Series::empty()).type_name(), "Series");
        assert_eq!(Value::from(Table::empty()).type_name(), "Table");
        assert_eq!(Value::from(Labels::new()).type_name(), "Labels");
    }

    #[test]
    fn test_dtype_metadata() {
        let value = Value::from(Series::from_values([1.5]));
        assert_eq!(value.dtype(), Some(Dtype::Float64));
        assert_eq!(value.dtypes(), None);

        let value = Value::from(Labels::from(vec![Label::from("a")]));
        assert_eq!(value.dtype(), Some(Dtype::Object));
    }

    #[test]
    fn test_display_uses_console_options() {
        let value = Value::from(Series::from_values(0..100));
        let text = value.to_string();
        assert!(text.ends_with("Length: 100"));
        assert_eq!(text.lines().count(), 13);
    }
}
