//! The labeled dictionary: a [`SliceDict`] of [`Value`]s.
//!
//! ```rust
//! use fancy_collections::{labeled_dict, labels, Join, Series};
//!
//! let dict = labeled_dict! {
//!     "a" => Series::filled(11, labels![0, 1]),
//!     "b" => Series::filled(22, labels![0, 1, 2]),
//! };
//! assert_eq!(dict.columns(), labels!["a", "b"]);
//!
//! let outer = dict.to_table(Join::Outer).unwrap();
//! assert_eq!(outer.shape(), (3, 2));
//! let inner = dict.to_table(Join::Inner).unwrap();
//! assert_eq!(inner.index(), &labels![0, 1]);
//! ```

use crate::algebra::RowAxes;
use crate::equality::{values_equal, Inspect};
use crate::error::Result;
use crate::format::Formatter;
use crate::label::{Label, Labels};
use crate::options::FormatOptions;
use crate::series::Series;
use crate::slice_dict::{AnyItem, ItemPolicy, SliceDict};
use crate::table::Table;
use crate::value::Value;
use std::fmt;
use tracing::debug;

/// An ordered dictionary of labeled-array values.
pub type LabeledDict<P = AnyItem> = SliceDict<Value, P>;

/// How [`LabeledDict::to_table`] builds the row axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Join {
    /// Every row label of every value; gaps are `Null`.
    #[default]
    Outer,
    /// Only labels present in every value.
    Inner,
}

/// First of `name`, `name(1)`, `name(2)`, ... that is a key of neither
/// `source` nor `out`.
fn uniquify<P: ItemPolicy<Value>>(
    source: &LabeledDict<P>,
    out: &LabeledDict<P>,
    name: String,
) -> Label {
    let taken = |label: &Label| source.contains_key(label) || out.contains_key(label);
    let candidate = Label::from(name.as_str());
    if !taken(&candidate) {
        return candidate;
    }
    (1..)
        .map(|i| Label::from(format!("{}({})", name, i)))
        .find(|label| !taken(label))
        .unwrap_or(candidate)
}

impl<P> SliceDict<Value, P>
where
    P: ItemPolicy<Value>,
{
    /// Promotes table columns to top-level entries.
    ///
    /// Column `c` of the table under `key` becomes the series `"{key}_{c}"`;
    /// a name that is already a key of `self` or of the result gets a `(1)`,
    /// `(2)`, ... suffix, so no entry is ever overwritten. With
    /// `promote_index`, bare label sequences become series whose values are
    /// the labels. Everything else is kept as is.
    ///
    /// # Errors
    ///
    /// Returns the policy's rejection of a produced entry.
    pub fn flatten(&self, promote_index: bool) -> Result<Self> {
        let mut out = Self::with_capacity(self.len());
        for (key, value) in self.iter() {
            match value {
                Value::Table(table) => {
                    for (column, series) in table.iter_columns() {
                        let name = uniquify(self, &out, format!("{}_{}", key, column));
                        out.insert(name, series)?;
                    }
                }
                Value::Labels(labels) if promote_index => {
                    out.insert(key.clone(), Series::from(labels.clone()))?;
                }
                _ => {
                    out.insert(key.clone(), value.clone())?;
                }
            }
        }
        debug!(entries = self.len(), flattened = out.len(), promote_index, "flattened dictionary");
        Ok(out)
    }

    /// Aligns every value into one table, one column per (flattened) entry.
    ///
    /// # Errors
    ///
    /// Fails if flattening produces duplicate column labels or is rejected
    /// by the policy.
    pub fn to_table(&self, join: Join) -> Result<Table> {
        let flat = self.flatten(true)?;
        let series = flat.into_iter().filter_map(|(key, value)| match value {
            Value::Series(s) => Some((key, s)),
            Value::Labels(l) => Some((key, Series::from(l))),
            Value::Table(_) => None,
        });
        let table = Table::from_series(series)?;
        debug!(?join, rows = table.shape().0, columns = table.shape().1, "built table");
        Ok(match join {
            Join::Outer => table,
            Join::Inner => table.reindex(&self.shared_index()),
        })
    }

    /// `true` when there are no entries or every value is empty.
    #[must_use]
    pub fn all_empty(&self) -> bool {
        self.values().all(Value::is_empty)
    }

    /// Renders the dictionary side by side, one column per entry.
    #[must_use]
    pub fn to_string_with(&self, options: &FormatOptions) -> String {
        Formatter::new(options).format("LabeledDict", self.iter())
    }
}

impl<P> RowAxes for SliceDict<Value, P>
where
    P: ItemPolicy<Value>,
{
    fn row_axes(&self) -> Vec<&Labels> {
        self.values().map(Value::row_labels).collect()
    }
}

impl<P> fmt::Display for SliceDict<Value, P>
where
    P: ItemPolicy<Value>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&FormatOptions::console()))
    }
}

/// Same key set and, key by key, [`values_equal`] values. Order is ignored.
impl<P> PartialEq for SliceDict<Value, P>
where
    P: ItemPolicy<Value>,
{
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        self.len() == other.len()
            && self.iter().all(|(key, value)| {
                other
                    .get(key)
                    .map_or(false, |theirs| values_equal(value, theirs))
            })
    }
}

impl<P> Inspect for SliceDict<Value, P>
where
    P: ItemPolicy<Value>,
{
    fn kind(&self) -> &'static str {
        "LabeledDict"
    }

    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::scalar::Scalar;
    use crate::slice_dict::{NoBareLabels, StrKeys};

    fn abc() -> LabeledDict {
        LabeledDict::try_from_iter([
            ("a", Series::filled(11, Labels::range(0, 2))),
            ("b", Series::filled(22, Labels::range(0, 3))),
            ("c", Series::filled(33, Labels::from(vec![1, 4, 7]))),
        ])
        .unwrap()
    }

    fn frame() -> Table {
        Table::from_columns([("c0", vec![1, 1]), ("c1", vec![2, 2])]).unwrap()
    }

    #[test]
    fn test_flatten_promotes_columns() {
        let dict = LabeledDict::<AnyItem>::try_from_iter([("key0", frame())]).unwrap();
        let flat = dict.flatten(false).unwrap();
        assert_eq!(flat.columns(), Labels::from(vec!["key0_c0", "key0_c1"]));
        for (key, column) in [("key0_c0", "c0"), ("key0_c1", "c1")] {
            let expected = Value::from(frame().column(&Label::from(column)).unwrap());
            assert!(values_equal(flat.get(&Label::from(key)).unwrap(), &expected));
        }
    }

    #[test]
    fn test_flatten_uniquifies() {
        let mut dict = LabeledDict::<AnyItem>::new();
        dict.insert("k_c0", Series::from_values([0])).unwrap();
        dict.insert("k", Table::from_columns([("c0", vec![1])]).unwrap())
            .unwrap();
        let flat = dict.flatten(false).unwrap();
        assert_eq!(flat.columns(), Labels::from(vec!["k_c0", "k_c0(1)"]));
    }

    #[test]
    fn test_flatten_keeps_later_colliding_key() {
        let mut dict = LabeledDict::<AnyItem>::new();
        dict.insert("k", Table::from_columns([("c0", vec![1, 1, 1])]).unwrap())
            .unwrap();
        dict.insert("k_c0", Series::from_values([9, 9, 9])).unwrap();

        let flat = dict.flatten(false).unwrap();
        assert_eq!(flat.columns(), Labels::from(vec!["k_c0(1)", "k_c0"]));
        let kept = flat.get(&Label::from("k_c0")).and_then(Value::as_series).unwrap();
        assert_eq!(kept.values()[0], Scalar::from(9));

        let table = dict.to_table(Join::Outer).unwrap();
        assert_eq!(table.shape(), (3, 2));
    }

    #[test]
    fn test_flatten_promote_index() {
        let mut dict = LabeledDict::<AnyItem>::new();
        dict.insert("idx", Labels::from(vec!["x", "y"])).unwrap();
        let key = Label::from("idx");
        assert!(dict.flatten(false).unwrap().get(&key).unwrap().is_labels());
        let promoted = dict.flatten(true).unwrap();
        let series = promoted.get(&key).unwrap().as_series().unwrap();
        assert_eq!(series.index(), &Labels::from(vec!["x", "y"]));
    }

    #[test]
    fn test_to_table_outer_and_inner() {
        let dict = abc();
        let outer = dict.to_table(Join::Outer).unwrap();
        assert_eq!(outer.index(), &Labels::from(vec![0, 1, 2, 4, 7]));
        assert_eq!(outer.columns(), &Labels::from(vec!["a", "b", "c"]));
        assert!(outer.column_data(0).unwrap()[2].is_missing());

        let inner = dict.to_table(Join::Inner).unwrap();
        assert_eq!(inner.index(), &Labels::from(vec![1]));
        assert_eq!(inner.shape(), (1, 3));
    }

    #[test]
    fn test_all_empty() {
        assert!(LabeledDict::<AnyItem>::new().all_empty());
        let dict = LabeledDict::<AnyItem>::try_from_iter([
            ("a", Value::from(Series::empty())),
            ("b", Value::from(Table::empty())),
        ])
        .unwrap();
        assert!(dict.all_empty());
        assert!(!abc().all_empty());
    }

    #[test]
    fn test_equality_ignores_order() {
        let dict = abc();
        let reversed: LabeledDict =
            LabeledDict::try_from_iter(dict.iter().rev().map(|(k, v)| (k.clone(), v.clone())))
                .unwrap();
        assert_eq!(dict, reversed);

        let mut changed = dict.clone();
        changed
            .insert("a", Series::filled(12, Labels::range(0, 2)))
            .unwrap();
        assert_ne!(dict, changed);

        let mut fewer = dict.clone();
        fewer.remove(&Label::from("c"));
        assert_ne!(dict, fewer);
    }

    #[test]
    fn test_variant_mismatch_is_unequal() {
        let a = LabeledDict::<AnyItem>::try_from_iter([("k", Labels::range(0, 2))]).unwrap();
        let b = LabeledDict::<AnyItem>::try_from_iter([("k", Series::from_values([0, 1]))])
            .unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_policies() {
        let err = LabeledDict::<NoBareLabels>::try_from_iter([("k", Labels::new())]).unwrap_err();
        assert!(matches!(err, Error::ConstraintViolation(_)));

        let mut strict = LabeledDict::<StrKeys>::new();
        assert!(matches!(
            strict.insert(0, Series::empty()).unwrap_err(),
            Error::Type(_)
        ));
    }

    #[test]
    fn test_row_axes() {
        let dict = abc();
        assert_eq!(dict.union_index(), Labels::from(vec![0, 1, 2, 4, 7]));
        assert_eq!(dict.shared_index(), Labels::from(vec![1]));
    }

    #[test]
    fn test_empty_rendering() {
        assert_eq!(LabeledDict::<AnyItem>::new().to_string(), "Empty LabeledDict");
    }
}
