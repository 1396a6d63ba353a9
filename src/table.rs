//! Two-dimensional labeled tables.

use crate::error::{Error, Result};
use crate::label::{Label, Labels};
use crate::scalar::{Dtype, Scalar};
use crate::series::Series;
use serde::{Deserialize, Serialize};

/// A column-major grid with independent row and column labels.
///
/// # Examples
///
/// ```rust
/// use fancy_collections::{labels, Table};
///
/// let table = Table::from_columns([("c0", vec![1, 1]), ("c1", vec![2, 2])]).unwrap();
/// assert_eq!(table.shape(), (2, 2));
/// assert_eq!(table.columns(), &labels!["c0", "c1"]);
/// assert_eq!(table.index(), &labels![0, 1]);
/// ```
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    index: Labels,
    columns: Labels,
    data: Vec<Vec<Scalar>>,
}

impl Table {
    /// Creates a table from column labels, column data and a row axis.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConstraintViolation`] for duplicate column labels and
    /// [`Error::LengthMismatch`] when a column's length differs from the row axis
    /// or the number of column labels differs from the number of columns.
    pub fn new(
        columns: impl Into<Labels>,
        data: Vec<Vec<Scalar>>,
        index: impl Into<Labels>,
    ) -> Result<Self> {
        let columns = columns.into();
        let index = index.into();
        if !columns.is_unique() {
            return Err(Error::duplicates("Table columns"));
        }
        if columns.len() != data.len() {
            return Err(Error::LengthMismatch(format!(
                "{} column labels passed, but data has {} columns",
                columns.len(),
                data.len()
            )));
        }
        if let Some(column) = data.iter().find(|c| c.len() != index.len()) {
            return Err(Error::LengthMismatch(format!(
                "Length of column ({}) does not match length of index ({})",
                column.len(),
                index.len()
            )));
        }
        Ok(Table {
            index,
            columns,
            data,
        })
    }

    /// Creates a table over the default row axis `0..n` from named columns.
    ///
    /// # Errors
    ///
    /// Fails like [`Table::new`]; columns of unequal length are a length mismatch.
    pub fn from_columns<K, I, C, S>(columns: I) -> Result<Self>
    where
        K: Into<Label>,
        I: IntoIterator<Item = (K, C)>,
        C: IntoIterator<Item = S>,
        S: Into<Scalar>,
    {
        let mut labels = Vec::new();
        let mut data = Vec::new();
        for (label, column) in columns {
            labels.push(label.into());
            data.push(column.into_iter().map(Into::into).collect::<Vec<Scalar>>());
        }
        let rows = data.first().map_or(0, Vec::len);
        Table::new(Labels::from(labels), data, Labels::range(0, rows as i64))
    }

    /// Aligns several series on the sorted union of their row axes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConstraintViolation`] for duplicate column labels.
    pub fn from_series<K, I>(series: I) -> Result<Self>
    where
        K: Into<Label>,
        I: IntoIterator<Item = (K, Series)>,
    {
        let pairs: Vec<(Label, Series)> =
            series.into_iter().map(|(k, s)| (k.into(), s)).collect();
        let index = pairs
            .iter()
            .map(|(_, s)| s.index().clone())
            .reduce(|acc, next| acc.union(&next))
            .unwrap_or_default();
        let mut labels = Vec::with_capacity(pairs.len());
        let mut data = Vec::with_capacity(pairs.len());
        for (label, s) in pairs {
            labels.push(label);
            data.push(s.reindex(&index).into_parts().1);
        }
        Table::new(Labels::from(labels), data, index)
    }

    /// A table with a row axis but no columns.
    #[must_use]
    pub fn with_index(index: impl Into<Labels>) -> Self {
        Table {
            index: index.into(),
            columns: Labels::new(),
            data: Vec::new(),
        }
    }

    /// An empty table.
    #[must_use]
    pub fn empty() -> Self {
        Table::default()
    }

    #[inline]
    #[must_use]
    pub fn index(&self) -> &Labels {
        &self.index
    }

    #[inline]
    #[must_use]
    pub fn columns(&self) -> &Labels {
        &self.columns
    }

    /// `(rows, columns)`
    #[inline]
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.index.len(), self.columns.len())
    }

    /// A table is empty when either dimension is zero.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty() || self.columns.is_empty()
    }

    /// Per-column dtypes, in column order.
    #[must_use]
    pub fn dtypes(&self) -> Vec<Dtype> {
        self.data.iter().map(Dtype::infer).collect()
    }

    #[must_use]
    pub fn column_data(&self, position: usize) -> Option<&[Scalar]> {
        self.data.get(position).map(Vec::as_slice)
    }

    /// Extracts a column as a series named after its label.
    #[must_use]
    pub fn column(&self, label: &Label) -> Option<Series> {
        let position = self.columns.position(label)?;
        self.series_at(position)
    }

    /// Iterates over `(column label, column series)` pairs.
    pub fn iter_columns(&self) -> impl Iterator<Item = (&Label, Series)> + '_ {
        self.columns
            .iter()
            .enumerate()
            .filter_map(move |(i, label)| self.series_at(i).map(|s| (label, s)))
    }

    fn series_at(&self, position: usize) -> Option<Series> {
        let label = self.columns.get(position)?;
        let data = self.data.get(position)?;
        Series::new(data.iter().cloned(), self.index.clone())
            .ok()
            .map(|s| s.with_name(label.to_string()))
    }

    /// Conforms the rows to `index`; labels absent from `self` get `Null`.
    #[must_use]
    pub fn reindex(&self, index: &Labels) -> Table {
        let data = self
            .data
            .iter()
            .map(|column| {
                index
                    .iter()
                    .map(|label| {
                        self.index
                            .position(label)
                            .and_then(|i| column.get(i))
                            .cloned()
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();
        Table {
            index: index.clone(),
            columns: self.columns.clone(),
            data,
        }
    }

    /// Cell-wise equality: same shape, same dtypes, equivalent cells.
    ///
    /// Neither axis is compared.
    #[must_use]
    pub fn equals(&self, other: &Table) -> bool {
        self.shape() == other.shape()
            && self.dtypes() == other.dtypes()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| a.iter().zip(b).all(|(x, y)| x.equivalent(y)))
    }
}
