//! One-dimensional labeled vectors.

use crate::error::{Error, Result};
use crate::label::{Label, Labels};
use crate::scalar::{Dtype, Scalar};
use serde::{Deserialize, Serialize};

/// A run of scalars addressed by its own row labels.
///
/// # Examples
///
/// ```rust
/// use fancy_collections::{labels, Scalar, Series};
///
/// let s = Series::new([11, 22, 33], labels![1, 4, 7]).unwrap();
/// assert_eq!(s.len(), 3);
/// assert_eq!(s.get(&4.into()), Some(&Scalar::Int(22)));
///
/// // The row axis must match the number of values
/// assert!(Series::new([1, 2], labels![0]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Series {
    index: Labels,
    values: Vec<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Series {
    /// Creates a series over `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if `values` and `index` differ in length.
    pub fn new<I, S>(values: I, index: impl Into<Labels>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Scalar>,
    {
        let values: Vec<Scalar> = values.into_iter().map(Into::into).collect();
        let index = index.into();
        if values.len() != index.len() {
            return Err(Error::LengthMismatch(format!(
                "Length of values ({}) does not match length of index ({})",
                values.len(),
                index.len()
            )));
        }
        Ok(Series {
            index,
            values,
            name: None,
        })
    }

    /// Creates a series over the default axis `0..n`.
    #[must_use]
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Scalar>,
    {
        let values: Vec<Scalar> = values.into_iter().map(Into::into).collect();
        Series {
            index: Labels::range(0, values.len() as i64),
            values,
            name: None,
        }
    }

    /// Creates a series holding `value` at every label of `index`.
    #[must_use]
    pub fn filled(value: impl Into<Scalar>, index: impl Into<Labels>) -> Self {
        let index = index.into();
        let value = value.into();
        Series {
            values: vec![value; index.len()],
            index,
            name: None,
        }
    }

    /// An empty series.
    #[must_use]
    pub fn empty() -> Self {
        Series::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn index(&self) -> &Labels {
        &self.index
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &[Scalar] {
        &self.values
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn dtype(&self) -> Dtype {
        Dtype::infer(&self.values)
    }

    /// Value at the first occurrence of `label`.
    #[must_use]
    pub fn get(&self, label: &Label) -> Option<&Scalar> {
        self.index.position(label).and_then(|i| self.values.get(i))
    }

    /// Conforms the series to `index`; labels absent from `self` get `Null`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fancy_collections::{labels, Scalar, Series};
    ///
    /// let s = Series::from_values([1, 2]).reindex(&labels![1, 2]);
    /// assert_eq!(s.values(), &[Scalar::Int(2), Scalar::Null]);
    /// ```
    #[must_use]
    pub fn reindex(&self, index: &Labels) -> Series {
        let values = index
            .iter()
            .map(|label| self.get(label).cloned().unwrap_or_default())
            .collect();
        Series {
            index: index.clone(),
            values,
            name: self.name.clone(),
        }
    }

    /// Cell-wise equality: same length, same dtype, equivalent values.
    ///
    /// The row axis is not compared.
    #[must_use]
    pub fn equals(&self, other: &Series) -> bool {
        self.len() == other.len()
            && self.dtype() == other.dtype()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| a.equivalent(b))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Label, &Scalar)> {
        self.index.iter().zip(self.values.iter())
    }

    pub(crate) fn into_parts(self) -> (Labels, Vec<Scalar>, Option<String>) {
        (self.index, self.values, self.name)
    }
}

impl From<Labels> for Series {
    /// A series whose values are its own labels.
    fn from(labels: Labels) -> Self {
        let values = labels.iter().cloned().map(Scalar::from).collect();
        Series {
            name: labels.name().map(str::to_string),
            index: labels,
            values,
        }
    }
}
