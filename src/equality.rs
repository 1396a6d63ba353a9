//! Value-aware equality.
//!
//! Two entry points:
//!
//! - [`values_equal`]: the predicate behind `==` on a
//!   [`LabeledDict`](crate::LabeledDict). Same variant, same axes, same cells.
//! - [`deep_equal`]: a configurable comparison where each facet (type,
//!   values, row labels, column labels, dtypes, names, freq) can be toggled
//!   independently through [`EqualOptions`].
//!
//! ## Examples
//!
//! ```rust
//! use fancy_collections::{deep_equal, labels, EqualOptions, Table};
//!
//! let left = Table::from_columns([("a", vec![1, 2])]).unwrap();
//! let right = Table::from_columns([("b", vec![1, 2])]).unwrap();
//!
//! // Column labels differ
//! assert!(!deep_equal(&left, &right, &EqualOptions::new()).unwrap());
//!
//! // Ignore them and the cells decide
//! let options = EqualOptions::new().with_check_columns(false);
//! assert!(deep_equal(&left, &right, &options).unwrap());
//! ```

use crate::error::{Error, Result};
use crate::label::{Freq, Labels};
use crate::scalar::{Dtype, Scalar};
use crate::series::Series;
use crate::table::Table;
use crate::value::Value;

/// Metadata a value exposes to [`deep_equal`].
///
/// Every accessor returning `None` means the value does not have that facet
/// at all, which is different from having it empty.
pub trait Inspect {
    /// Name of the concrete type or variant.
    fn kind(&self) -> &'static str;

    /// Value equality of the payload.
    fn equals(&self, other: &Self) -> bool;

    fn row_labels(&self) -> Option<&Labels> {
        None
    }

    fn column_labels(&self) -> Option<&Labels> {
        None
    }

    /// Step metadata carried by the value itself (not by its row axis).
    fn freq(&self) -> Option<Freq> {
        None
    }

    fn dtype(&self) -> Option<Dtype> {
        None
    }

    fn dtypes(&self) -> Option<Vec<Dtype>> {
        None
    }

    fn names(&self) -> Option<Vec<Option<String>>> {
        None
    }
}

/// Facet switches for [`deep_equal`].
///
/// `None` facets are derived from the left operand by [`EqualOptions::resolve`].
///
/// | facet | default |
/// |---|---|
/// | `check_type` | `true` |
/// | `check_values` | `true` |
/// | `check_index` | `true` if `left` has a row axis, unless `check_freq` was derived |
/// | `check_columns` | `true` if `left` has a column axis |
/// | `check_freq` | `true` if `left` itself carries freq metadata |
/// | `check_dtypes`, `check_index_dtype`, `check_columns_dtype`, `check_names` | `false` |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EqualOptions {
    pub check_type: bool,
    pub check_values: bool,
    pub check_index: Option<bool>,
    pub check_columns: Option<bool>,
    pub check_dtypes: bool,
    pub check_index_dtype: bool,
    pub check_columns_dtype: bool,
    pub check_names: bool,
    pub check_freq: Option<bool>,
}

impl Default for EqualOptions {
    fn default() -> Self {
        EqualOptions {
            check_type: true,
            check_values: true,
            check_index: None,
            check_columns: None,
            check_dtypes: false,
            check_index_dtype: false,
            check_columns_dtype: false,
            check_names: false,
            check_freq: None,
        }
    }
}

/// Facets after defaults were derived; every switch is decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Facets {
    pub check_type: bool,
    pub check_values: bool,
    pub check_index: bool,
    pub check_columns: bool,
    pub check_dtypes: bool,
    pub check_index_dtype: bool,
    pub check_columns_dtype: bool,
    pub check_names: bool,
    pub check_freq: bool,
}

impl EqualOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_check_type(mut self, on: bool) -> Self {
        self.check_type = on;
        self
    }

    #[must_use]
    pub fn with_check_values(mut self, on: bool) -> Self {
        self.check_values = on;
        self
    }

    #[must_use]
    pub fn with_check_index(mut self, on: bool) -> Self {
        self.check_index = Some(on);
        self
    }

    #[must_use]
    pub fn with_check_columns(mut self, on: bool) -> Self {
        self.check_columns = Some(on);
        self
    }

    #[must_use]
    pub fn with_check_dtypes(mut self, on: bool) -> Self {
        self.check_dtypes = on;
        self
    }

    #[must_use]
    pub fn with_check_index_dtype(mut self, on: bool) -> Self {
        self.check_index_dtype = on;
        self
    }

    #[must_use]
    pub fn with_check_columns_dtype(mut self, on: bool) -> Self {
        self.check_columns_dtype = on;
        self
    }

    #[must_use]
    pub fn with_check_names(mut self, on: bool) -> Self {
        self.check_names = on;
        self
    }

    #[must_use]
    pub fn with_check_freq(mut self, on: bool) -> Self {
        self.check_freq = Some(on);
        self
    }

    /// Derives every undecided facet from what `left` exposes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use fancy_collections::{EqualOptions, Freq, Labels, Series};
    ///
    /// let series = Series::from_values([1, 2]);
    /// let facets = EqualOptions::new().resolve(&series);
    /// assert!(facets.check_index);
    /// assert!(!facets.check_columns);
    ///
    /// let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    /// let days = Labels::date_range(start, 3, Freq::days(1));
    /// let facets = EqualOptions::new().resolve(&days);
    /// assert!(facets.check_freq);
    /// assert!(!facets.check_index);
    /// ```
    #[must_use]
    pub fn resolve<T: Inspect + ?Sized>(&self, left: &T) -> Facets {
        let derived_freq = self.check_freq.is_none() && left.freq().is_some();
        let check_freq = self.check_freq.unwrap_or(derived_freq);
        let check_index = self
            .check_index
            .unwrap_or(!derived_freq && left.row_labels().is_some());
        let check_columns = self
            .check_columns
            .unwrap_or(left.column_labels().is_some());
        Facets {
            check_type: self.check_type,
            check_values: self.check_values,
            check_index,
            check_columns,
            check_dtypes: self.check_dtypes,
            check_index_dtype: self.check_index_dtype,
            check_columns_dtype: self.check_columns_dtype,
            check_names: self.check_names,
            check_freq,
        }
    }
}

/// Compares two optional facets: absent on the right side never matches.
fn facet_eq<A: PartialEq>(left: Option<A>, right: Option<A>) -> bool {
    match (left, right) {
        (Some(l), Some(r)) => l == r,
        (None, None) => true,
        _ => false,
    }
}

fn axis_eq(left: Option<&Labels>, right: Option<&Labels>) -> bool {
    match (left, right) {
        (Some(l), Some(r)) => std::ptr::eq(l, r) || l.equals(r),
        _ => false,
    }
}

/// Configurable deep equality of two values.
///
/// Identity short-circuits to `true`. Otherwise each enabled facet is
/// checked in turn and the first failing one yields `Ok(false)`. When every
/// enabled facet passes the result is `Ok(true)`.
///
/// # Errors
///
/// Returns [`Error::Attribute`] when `check_dtypes` is on and `left` exposes
/// neither per-column `dtypes` nor a single `dtype`.
pub fn deep_equal<T: Inspect>(left: &T, right: &T, options: &EqualOptions) -> Result<bool> {
    let facets = options.resolve(left);

    if std::ptr::eq(left, right) {
        return Ok(true);
    }

    if facets.check_type && left.kind() != right.kind() {
        return Ok(false);
    }

    if facets.check_values && !left.equals(right) {
        return Ok(false);
    }

    if facets.check_index {
        if !axis_eq(left.row_labels(), right.row_labels()) {
            return Ok(false);
        }
        let (l, r) = (left.row_labels(), right.row_labels());
        if facets.check_index_dtype && !facet_eq(l.map(Labels::dtype), r.map(Labels::dtype)) {
            return Ok(false);
        }
        if facets.check_freq {
            let (lf, rf) = (l.and_then(Labels::freq), r.and_then(Labels::freq));
            match (lf, rf) {
                (Some(a), Some(b)) if a != b => return Ok(false),
                (Some(_), None) | (None, Some(_)) => return Ok(false),
                _ => {}
            }
        }
    } else if facets.check_freq && left.freq() != right.freq() {
        return Ok(false);
    }

    if facets.check_columns {
        if !axis_eq(left.column_labels(), right.column_labels()) {
            return Ok(false);
        }
        if facets.check_columns_dtype
            && !facet_eq(
                left.column_labels().map(Labels::dtype),
                right.column_labels().map(Labels::dtype),
            )
        {
            return Ok(false);
        }
    }

    if facets.check_dtypes {
        let same = if let Some(dtypes) = left.dtypes() {
            facet_eq(Some(dtypes), right.dtypes())
        } else if let Some(dtype) = left.dtype() {
            facet_eq(Some(dtype), right.dtype())
        } else {
            return Err(Error::attribute(format!(
                "'left' {} has neither a 'dtype' nor a 'dtypes' attribute, but 'check_dtypes' was true.",
                left.kind()
            )));
        };
        if !same {
            return Ok(false);
        }
    }

    if facets.check_names {
        if let Some(names) = left.names() {
            if !facet_eq(Some(names), right.names()) {
                return Ok(false);
            }
        }
    }

    Ok(true)
}

/// Strict equality used by container `==`.
///
/// Both values must be the same variant. Tables compare column labels, row
/// labels and cells; series compare row labels and values; label sequences
/// compare labels. A variant mismatch is `false`.
///
/// # Examples
///
/// ```rust
/// use fancy_collections::{labels, values_equal, Series, Value};
///
/// let a = Value::from(Series::from_values([1, 2]));
/// let b = Value::from(Series::new([1, 2], labels![5, 6]).unwrap());
/// assert!(values_equal(&a, &a.clone()));
/// assert!(!values_equal(&a, &b));
/// assert!(!values_equal(&a, &Value::from(labels![0, 1])));
/// ```
#[must_use]
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Table(l), Value::Table(r)) => {
            l.columns().equals(r.columns()) && l.index().equals(r.index()) && l.equals(r)
        }
        (Value::Series(l), Value::Series(r)) => l.index().equals(r.index()) && l.equals(r),
        (Value::Labels(l), Value::Labels(r)) => l.equals(r),
        _ => false,
    }
}

impl Inspect for Labels {
    fn kind(&self) -> &'static str {
        "Labels"
    }

    fn equals(&self, other: &Self) -> bool {
        Labels::equals(self, other)
    }

    fn freq(&self) -> Option<Freq> {
        Labels::freq(self)
    }

    fn dtype(&self) -> Option<Dtype> {
        Some(Labels::dtype(self))
    }

    fn names(&self) -> Option<Vec<Option<String>>> {
        Some(vec![self.name().map(str::to_string)])
    }
}

impl Inspect for Series {
    fn kind(&self) -> &'static str {
        "Series"
    }

    fn equals(&self, other: &Self) -> bool {
        Series::equals(self, other)
    }

    fn row_labels(&self) -> Option<&Labels> {
        Some(self.index())
    }

    fn dtype(&self) -> Option<Dtype> {
        Some(Series::dtype(self))
    }

    fn names(&self) -> Option<Vec<Option<String>>> {
        Some(vec![self.name().map(str::to_string)])
    }
}

impl Inspect for Table {
    fn kind(&self) -> &'static str {
        "Table"
    }

    fn equals(&self, other: &Self) -> bool {
        Table::equals(self, other)
    }

    fn row_labels(&self) -> Option<&Labels> {
        Some(self.index())
    }

    fn column_labels(&self) -> Option<&Labels> {
        Some(self.columns())
    }

    fn dtypes(&self) -> Option<Vec<Dtype>> {
        Some(Table::dtypes(self))
    }

    fn names(&self) -> Option<Vec<Option<String>>> {
        Some(vec![
            self.index().name().map(str::to_string),
            self.columns().name().map(str::to_string),
        ])
    }
}

impl Inspect for Value {
    fn kind(&self) -> &'static str {
        self.type_name()
    }

    fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Series(l), Value::Series(r)) => l.equals(r),
            (Value::Table(l), Value::Table(r)) => l.equals(r),
            (Value::Labels(l), Value::Labels(r)) => l.equals(r),
            _ => false,
        }
    }

    fn row_labels(&self) -> Option<&Labels> {
        match self {
            Value::Series(s) => Inspect::row_labels(s),
            Value::Table(t) => Inspect::row_labels(t),
            Value::Labels(l) => Inspect::row_labels(l),
        }
    }

    fn column_labels(&self) -> Option<&Labels> {
        Value::column_labels(self)
    }

    fn freq(&self) -> Option<Freq> {
        match self {
            Value::Labels(l) => l.freq(),
            Value::Series(_) | Value::Table(_) => None,
        }
    }

    fn dtype(&self) -> Option<Dtype> {
        Value::dtype(self)
    }

    fn dtypes(&self) -> Option<Vec<Dtype>> {
        Value::dtypes(self)
    }

    fn names(&self) -> Option<Vec<Option<String>>> {
        match self {
            Value::Series(s) => Inspect::names(s),
            Value::Table(t) => Inspect::names(t),
            Value::Labels(l) => Inspect::names(l),
        }
    }
}

impl Inspect for Scalar {
    fn kind(&self) -> &'static str {
        "Scalar"
    }

    fn equals(&self, other: &Self) -> bool {
        self.equivalent(other)
    }

    fn dtype(&self) -> Option<Dtype> {
        Some(Dtype::infer(std::iter::once(self)))
    }
}
