//! Labels and label sequences.
//!
//! A [`Label`] names one position along an axis, or one key of a
//! [`LabeledDict`](crate::LabeledDict). A [`Labels`] sequence is the axis
//! itself: the row axis of a series or table, the column axis of a table, or
//! the key set of a container.
//!
//! ## Set operations
//!
//! ```rust
//! use fancy_collections::{labels, Labels};
//!
//! let a = labels![0, 1, 2];
//! let b = labels![4, 1, 7];
//!
//! assert_eq!(a.union(&b), labels![0, 1, 2, 4, 7]);
//! assert_eq!(b.intersection(&a), labels![1]);
//! ```

use crate::scalar::{fmt_datetime, Dtype, Scalar};
use chrono::{DateTime, Duration, Utc};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A hashable, totally ordered label.
///
/// Labels of different kinds order as `Int < Str < Date`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Label {
    Int(i64),
    Str(String),
    Date(DateTime<Utc>),
}

impl Label {
    /// Returns `true` if this is a string label.
    #[inline]
    #[must_use]
    pub const fn is_str(&self) -> bool {
        matches!(self, Label::Str(_))
    }

    /// If the label is a string, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Label::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Int(i) => write!(f, "{}", i),
            Label::Str(s) => f.write_str(s),
            Label::Date(dt) => f.write_str(&fmt_datetime(dt)),
        }
    }
}

impl From<i32> for Label {
    fn from(value: i32) -> Self {
        Label::Int(value as i64)
    }
}

impl From<i64> for Label {
    fn from(value: i64) -> Self {
        Label::Int(value)
    }
}

impl From<u32> for Label {
    fn from(value: u32) -> Self {
        Label::Int(value as i64)
    }
}

impl From<usize> for Label {
    fn from(value: usize) -> Self {
        Label::Int(value as i64)
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Label::Str(value.to_string())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Label::Str(value)
    }
}

impl From<&String> for Label {
    fn from(value: &String) -> Self {
        Label::Str(value.clone())
    }
}

impl From<DateTime<Utc>> for Label {
    fn from(value: DateTime<Utc>) -> Self {
        Label::Date(value)
    }
}

impl From<Label> for Scalar {
    fn from(value: Label) -> Self {
        match value {
            Label::Int(i) => Scalar::Int(i),
            Label::Str(s) => Scalar::Str(s),
            Label::Date(dt) => Scalar::Date(dt),
        }
    }
}

/// Step metadata of a regularly spaced date axis.
///
/// # Examples
///
/// ```rust
/// use fancy_collections::Freq;
///
/// assert_eq!(Freq::days(1).to_string(), "D");
/// assert_eq!(Freq::hours(6).to_string(), "6h");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Freq {
    seconds: i64,
}

impl Freq {
    #[must_use]
    pub const fn seconds(n: i64) -> Self {
        Freq { seconds: n }
    }

    #[must_use]
    pub const fn minutes(n: i64) -> Self {
        Freq { seconds: n * 60 }
    }

    #[must_use]
    pub const fn hours(n: i64) -> Self {
        Freq { seconds: n * 3_600 }
    }

    #[must_use]
    pub const fn days(n: i64) -> Self {
        Freq { seconds: n * 86_400 }
    }

    /// Converts a `chrono` duration, truncating to whole seconds.
    #[must_use]
    pub fn from_duration(duration: Duration) -> Self {
        Freq {
            seconds: duration.num_seconds(),
        }
    }

    #[must_use]
    pub fn to_duration(self) -> Duration {
        Duration::seconds(self.seconds)
    }
}

impl fmt::Display for Freq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.seconds;
        let (n, unit) = if s != 0 && s % 86_400 == 0 {
            (s / 86_400, "D")
        } else if s != 0 && s % 3_600 == 0 {
            (s / 3_600, "h")
        } else if s != 0 && s % 60 == 0 {
            (s / 60, "min")
        } else {
            (s, "s")
        };
        if n == 1 {
            f.write_str(unit)
        } else {
            write!(f, "{}{}", n, unit)
        }
    }
}

/// An ordered sequence of labels with optional name and step metadata.
///
/// Equality through `==` compares everything including `name` and `freq`;
/// [`Labels::equals`] compares the labels alone.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Labels {
    labels: Vec<Label>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    freq: Option<Freq>,
}

impl Labels {
    /// Creates an empty label sequence.
    #[must_use]
    pub fn new() -> Self {
        Labels::default()
    }

    /// Creates the integer axis `start..stop`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fancy_collections::{labels, Labels};
    ///
    /// assert_eq!(Labels::range(0, 3), labels![0, 1, 2]);
    /// ```
    #[must_use]
    pub fn range(start: i64, stop: i64) -> Self {
        (start..stop).map(Label::Int).collect()
    }

    /// Creates a regular date axis of `periods` labels that carries `freq`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use fancy_collections::{Freq, Labels};
    ///
    /// let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    /// let days = Labels::date_range(start, 3, Freq::days(1));
    /// assert_eq!(days.len(), 3);
    /// assert_eq!(days.freq(), Some(Freq::days(1)));
    /// ```
    #[must_use]
    pub fn date_range(start: DateTime<Utc>, periods: usize, freq: Freq) -> Self {
        let step = freq.to_duration();
        let mut labels = Vec::with_capacity(periods);
        let mut current = start;
        for _ in 0..periods {
            labels.push(Label::Date(current));
            current += step;
        }
        Labels {
            labels,
            name: None,
            freq: Some(freq),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_freq(mut self, freq: Option<Freq>) -> Self {
        self.freq = freq;
        self
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn freq(&self) -> Option<Freq> {
        self.freq
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Label> {
        self.labels.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Label> {
        self.labels.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Label] {
        &self.labels
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Label> {
        self.labels
    }

    #[must_use]
    pub fn contains(&self, label: &Label) -> bool {
        self.labels.contains(label)
    }

    /// Position of the first occurrence of `label`.
    #[must_use]
    pub fn position(&self, label: &Label) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Returns `true` if no label occurs twice.
    #[must_use]
    pub fn is_unique(&self) -> bool {
        let set: IndexSet<&Label> = self.labels.iter().collect();
        set.len() == self.labels.len()
    }

    /// Element-type metadata of the labels.
    #[must_use]
    pub fn dtype(&self) -> Dtype {
        if self.labels.is_empty() {
            Dtype::Object
        } else if self.labels.iter().all(|l| matches!(l, Label::Int(_))) {
            Dtype::Int64
        } else if self.labels.iter().all(|l| matches!(l, Label::Date(_))) {
            Dtype::Datetime
        } else {
            Dtype::Object
        }
    }

    /// Compares label content only, ignoring name and freq.
    #[must_use]
    pub fn equals(&self, other: &Labels) -> bool {
        self.labels == other.labels
    }

    /// Set union; the result is de-duplicated and sorted.
    ///
    /// Identical sequences are returned unchanged, order included.
    #[must_use]
    pub fn union(&self, other: &Labels) -> Labels {
        if self.equals(other) && self.is_unique() {
            return self.clone();
        }
        let mut set: IndexSet<Label> = self.labels.iter().cloned().collect();
        set.extend(other.labels.iter().cloned());
        set.sort();
        set.into_iter().collect()
    }

    /// Set intersection; the result keeps the order of `self`.
    #[must_use]
    pub fn intersection(&self, other: &Labels) -> Labels {
        let theirs: IndexSet<&Label> = other.labels.iter().collect();
        let mut seen = IndexSet::new();
        for label in &self.labels {
            if theirs.contains(label) {
                seen.insert(label.clone());
            }
        }
        seen.into_iter().collect()
    }
}

impl fmt::Display for Labels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]",
            self.labels
                .iter()
                .map(|l| l.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl FromIterator<Label> for Labels {
    fn from_iter<T: IntoIterator<Item = Label>>(iter: T) -> Self {
        Labels {
            labels: iter.into_iter().collect(),
            name: None,
            freq: None,
        }
    }
}

impl<L: Into<Label>> From<Vec<L>> for Labels {
    fn from(value: Vec<L>) -> Self {
        value.into_iter().map(Into::into).collect()
    }
}

impl<L: Into<Label>, const N: usize> From<[L; N]> for Labels {
    fn from(value: [L; N]) -> Self {
        value.into_iter().map(Into::into).collect()
    }
}

impl IntoIterator for Labels {
    type Item = Label;
    type IntoIter = std::vec::IntoIter<Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.into_iter()
    }
}

impl<'a> IntoIterator for &'a Labels {
    type Item = &'a Label;
    type IntoIter = std::slice::Iter<'a, Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_union_sorts_and_dedups() {
        let a = Labels::from(vec![2, 0, 2]);
        let b = Labels::from(vec![1]);
        assert_eq!(a.union(&b), Labels::from(vec![0, 1, 2]));
    }

    #[test]
    fn test_union_of_identical_keeps_order() {
        let a = Labels::from(vec!["z", "a"]);
        assert_eq!(a.union(&a.clone()), a);
    }

    #[test]
    fn test_intersection_keeps_left_order() {
        let a = Labels::from(vec![3, 1, 2]);
        let b = Labels::from(vec![1, 2, 3]);
        assert_eq!(a.intersection(&b), Labels::from(vec![3, 1, 2]));
        assert!(a.intersection(&Labels::from(vec![9])).is_empty());
    }

    #[test]
    fn test_mixed_label_ordering() {
        let a = Labels::from(vec![Label::from("b"), Label::from(1)]);
        let b = Labels::from(vec![Label::from("a")]);
        let expected = Labels::from(vec![Label::from(1), Label::from("a"), Label::from("b")]);
        assert_eq!(a.union(&b), expected);
    }

    #[test]
    fn test_dtype() {
        assert_eq!(Labels::range(0, 2).dtype(), Dtype::Int64);
        assert_eq!(Labels::from(vec!["a"]).dtype(), Dtype::Object);
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            Labels::date_range(start, 2, Freq::hours(1)).dtype(),
            Dtype::Datetime
        );
    }

    #[test]
    fn test_equals_ignores_metadata() {
        let a = Labels::range(0, 2).with_name("t");
        let b = Labels::range(0, 2);
        assert!(a.equals(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_freq_display() {
        assert_eq!(Freq::minutes(15).to_string(), "15min");
        assert_eq!(Freq::seconds(1).to_string(), "s");
        assert_eq!(Freq::days(2).to_string(), "2D");
    }
}
