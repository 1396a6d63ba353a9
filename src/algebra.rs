//! Union and intersection over many label sequences.
//!
//! Containers expose the row axis of each of their values through
//! [`RowAxes`]; the free functions fold those axes pairwise.
//!
//! ```rust
//! use fancy_collections::{intersection_labels, labels, union_labels, Labels};
//!
//! let axes = [labels![0, 1], labels![0, 1, 2], labels![1, 4, 7]];
//! assert_eq!(union_labels(&axes), labels![0, 1, 2, 4, 7]);
//! assert_eq!(intersection_labels(&axes), labels![1]);
//!
//! let none: [Labels; 0] = [];
//! assert!(union_labels(&none).is_empty());
//! ```

use crate::label::Labels;
use crate::value::Value;

/// Folds `sequences` with [`Labels::union`]. No input gives an empty sequence.
#[must_use]
pub fn union_labels<'a, I>(sequences: I) -> Labels
where
    I: IntoIterator<Item = &'a Labels>,
{
    fold(sequences, Labels::union)
}

/// Folds `sequences` with [`Labels::intersection`]. No input gives an empty sequence.
#[must_use]
pub fn intersection_labels<'a, I>(sequences: I) -> Labels
where
    I: IntoIterator<Item = &'a Labels>,
{
    fold(sequences, Labels::intersection)
}

fn fold<'a, I, F>(sequences: I, op: F) -> Labels
where
    I: IntoIterator<Item = &'a Labels>,
    F: Fn(&Labels, &Labels) -> Labels,
{
    let mut iter = sequences.into_iter();
    let Some(first) = iter.next() else {
        return Labels::new();
    };
    iter.fold(first.clone(), |acc, next| op(&acc, next))
}

/// Access to the row axis of every value in a collection.
///
/// A table contributes its row axis only; its columns never enter the algebra.
pub trait RowAxes {
    /// Row axes of all values, in iteration order.
    fn row_axes(&self) -> Vec<&Labels>;

    /// Union of all row axes.
    fn union_index(&self) -> Labels {
        union_labels(self.row_axes())
    }

    /// Labels present in every row axis.
    fn shared_index(&self) -> Labels {
        intersection_labels(self.row_axes())
    }
}

impl RowAxes for [Value] {
    fn row_axes(&self) -> Vec<&Labels> {
        self.iter().map(Value::row_labels).collect()
    }
}

impl RowAxes for Vec<Value> {
    fn row_axes(&self) -> Vec<&Labels> {
        self.as_slice().row_axes()
    }
}
