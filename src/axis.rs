//! The key set of a dictionary, exposed as a label axis.
//!
//! An [`Axis`] is a named accessor pair bound to a container type as an
//! associated constant (see [`SliceDict::COLUMNS`]). Reading it materializes
//! the current keys as [`Labels`]; writing it renames every key in one
//! transaction.
//!
//! ```rust
//! use fancy_collections::{labels, SliceDict};
//!
//! let mut dict: SliceDict<i32> = SliceDict::try_from_iter([("a", 10), ("b", 20)]).unwrap();
//! dict.set_columns(labels![1, 2]).unwrap();
//! assert_eq!(dict.columns(), labels![1, 2]);
//! assert_eq!(dict.get(&2.into()), Some(&20));
//!
//! // The descriptor itself is reachable from the type
//! assert_eq!(SliceDict::<i32>::COLUMNS.name(), "columns");
//! ```

use crate::error::{Error, Result};
use crate::label::Labels;
use crate::slice_dict::{ItemPolicy, SliceDict};
use tracing::{debug, warn};

/// Named accessor pair over a dictionary's keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Axis {
    name: &'static str,
}

impl Axis {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Axis { name }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The dictionary's keys in iteration order, recomputed on every call.
    #[must_use]
    pub fn get<V, P>(&self, dict: &SliceDict<V, P>) -> Labels
    where
        P: ItemPolicy<V>,
    {
        dict.keys().cloned().collect()
    }

    /// Renames every key: the i-th value is re-keyed to the i-th label.
    ///
    /// The entries are cleared and re-inserted through the dictionary's
    /// policy. If any insertion is rejected, the original keys, values and
    /// order are restored before the error is returned.
    ///
    /// # Errors
    ///
    /// - [`Error::ConstraintViolation`] if `labels` contains duplicates
    /// - [`Error::LengthMismatch`] if `labels` and the keys differ in count
    /// - the policy's rejection, prefixed with `"Cannot set new <axis>, because"`
    pub fn set<V, P>(&self, dict: &mut SliceDict<V, P>, labels: impl Into<Labels>) -> Result<()>
    where
        V: Clone,
        P: ItemPolicy<V>,
    {
        let labels = labels.into();
        if !labels.is_unique() {
            return Err(Error::duplicates(self.name));
        }
        if dict.len() != labels.len() {
            return Err(Error::length_mismatch(self.name, dict.len(), labels.len()));
        }
        debug!(axis = self.name, entries = labels.len(), "reassigning axis labels");

        let original = dict.drain_entries();
        let rekeyed = labels
            .iter()
            .zip(original.iter())
            .try_for_each(|(label, (_, value))| dict.insert(label.clone(), value.clone()).map(drop));

        if let Err(e) = rekeyed {
            warn!(axis = self.name, error = %e, "axis reassignment rejected, restoring keys");
            dict.restore_entries(original);
            return Err(e.with_context(&format!("Cannot set new {}", self.name)));
        }
        Ok(())
    }
}

impl<V, P> SliceDict<V, P>
where
    P: ItemPolicy<V>,
{
    /// The key set exposed as the `"columns"` axis.
    pub const COLUMNS: Axis = Axis::new("columns");

    /// Keys as labels; see [`Axis::get`].
    #[must_use]
    pub fn columns(&self) -> Labels {
        Self::COLUMNS.get(self)
    }

    /// Renames all keys at once; see [`Axis::set`].
    ///
    /// # Errors
    ///
    /// See [`Axis::set`].
    pub fn set_columns(&mut self, labels: impl Into<Labels>) -> Result<()>
    where
        V: Clone,
    {
        Self::COLUMNS.set(self, labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::Label;
    use crate::slice_dict::StrKeys;

    const INDEX: Axis = Axis::new("index");

    fn abc<P: ItemPolicy<i32>>() -> SliceDict<i32, P> {
        SliceDict::try_from_iter([("a", 10), ("b", 20), ("c", 30)]).unwrap()
    }

    fn entries<P: ItemPolicy<i32>>(dict: &SliceDict<i32, P>) -> Vec<(Label, i32)> {
        dict.iter().map(|(k, v)| (k.clone(), *v)).collect()
    }

    #[test]
    fn test_get_tracks_live_keys() {
        let mut dict: SliceDict<i32> = SliceDict::try_from_iter([("zzz", 0)]).unwrap();
        assert_eq!(INDEX.get(&dict), Labels::from(vec!["zzz"]));
        dict.insert(1, 1).unwrap();
        assert_eq!(
            INDEX.get(&dict),
            Labels::from(vec![Label::from("zzz"), Label::from(1)])
        );
        dict.remove(&Label::from(1));
        assert_eq!(INDEX.get(&dict), Labels::from(vec!["zzz"]));
    }

    #[test]
    fn test_set_renames_positionally() {
        let mut dict = abc::<crate::slice_dict::AnyItem>();
        INDEX.set(&mut dict, vec![1, 2, 3]).unwrap();
        assert_eq!(
            entries(&dict),
            vec![(Label::from(1), 10), (Label::from(2), 20), (Label::from(3), 30)]
        );
    }

    #[test]
    fn test_length_mismatch_does_not_mutate() {
        let mut dict = abc::<crate::slice_dict::AnyItem>();
        let before = entries(&dict);
        let err = INDEX.set(&mut dict, vec![1, 2]).unwrap_err();
        assert_eq!(
            err,
            Error::LengthMismatch("index has 3 elements, but 2 values was passed.".to_string())
        );
        assert_eq!(entries(&dict), before);
    }

    #[test]
    fn test_duplicates_rejected() {
        let mut dict = abc::<crate::slice_dict::AnyItem>();
        let err = dict.set_columns(vec!["x", "x", "y"]).unwrap_err();
        assert_eq!(
            err,
            Error::ConstraintViolation("columns must not have duplicates.".to_string())
        );
    }

    #[test]
    fn test_rejected_rename_restores_state() {
        let mut dict = abc::<StrKeys>();
        let before = entries(&dict);
        let labels = Labels::from(vec![Label::from("x"), Label::from("y"), Label::from(9999)]);
        let err = dict.set_columns(labels).unwrap_err();
        assert!(matches!(err, Error::Type(_)));
        assert!(err
            .to_string()
            .starts_with("Cannot set new columns, because"));
        assert_eq!(entries(&dict), before);
    }

    #[test]
    fn test_descriptor_introspection() {
        assert_eq!(SliceDict::<i32, StrKeys>::COLUMNS, Axis::new("columns"));
        assert_eq!(INDEX.name(), "index");
    }
}
