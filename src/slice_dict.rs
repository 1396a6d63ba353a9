//! Ordered, sliceable dictionary with a per-item policy hook.
//!
//! [`SliceDict`] is a thin wrapper around [`IndexMap`] keyed by [`Label`]. It
//! keeps insertion order, supports selecting several keys at once (by list,
//! by position range or by boolean mask), and routes every insertion through
//! an [`ItemPolicy`] so a container type can restrict its keys or values.
//!
//! ## Examples
//!
//! ```rust
//! use fancy_collections::{labels, SliceDict, StrKeys};
//!
//! let mut dict: SliceDict<i32> = SliceDict::new();
//! dict.insert("a", 1).unwrap();
//! dict.insert("b", 2).unwrap();
//! dict.insert("c", 3).unwrap();
//!
//! let picked = dict.select(&labels!["c", "a"]).unwrap();
//! assert_eq!(picked.keys().cloned().collect::<Vec<_>>(), labels!["c", "a"].into_vec());
//!
//! let masked = dict.mask(&[true, false, true]).unwrap();
//! assert_eq!(masked.len(), 2);
//!
//! // A policy can restrict keys
//! let mut strict: SliceDict<i32, StrKeys> = SliceDict::new();
//! assert!(strict.insert(7, 1).is_err());
//! ```

use crate::error::{Error, Result};
use crate::label::{Label, Labels};
use crate::value::Value;
use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;
use std::marker::PhantomData;
use std::ops::Range;

/// Hook invoked for every key/value pair before it is stored.
///
/// Returning an error rejects the pair; the dictionary is left untouched.
pub trait ItemPolicy<V> {
    fn check(key: &Label, value: &V) -> Result<()>;
}

/// Accepts every key and value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnyItem;

impl<V> ItemPolicy<V> for AnyItem {
    fn check(_key: &Label, _value: &V) -> Result<()> {
        Ok(())
    }
}

/// Only string keys are accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StrKeys;

impl<V> ItemPolicy<V> for StrKeys {
    fn check(key: &Label, _value: &V) -> Result<()> {
        if key.is_str() {
            Ok(())
        } else {
            Err(Error::type_error(format!(
                "key '{}' is not a string",
                key
            )))
        }
    }
}

/// Series and tables only; bare label sequences are rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoBareLabels;

impl ItemPolicy<Value> for NoBareLabels {
    fn check(key: &Label, value: &Value) -> Result<()> {
        match value {
            Value::Labels(_) => Err(Error::constraint(format!(
                "value for key '{}' must be a Series or Table, not Labels",
                key
            ))),
            Value::Series(_) | Value::Table(_) => Ok(()),
        }
    }
}

/// An insertion-ordered dictionary from [`Label`] to `V`, restricted by `P`.
pub struct SliceDict<V, P = AnyItem> {
    data: IndexMap<Label, V>,
    policy: PhantomData<P>,
}

impl<V, P> SliceDict<V, P>
where
    P: ItemPolicy<V>,
{
    /// Creates an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        SliceDict {
            data: IndexMap::new(),
            policy: PhantomData,
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        SliceDict {
            data: IndexMap::with_capacity(capacity),
            policy: PhantomData,
        }
    }

    /// Builds a dictionary from pairs, each checked by the policy.
    ///
    /// # Errors
    ///
    /// Returns the first policy rejection.
    pub fn try_from_iter<K, X, I>(pairs: I) -> Result<Self>
    where
        K: Into<Label>,
        X: Into<V>,
        I: IntoIterator<Item = (K, X)>,
    {
        let mut dict = SliceDict::new();
        dict.update(pairs)?;
        Ok(dict)
    }

    /// Inserts a pair, returning the previous value for the key.
    ///
    /// An existing key keeps its position.
    ///
    /// # Errors
    ///
    /// Returns the policy's error; the dictionary is unchanged.
    pub fn insert(&mut self, key: impl Into<Label>, value: impl Into<V>) -> Result<Option<V>> {
        let key = key.into();
        let value = value.into();
        P::check(&key, &value)?;
        Ok(self.data.insert(key, value))
    }

    /// Inserts every pair in order.
    ///
    /// # Errors
    ///
    /// Stops at the first policy rejection; earlier pairs stay inserted.
    pub fn update<K, X, I>(&mut self, pairs: I) -> Result<()>
    where
        K: Into<Label>,
        X: Into<V>,
        I: IntoIterator<Item = (K, X)>,
    {
        for (key, value) in pairs {
            self.insert(key, value)?;
        }
        Ok(())
    }

    /// Sets several keys at once, pairing `keys` and `values` positionally.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] when the counts differ (nothing is
    /// inserted) or the first policy rejection.
    pub fn set_many<I>(&mut self, keys: &Labels, values: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
    {
        let values: Vec<V> = values.into_iter().collect();
        if keys.len() != values.len() {
            return Err(Error::LengthMismatch(format!(
                "Length mismatch: Got {} keys, but value has {} items.",
                keys.len(),
                values.len()
            )));
        }
        for (key, value) in keys.iter().cloned().zip(values) {
            self.insert(key, value)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn get(&self, key: &Label) -> Option<&V> {
        self.data.get(key)
    }

    pub fn get_mut(&mut self, key: &Label) -> Option<&mut V> {
        self.data.get_mut(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &Label) -> bool {
        self.data.contains_key(key)
    }

    /// Removes a key, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &Label) -> Option<V> {
        self.data.shift_remove(key)
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, Label, V> {
        self.data.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, Label, V> {
        self.data.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, Label, V> {
        self.data.iter()
    }

    /// Key at `position` in iteration order.
    #[must_use]
    pub fn key_at(&self, position: usize) -> Option<&Label> {
        self.data.get_index(position).map(|(k, _)| k)
    }

    /// Takes every entry out, leaving the dictionary empty.
    pub(crate) fn drain_entries(&mut self) -> Vec<(Label, V)> {
        self.data.drain(..).collect()
    }

    /// Replaces the storage without running the policy.
    pub(crate) fn restore_entries(&mut self, entries: Vec<(Label, V)>) {
        self.data = entries.into_iter().collect();
    }
}

impl<V, P> SliceDict<V, P>
where
    V: Clone,
    P: ItemPolicy<V>,
{
    /// Selects `keys`, in the requested order, into a new dictionary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Key`] naming every missing key.
    pub fn select(&self, keys: &Labels) -> Result<Self> {
        let missing: Vec<&Label> = keys.iter().filter(|k| !self.contains_key(k)).collect();
        if !missing.is_empty() {
            return Err(Error::missing_keys(&missing));
        }
        let data = keys
            .iter()
            .filter_map(|k| self.data.get(k).map(|v| (k.clone(), v.clone())))
            .collect();
        Ok(SliceDict {
            data,
            policy: PhantomData,
        })
    }

    /// Selects the entries whose mask flag is `true`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] unless there is one flag per entry.
    pub fn mask(&self, mask: &[bool]) -> Result<Self> {
        if mask.len() != self.len() {
            return Err(Error::LengthMismatch(format!(
                "Unalignable boolean indexer. {} items are present, but indexer is of length {}",
                self.len(),
                mask.len()
            )));
        }
        let data = self
            .data
            .iter()
            .zip(mask)
            .filter(|(_, keep)| **keep)
            .map(|((k, v), _)| (k.clone(), v.clone()))
            .collect();
        Ok(SliceDict {
            data,
            policy: PhantomData,
        })
    }

    /// Selects entries by position; the range is clamped to the length.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> Self {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        let data = self
            .data
            .iter()
            .skip(start)
            .take(end - start)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        SliceDict {
            data,
            policy: PhantomData,
        }
    }
}

impl<V> SliceDict<V, AnyItem> {
    /// Inserts a pair into an unrestricted dictionary, which cannot refuse it.
    pub fn put(&mut self, key: impl Into<Label>, value: impl Into<V>) -> Option<V> {
        self.data.insert(key.into(), value.into())
    }
}

impl<V, P> Default for SliceDict<V, P>
where
    P: ItemPolicy<V>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone, P> Clone for SliceDict<V, P> {
    fn clone(&self) -> Self {
        SliceDict {
            data: self.data.clone(),
            policy: PhantomData,
        }
    }
}

impl<V: fmt::Debug, P> fmt::Debug for SliceDict<V, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.data.iter()).finish()
    }
}

impl<V, P> IntoIterator for SliceDict<V, P> {
    type Item = (Label, V);
    type IntoIter = indexmap::map::IntoIter<Label, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, V, P> IntoIterator for &'a SliceDict<V, P> {
    type Item = (&'a Label, &'a V);
    type IntoIter = indexmap::map::Iter<'a, Label, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<V, P> Serialize for SliceDict<V, P>
where
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.data.len()))?;
        for entry in self.data.iter() {
            seq.serialize_element(&entry)?;
        }
        seq.end()
    }
}

impl<'de, V, P> Deserialize<'de> for SliceDict<V, P>
where
    V: Deserialize<'de>,
    P: ItemPolicy<V>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor<V, P>(PhantomData<(V, P)>);

        impl<'de, V, P> Visitor<'de> for EntriesVisitor<V, P>
        where
            V: Deserialize<'de>,
            P: ItemPolicy<V>,
        {
            type Value = SliceDict<V, P>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence of (key, value) pairs")
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut dict = SliceDict::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some((key, value)) = seq.next_element::<(Label, V)>()? {
                    dict.insert(key, value).map_err(de::Error::custom)?;
                }
                Ok(dict)
            }
        }

        deserializer.deserialize_seq(EntriesVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> SliceDict<i32> {
        SliceDict::try_from_iter([("a", 10), ("b", 20), ("c", 30)]).unwrap()
    }

    #[test]
    fn test_put_keeps_position() {
        let mut dict = abc();
        assert_eq!(dict.put("b", 21), Some(20));
        assert_eq!(dict.put(0, 1), None);
        let pairs: Vec<(Label, i32)> = dict.iter().map(|(k, v)| (k.clone(), *v)).collect();
        assert_eq!(
            pairs,
            vec![
                (Label::from("a"), 10),
                (Label::from("b"), 21),
                (Label::from("c"), 30),
                (Label::from(0), 1),
            ]
        );
    }

    #[test]
    fn test_insertion_order_survives_overwrite() {
        let mut dict = abc();
        assert_eq!(dict.insert("a", 11).unwrap(), Some(10));
        let keys: Vec<_> = dict.keys().cloned().collect();
        assert_eq!(keys, Labels::from(vec!["a", "b", "c"]).into_vec());
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut dict = abc();
        assert_eq!(dict.remove(&Label::from("b")), Some(20));
        assert_eq!(dict.key_at(1), Some(&Label::from("c")));
    }

    #[test]
    fn test_select_missing_keys() {
        let err = abc().select(&Labels::from(vec!["a", "x"])).unwrap_err();
        assert_eq!(err, Error::Key("['x'] does not exist".to_string()));
    }

    #[test]
    fn test_mask_length_mismatch() {
        let err = abc().mask(&[true]).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch(_)));
    }

    #[test]
    fn test_slice_clamps() {
        let dict = abc();
        assert_eq!(dict.slice(1..10).len(), 2);
        assert!(dict.slice(5..9).is_empty());
        assert_eq!(dict.slice(0..1).key_at(0), Some(&Label::from("a")));
    }

    #[test]
    fn test_set_many() {
        let mut dict = abc();
        let err = dict
            .set_many(&Labels::from(vec!["x", "y"]), vec![1])
            .unwrap_err();
        assert!(matches!(err, Error::LengthMismatch(_)));
        assert_eq!(dict.len(), 3);

        dict.set_many(&Labels::from(vec!["x", "a"]), vec![1, 2]).unwrap();
        assert_eq!(dict.get(&Label::from("a")), Some(&2));
        assert_eq!(dict.len(), 4);
    }

    #[test]
    fn test_str_keys_policy() {
        let mut dict: SliceDict<i32, StrKeys> = SliceDict::new();
        dict.insert("ok", 1).unwrap();
        let err = dict.insert(3, 2).unwrap_err();
        assert!(matches!(err, Error::Type(_)));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_serde_roundtrip_keeps_order() {
        let dict = abc();
        let json = serde_json::to_string(&dict).unwrap();
        let back: SliceDict<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(
            back.iter().collect::<Vec<_>>(),
            dict.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_deserialize_runs_policy() {
        let json = serde_json::to_string(&abc()).unwrap();
        let ok: std::result::Result<SliceDict<i32, StrKeys>, _> = serde_json::from_str(&json);
        assert!(ok.is_ok());

        let numbered: SliceDict<i32> = SliceDict::try_from_iter([(1, 1)]).unwrap();
        let json = serde_json::to_string(&numbered).unwrap();
        let rejected: std::result::Result<SliceDict<i32, StrKeys>, _> =
            serde_json::from_str(&json);
        assert!(rejected.is_err());
    }
}
