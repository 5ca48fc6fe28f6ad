//! Key/value map iterated in insertion order.
//!
//! This module provides [`OrderedMap`], a key-uniqueness layer over a
//! [`List`] of [`Entry`] pairs. Lookup and uniqueness are linear scans
//! under the key type's `PartialEq`; storage, iteration order, and
//! representation handling belong to the underlying list.
//!
//! Two properties define the map:
//! - Entries keep the order in which their keys were first inserted.
//! - Updating an existing key replaces its value in place and never moves
//!   the entry.
//!
//! The key comparison strategy is fixed per instantiation by the
//! `K: PartialEq` bound and resolved at monomorphization; no runtime type
//! inspection happens on the lookup path.
//!
//! # Examples
//!
//! ```rust
//! use smallord::collections::OrderedMap;
//!
//! let mut map: OrderedMap<&str, i32> = OrderedMap::new();
//! map.insert("a", 1)?;
//! map.insert("b", 2)?;
//! map.insert("a", 3)?;
//!
//! let pairs: Vec<(&&str, &i32)> = map.iter().collect();
//! assert_eq!(pairs, vec![(&"a", &3), (&"b", &2)]);
//! # Ok::<(), smallord::collections::CollectionError>(())
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use super::error::CollectionError;
use super::list::{List, ListIntoIterator};
use super::ordered_set::OrderedSet;

/// A key/value pair stored by [`OrderedMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    /// The entry's key. Unique within a map under `K`'s `PartialEq`.
    pub key: K,
    /// The entry's value.
    pub value: V,
}

/// A key/value map that iterates in key-insertion order.
///
/// `OrderedMap` wraps a `List<Entry<K, V>, N>` and enforces one
/// invariant: no two entries share an equal key. An entry's position is
/// established when its key is first inserted and survives any number of
/// value updates.
///
/// # Type Parameters
///
/// * `K` - The key type; its `PartialEq` is the key-equality relation.
/// * `V` - The value type.
/// * `N` - The inline capacity of the underlying list (default 8).
///
/// # Examples
///
/// ```rust
/// use smallord::collections::OrderedMap;
///
/// let mut map: OrderedMap<String, i32> = OrderedMap::new();
/// map.insert("one".to_string(), 1)?;
///
/// // String keys can be looked up with &str.
/// assert_eq!(map.get("one"), Some(&1));
/// assert_eq!(map.get("two"), None);
/// # Ok::<(), smallord::collections::CollectionError>(())
/// ```
#[derive(Clone)]
pub struct OrderedMap<K, V, const N: usize = 8> {
    entries: List<Entry<K, V>, N>,
}

impl<K, V, const N: usize> OrderedMap<K, V, N> {
    /// Creates a new empty map.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: List::new(),
        }
    }

    /// Returns the number of entries in the map.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries. Heap storage, if any, is retained.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns a contiguous view of the entries in insertion order.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[Entry<K, V>] {
        self.entries.as_slice()
    }

    /// Returns an iterator over `(&key, &value)` pairs in insertion
    /// order.
    #[inline]
    pub fn iter(&self) -> OrderedMapIterator<'_, K, V> {
        OrderedMapIterator {
            inner: self.entries.iter(),
        }
    }

    /// Returns an iterator over the keys in insertion order.
    #[inline]
    pub fn keys(&self) -> OrderedMapKeys<'_, K, V> {
        OrderedMapKeys {
            inner: self.entries.iter(),
        }
    }

    /// Returns an iterator over the values in insertion order.
    #[inline]
    pub fn values(&self) -> OrderedMapValues<'_, K, V> {
        OrderedMapValues {
            inner: self.entries.iter(),
        }
    }

    /// Returns an iterator over mutable value references in insertion
    /// order.
    #[inline]
    pub fn values_mut(&mut self) -> OrderedMapValuesMut<'_, K, V> {
        OrderedMapValuesMut {
            inner: self.entries.iter_mut(),
        }
    }
}

impl<K: PartialEq, V, const N: usize> OrderedMap<K, V, N> {
    /// Returns a reference to the value for `key`, or `None`.
    ///
    /// Absence is not an error; a missing key simply yields `None`.
    /// Supports borrowed key forms: an `OrderedMap<String, V>` can be
    /// queried with `&str`.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.entries
            .iter()
            .find(|entry| entry.key.borrow() == key)
            .map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value for `key`, or `None`.
    #[must_use]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.entries
            .iter_mut()
            .find(|entry| entry.key.borrow() == key)
            .map(|entry| &mut entry.value)
    }

    /// Returns the value for `key`, or `default` when the key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use smallord::collections::OrderedMap;
    ///
    /// let mut map: OrderedMap<&str, i32> = OrderedMap::new();
    /// map.insert("present", 1)?;
    /// assert_eq!(map.get_or("present", &0), &1);
    /// assert_eq!(map.get_or("absent", &0), &0);
    /// # Ok::<(), smallord::collections::CollectionError>(())
    /// ```
    #[must_use]
    pub fn get_or<'a, Q>(&'a self, key: &Q, default: &'a V) -> &'a V
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.get(key).unwrap_or(default)
    }

    /// Returns `true` if an entry with an equal key is present.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.entries.iter().any(|entry| entry.key.borrow() == key)
    }

    /// Inserts a key/value pair, returning the previous value if the key
    /// was present.
    ///
    /// An existing key has its value replaced **in place**; the entry's
    /// position in iteration order does not change. A new key is appended
    /// at the end, which is where its insertion order is established.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Allocation`] if the underlying list
    /// fails to grow while appending a new entry; the map is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use smallord::collections::OrderedMap;
    ///
    /// let mut map: OrderedMap<&str, i32> = OrderedMap::new();
    /// assert_eq!(map.insert("a", 1)?, None);
    /// assert_eq!(map.insert("a", 3)?, Some(1));
    /// assert_eq!(map.get("a"), Some(&3));
    /// # Ok::<(), smallord::collections::CollectionError>(())
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>, CollectionError> {
        for entry in self.entries.iter_mut() {
            if entry.key == key {
                return Ok(Some(std::mem::replace(&mut entry.value, value)));
            }
        }
        self.entries.push(Entry { key, value })?;
        Ok(None)
    }

    /// Removes the entry for `key`, returning its value if one was
    /// present.
    ///
    /// The relative order of the remaining entries is unchanged.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.key.borrow() == key)?;
        self.entries.remove(index).ok().map(|entry| entry.value)
    }

    /// Returns the keys as an [`OrderedSet`] in insertion order.
    ///
    /// Keys are unique by the map invariant, so no membership scans are
    /// repeated here. Standard-library allocation semantics.
    #[must_use]
    pub fn key_set(&self) -> OrderedSet<K, N>
    where
        K: Clone,
    {
        let keys: Vec<K> = self.entries.iter().map(|entry| entry.key.clone()).collect();
        OrderedSet::from_unique_list(List::from_vec(keys))
    }

    /// Returns the values as a [`List`] in insertion order.
    ///
    /// Standard-library allocation semantics.
    #[must_use]
    pub fn value_list(&self) -> List<V, N>
    where
        V: Clone,
    {
        self.entries.iter().map(|entry| entry.value.clone()).collect()
    }

    /// Returns a new map with the entries reordered by a key comparator.
    ///
    /// The sort is stable, so entries with keys comparing equal keep
    /// their insertion order. The source map is untouched; its default
    /// insertion-order semantics are not altered.
    #[must_use]
    pub fn sorted_by_key<F>(&self, mut compare: F) -> Self
    where
        K: Clone,
        V: Clone,
        F: FnMut(&K, &K) -> Ordering,
    {
        let mut entries = self.entries.clone();
        entries.sort_by(|left, right| compare(&left.key, &right.key));
        Self { entries }
    }

    /// Returns a new map sorted ascending by key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use smallord::collections::OrderedMap;
    ///
    /// let mut map: OrderedMap<i32, &str> = OrderedMap::new();
    /// map.insert(2, "two")?;
    /// map.insert(1, "one")?;
    ///
    /// let sorted = map.sorted_ascending();
    /// let keys: Vec<&i32> = sorted.keys().collect();
    /// assert_eq!(keys, vec![&1, &2]);
    ///
    /// // The source map keeps its insertion order.
    /// let original: Vec<&i32> = map.keys().collect();
    /// assert_eq!(original, vec![&2, &1]);
    /// # Ok::<(), smallord::collections::CollectionError>(())
    /// ```
    #[must_use]
    pub fn sorted_ascending(&self) -> Self
    where
        K: Ord + Clone,
        V: Clone,
    {
        self.sorted_by_key(K::cmp)
    }

    /// Returns a new map sorted descending by key.
    #[must_use]
    pub fn sorted_descending(&self) -> Self
    where
        K: Ord + Clone,
        V: Clone,
    {
        self.sorted_by_key(|left, right| right.cmp(left))
    }
}

impl<K, V, const N: usize> Default for OrderedMap<K, V, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Key/value equality irrespective of insertion order.
impl<K: PartialEq, V: PartialEq, const N: usize> PartialEq for OrderedMap<K, V, N> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K: Eq, V: Eq, const N: usize> Eq for OrderedMap<K, V, N> {}

impl<K: fmt::Debug, V: fmt::Debug, const N: usize> fmt::Debug for OrderedMap<K, V, N> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display, const N: usize> fmt::Display for OrderedMap<K, V, N> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("{")?;
        for (index, (key, value)) in self.iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        formatter.write_str("}")
    }
}

impl<K: PartialEq, V, const N: usize> FromIterator<(K, V)> for OrderedMap<K, V, N> {
    /// Builds a map from key/value pairs. A key appearing more than once
    /// keeps its first position with its last value. Standard-library
    /// allocation semantics (no `Result`).
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut entries: Vec<Entry<K, V>> = Vec::new();
        for (key, value) in iter {
            match entries.iter_mut().find(|entry| entry.key == key) {
                Some(entry) => entry.value = value,
                None => entries.push(Entry { key, value }),
            }
        }
        Self {
            entries: List::from_vec(entries),
        }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over an [`OrderedMap`], yielding `(&K, &V)`.
pub struct OrderedMapIterator<'a, K, V> {
    inner: std::slice::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for OrderedMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for OrderedMapIterator<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|entry| (&entry.key, &entry.value))
    }
}

impl<K, V> ExactSizeIterator for OrderedMapIterator<'_, K, V> {}

/// Borrowing iterator over an [`OrderedMap`]'s keys.
pub struct OrderedMapKeys<'a, K, V> {
    inner: std::slice::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for OrderedMapKeys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| &entry.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for OrderedMapKeys<'_, K, V> {}

/// Borrowing iterator over an [`OrderedMap`]'s values.
pub struct OrderedMapValues<'a, K, V> {
    inner: std::slice::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for OrderedMapValues<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| &entry.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for OrderedMapValues<'_, K, V> {}

/// Mutable iterator over an [`OrderedMap`]'s values.
pub struct OrderedMapValuesMut<'a, K, V> {
    inner: std::slice::IterMut<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for OrderedMapValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| &mut entry.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for OrderedMapValuesMut<'_, K, V> {}

/// Owning iterator over an [`OrderedMap`], yielding `(K, V)`.
pub struct OrderedMapIntoIterator<K, V, const N: usize> {
    inner: ListIntoIterator<Entry<K, V>, N>,
}

impl<K, V, const N: usize> Iterator for OrderedMapIntoIterator<K, V, N> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (entry.key, entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, const N: usize> ExactSizeIterator for OrderedMapIntoIterator<K, V, N> {}

impl<K, V, const N: usize> IntoIterator for OrderedMap<K, V, N> {
    type Item = (K, V);
    type IntoIter = OrderedMapIntoIterator<K, V, N>;

    fn into_iter(self) -> Self::IntoIter {
        OrderedMapIntoIterator {
            inner: self.entries.into_iter(),
        }
    }
}

impl<'a, K, V, const N: usize> IntoIterator for &'a OrderedMap<K, V, N> {
    type Item = (&'a K, &'a V);
    type IntoIter = OrderedMapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V, const N: usize> serde::Serialize for OrderedMap<K, V, N>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct OrderedMapVisitor<K, V, const N: usize> {
    marker: std::marker::PhantomData<(K, V)>,
}

#[cfg(feature = "serde")]
impl<'de, K, V, const N: usize> serde::de::Visitor<'de> for OrderedMapVisitor<K, V, N>
where
    K: serde::Deserialize<'de> + PartialEq,
    V: serde::Deserialize<'de>,
{
    type Value = OrderedMap<K, V, N>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        // Duplicate keys in the input follow insert semantics: first
        // position, last value.
        let mut entries: Vec<Entry<K, V>> = Vec::new();
        while let Some((key, value)) = map.next_entry::<K, V>()? {
            match entries.iter_mut().find(|entry| entry.key == key) {
                Some(entry) => entry.value = value,
                None => entries.push(Entry { key, value }),
            }
        }
        Ok(OrderedMap {
            entries: List::from_vec(entries),
        })
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V, const N: usize> serde::Deserialize<'de> for OrderedMap<K, V, N>
where
    K: serde::Deserialize<'de> + PartialEq,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(OrderedMapVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
