//! Duplicate-free set iterated in insertion order.
//!
//! This module provides [`OrderedSet`], a thin uniqueness layer over
//! [`List`]: storage, iteration, and representation handling are
//! delegated entirely to the underlying list, and the set adds only the
//! membership scan performed at every mutating entry point.
//!
//! Membership is a linear scan under the instantiation's `PartialEq`.
//! For the small cardinalities this collection targets, the cache-local
//! scan beats a hash structure; the linear behavior is part of the
//! contract, not an implementation detail to be swapped out.
//!
//! # Examples
//!
//! ```rust
//! use smallord::collections::OrderedSet;
//!
//! let mut set: OrderedSet<i32> = OrderedSet::new();
//! assert!(set.insert(1)?);
//! assert!(set.insert(2)?);
//! assert!(!set.insert(1)?); // duplicate: no-op
//!
//! assert_eq!(set.len(), 2);
//! let elements: Vec<&i32> = set.iter().collect();
//! assert_eq!(elements, vec![&1, &2]);
//! # Ok::<(), smallord::collections::CollectionError>(())
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::ops::{Range, RangeInclusive};

use super::error::CollectionError;
use super::list::{List, ListIntoIterator};

/// A duplicate-free collection that iterates in insertion order.
///
/// `OrderedSet` wraps a [`List`] and enforces one invariant: no two
/// elements compare equal under the instantiation's `PartialEq`. The
/// equality relation is fixed per instantiation at compile time by the
/// trait bound; there is no per-call dispatch.
///
/// # Type Parameters
///
/// * `T` - The element type.
/// * `N` - The inline capacity of the underlying list (default 8).
///
/// # Examples
///
/// ```rust
/// use smallord::collections::OrderedSet;
///
/// let mut set: OrderedSet<&str> = OrderedSet::new();
/// set.insert("b")?;
/// set.insert("a")?;
///
/// // Insertion order, not sorted order.
/// assert_eq!(set.as_slice(), &["b", "a"]);
/// # Ok::<(), smallord::collections::CollectionError>(())
/// ```
#[derive(Clone)]
pub struct OrderedSet<T, const N: usize = 8> {
    items: List<T, N>,
}

impl<T, const N: usize> OrderedSet<T, N> {
    /// Creates a new empty set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { items: List::new() }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a contiguous view of the elements in insertion order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }

    /// Returns a reference to the first-inserted element, or `None`.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns a reference to the last-inserted element, or `None`.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns an iterator over references to the elements in insertion
    /// order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Removes all elements. Heap storage, if any, is retained.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Wraps a list whose elements are already pairwise distinct.
    pub(crate) fn from_unique_list(items: List<T, N>) -> Self {
        Self { items }
    }
}

impl<T: PartialEq, const N: usize> OrderedSet<T, N> {
    /// Inserts an element, returning whether it was newly added.
    ///
    /// An element equal to one already present makes this a no-op
    /// returning `Ok(false)`; insertion is idempotent. New elements are
    /// appended at the end, which is where their insertion order is
    /// established.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Allocation`] if the underlying list
    /// fails to grow; the set is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use smallord::collections::OrderedSet;
    ///
    /// let mut set: OrderedSet<i32> = OrderedSet::new();
    /// assert!(set.insert(42)?);
    /// assert!(!set.insert(42)?);
    /// assert_eq!(set.len(), 1);
    /// # Ok::<(), smallord::collections::CollectionError>(())
    /// ```
    pub fn insert(&mut self, element: T) -> Result<bool, CollectionError> {
        if self.contains(&element) {
            return Ok(false);
        }
        self.items.push(element)?;
        Ok(true)
    }

    /// Returns `true` if an equal element is present.
    ///
    /// Supports borrowed forms of the element type: an
    /// `OrderedSet<String>` can be queried with `&str` directly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use smallord::collections::OrderedSet;
    ///
    /// let mut set: OrderedSet<String> = OrderedSet::new();
    /// set.insert("hello".to_string())?;
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("world"));
    /// # Ok::<(), smallord::collections::CollectionError>(())
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.items.iter().any(|item| item.borrow() == element)
    }

    /// Removes an equal element, returning whether one was present.
    ///
    /// The relative order of the remaining elements is unchanged.
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        match self.items.iter().position(|item| item.borrow() == element) {
            Some(index) => self.items.remove(index).is_ok(),
            None => false,
        }
    }

    /// Returns the union of two sets.
    ///
    /// Output order is all of `self`'s elements in their insertion order,
    /// followed by the elements of `other` not already present, in
    /// theirs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use smallord::collections::OrderedSet;
    ///
    /// let left: OrderedSet<i32> = [1, 3].into_iter().collect();
    /// let right: OrderedSet<i32> = [3, 2].into_iter().collect();
    /// assert_eq!(left.union(&right).as_slice(), &[1, 3, 2]);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let mut elements: Vec<T> = self.as_slice().to_vec();
        for element in other.iter() {
            if !elements.iter().any(|existing| existing == element) {
                elements.push(element.clone());
            }
        }
        Self::from_unique_list(List::from_vec(elements))
    }

    /// Returns the intersection of two sets, in `self`'s insertion order.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let elements: Vec<T> = self
            .iter()
            .filter(|element| other.contains(*element))
            .cloned()
            .collect();
        Self::from_unique_list(List::from_vec(elements))
    }

    /// Returns the elements of `self` not present in `other`, in `self`'s
    /// insertion order.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let elements: Vec<T> = self
            .iter()
            .filter(|element| !other.contains(*element))
            .cloned()
            .collect();
        Self::from_unique_list(List::from_vec(elements))
    }

    /// Returns `true` if every element of `self` is present in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if every element of `other` is present in `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Builds a contiguous ascending integer set from a half-open range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use smallord::collections::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = OrderedSet::from_range(1..4);
    /// assert_eq!(set.as_slice(), &[1, 2, 3]);
    /// ```
    #[must_use]
    pub fn from_range(range: Range<T>) -> Self
    where
        Range<T>: Iterator<Item = T>,
    {
        range.collect()
    }

    /// Builds a contiguous ascending integer set from an inclusive range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use smallord::collections::OrderedSet;
    ///
    /// let set: OrderedSet<u8> = OrderedSet::from_range_inclusive(1..=3);
    /// assert_eq!(set.as_slice(), &[1, 2, 3]);
    /// ```
    #[must_use]
    pub fn from_range_inclusive(range: RangeInclusive<T>) -> Self
    where
        RangeInclusive<T>: Iterator<Item = T>,
    {
        range.collect()
    }
}

impl<T, const N: usize> Default for OrderedSet<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Membership equality: two sets are equal when each contains every
/// element of the other, regardless of insertion order.
impl<T: PartialEq, const N: usize> PartialEq for OrderedSet<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Eq, const N: usize> Eq for OrderedSet<T, N> {}

impl<T: fmt::Debug, const N: usize> fmt::Debug for OrderedSet<T, N> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for OrderedSet<T, N> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("{")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{element}")?;
        }
        formatter.write_str("}")
    }
}

impl<T: PartialEq, const N: usize> FromIterator<T> for OrderedSet<T, N> {
    /// Builds a set from an iterator, keeping the first occurrence of
    /// each element. Standard-library allocation semantics (no `Result`).
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut unique: Vec<T> = Vec::new();
        for element in iter {
            if !unique.iter().any(|existing| existing == &element) {
                unique.push(element);
            }
        }
        Self::from_unique_list(List::from_vec(unique))
    }
}

impl<T, const N: usize> IntoIterator for OrderedSet<T, N> {
    type Item = T;
    type IntoIter = ListIntoIterator<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a OrderedSet<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, const N: usize> serde::Serialize for OrderedSet<T, N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct OrderedSetVisitor<T, const N: usize> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T, const N: usize> serde::de::Visitor<'de> for OrderedSetVisitor<T, N>
where
    T: serde::Deserialize<'de> + PartialEq,
{
    type Value = OrderedSet<T, N>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence of distinct elements")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Duplicates in the input collapse to their first occurrence.
        let mut unique: Vec<T> = Vec::new();
        while let Some(element) = seq.next_element::<T>()? {
            if !unique.iter().any(|existing| existing == &element) {
                unique.push(element);
            }
        }
        Ok(OrderedSet::from_unique_list(List::from_vec(unique)))
    }
}

#[cfg(feature = "serde")]
impl<'de, T, const N: usize> serde::Deserialize<'de> for OrderedSet<T, N>
where
    T: serde::Deserialize<'de> + PartialEq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(OrderedSetVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
