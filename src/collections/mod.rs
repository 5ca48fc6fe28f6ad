//! Ordered, insertion-order-preserving collections.
//!
//! This module provides the collection core: a growable list with inline
//! small-size storage and the two collections layered on top of it.
//!
//! - [`List`]: hybrid inline/heap list; up to `N` elements live inside
//!   the collection value, and the first mutation that would exceed `N`
//!   migrates the elements to an owned heap buffer in one atomic step
//! - [`OrderedSet`]: duplicate-free set over a `List`, iterated in
//!   insertion order
//! - [`OrderedMap`]: key/value map over a `List` of [`Entry`] pairs,
//!   iterated in insertion order with in-place value updates
//!
//! # Storage Model
//!
//! All three collections share the list's representation rules: storage
//! starts inline, migration to the heap is one-way, and exactly one
//! representation is active at any time. Migration is copy-then-switch,
//! so a failed allocation leaves the prior state fully intact.
//!
//! # Lookup Model
//!
//! Membership and key lookup are linear scans under the element/key
//! type's `PartialEq`, fixed per instantiation at compile time. For the
//! small cardinalities these collections target, the cache-local scan is
//! the contract; there is no hash index and none is grown dynamically.
//!
//! # Failure Model
//!
//! In-place growth is the single fallible point, reported as
//! [`CollectionError::Allocation`]. Index-addressed mutations with
//! invalid indices report [`CollectionError::IndexOutOfBounds`] and
//! change nothing. Missing keys and elements are `Option`/`bool`
//! results, never errors.
//!
//! # Examples
//!
//! ## `List`
//!
//! ```rust
//! use smallord::collections::List;
//!
//! let mut list: List<i32, 4> = List::new();
//! list.extend_from_slice(&[1, 2, 3, 4])?;
//! assert!(list.is_inline());
//!
//! list.push(5)?;
//! assert!(!list.is_inline());
//! assert_eq!(list.as_slice(), &[1, 2, 3, 4, 5]);
//! # Ok::<(), smallord::collections::CollectionError>(())
//! ```
//!
//! ## `OrderedSet`
//!
//! ```rust
//! use smallord::collections::OrderedSet;
//!
//! let mut set: OrderedSet<i32> = OrderedSet::new();
//! set.insert(1)?;
//! set.insert(2)?;
//! assert!(!set.insert(1)?);
//! assert_eq!(set.as_slice(), &[1, 2]);
//! # Ok::<(), smallord::collections::CollectionError>(())
//! ```
//!
//! ## `OrderedMap`
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

mod error;
mod list;
mod ordered_map;
mod ordered_set;

pub use error::CollectionError;
pub use list::List;
pub use list::ListIntoIterator;
pub use ordered_map::Entry;
pub use ordered_map::OrderedMap;
pub use ordered_map::OrderedMapIntoIterator;
pub use ordered_map::OrderedMapIterator;
pub use ordered_map::OrderedMapKeys;
pub use ordered_map::OrderedMapValues;
pub use ordered_map::OrderedMapValuesMut;
pub use ordered_set::OrderedSet;

// The collections are plain value types: they are Send/Sync exactly when
// their element types are.
static_assertions::assert_impl_all!(List<i32, 8>: Send, Sync);
static_assertions::assert_impl_all!(OrderedSet<String, 8>: Send, Sync);
static_assertions::assert_impl_all!(OrderedMap<String, i32, 8>: Send, Sync);
static_assertions::assert_not_impl_any!(List<std::rc::Rc<i32>, 8>: Send, Sync);
