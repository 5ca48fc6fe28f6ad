//! # smallord
//!
//! Ordered, insertion-order-preserving collections with inline small-size
//! storage.
//!
//! ## Overview
//!
//! This library provides a small family of collections that keep their
//! elements in insertion order and avoid heap allocation while they stay
//! small:
//!
//! - [`List`](collections::List): a growable list that stores up to `N`
//!   elements inline and spills to an owned heap buffer once `N` is
//!   exceeded
//! - [`OrderedSet`](collections::OrderedSet): a duplicate-free set over a
//!   `List`, iterated in insertion order
//! - [`OrderedMap`](collections::OrderedMap): a key/value map over a
//!   `List` of entries, iterated in insertion order with in-place value
//!   updates
//!
//! The collections are intended as the data-model backbone for
//! higher-level tree and codec layers: a JSON array maps onto
//! `List<Value, N>` and a JSON object onto `OrderedMap<String, Value, N>`.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` implementations (lists and sets as
//!   sequences, maps as maps)
//!
//! ## Example
//!
//! ```rust
//! use smallord::collections::OrderedMap;
//!
//! let mut map: OrderedMap<String, i32> = OrderedMap::new();
//! map.insert("a".to_string(), 1)?;
//! map.insert("b".to_string(), 2)?;
//! map.insert("a".to_string(), 3)?;
//!
//! // Updating "a" did not move it: iteration stays in insertion order.
//! let pairs: Vec<(&String, &i32)> = map.iter().collect();
//! assert_eq!(pairs[0], (&"a".to_string(), &3));
//! assert_eq!(pairs[1], (&"b".to_string(), &2));
//! # Ok::<(), smallord::collections::CollectionError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use smallord::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collections::*;
}

pub mod collections;
