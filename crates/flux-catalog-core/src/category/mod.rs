//! # Category Module
//!
//! Nodes declare their place in the node browser with a slash-delimited
//! category path (`Math/Trig`, `Actions/IndirectActions`). This module holds
//! the path type and the grouping structure used to collect nodes per path.
//!
//! ## Module layout
//!
//! - `key`: `CategoryKey`, the parsed path with its depth-first ordering
//! - `multimap`: `MultiMap`, insertion-ordered key → values grouping
//!
//! ## Example
//!
//! ```rust
//! use flux_catalog_core::category::{CategoryKey, MultiMap};
//!
//! let mut groups = MultiMap::new();
//! groups.add(CategoryKey::new("Math/Trig").unwrap(), "Sin");
//! groups.add(CategoryKey::new("Math").unwrap(), "Add");
//! groups.add(CategoryKey::new("Math/Trig").unwrap(), "Cos");
//! assert_eq!(groups.group_count(), 2);
//!
//! let mut keys: Vec<_> = groups.keys().cloned().collect();
//! keys.sort();
//! assert_eq!(keys[0].as_str(), "Math");
//! ```

mod key;
mod multimap;

pub use key::{CategoryKey, CATEGORY_SEPARATOR};
pub use multimap::MultiMap;
