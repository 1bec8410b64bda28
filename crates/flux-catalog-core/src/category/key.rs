//! Category Key
//!
//! Slash-delimited category path (`Math/Trig`) with a depth-first ordering:
//!
//! ```text
//! a
//! a/b
//! a/b/c
//! ad
//! ad/e
//! ad/e/f
//! ad/g
//! b
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{CatalogError, Result};

/// Separator between category path segments
pub const CATEGORY_SEPARATOR: char = '/';

/// Parsed category path.
///
/// Only the segments take part in equality, hashing and ordering; the raw
/// string is kept for display.
#[derive(Debug, Clone)]
pub struct CategoryKey {
    raw: String,
    segments: Vec<String>,
}

impl CategoryKey {
    /// Parse a raw category path. Fails on an empty string.
    pub fn new(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(CatalogError::invalid_argument(
                "category name must not be empty",
            ));
        }

        // non-empty input: split always yields at least one segment
        let segments = raw.split(CATEGORY_SEPARATOR).map(str::to_string).collect();

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// First segment of the path
    pub fn root(&self) -> &str {
        &self.segments[0]
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl Ord for CategoryKey {
    fn cmp(&self, other: &Self) -> Ordering {
        // roots first: everything under the same root stays contiguous
        match self.root().cmp(other.root()) {
            Ordering::Equal => {}
            unequal => return unequal,
        }

        // first differing segment decides between siblings
        for (l, r) in self.segments[1..].iter().zip(&other.segments[1..]) {
            match l.as_str().cmp(r.as_str()) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }

        // one is a prefix of the other: the parent goes first
        self.depth().cmp(&other.depth())
    }
}

impl PartialOrd for CategoryKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CategoryKey {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl Eq for CategoryKey {}

impl std::hash::Hash for CategoryKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.segments.hash(state);
    }
}

impl FromStr for CategoryKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for CategoryKey {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn key(raw: &str) -> CategoryKey {
        CategoryKey::new(raw).unwrap()
    }

    #[test]
    fn test_canonical_fixture_order() {
        let mut keys: Vec<CategoryKey> = ["b", "a/b/c", "ad/g", "a", "ad/e/f", "ad", "a/b", "ad/e"]
            .iter()
            .map(|raw| key(raw))
            .collect();
        keys.sort();

        let sorted: Vec<&str> = keys.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            sorted,
            vec!["a", "a/b", "a/b/c", "ad", "ad/e", "ad/e/f", "ad/g", "b"]
        );
    }

    #[test]
    fn test_parent_before_child() {
        for parent in ["a", "Math", "Math/Trig", "x/y/z"] {
            let child = key(&format!("{parent}/leaf"));
            assert_eq!(key(parent).cmp(&child), Ordering::Less);
            assert_eq!(child.cmp(&key(parent)), Ordering::Greater);
        }
    }

    #[test]
    fn test_deep_descendant_before_next_sibling() {
        assert!(key("a/b/c") < key("a/c"));
        assert!(key("Math/Trig/Hyperbolic") < key("Math/Vectors"));
    }

    #[test]
    fn test_sibling_ordinal_order() {
        let pairs = [("m", "n"), ("Z", "a"), ("abc", "abd"), ("x", "xy"), ("é", "z")];
        for (m, n) in pairs {
            let l = key(&format!("a/{m}"));
            let r = key(&format!("a/{n}"));
            assert_eq!(l.cmp(&r), m.cmp(n), "a/{m} vs a/{n}");
        }
    }

    #[test]
    fn test_root_compared_before_depth() {
        // `ad` sorts after every key rooted at `a`, however deep
        assert!(key("a/z/z/z") < key("ad"));
        assert!(key("Actions/Write") < key("Math"));
    }

    #[test]
    fn test_absent_key_sorts_first() {
        let present = Some(key("a"));
        assert!(None < present);
        assert_eq!(present.cmp(&None), Ordering::Greater);
    }

    #[test]
    fn test_total_order_laws() {
        let keys: Vec<CategoryKey> = [
            "a", "a/b", "a/b/c", "a/c", "ad", "ad/e", "ad/e/f", "ad/g", "b", "B", "a/B", "a//b",
        ]
        .iter()
        .map(|raw| key(raw))
        .collect();

        for x in &keys {
            for y in &keys {
                // antisymmetry and totality
                assert_eq!(x.cmp(y), y.cmp(x).reverse(), "{x} vs {y}");
                assert_eq!(x.cmp(y) == Ordering::Equal, x == y, "{x} vs {y}");
                for z in &keys {
                    if x <= y && y <= z {
                        assert!(x <= z, "{x} <= {y} <= {z}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_equality_and_hash() {
        let mut set = HashSet::new();
        set.insert(key("Math/Trig"));
        assert!(set.contains(&key("Math/Trig")));
        assert!(!set.contains(&key("Math")));

        set.insert(key("Math/Trig"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_empty_is_invalid_argument() {
        let err = CategoryKey::new("").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidArgument { .. }));
        assert!("".parse::<CategoryKey>().is_err());
    }

    #[test]
    fn test_segments_are_not_revalidated() {
        let k = key("a//b");
        assert_eq!(k.segments(), &["a", "", "b"]);
        assert_eq!(k.depth(), 3);
    }

    #[test]
    fn test_root_and_display() {
        let child = key("Math/Trig");
        assert_eq!(child.to_string(), "Math/Trig");
        assert_eq!(child.root(), "Math");
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&key("Math/Trig")).unwrap();
        assert_eq!(json, "\"Math/Trig\"");
    }
}
