//! Sorted node catalog
//!
//! Built from the walker's category groups: one entry per category path,
//! ordered by `CategoryKey`, each listing its members' display names.

use serde::Serialize;

use crate::category::{CategoryKey, MultiMap};
use crate::node::NodeHandle;

/// One category and the nodes declared in it
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub category: CategoryKey,
    pub count: usize,
    /// Namespace plus simple name, in discovery order
    pub members: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn from_groups(groups: MultiMap<CategoryKey, NodeHandle>) -> Self {
        let mut entries: Vec<CatalogEntry> = groups
            .into_iter()
            .map(|(category, handles)| CatalogEntry {
                count: handles.len(),
                members: handles.iter().map(NodeHandle::display_name).collect(),
                category,
            })
            .collect();
        entries.sort_by(|a, b| a.category.cmp(&b.category));

        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, category: &CategoryKey) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| &e.category == category)
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of members across all categories
    pub fn member_count(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }
}
