//! Process-wide memo of resolved projections.

use crate::ast::column::ComplexColumnData;
use std::{
    any::TypeId,
    collections::HashMap,
    sync::{Arc, RwLock},
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub source_table: String,
    pub shape: TypeId,
}

impl CacheKey {
    pub fn new(source_table: &str, shape: TypeId) -> Self {
        Self {
            source_table: source_table.to_string(),
            shape,
        }
    }
}

/// Resolved projections keyed by source table and projection type.
///
/// Entries are published whole behind an `Arc`, so readers never observe a
/// partially built value. Two threads missing on the same key may both
/// compute it; the last insert wins. Nothing is ever evicted.
#[derive(Debug, Default)]
pub struct BuildCache {
    entries: RwLock<HashMap<CacheKey, Arc<ComplexColumnData>>>,
}

impl BuildCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CacheKey) -> Option<Arc<ComplexColumnData>> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    pub fn insert(&self, key: CacheKey, data: Arc<ComplexColumnData>) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key, data);
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
