use std::collections::HashSet;
use std::sync::Arc;

use dashmap::DashMap;

use crate::models::{AnalyzedNewsItem, ItemKey, NewsItem};

/// Thread-safe map from item identity (link + date) to its enriched record.
///
/// Populated on successful analysis only — fallback records describe one
/// failed request, not knowledge worth keeping. Cleared with [`reset`] when
/// the underlying item set changes (e.g. a new dataset is loaded).
///
/// [`reset`]: AnalysisCache::reset
#[derive(Clone, Default)]
pub struct AnalysisCache {
    cache: Arc<DashMap<ItemKey, AnalyzedNewsItem>>,
}

impl AnalysisCache {
    pub fn new() -> Self {
        Self { cache: Arc::new(DashMap::new()) }
    }

    pub fn get(&self, item: &NewsItem) -> Option<AnalyzedNewsItem> {
        self.cache.get(&item.identity()).map(|entry| entry.value().clone())
    }

    /// Stores an enriched record. Records without analysis fields are
    /// ignored.
    pub fn store(&self, record: &AnalyzedNewsItem) {
        if !record.is_analyzed() {
            return;
        }
        self.cache.insert(record.identity(), record.clone());
    }

    /// Drops every entry whose identity is not part of the new item set.
    #[allow(dead_code)]
    pub fn reset(&self, items: &[NewsItem]) {
        let keep: HashSet<ItemKey> = items.iter().map(NewsItem::identity).collect();
        self.cache.retain(|key, _| keep.contains(key));
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
