use std::sync::Arc;

use tracing::{info, warn};

use crate::external::analysis_provider::AnalysisProvider;
use crate::models::{AnalyzedNewsItem, NewsItem};
use crate::services::analysis_cache::AnalysisCache;

/// Batch sentiment analysis that never surfaces an error.
///
/// One request covers the whole list; on any failure every item degrades to
/// a deterministic neutral fallback record, so callers always receive a
/// fully populated list of the input length.
#[derive(Clone)]
pub struct BulkAnalyzer {
    provider: Arc<dyn AnalysisProvider>,
    cache: Option<AnalysisCache>,
}

impl BulkAnalyzer {
    pub fn new(provider: Arc<dyn AnalysisProvider>) -> Self {
        Self { provider, cache: None }
    }

    pub fn with_cache(mut self, cache: AnalysisCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub async fn analyze(&self, items: &[NewsItem]) -> Vec<AnalyzedNewsItem> {
        if items.is_empty() {
            return Vec::new();
        }

        match self.provider.analyze_sentiment(items).await {
            Ok(records) => {
                if records.len() < items.len() {
                    // Defined degradation: only the prefix gets enriched.
                    warn!(
                        "Analysis returned {} records for {} items; remainder stays unanalyzed",
                        records.len(),
                        items.len()
                    );
                }
                let mut returned = records.into_iter();
                items
                    .iter()
                    .map(|item| match returned.next() {
                        Some(record) => {
                            let record = AnalyzedNewsItem::enriched_from(item, record);
                            if let Some(cache) = &self.cache {
                                cache.store(&record);
                            }
                            record
                        }
                        None => AnalyzedNewsItem::plain(item.clone()),
                    })
                    .collect()
            }
            Err(err) => {
                warn!("Bulk analysis failed ({err}); substituting fallback records");
                info!("Returning {} fallback records", items.len());
                items.iter().cloned().map(AnalyzedNewsItem::fallback).collect()
            }
        }
    }
}
