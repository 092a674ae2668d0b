use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::external::analysis_provider::AnalysisProvider;
use crate::models::{AnalyzedNewsItem, NewsItem};
use crate::services::analysis_cache::AnalysisCache;

/// Request lifecycle for one displayed news item. Modeled as a single enum
/// so that states like loading-and-errored cannot be represented.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisState {
    Idle,
    Loading,
    Success(AnalyzedNewsItem),
    Error(String),
}

/// Drives sentiment analysis for a single displayed news item.
///
/// Each displayed item owns its own controller; nothing is shared between
/// controllers, and the same item shown in two places runs two independent
/// requests. At most one request is in flight per controller: a trigger
/// while loading is a no-op. After [`teardown`], a late response is
/// discarded instead of applied — the network request itself is not
/// aborted.
///
/// [`teardown`]: ItemAnalysisController::teardown
pub struct ItemAnalysisController {
    item: NewsItem,
    provider: Arc<dyn AnalysisProvider>,
    cache: Option<AnalysisCache>,
    state: Arc<RwLock<AnalysisState>>,
    /// Bumped on every trigger and on teardown; a completion is applied only
    /// if the counter still matches the value its request was dispatched
    /// under.
    generation: Arc<AtomicU64>,
    inflight: Mutex<Option<JoinHandle<()>>>,
}

impl ItemAnalysisController {
    pub fn new(item: NewsItem, provider: Arc<dyn AnalysisProvider>) -> Self {
        Self {
            item,
            provider,
            cache: None,
            state: Arc::new(RwLock::new(AnalysisState::Idle)),
            generation: Arc::new(AtomicU64::new(0)),
            inflight: Mutex::new(None),
        }
    }

    pub fn with_cache(mut self, cache: AnalysisCache) -> Self {
        self.cache = Some(cache);
        self
    }

    #[allow(dead_code)]
    pub fn item(&self) -> &NewsItem {
        &self.item
    }

    /// Called when the item is first displayed: serves a cached record if
    /// one exists, otherwise triggers analysis immediately.
    pub async fn mount(&self) {
        if let Some(cached) = self.cache.as_ref().and_then(|cache| cache.get(&self.item)) {
            info!("Serving cached analysis for '{}'", self.item.title);
            *self.state.write().await = AnalysisState::Success(cached);
            return;
        }
        self.trigger().await;
    }

    /// Starts a fresh analysis request. Returns `false` (and does nothing)
    /// when a request is already in flight. Loading is entered before the
    /// request is dispatched.
    pub async fn trigger(&self) -> bool {
        {
            let mut state = self.state.write().await;
            if matches!(*state, AnalysisState::Loading) {
                return false;
            }
            *state = AnalysisState::Loading;
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let item = self.item.clone();
        let provider = Arc::clone(&self.provider);
        let cache = self.cache.clone();
        let state = Arc::clone(&self.state);
        let counter = Arc::clone(&self.generation);

        let handle = tokio::spawn(async move {
            let result = provider.analyze_sentiment(std::slice::from_ref(&item)).await;

            let mut guard = state.write().await;
            // A teardown or newer trigger supersedes this request; its result
            // must leave no observable trace.
            if counter.load(Ordering::SeqCst) != generation {
                info!("Discarding stale analysis result for '{}'", item.title);
                return;
            }

            *guard = match result {
                Ok(mut records) if !records.is_empty() => {
                    let record = AnalyzedNewsItem::enriched_from(&item, records.remove(0));
                    if let Some(cache) = &cache {
                        cache.store(&record);
                    }
                    AnalysisState::Success(record)
                }
                Ok(_) => AnalysisState::Error("analysis service returned no result".to_string()),
                Err(err) => {
                    warn!("Analysis failed for '{}': {}", item.title, err);
                    AnalysisState::Error(err.to_string())
                }
            };
        });

        *self.inflight.lock().await = Some(handle);
        true
    }

    /// Invalidates any in-flight request. The request is not aborted; its
    /// eventual result is discarded on arrival.
    #[allow(dead_code)]
    pub fn teardown(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub async fn state(&self) -> AnalysisState {
        self.state.read().await.clone()
    }

    /// The record to display: the enriched item after a success, the
    /// original item otherwise.
    pub async fn display_record(&self) -> AnalyzedNewsItem {
        match &*self.state.read().await {
            AnalysisState::Success(record) => record.clone(),
            _ => AnalyzedNewsItem::plain(self.item.clone()),
        }
    }

    /// Inline error message, if the last request failed.
    pub async fn error(&self) -> Option<String> {
        match &*self.state.read().await {
            AnalysisState::Error(message) => Some(message.clone()),
            _ => None,
        }
    }

    /// Waits for the most recently dispatched request to finish, whether its
    /// result was applied or discarded.
    pub async fn settled(&self) {
        let handle = self.inflight.lock().await.take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }
    }
}
