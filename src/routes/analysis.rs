use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::{AnalyzedNewsItem, NewsItem};
use crate::services::item_analysis::ItemAnalysisController;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sentiment", post(analyze_sentiment))
        .route("/item", post(analyze_item))
}

/// POST /api/analysis/sentiment
///
/// Bulk sentiment analysis for an ordered list of news items. Never returns
/// an analysis error: on failure every item comes back as a neutral fallback
/// record.
async fn analyze_sentiment(
    State(state): State<AppState>,
    Json(items): Json<Vec<NewsItem>>,
) -> Result<Json<Vec<AnalyzedNewsItem>>, AppError> {
    info!("POST /api/analysis/sentiment ({} items)", items.len());

    if items.is_empty() {
        return Err(AppError::Validation("no news items provided".to_string()));
    }

    Ok(Json(state.bulk.analyze(&items).await))
}

#[derive(Debug, Serialize)]
pub struct ItemAnalysisView {
    pub status: &'static str,
    pub record: AnalyzedNewsItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// POST /api/analysis/item
///
/// Single-item analysis with the per-item state machine: serves the cached
/// record when one exists, otherwise issues one request. A failure is
/// reported inline next to the unenriched record instead of failing the
/// route, matching the non-blocking error card in the UI.
async fn analyze_item(
    State(state): State<AppState>,
    Json(item): Json<NewsItem>,
) -> Json<ItemAnalysisView> {
    info!("POST /api/analysis/item ('{}')", item.title);

    let controller = ItemAnalysisController::new(item, Arc::clone(&state.provider))
        .with_cache(state.cache.clone());
    controller.mount().await;
    controller.settled().await;

    let record = controller.display_record().await;
    let view = match controller.error().await {
        Some(message) => ItemAnalysisView { status: "error", record, error: Some(message) },
        None => ItemAnalysisView { status: "success", record, error: None },
    };

    Json(view)
}
