use axum::extract::{Path, State};
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::{InsightSection, InsightsReport};
use crate::services::insight_aggregator;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/:company/insights", post(generate_insights).get(get_insights))
}

/// A stored report rendered into its display sections.
#[derive(Debug, Serialize)]
pub struct InsightsView {
    pub company: String,
    pub summary: String,
    pub generated_at: String,
    pub sections: Vec<InsightSection>,
}

impl InsightsView {
    fn from_report(report: &InsightsReport) -> Self {
        Self {
            company: report.company.clone(),
            summary: report.summary.clone(),
            generated_at: report.generated_at.clone(),
            sections: insight_aggregator::aggregate(report),
        }
    }
}

/// POST /api/dashboard/:company/insights
///
/// Generates a fresh report and replaces the stored one. Not retried; a
/// service failure surfaces as 502 with an actionable message.
async fn generate_insights(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<InsightsView>, AppError> {
    info!("POST /api/dashboard/{}/insights", id);

    let company = state.dataset.company(&id).ok_or(AppError::NotFound)?;
    let report = state.insights.generate(&id, company).await?;

    Ok(Json(InsightsView::from_report(&report)))
}

/// GET /api/dashboard/:company/insights
///
/// The most recently generated report, or 404 when none exists yet.
async fn get_insights(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<InsightsView>, AppError> {
    info!("GET /api/dashboard/{}/insights", id);

    state.dataset.company(&id).ok_or(AppError::NotFound)?;
    let report = state.insights.latest(&id).await.ok_or(AppError::NotFound)?;

    Ok(Json(InsightsView::from_report(&report)))
}
