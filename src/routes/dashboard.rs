use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::{
    AnalyzedNewsItem, CompanyMetrics, CompanySummary, InsightsReport, NewsItem,
};
use crate::state::AppState;

pub fn companies_router() -> Router<AppState> {
    Router::new().route("/", get(list_companies))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:company", get(get_dashboard))
        .route("/:company/full-analysis", post(full_analysis))
}

/// Query parameters for the dashboard view
#[derive(Debug, Deserialize)]
pub struct DashboardQueryParams {
    /// Skip AI enrichment when false (default: true)
    pub analyze: Option<bool>,
}

/// The display model one company tab renders from.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub id: String,
    pub name: String,
    pub collection_date: String,
    pub metrics: CompanyMetrics,
    pub news: Vec<AnalyzedNewsItem>,
    pub competitors: Vec<CompetitorView>,
}

#[derive(Debug, Serialize)]
pub struct CompetitorView {
    pub key: String,
    pub name: String,
    pub news: Vec<NewsItem>,
}

/// GET /api/companies
async fn list_companies(State(state): State<AppState>) -> Json<Vec<CompanySummary>> {
    info!("GET /api/companies");
    Json(state.dataset.summaries())
}

/// GET /api/dashboard/:company
///
/// Assembles the company overview: metrics, AI-enriched news and competitor
/// news. Analysis trouble never fails this route — the news list degrades to
/// neutral fallback annotations instead.
async fn get_dashboard(
    Path(id): Path<String>,
    Query(params): Query<DashboardQueryParams>,
    State(state): State<AppState>,
) -> Result<Json<DashboardView>, AppError> {
    let analyze = params.analyze.unwrap_or(true);
    info!("GET /api/dashboard/{} (analyze={})", id, analyze);

    let company = state.dataset.company(&id).ok_or(AppError::NotFound)?;

    let news = if analyze {
        state.bulk.analyze(&company.news).await
    } else {
        company.news.iter().cloned().map(AnalyzedNewsItem::plain).collect()
    };

    let mut competitors: Vec<CompetitorView> = company
        .competitors
        .iter()
        .map(|(key, competitor)| CompetitorView {
            key: key.clone(),
            name: competitor.name.clone(),
            news: competitor.news.clone(),
        })
        .collect();
    competitors.sort_by(|a, b| a.key.cmp(&b.key));

    Ok(Json(DashboardView {
        id,
        name: company.name.clone(),
        collection_date: company.collection_date.clone(),
        metrics: company.metrics(),
        news,
        competitors,
    }))
}

#[derive(Debug, Serialize)]
pub struct FullAnalysisResponse {
    pub sentiment_analysis: Vec<AnalyzedNewsItem>,
    pub weekly_insights: InsightsReport,
    pub analysis_timestamp: DateTime<Utc>,
}

/// POST /api/dashboard/:company/full-analysis
///
/// Runs sentiment analysis and insight generation together. The sentiment
/// half degrades to fallback records on failure; an insight failure fails
/// the combined operation.
async fn full_analysis(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<FullAnalysisResponse>, AppError> {
    info!("POST /api/dashboard/{}/full-analysis", id);

    let company = state.dataset.company(&id).ok_or(AppError::NotFound)?;

    let (sentiment_analysis, insights) = futures::future::join(
        state.bulk.analyze(&company.news),
        state.insights.generate(&id, company),
    )
    .await;

    Ok(Json(FullAnalysisResponse {
        sentiment_analysis,
        weekly_insights: insights?,
        analysis_timestamp: Utc::now(),
    }))
}
