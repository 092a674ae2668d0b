mod app;
mod errors;
mod external;
mod logging;
mod models;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use crate::external::ai_service::{AiServiceConfig, AiServiceProvider};
use crate::external::analysis_provider::AnalysisProvider;
use crate::logging::LoggingConfig;
use crate::services::analysis_cache::AnalysisCache;
use crate::services::bulk_analysis::BulkAnalyzer;
use crate::services::dataset_service::{CompanyDataset, DatasetConfig};
use crate::services::insight_service::InsightService;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    logging::init_logging(LoggingConfig::from_env())?;

    let provider: Arc<dyn AnalysisProvider> =
        Arc::new(AiServiceProvider::new(AiServiceConfig::from_env())?);

    // The dataset is the dashboard's ground truth; failing to load it is
    // fatal, unlike any analysis trouble later on.
    let dataset = Arc::new(
        CompanyDataset::load(&DatasetConfig::from_env())
            .await
            .context("failed to load company dataset")?,
    );
    tracing::info!("📊 Loaded dataset with {} companies", dataset.len());

    let cache = AnalysisCache::new();
    let state = AppState {
        bulk: BulkAnalyzer::new(Arc::clone(&provider)).with_cache(cache.clone()),
        insights: Arc::new(InsightService::new(Arc::clone(&provider))),
        dataset,
        provider,
        cache,
    };
    let app = app::create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Compintel backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
