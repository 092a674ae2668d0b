use std::sync::Arc;

use crate::external::analysis_provider::AnalysisProvider;
use crate::services::analysis_cache::AnalysisCache;
use crate::services::bulk_analysis::BulkAnalyzer;
use crate::services::dataset_service::CompanyDataset;
use crate::services::insight_service::InsightService;

#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<CompanyDataset>,
    pub provider: Arc<dyn AnalysisProvider>,
    pub bulk: BulkAnalyzer,
    pub insights: Arc<InsightService>,
    pub cache: AnalysisCache,
}
