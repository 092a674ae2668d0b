use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::errors::AnalysisError;
use crate::external::analysis_provider::AnalysisProvider;
use crate::models::{CompanyData, InsightsReport};

/// Owns the current strategic report per company.
///
/// Generation is a single request with no retry; a failure is handed back
/// verbatim and leaves any previously stored report in place. A successful
/// regeneration replaces the stored report wholesale — reports are never
/// merged incrementally.
pub struct InsightService {
    provider: Arc<dyn AnalysisProvider>,
    reports: RwLock<HashMap<String, InsightsReport>>,
}

impl InsightService {
    pub fn new(provider: Arc<dyn AnalysisProvider>) -> Self {
        Self {
            provider,
            reports: RwLock::new(HashMap::new()),
        }
    }

    pub async fn generate(
        &self,
        company_id: &str,
        company: &CompanyData,
    ) -> Result<InsightsReport, AnalysisError> {
        info!("Generating insights for {} ({})", company.name, company_id);

        let report = match self.provider.generate_insights(company).await {
            Ok(report) => report,
            Err(err) => {
                warn!("Insight generation failed for {}: {}", company_id, err);
                return Err(err);
            }
        };

        self.reports
            .write()
            .await
            .insert(company_id.to_string(), report.clone());
        info!(
            "Stored insights for {}: {} opportunities, {} threats, {} trends, {} recommendations",
            company_id,
            report.opportunities.len(),
            report.threats.len(),
            report.trends.len(),
            report.recommendations.len()
        );
        Ok(report)
    }

    /// The most recently generated report for a company, if any.
    pub async fn latest(&self, company_id: &str) -> Option<InsightsReport> {
        self.reports.read().await.get(company_id).cloned()
    }
}
