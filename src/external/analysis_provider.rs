use async_trait::async_trait;

use crate::errors::AnalysisError;
use crate::models::{AnalyzedNewsItem, CompanyData, InsightsReport, NewsItem};

/// Client contract for the external AI analysis service.
///
/// Implementations report every failure as a typed [`AnalysisError`] and
/// never substitute data of their own — fallback behavior belongs to the
/// calling controller.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// One batched sentiment request. The returned list is ordered to match
    /// the input list; it may be shorter when the service degrades.
    async fn analyze_sentiment(
        &self,
        items: &[NewsItem],
    ) -> Result<Vec<AnalyzedNewsItem>, AnalysisError>;

    /// One insight-generation request for a company. Not retried; the error
    /// is propagated verbatim to the caller.
    async fn generate_insights(
        &self,
        company: &CompanyData,
    ) -> Result<InsightsReport, AnalysisError>;
}
