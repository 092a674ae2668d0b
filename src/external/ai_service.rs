use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::errors::AnalysisError;
use crate::external::analysis_provider::AnalysisProvider;
use crate::models::{AnalyzedNewsItem, CompanyData, InsightsReport, NewsItem};

/// Configuration for the AI analysis service client.
#[derive(Debug, Clone)]
pub struct AiServiceConfig {
    pub base_url: String,
    /// Transport timeout; the orchestration layer adds no timeout of its own.
    pub timeout_secs: u64,
}

impl AiServiceConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("AI_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8001".to_string()),
            timeout_secs: std::env::var("AI_SERVICE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        }
    }
}

/// Response envelope shared by both analysis endpoints. The service also
/// sends a `count` field on sentiment responses; it is ignored here.
#[derive(Debug, Deserialize)]
struct AnalysisEnvelope<T> {
    success: bool,
    data: Option<T>,
}

#[derive(Debug, Serialize)]
struct InsightsRequest<'a> {
    company_data: &'a CompanyData,
    analysis_type: &'static str,
}

/// HTTP client for the AI analysis service.
pub struct AiServiceProvider {
    client: Client,
    sentiment_url: String,
    insights_url: String,
}

impl AiServiceProvider {
    pub fn new(config: AiServiceConfig) -> Result<Self, AnalysisError> {
        let base = url::Url::parse(&config.base_url)
            .map_err(|e| AnalysisError::Network(format!("invalid AI_SERVICE_URL: {e}")))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AnalysisError::Network(e.to_string()))?;

        Ok(Self {
            client,
            sentiment_url: format!("{}api/ai/analyze-sentiment", ensure_trailing_slash(&base)),
            insights_url: format!("{}api/ai/generate-insights", ensure_trailing_slash(&base)),
        })
    }

    async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T, AnalysisError>
    where
        B: Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        let request_id = Uuid::new_v4();
        info!("POST {} (request {})", url, request_id);

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AnalysisError::Timeout
                } else {
                    AnalysisError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            error!("AI service request {} failed with HTTP {}: {}", request_id, status, body);
            return Err(AnalysisError::Http { status: status.as_u16(), body });
        }

        let envelope: AnalysisEnvelope<T> = response
            .json()
            .await
            .map_err(|e| AnalysisError::InvalidResponse(e.to_string()))?;

        decode_envelope(envelope)
    }
}

/// Unwraps the `{success, data}` envelope into its payload.
fn decode_envelope<T>(envelope: AnalysisEnvelope<T>) -> Result<T, AnalysisError> {
    if !envelope.success {
        return Err(AnalysisError::Rejected);
    }
    envelope
        .data
        .ok_or_else(|| AnalysisError::InvalidResponse("data field missing".to_string()))
}

fn ensure_trailing_slash(url: &url::Url) -> String {
    let s = url.as_str();
    if s.ends_with('/') {
        s.to_string()
    } else {
        format!("{s}/")
    }
}

#[async_trait]
impl AnalysisProvider for AiServiceProvider {
    async fn analyze_sentiment(
        &self,
        items: &[NewsItem],
    ) -> Result<Vec<AnalyzedNewsItem>, AnalysisError> {
        info!("Requesting sentiment analysis for {} items", items.len());
        let records: Vec<AnalyzedNewsItem> = self.post_json(&self.sentiment_url, items).await?;
        info!("Sentiment analysis returned {} records", records.len());
        Ok(records)
    }

    async fn generate_insights(
        &self,
        company: &CompanyData,
    ) -> Result<InsightsReport, AnalysisError> {
        info!("Requesting insight generation for {}", company.name);
        let request = InsightsRequest { company_data: company, analysis_type: "full" };
        self.post_json(&self.insights_url, &request).await
    }
}
