use std::collections::HashMap;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::info;

use crate::models::{CompanyData, CompanySummary};

/// Configuration for the static dataset collaborator.
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// HTTP location of the collector output; takes precedence over `path`.
    pub url: Option<String>,
    /// Local collector output file, used when no URL is configured.
    pub path: String,
}

impl DatasetConfig {
    pub fn from_env() -> Self {
        Self {
            url: std::env::var("DATASET_URL").ok(),
            path: std::env::var("DATASET_PATH")
                .unwrap_or_else(|_| "all_company_data.json".to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset fetch failed: {0}")]
    Fetch(String),
    #[error("dataset fetch returned HTTP {0}")]
    Status(u16),
    #[error("dataset file '{path}' could not be read: {reason}")]
    File { path: String, reason: String },
    #[error("dataset is not valid JSON: {0}")]
    Parse(String),
}

/// The pre-collected company dataset, loaded once at startup and read-only
/// afterwards. A load failure is fatal for the dashboard.
pub struct CompanyDataset {
    companies: HashMap<String, CompanyData>,
    loaded_at: DateTime<Utc>,
}

impl CompanyDataset {
    pub async fn load(config: &DatasetConfig) -> Result<Self, DatasetError> {
        let raw = match &config.url {
            Some(url) => fetch_document(url).await?,
            None => read_document(&config.path).await?,
        };
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, DatasetError> {
        let companies: HashMap<String, CompanyData> =
            serde_json::from_str(raw).map_err(|e| DatasetError::Parse(e.to_string()))?;

        info!("Parsed dataset with {} companies", companies.len());
        Ok(Self { companies, loaded_at: Utc::now() })
    }

    pub fn company(&self, id: &str) -> Option<&CompanyData> {
        self.companies.get(id)
    }

    /// Listing entries for every company, sorted by id for stable output.
    pub fn summaries(&self) -> Vec<CompanySummary> {
        let mut summaries: Vec<CompanySummary> = self
            .companies
            .iter()
            .map(|(id, company)| CompanySummary {
                id: id.clone(),
                name: company.name.clone(),
                collection_date: company.collection_date.clone(),
                news_count: company.news.len(),
            })
            .collect();
        summaries.sort_by(|a, b| a.id.cmp(&b.id));
        summaries
    }

    #[allow(dead_code)]
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}

async fn fetch_document(url: &str) -> Result<String, DatasetError> {
    info!("Fetching dataset from {}", url);
    let response = reqwest::get(url)
        .await
        .map_err(|e| DatasetError::Fetch(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(DatasetError::Status(status.as_u16()));
    }

    response.text().await.map_err(|e| DatasetError::Fetch(e.to_string()))
}

async fn read_document(path: &str) -> Result<String, DatasetError> {
    info!("Reading dataset from {}", path);
    tokio::fs::read_to_string(path).await.map_err(|e| DatasetError::File {
        path: path.to_string(),
        reason: e.to_string(),
    })
}
