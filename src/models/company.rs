use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::NewsItem;

/// A tracked competitor and its collected news.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorData {
    pub name: String,
    #[serde(default)]
    pub news: Vec<NewsItem>,
}

/// One company's slice of the collected dataset: own news plus the news of
/// every tracked competitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyData {
    pub name: String,
    pub collection_date: String,
    #[serde(default)]
    pub news: Vec<NewsItem>,
    #[serde(default)]
    pub competitors: HashMap<String, CompetitorData>,
}

impl CompanyData {
    pub fn metrics(&self) -> CompanyMetrics {
        CompanyMetrics {
            news_count: self.news.len(),
            competitor_count: self.competitors.len(),
            competitor_news_count: self
                .competitors
                .values()
                .map(|competitor| competitor.news.len())
                .sum(),
        }
    }
}

/// Headline numbers for the company overview cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyMetrics {
    pub news_count: usize,
    pub competitor_count: usize,
    pub competitor_news_count: usize,
}

/// Listing entry for one company in the dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanySummary {
    pub id: String,
    pub name: String,
    pub collection_date: String,
    pub news_count: usize,
}
