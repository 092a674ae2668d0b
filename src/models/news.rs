use serde::{Deserialize, Serialize};

/// A single scraped news item, as produced by the external collector.
/// Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    pub snippet: String,
    pub date: String,
    pub source: String,
}

impl NewsItem {
    /// Identity of an item within one collected dataset. Titles repeat
    /// across re-collections; link plus date does not.
    pub fn identity(&self) -> ItemKey {
        ItemKey {
            link: self.link.clone(),
            date: self.date.clone(),
        }
    }
}

/// Cache key for an analyzed item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemKey {
    pub link: String,
    pub date: String,
}

/// Sentiment classification assigned by the AI service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Neutral => write!(f, "neutral"),
            Sentiment::Negative => write!(f, "negative"),
        }
    }
}

/// Categorical priority the AI service assigns to a news item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum BusinessRelevance {
    High,
    Medium,
    Low,
}

/// A news item enriched with AI analysis fields.
///
/// The analysis fields are all present (from a successful response or a full
/// fallback record) or all absent — construct through [`AnalyzedNewsItem::plain`],
/// [`AnalyzedNewsItem::fallback`] or [`AnalyzedNewsItem::enriched_from`] to
/// keep that invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedNewsItem {
    pub title: String,
    pub link: String,
    pub snippet: String,
    pub date: String,
    pub source: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_insight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_relevance: Option<BusinessRelevance>,
}

/// Fixed defaults substituted when the AI service is unavailable or returns
/// invalid data.
pub const FALLBACK_CONFIDENCE: f64 = 0.5;
pub const FALLBACK_IMPACT_SCORE: f64 = 5.0;
pub const FALLBACK_KEY_INSIGHT: &str = "unavailable";

impl AnalyzedNewsItem {
    /// An item with no analysis attached.
    pub fn plain(item: NewsItem) -> Self {
        Self {
            title: item.title,
            link: item.link,
            snippet: item.snippet,
            date: item.date,
            source: item.source,
            sentiment: None,
            confidence: None,
            impact_score: None,
            key_insight: None,
            business_relevance: None,
        }
    }

    /// Deterministic neutral record substituted when analysis fails.
    pub fn fallback(item: NewsItem) -> Self {
        Self {
            sentiment: Some(Sentiment::Neutral),
            confidence: Some(FALLBACK_CONFIDENCE),
            impact_score: Some(FALLBACK_IMPACT_SCORE),
            key_insight: Some(FALLBACK_KEY_INSIGHT.to_string()),
            business_relevance: Some(BusinessRelevance::Medium),
            ..Self::plain(item)
        }
    }

    /// Merges a record returned by the AI service back onto the input item.
    /// Identity fields always come from the input; the service only
    /// contributes analysis fields.
    pub fn enriched_from(item: &NewsItem, returned: AnalyzedNewsItem) -> Self {
        Self {
            sentiment: returned.sentiment,
            confidence: returned.confidence,
            impact_score: returned.impact_score,
            key_insight: returned.key_insight,
            business_relevance: returned.business_relevance,
            ..Self::plain(item.clone())
        }
    }

    pub fn is_analyzed(&self) -> bool {
        self.sentiment.is_some()
    }

    pub fn identity(&self) -> ItemKey {
        ItemKey {
            link: self.link.clone(),
            date: self.date.clone(),
        }
    }
}
