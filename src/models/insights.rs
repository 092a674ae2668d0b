use serde::{Deserialize, Serialize};

/// High/medium/low scale shared by the priority, severity, effort and
/// expected-impact attributes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum InsightLevel {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for InsightLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InsightLevel::High => write!(f, "high"),
            InsightLevel::Medium => write!(f, "medium"),
            InsightLevel::Low => write!(f, "low"),
        }
    }
}

/// Strength scale used by trend insights only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TrendStrength {
    Strong,
    Moderate,
    Weak,
}

impl std::fmt::Display for TrendStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrendStrength::Strong => write!(f, "strong"),
            TrendStrength::Moderate => write!(f, "moderate"),
            TrendStrength::Weak => write!(f, "weak"),
        }
    }
}

/// Direction a trend pushes the business in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ImpactDirection {
    Positive,
    Negative,
    Neutral,
}

/// One generated insight.
///
/// Exactly one of the strength attributes (`priority`, `severity`,
/// `strength`, `effort`) is meaningful, depending on the bucket the item
/// arrived in; the bucket descriptor decides which one to read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightItem {
    pub title: String,
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<InsightLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<InsightLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<TrendStrength>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effort: Option<InsightLevel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actionable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<ImpactDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_impact: Option<InsightLevel>,
}

/// A full strategic report generated wholesale by the AI service.
/// Immutable once received; regeneration replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsReport {
    #[serde(default)]
    pub opportunities: Vec<InsightItem>,
    #[serde(default)]
    pub threats: Vec<InsightItem>,
    #[serde(default)]
    pub trends: Vec<InsightItem>,
    #[serde(default)]
    pub recommendations: Vec<InsightItem>,
    pub summary: String,
    /// ISO-8601 timestamp as produced by the service; treated as opaque.
    pub generated_at: String,
    pub company: String,
}

/// One rendered insight bucket. Buckets the service left empty produce no
/// section at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightSection {
    pub bucket: String,
    pub entries: Vec<InsightEntry>,
}

/// Display form of one insight, with the bucket-specific badge and icon
/// already resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightEntry {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actionable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_impact: Option<InsightLevel>,
}
