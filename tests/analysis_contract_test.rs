/// AI Analysis Service Contract Tests
///
/// Validates the wire contracts the orchestration layer depends on:
/// - Sentiment envelope: `{success, data: [item + analysis fields], count}`
/// - Insights envelope: `{success, data: {four buckets, summary, ...}}`
/// - Collector dataset document: `{company id -> company data}`
/// - Deterministic fallback defaults substituted on bulk failure
///
/// NOTE: These tests validate request/response structures and the merge
/// rules against recorded fixtures. Behavioral tests for the controllers
/// live next to their modules.

use serde::Deserialize;
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Wire structures
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
struct AnalyzedItem {
    title: String,
    link: String,
    snippet: String,
    date: String,
    source: String,
    #[serde(default)]
    sentiment: Option<String>,
    #[serde(default)]
    confidence: Option<f64>,
    #[serde(default)]
    impact_score: Option<f64>,
    #[serde(default)]
    key_insight: Option<String>,
    #[serde(default)]
    business_relevance: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Insight {
    title: String,
    description: String,
    #[serde(default)]
    priority: Option<String>,
    #[serde(default)]
    severity: Option<String>,
    #[serde(default)]
    strength: Option<String>,
    #[serde(default)]
    effort: Option<String>,
    #[serde(default)]
    impact: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Report {
    #[serde(default)]
    opportunities: Vec<Insight>,
    #[serde(default)]
    threats: Vec<Insight>,
    #[serde(default)]
    trends: Vec<Insight>,
    #[serde(default)]
    recommendations: Vec<Insight>,
    summary: String,
    generated_at: String,
    company: String,
}

#[derive(Debug, Deserialize)]
struct Company {
    name: String,
    collection_date: String,
    #[serde(default)]
    news: Vec<AnalyzedItem>,
    #[serde(default)]
    competitors: HashMap<String, Competitor>,
}

#[derive(Debug, Deserialize)]
struct Competitor {
    name: String,
    #[serde(default)]
    news: Vec<AnalyzedItem>,
}

// ---------------------------------------------------------------------------
// Sentiment envelope
// ---------------------------------------------------------------------------

const SENTIMENT_SUCCESS: &str = r#"{
    "success": true,
    "data": [
        {
            "title": "A", "link": "https://a.example", "snippet": "sa",
            "date": "2025-05-01", "source": "X",
            "sentiment": "positive", "confidence": 0.9, "impact_score": 8,
            "key_insight": "expansion", "business_relevance": "high"
        },
        {
            "title": "B", "link": "https://b.example", "snippet": "sb",
            "date": "2025-05-01", "source": "Y",
            "sentiment": "negative", "confidence": 0.7, "impact_score": 6,
            "key_insight": "pricing pressure", "business_relevance": "medium"
        }
    ],
    "count": 2
}"#;

#[test]
fn test_sentiment_envelope_maps_items_in_order() {
    let envelope: Envelope<Vec<AnalyzedItem>> =
        serde_json::from_str(SENTIMENT_SUCCESS).expect("envelope should parse");

    assert!(envelope.success);
    let records = envelope.data.expect("data present on success");
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].title, "A");
    assert_eq!(records[0].source, "X");
    assert_eq!(records[0].sentiment.as_deref(), Some("positive"));
    assert_eq!(records[0].confidence, Some(0.9));
    assert_eq!(records[0].impact_score, Some(8.0));

    assert_eq!(records[1].title, "B");
    assert_eq!(records[1].source, "Y");
    assert_eq!(records[1].sentiment.as_deref(), Some("negative"));
    assert_eq!(records[1].confidence, Some(0.7));
    assert_eq!(records[1].impact_score, Some(6.0));
}

#[test]
fn test_rejected_envelope_is_detectable_before_reading_data() {
    let envelope: Envelope<Vec<AnalyzedItem>> =
        serde_json::from_str(r#"{"success": false, "data": []}"#).unwrap();
    assert!(!envelope.success);

    let envelope: Envelope<Vec<AnalyzedItem>> =
        serde_json::from_str(r#"{"success": true}"#).unwrap();
    assert!(envelope.success);
    assert!(envelope.data.is_none(), "missing data must surface as None, not a parse error");
}

// ---------------------------------------------------------------------------
// Fallback degradation
// ---------------------------------------------------------------------------

fn fallback_for(item: &AnalyzedItem) -> AnalyzedItem {
    AnalyzedItem {
        sentiment: Some("neutral".to_string()),
        confidence: Some(0.5),
        impact_score: Some(5.0),
        key_insight: Some("unavailable".to_string()),
        business_relevance: Some("medium".to_string()),
        ..item.clone()
    }
}

#[test]
fn test_bulk_fallback_covers_every_input_with_fixed_defaults() {
    let inputs: Vec<AnalyzedItem> = serde_json::from_str::<Envelope<Vec<AnalyzedItem>>>(
        SENTIMENT_SUCCESS,
    )
    .unwrap()
    .data
    .unwrap();

    let fallbacks: Vec<AnalyzedItem> = inputs.iter().map(fallback_for).collect();

    assert_eq!(fallbacks.len(), inputs.len());
    for (fallback, input) in fallbacks.iter().zip(&inputs) {
        // Identity preserved, analysis replaced by the neutral defaults.
        assert_eq!(fallback.title, input.title);
        assert_eq!(fallback.link, input.link);
        assert_eq!(fallback.date, input.date);
        assert_eq!(fallback.source, input.source);
        assert_eq!(fallback.sentiment.as_deref(), Some("neutral"));
        assert_eq!(fallback.confidence, Some(0.5));
        assert_eq!(fallback.impact_score, Some(5.0));
        assert_eq!(fallback.business_relevance.as_deref(), Some("medium"));
    }
}

// ---------------------------------------------------------------------------
// Insights envelope
// ---------------------------------------------------------------------------

const INSIGHTS_SUCCESS: &str = r#"{
    "success": true,
    "data": {
        "opportunities": [
            {"title": "Fleet contracts", "description": "d", "priority": "high", "actionable": true}
        ],
        "threats": [],
        "trends": [
            {"title": "Consolidation", "description": "d", "strength": "strong", "impact": "negative"}
        ],
        "recommendations": [
            {"title": "Partner up", "description": "d", "effort": "low", "expected_impact": "high"}
        ],
        "summary": "Busy week for the charging market",
        "generated_at": "2025-05-02T10:00:00",
        "company": "Bluedot"
    }
}"#;

#[test]
fn test_insights_envelope_parses_all_four_buckets() {
    let envelope: Envelope<Report> = serde_json::from_str(INSIGHTS_SUCCESS).unwrap();
    let report = envelope.data.unwrap();

    assert_eq!(report.company, "Bluedot");
    assert_eq!(report.opportunities.len(), 1);
    assert!(report.threats.is_empty());
    assert_eq!(report.trends.len(), 1);
    assert_eq!(report.recommendations.len(), 1);
    assert!(!report.generated_at.is_empty());
    assert!(!report.summary.is_empty());
}

#[test]
fn test_each_bucket_carries_its_own_strength_attribute() {
    let envelope: Envelope<Report> = serde_json::from_str(INSIGHTS_SUCCESS).unwrap();
    let report = envelope.data.unwrap();

    assert_eq!(report.opportunities[0].priority.as_deref(), Some("high"));
    assert!(report.opportunities[0].severity.is_none());

    assert_eq!(report.trends[0].strength.as_deref(), Some("strong"));
    assert_eq!(report.trends[0].impact.as_deref(), Some("negative"));

    assert_eq!(report.recommendations[0].effort.as_deref(), Some("low"));
}

#[test]
fn test_missing_buckets_default_to_empty() {
    let report: Report = serde_json::from_str(
        r#"{"summary": "s", "generated_at": "2025-05-02T10:00:00", "company": "C"}"#,
    )
    .unwrap();

    assert!(report.opportunities.is_empty());
    assert!(report.threats.is_empty());
    assert!(report.trends.is_empty());
    assert!(report.recommendations.is_empty());
}

// ---------------------------------------------------------------------------
// Collector dataset document
// ---------------------------------------------------------------------------

#[test]
fn test_dataset_document_is_keyed_by_company_id() {
    let document = r#"{
        "bluedot": {
            "name": "Bluedot",
            "collection_date": "2025-05-02",
            "news": [
                {"title": "A", "link": "https://a.example", "snippet": "s",
                 "date": "2025-05-01", "source": "X"}
            ],
            "competitors": {
                "chargehive": {"name": "ChargeHive", "news": []}
            }
        }
    }"#;

    let dataset: HashMap<String, Company> = serde_json::from_str(document).unwrap();

    let bluedot = &dataset["bluedot"];
    assert_eq!(bluedot.name, "Bluedot");
    assert_eq!(bluedot.collection_date, "2025-05-02");
    assert_eq!(bluedot.news.len(), 1);
    // Collected items carry no analysis fields until the AI service runs.
    assert!(bluedot.news[0].sentiment.is_none());
    assert_eq!(bluedot.competitors["chargehive"].name, "ChargeHive");
}
