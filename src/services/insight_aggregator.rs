use crate::models::{
    ImpactDirection, InsightEntry, InsightItem, InsightSection, InsightsReport,
};

/// Which strength attribute a bucket's badge is read from. Each bucket
/// carries exactly one meaningful attribute; the other three stay empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriorityField {
    Priority,
    Severity,
    Strength,
    Effort,
}

impl PriorityField {
    fn badge(self, item: &InsightItem) -> Option<String> {
        match self {
            PriorityField::Priority => item.priority.map(|level| level.to_string()),
            PriorityField::Severity => item.severity.map(|level| level.to_string()),
            PriorityField::Strength => item.strength.map(|strength| strength.to_string()),
            PriorityField::Effort => item.effort.map(|level| level.to_string()),
        }
    }
}

type IconSelector = fn(&InsightItem) -> Option<&'static str>;

/// Rendering descriptor for one insight bucket: where its items live in the
/// report, which attribute becomes the badge, and an optional icon rule.
pub struct BucketDescriptor {
    pub name: &'static str,
    items: fn(&InsightsReport) -> &[InsightItem],
    priority_field: PriorityField,
    icon_selector: Option<IconSelector>,
}

fn opportunity_items(report: &InsightsReport) -> &[InsightItem] {
    &report.opportunities
}

fn threat_items(report: &InsightsReport) -> &[InsightItem] {
    &report.threats
}

fn trend_items(report: &InsightsReport) -> &[InsightItem] {
    &report.trends
}

fn recommendation_items(report: &InsightsReport) -> &[InsightItem] {
    &report.recommendations
}

/// Directional icon for a trend, keyed off its impact.
fn trend_icon(item: &InsightItem) -> Option<&'static str> {
    item.impact.map(|impact| match impact {
        ImpactDirection::Positive => "trending-up",
        ImpactDirection::Negative => "trending-down",
        ImpactDirection::Neutral => "activity",
    })
}

/// The four fixed buckets of a strategic report, in display order.
static BUCKETS: [BucketDescriptor; 4] = [
    BucketDescriptor {
        name: "opportunities",
        items: opportunity_items,
        priority_field: PriorityField::Priority,
        icon_selector: None,
    },
    BucketDescriptor {
        name: "threats",
        items: threat_items,
        priority_field: PriorityField::Severity,
        icon_selector: None,
    },
    BucketDescriptor {
        name: "trends",
        items: trend_items,
        priority_field: PriorityField::Strength,
        icon_selector: Some(trend_icon),
    },
    BucketDescriptor {
        name: "recommendations",
        items: recommendation_items,
        priority_field: PriorityField::Effort,
        icon_selector: None,
    },
];

/// Renders a report into display sections. Buckets the service left empty
/// produce no section; item order within a bucket is preserved as received.
pub fn aggregate(report: &InsightsReport) -> Vec<InsightSection> {
    BUCKETS
        .iter()
        .filter_map(|descriptor| render_section(descriptor, (descriptor.items)(report)))
        .collect()
}

fn render_section(
    descriptor: &BucketDescriptor,
    items: &[InsightItem],
) -> Option<InsightSection> {
    if items.is_empty() {
        return None;
    }

    let entries = items
        .iter()
        .map(|item| InsightEntry {
            title: item.title.clone(),
            description: item.description.clone(),
            badge: descriptor.priority_field.badge(item),
            icon: descriptor
                .icon_selector
                .and_then(|select| select(item))
                .map(str::to_string),
            actionable: item.actionable,
            timeline: item.timeline.clone(),
            expected_impact: item.expected_impact,
        })
        .collect();

    Some(InsightSection {
        bucket: descriptor.name.to_string(),
        entries,
    })
}
