// src/projection/mod.rs
//
// Pure transforms from the canonical AnalyticsRecord into the per-view
// display datasets. Every function tolerates an absent record by returning
// an empty Vec; none of them can panic on any input.

use crate::model::AnalyticsRecord;

/// Palette slot for a chart entry. Mapped to a concrete color by the ui
/// layer only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKey {
    Green,
    Amber,
    Red,
}

/// One labelled value of a categorical chart (sentiment or severity).
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: &'static str,
    pub value: f64,
    pub color: ColorKey,
}

/// One period of the trend chart: average rating paired with review volume.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub period_label: String,
    pub rating: f64,
    pub review_count: u64,
}

/// Sentiment percentages in fixed order Positive, Neutral, Negative.
pub fn sentiment_slices(record: Option<&AnalyticsRecord>) -> Vec<Slice> {
    let record = match record {
        Some(record) => record,
        None => return Vec::new(),
    };
    let sentiment = &record.metrics.sentiment_distribution;
    vec![
        Slice { label: "Positive", value: sentiment.positive as f64, color: ColorKey::Green },
        Slice { label: "Neutral", value: sentiment.neutral as f64, color: ColorKey::Amber },
        Slice { label: "Negative", value: sentiment.negative as f64, color: ColorKey::Red },
    ]
}

/// Severity counts in fixed order High, Medium, Low. The aggregate counts
/// are passed through as-is; they are not reconciled against the issue
/// list, which is only a bounded sample.
pub fn severity_slices(record: Option<&AnalyticsRecord>) -> Vec<Slice> {
    let record = match record {
        Some(record) => record,
        None => return Vec::new(),
    };
    let severity = &record.metrics.severity_distribution;
    vec![
        Slice { label: "High", value: severity.high as f64, color: ColorKey::Red },
        Slice { label: "Medium", value: severity.medium as f64, color: ColorKey::Amber },
        Slice { label: "Low", value: severity.low as f64, color: ColorKey::Green },
    ]
}

/// Pairs `rating_trend[i]` with `review_volume[i]`. If the two vectors
/// disagree in length the series stops at the shorter one.
pub fn trend_series(record: Option<&AnalyticsRecord>) -> Vec<TrendPoint> {
    let record = match record {
        Some(record) => record,
        None => return Vec::new(),
    };
    record
        .trends
        .rating_trend
        .iter()
        .zip(record.trends.review_volume.iter())
        .enumerate()
        .map(|(i, (rating, volume))| TrendPoint {
            period_label: format!("Period {}", i + 1),
            rating: *rating,
            review_count: *volume,
        })
        .collect()
}
