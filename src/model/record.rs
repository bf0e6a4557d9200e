// src/model/record.rs
use serde::{Serialize, Deserialize};

use crate::model::issue::Issue;

/// One analytics snapshot for a single application.
///
/// A record is built wholesale by a fetch and replaced atomically by the
/// next successful one; nothing mutates it field by field. Nested sections
/// all default so a partially shaped payload decodes instead of erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsRecord {
    #[serde(default)]
    pub app_info: AppInfo,
    #[serde(default)]
    pub metrics: Metrics,
    #[serde(default)]
    pub trends: Trends,
    #[serde(default, rename = "recent_tasks")]
    pub recent_issues: Vec<Issue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub installs: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(default)]
    pub total_reviews: u64,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub sentiment_distribution: SentimentDistribution,
    #[serde(default)]
    pub severity_distribution: SeverityDistribution,
}

/// Percentage split of reviews by sentiment. The analyzer normalizes these
/// to sum to 100; consumers display them as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    #[serde(default, rename = "positivo")]
    pub positive: u32,
    #[serde(default, rename = "neutro")]
    pub neutral: u32,
    #[serde(default, rename = "negativo")]
    pub negative: u32,
}

/// Issue counts per severity class, aggregated upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeverityDistribution {
    #[serde(default, rename = "Alta")]
    pub high: u64,
    #[serde(default, rename = "Média")]
    pub medium: u64,
    #[serde(default, rename = "Baixa")]
    pub low: u64,
}

/// Per-period history. `rating_trend` and `review_volume` are index-aligned
/// and expected to have the same length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trends {
    #[serde(default)]
    pub rating_trend: Vec<f64>,
    #[serde(default)]
    pub review_volume: Vec<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Severity;

    #[test]
    fn decodes_analyzer_wire_format() {
        let payload = serde_json::json!({
            "app_info": {
                "title": "Íon Itaú: investir com taxa 0",
                "score": 4.675646,
                "version": "2.80.0",
                "installs": "1M+",
                "category": "Finanças"
            },
            "metrics": {
                "total_reviews": 1247,
                "average_rating": 4.68,
                "sentiment_distribution": { "positivo": 65, "neutro": 25, "negativo": 10 },
                "severity_distribution": { "Alta": 5, "Média": 15, "Baixa": 80 }
            },
            "trends": {
                "rating_trend": [4.2, 4.3, 4.1],
                "review_volume": [120, 135, 98]
            },
            "recent_tasks": [
                {
                    "id": 1,
                    "title": "[Severidade: Média] Problema identificado",
                    "severity": "Média",
                    "user": "Ricardo Dalessandro",
                    "review_text": "Resolvi o problema do aplicativo."
                }
            ],
            "generated_at": "2025-06-01T12:00:00"
        });

        let record: AnalyticsRecord = serde_json::from_value(payload).unwrap();
        assert_eq!(record.app_info.version, "2.80.0");
        assert_eq!(record.metrics.total_reviews, 1247);
        assert_eq!(record.metrics.sentiment_distribution.positive, 65);
        assert_eq!(record.metrics.severity_distribution.low, 80);
        assert_eq!(record.trends.rating_trend.len(), 3);
        assert_eq!(record.recent_issues.len(), 1);
        assert_eq!(record.recent_issues[0].severity, Severity::Medium);
    }

    #[test]
    fn tolerates_partially_shaped_payloads() {
        let record: AnalyticsRecord = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(record.metrics.total_reviews, 0);
        assert!(record.trends.rating_trend.is_empty());
        assert!(record.recent_issues.is_empty());

        let record: AnalyticsRecord =
            serde_json::from_value(serde_json::json!({ "metrics": {} })).unwrap();
        assert_eq!(record.metrics.sentiment_distribution.positive, 0);
    }

    #[test]
    fn missing_severity_defaults_to_low() {
        let payload = serde_json::json!({
            "recent_tasks": [{ "id": 7, "title": "t", "user": "u", "review_text": "r" }]
        });
        let record: AnalyticsRecord = serde_json::from_value(payload).unwrap();
        assert_eq!(record.recent_issues[0].severity, Severity::Low);
    }
}
