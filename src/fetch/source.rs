// src/fetch/source.rs
use std::time::Duration;

use crate::fetch::FetchError;
use crate::model::{
    AnalyticsRecord, AppInfo, Issue, Metrics, SentimentDistribution, Severity,
    SeverityDistribution, Trends,
};

/// The sole I/O boundary of the dashboard: something that can produce an
/// analytics snapshot for an application identifier. Implementations run on
/// a background thread, so they may block.
pub trait AnalyticsSource: Send + Sync {
    fn fetch_analytics(&self, app_id: &str) -> Result<AnalyticsRecord, FetchError>;
}

/// Fetches snapshots from the analyzer backend.
pub struct HttpAnalyticsSource {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpAnalyticsSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Retrieval(e.to_string()))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }
}

impl AnalyticsSource for HttpAnalyticsSource {
    fn fetch_analytics(&self, app_id: &str) -> Result<AnalyticsRecord, FetchError> {
        let url = format!("{}/dashboard-data/{}", self.base_url, app_id);
        let response = self
            .client
            .get(&url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| FetchError::Retrieval(e.to_string()))?;
        response
            .json::<AnalyticsRecord>()
            .map_err(|e| FetchError::Retrieval(format!("decoding analytics payload: {}", e)))
    }
}

/// Built-in demo snapshot, used when no backend URL is configured.
pub struct SampleAnalyticsSource;

impl AnalyticsSource for SampleAnalyticsSource {
    fn fetch_analytics(&self, _app_id: &str) -> Result<AnalyticsRecord, FetchError> {
        Ok(sample_record())
    }
}

pub fn sample_record() -> AnalyticsRecord {
    AnalyticsRecord {
        app_info: AppInfo {
            title: "Íon Itaú: investir com taxa 0".to_string(),
            score: 4.675646,
            version: "2.80.0".to_string(),
            installs: "1M+".to_string(),
            category: "Finanças".to_string(),
        },
        metrics: Metrics {
            total_reviews: 1247,
            average_rating: 4.68,
            sentiment_distribution: SentimentDistribution {
                positive: 65,
                neutral: 25,
                negative: 10,
            },
            severity_distribution: SeverityDistribution {
                high: 5,
                medium: 15,
                low: 80,
            },
        },
        trends: Trends {
            rating_trend: vec![4.2, 4.3, 4.1, 4.5, 4.7],
            review_volume: vec![120, 135, 98, 156, 142],
        },
        recent_issues: vec![
            Issue {
                id: 1,
                title: "[Severidade: Média] Problema identificado: problema".to_string(),
                severity: Severity::Medium,
                user: "Ricardo Dalessandro".to_string(),
                review_text: "Resolvi o problema do aplicativo. Se tivesse que esperar por uma \
                              solução se VCs estava é ferrado."
                    .to_string(),
            },
            Issue {
                id: 2,
                title: "[Severidade: Baixa] Revisar feedback neutro".to_string(),
                severity: Severity::Low,
                user: "P. Modesto".to_string(),
                review_text: "ainda não sei como transferir para a conta da corretora pelo ion"
                    .to_string(),
            },
        ],
    }
}
