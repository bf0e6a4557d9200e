// src/model/mod.rs
pub mod issue;
pub mod record;

// Re-export commonly used types
pub use issue::{Issue, Severity};
pub use record::{
    AnalyticsRecord, AppInfo, Metrics, SentimentDistribution, SeverityDistribution, Trends,
};
