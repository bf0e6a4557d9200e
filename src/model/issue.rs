// src/model/issue.rs
use serde::{Serialize, Deserialize};

/// Priority assigned to a problem distilled from review feedback.
///
/// Wire names follow the upstream analyzer payload, which labels severities
/// in Portuguese.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "Alta")]
    High,
    #[serde(rename = "Média")]
    Medium,
    #[serde(rename = "Baixa")]
    Low,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

impl Default for Severity {
    // The upstream analyzer defaults unclassified tasks to low severity.
    fn default() -> Self {
        Severity::Low
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub review_text: String,
}
