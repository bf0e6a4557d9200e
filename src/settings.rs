// src/settings.rs
use anyhow::Result;
use serde::Deserialize;

/// Runtime configuration: defaults, an optional `reviewlens.toml` next to
/// the binary, and `REVIEWLENS_*` environment overrides, in that order.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub default_app_id: String,
    /// Base URL of the analyzer backend. When unset, the built-in sample
    /// source is used.
    pub api_base_url: Option<String>,
    pub request_timeout_secs: u64,
}

impl Settings {
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("default_app_id", "com.itau.investimentos")?
            .set_default("request_timeout_secs", 15_i64)?
            .add_source(config::File::with_name("reviewlens").required(false))
            .add_source(config::Environment::with_prefix("REVIEWLENS"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
