use anyhow::Context;
use serde::Deserialize;
use tracing::debug;

/// Page-level settings. Every key is optional in the TOML source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Storage key holding the serialized task list.
    pub storage_key: String,
    /// Height of the fixed header, kept clear above scroll targets.
    pub header_offset: f64,
    pub empty_message: String,
    pub currency_symbol: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: "todos".to_string(),
            header_offset: 80.0,
            empty_message: "No tasks found.".to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl PageConfig {
    #[tracing::instrument(skip(text))]
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        let cfg: PageConfig = toml::from_str(text).context("failed to parse page config")?;
        debug!(?cfg, "parsed page config");
        Ok(cfg)
    }
}
