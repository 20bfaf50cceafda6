use anyhow::{Context, Result};
use serde::Deserialize;

const EMBEDDED_CONFIG: &str = include_str!("../resources/config.toml");

/// Settings compiled into the binary from `resources/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmbeddedConfig {
    #[serde(default)]
    pub icon: Option<String>,
}

impl EmbeddedConfig {
    pub fn load() -> Result<Self> {
        Self::parse(EMBEDDED_CONFIG).context("Invalid embedded config")
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let mut config: EmbeddedConfig = toml::from_str(contents)?;
        config.icon = config
            .icon
            .map(|icon| icon.trim().to_string())
            .filter(|icon| !icon.is_empty());
        Ok(config)
    }
}
