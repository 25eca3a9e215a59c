use crate::cli::DEFAULT_CATALOG_SOURCE;
use crate::domain::constants::DEFAULT_FETCH_TIMEOUT_MS;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub general: ConfigGeneral,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigGeneral {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl ConfigFile {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.general.timeout_ms.unwrap_or(DEFAULT_FETCH_TIMEOUT_MS))
    }
}

fn config_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/storecheck/config.toml"))
}

pub fn load_config() -> anyhow::Result<ConfigFile> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

/// Source precedence: an explicit `--source` wins, then the config file, then
/// the built-in endpoint. An explicit flag equal to the default is
/// indistinguishable from no flag, which is fine: both mean the default.
pub fn resolve_source(cli_source: &str, config: &ConfigFile) -> String {
    if cli_source != DEFAULT_CATALOG_SOURCE {
        return cli_source.to_string();
    }
    config
        .general
        .source
        .clone()
        .unwrap_or_else(|| DEFAULT_CATALOG_SOURCE.to_string())
}
