//! Layered configuration: command line and environment first, then the RON file.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, Context};
use chatmood_engine::ClientSettings;
use chatmood_logging::mood_info;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "chatmood.ron";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub endpoint: Option<String>,
    pub connect_timeout_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
}

/// Values from the command line or environment; these win over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub endpoint: Option<String>,
    pub connect_timeout_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
}

/// Loads the config file. An explicit path must exist; the default one may be absent.
pub fn load_file_config(explicit: Option<&Path>) -> anyhow::Result<FileConfig> {
    let path = explicit.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound && explicit.is_none() => {
            return Ok(FileConfig::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read config file {:?}", path));
        }
    };

    let config: FileConfig = ron::from_str(&content)
        .with_context(|| format!("failed to parse config file {:?}", path))?;
    mood_info!("Loaded config from {:?}", path);
    Ok(config)
}

pub fn resolve_settings(overrides: &Overrides, file: &FileConfig) -> anyhow::Result<ClientSettings> {
    let endpoint = overrides
        .endpoint
        .as_deref()
        .or(file.endpoint.as_deref())
        .ok_or_else(|| {
            anyhow!(
                "no analysis endpoint configured: pass --endpoint, set CHATMOOD_ENDPOINT, \
                 or add `endpoint` to {DEFAULT_CONFIG_FILE}"
            )
        })?;

    let mut settings = ClientSettings::new(endpoint)?;
    if let Some(secs) = overrides.connect_timeout_secs.or(file.connect_timeout_secs) {
        settings = settings.with_connect_timeout(Duration::from_secs(secs));
    }
    if let Some(secs) = overrides.request_timeout_secs.or(file.request_timeout_secs) {
        settings = settings.with_request_timeout(Duration::from_secs(secs));
    }
    Ok(settings)
}
