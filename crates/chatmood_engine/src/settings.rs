use std::time::Duration;

use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("invalid analysis endpoint {endpoint:?}: {message}")]
    InvalidEndpoint { endpoint: String, message: String },
    #[error("analysis endpoint must use http or https, got {scheme:?}")]
    UnsupportedScheme { scheme: String },
}

/// Where and how to reach the analysis service.
/// The endpoint always comes from configuration, so there is no `Default`.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub endpoint: Url,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl ClientSettings {
    pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
    /// Generous because the hosted service may need to cold-start.
    pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

    pub fn new(endpoint: &str) -> Result<Self, SettingsError> {
        let parsed = Url::parse(endpoint.trim()).map_err(|err| SettingsError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            message: err.to_string(),
        })?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(SettingsError::UnsupportedScheme {
                    scheme: other.to_string(),
                })
            }
        }
        Ok(Self {
            endpoint: parsed,
            connect_timeout: Self::DEFAULT_CONNECT_TIMEOUT,
            request_timeout: Self::DEFAULT_REQUEST_TIMEOUT,
        })
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
