use chatmood_core::{AnalysisOutcome, AnalysisRequest};
use chatmood_logging::{mood_debug, mood_warn};
use reqwest::multipart::{Form, Part};

use crate::classify::{classify_response, ClientError};
use crate::ClientSettings;

/// Multipart field the service reads the chat export from.
pub const UPLOAD_FIELD: &str = "file";

/// Runs one analysis and classifies its result. Never fails past this boundary.
#[async_trait::async_trait]
pub trait AnalysisClient: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> AnalysisOutcome;
}

#[derive(Debug, Clone)]
pub struct ReqwestAnalysisClient {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestAnalysisClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()?;
        Ok(Self { settings, client })
    }

    async fn try_analyze(&self, request: &AnalysisRequest) -> Result<AnalysisOutcome, ClientError> {
        let part = Part::bytes(request.bytes.clone())
            .file_name(request.filename.clone())
            .mime_str("text/plain")?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self
            .client
            .post(self.settings.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(map_reqwest_error)?;
        mood_debug!(
            "analysis response status={} body_len={}",
            status,
            body.len()
        );
        classify_response(status, &body)
    }
}

#[async_trait::async_trait]
impl AnalysisClient for ReqwestAnalysisClient {
    async fn analyze(&self, request: &AnalysisRequest) -> AnalysisOutcome {
        match self.try_analyze(request).await {
            Ok(outcome) => outcome,
            Err(err) => {
                mood_warn!(
                    "analysis of {:?} at {} failed: {}",
                    request.filename,
                    self.settings.endpoint,
                    err
                );
                AnalysisOutcome::HardError
            }
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        return ClientError::Timeout;
    }
    ClientError::Transport(err)
}
