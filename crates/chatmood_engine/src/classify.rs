use chatmood_core::{AnalysisOutcome, AnalysisResult};
use serde_json::Value;
use thiserror::Error;

/// Why an attempt ended as a hard error. Logged, never shown to the user.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("request timed out")]
    Timeout,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("response body is not json: {0}")]
    InvalidJson(serde_json::Error),
    #[error("response body is not an analysis result: {0}")]
    UnexpectedShape(serde_json::Error),
    #[error("`error` field is not a string: {0}")]
    NonStringError(Value),
}

/// Classifies a response by status and raw body.
///
/// An `error` string wins over everything, including a failing status. A
/// `null` `error` counts as absent.
pub fn classify_response(status: u16, body: &[u8]) -> Result<AnalysisOutcome, ClientError> {
    let is_success = (200..300).contains(&status);
    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(err) if is_success => return Err(ClientError::InvalidJson(err)),
        Err(_) => return Err(ClientError::HttpStatus(status)),
    };

    match value.get("error") {
        Some(Value::String(message)) => return Ok(AnalysisOutcome::SoftError(message.clone())),
        Some(Value::Null) | None => {}
        Some(other) if is_success => return Err(ClientError::NonStringError(other.clone())),
        Some(_) => {}
    }

    if !is_success {
        return Err(ClientError::HttpStatus(status));
    }

    serde_json::from_value::<AnalysisResult>(value)
        .map(AnalysisOutcome::Success)
        .map_err(ClientError::UnexpectedShape)
}
