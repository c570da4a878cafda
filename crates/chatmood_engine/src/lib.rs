//! Chatmood engine: talks to the analysis service and runs attempts off the UI thread.
mod classify;
mod client;
mod engine;
mod settings;
mod types;
mod upload;

pub use classify::{classify_response, ClientError};
pub use client::{AnalysisClient, ReqwestAnalysisClient, UPLOAD_FIELD};
pub use engine::{EngineError, EngineHandle};
pub use settings::{ClientSettings, SettingsError};
pub use types::EngineEvent;
pub use upload::{read_chat_export, UploadError};
