use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chatmood_core::AnalysisRequest;
use chatmood_logging::mood_warn;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("failed to read chat export {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("chat export path has no file name: {0:?}")]
    NoFileName(PathBuf),
}

/// Reads a chat export into an upload request. Content is not inspected.
pub fn read_chat_export(path: &Path) -> Result<AnalysisRequest, UploadError> {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| UploadError::NoFileName(path.to_path_buf()))?;

    let is_txt = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
    if !is_txt {
        mood_warn!("{:?} is not a .txt export; uploading anyway", filename);
    }

    let bytes = fs::read(path).map_err(|source| UploadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(AnalysisRequest::new(filename, bytes))
}
