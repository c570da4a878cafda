use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use chatmood_core::{AnalysisRequest, AttemptId};
use chatmood_logging::{mood_debug, mood_info};
use tokio_util::sync::CancellationToken;

use crate::{AnalysisClient, ClientError, ClientSettings, EngineEvent, ReqwestAnalysisClient};

enum EngineCommand {
    Analyze {
        attempt: AttemptId,
        request: AnalysisRequest,
    },
    Cancel {
        attempt: AttemptId,
    },
}

/// Runs analyses on a background tokio runtime.
///
/// At most one attempt runs at a time: starting a new one cancels whatever is
/// still outstanding, so a late response can never be reported after a newer
/// attempt began.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn with_settings(settings: ClientSettings) -> Result<Self, EngineError> {
        let client = ReqwestAnalysisClient::new(settings)?;
        Self::new(Arc::new(client)).map_err(EngineError::from)
    }

    pub fn new(client: Arc<dyn AnalysisClient>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let mut current: Option<(AttemptId, CancellationToken)> = None;
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::Analyze { attempt, request } => {
                        if let Some((previous, token)) = current.take() {
                            mood_debug!("attempt {} superseded by {}", previous, attempt);
                            token.cancel();
                        }
                        let token = CancellationToken::new();
                        current = Some((attempt, token.clone()));
                        runtime.spawn(run_attempt(
                            client.clone(),
                            attempt,
                            request,
                            token,
                            event_tx.clone(),
                        ));
                    }
                    EngineCommand::Cancel { attempt } => {
                        let is_current = current
                            .as_ref()
                            .is_some_and(|(running, _)| *running == attempt);
                        if is_current {
                            if let Some((_, token)) = current.take() {
                                token.cancel();
                            }
                        }
                    }
                }
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn analyze(&self, attempt: AttemptId, request: AnalysisRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Analyze { attempt, request });
    }

    pub fn cancel(&self, attempt: AttemptId) {
        let _ = self.cmd_tx.send(EngineCommand::Cancel { attempt });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks for the next event. `None` means the engine thread is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to build http client: {0}")]
    Client(#[from] ClientError),
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] io::Error),
}

async fn run_attempt(
    client: Arc<dyn AnalysisClient>,
    attempt: AttemptId,
    request: AnalysisRequest,
    token: CancellationToken,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    mood_info!(
        "attempt {} uploading {:?} ({} bytes)",
        attempt,
        request.filename,
        request.bytes.len()
    );
    let event = tokio::select! {
        biased;
        _ = token.cancelled() => EngineEvent::AnalysisCancelled { attempt },
        outcome = client.analyze(&request) => EngineEvent::AnalysisSettled { attempt, outcome },
    };
    let _ = event_tx.send(event);
}
