use chatmood_core::{AnalysisOutcome, Effect, Msg};
use chatmood_engine::{EngineEvent, EngineHandle};
use chatmood_logging::{mood_debug, mood_info, mood_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartAnalysis { attempt, request } => {
                    mood_info!(
                        "StartAnalysis attempt={} file={:?} bytes={}",
                        attempt,
                        request.filename,
                        request.bytes.len()
                    );
                    self.engine.analyze(attempt, request);
                }
                Effect::CancelAnalysis { attempt } => {
                    mood_info!("CancelAnalysis attempt={}", attempt);
                    self.engine.cancel(attempt);
                }
            }
        }
    }

    /// Waits for the next engine event that the workflow needs to see.
    ///
    /// Returns `None` once the engine has shut down.
    pub fn next_msg(&self) -> Option<Msg> {
        loop {
            match self.engine.recv()? {
                EngineEvent::AnalysisSettled { attempt, outcome } => {
                    if matches!(outcome, AnalysisOutcome::HardError) {
                        mood_warn!("Attempt {} failed", attempt);
                    }
                    return Some(Msg::AnalysisSettled { attempt, outcome });
                }
                EngineEvent::AnalysisCancelled { attempt } => {
                    mood_debug!("Attempt {} cancelled", attempt);
                }
            }
        }
    }
}
