use chatmood_core::{AnalysisOutcome, AttemptId};

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    AnalysisSettled {
        attempt: AttemptId,
        outcome: AnalysisOutcome,
    },
    /// The attempt was cancelled or superseded before it settled.
    AnalysisCancelled { attempt: AttemptId },
}

impl EngineEvent {
    pub fn attempt(&self) -> AttemptId {
        match self {
            EngineEvent::AnalysisSettled { attempt, .. }
            | EngineEvent::AnalysisCancelled { attempt } => *attempt,
        }
    }
}
