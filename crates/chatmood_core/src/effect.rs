#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    StartAnalysis {
        attempt: crate::AttemptId,
        request: crate::AnalysisRequest,
    },
    CancelAnalysis {
        attempt: crate::AttemptId,
    },
}
