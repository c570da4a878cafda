#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User picked a chat export, or dismissed the picker (`None`).
    FileSelected(Option<crate::AnalysisRequest>),
    /// User clicked Analyze.
    SubmitClicked,
    /// User abandoned the running analysis.
    CancelClicked,
    /// Engine finished an attempt.
    AnalysisSettled {
        attempt: crate::AttemptId,
        outcome: crate::AnalysisOutcome,
    },
}
