use crate::view_model::AppViewModel;
use crate::{AnalysisOutcome, AnalysisRequest, AnalysisResult, AttemptId, ANALYSIS_FAILED_MESSAGE};

/// Shown when submit is pressed before any chat export was picked.
pub const NO_FILE_MESSAGE: &str = "Please upload a WhatsApp .txt file";

/// Failures whose user-facing text is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardFailure {
    /// Submit without a selected file. Detected before any network activity.
    NoFileSelected,
    AnalysisFailed,
}

impl HardFailure {
    pub fn message(self) -> &'static str {
        match self {
            HardFailure::NoFileSelected => NO_FILE_MESSAGE,
            HardFailure::AnalysisFailed => ANALYSIS_FAILED_MESSAGE,
        }
    }
}

/// What the interface currently shows. Exactly one variant holds at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WorkflowState {
    #[default]
    Idle,
    Loading {
        attempt: AttemptId,
    },
    Success(AnalysisResult),
    SoftError(String),
    HardError(HardFailure),
}

impl WorkflowState {
    pub fn is_loading(&self) -> bool {
        matches!(self, WorkflowState::Loading { .. })
    }

    pub fn in_flight(&self) -> Option<AttemptId> {
        match self {
            WorkflowState::Loading { attempt } => Some(*attempt),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            WorkflowState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            WorkflowState::SoftError(message) => Some(message),
            WorkflowState::HardError(failure) => Some(failure.message()),
            _ => None,
        }
    }

    fn is_error(&self) -> bool {
        matches!(
            self,
            WorkflowState::SoftError(_) | WorkflowState::HardError(_)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    selected: Option<AnalysisRequest>,
    workflow: WorkflowState,
    last_attempt: AttemptId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::from_state(self.selected.as_ref(), &self.workflow, self.dirty)
    }

    pub fn workflow(&self) -> &WorkflowState {
        &self.workflow
    }

    pub fn selected_file(&self) -> Option<&AnalysisRequest> {
        self.selected.as_ref()
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn select_file(&mut self, request: Option<AnalysisRequest>) {
        self.selected = request;
        if self.workflow.is_error() {
            self.workflow = WorkflowState::Idle;
        }
        self.dirty = true;
    }

    pub(crate) fn fail_validation(&mut self) {
        self.workflow = WorkflowState::HardError(HardFailure::NoFileSelected);
        self.dirty = true;
    }

    /// Enters `Loading` for a fresh attempt, dropping any previous result or error.
    pub(crate) fn begin_attempt(&mut self) -> AttemptId {
        self.last_attempt += 1;
        self.workflow = WorkflowState::Loading {
            attempt: self.last_attempt,
        };
        self.dirty = true;
        self.last_attempt
    }

    /// Applies a settlement if it belongs to the in-flight attempt.
    pub(crate) fn settle(&mut self, attempt: AttemptId, outcome: AnalysisOutcome) -> bool {
        if self.workflow.in_flight() != Some(attempt) {
            return false;
        }
        self.workflow = match outcome {
            AnalysisOutcome::Success(result) => WorkflowState::Success(result),
            AnalysisOutcome::SoftError(message) => WorkflowState::SoftError(message),
            AnalysisOutcome::HardError => WorkflowState::HardError(HardFailure::AnalysisFailed),
        };
        self.dirty = true;
        true
    }

    pub(crate) fn abandon_in_flight(&mut self) -> Option<AttemptId> {
        let attempt = self.workflow.in_flight()?;
        self.workflow = WorkflowState::Idle;
        self.dirty = true;
        Some(attempt)
    }
}
