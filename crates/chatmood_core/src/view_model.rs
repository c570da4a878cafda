use crate::charts::{
    bar_series, health_doughnut, negative_message_list, percentage_cards, BarPoint,
    HealthDoughnut, PercentageCard,
};
use crate::mood::{classify_mood, MoodPresentation};
use crate::state::HardFailure;
use crate::{AnalysisRequest, AnalysisResult, WorkflowState};

pub const UPLOAD_PLACEHOLDER: &str = "Upload WhatsApp Chat (.txt)";
pub const SUBMIT_LABEL: &str = "Analyze Chat";
pub const SUBMIT_LABEL_BUSY: &str = "Analyzing...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowStatus {
    #[default]
    Idle,
    Loading,
    Success,
    SoftError,
    HardError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Nothing was selected; no request was sent.
    Validation,
    /// The service rejected the upload and said why.
    Server,
    /// The service could not be reached or its answer was unusable.
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorView {
    pub kind: ErrorKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodBadge {
    pub label: String,
    pub presentation: MoodPresentation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    pub mood: MoodBadge,
    pub health: Option<HealthDoughnut>,
    pub percentages: [PercentageCard; 3],
    pub bars: [BarPoint; 3],
    pub negative_messages: Vec<String>,
    pub total_messages: Option<u64>,
}

impl ReportView {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let raw_mood = result.overall_mood.as_deref();
        let presentation = classify_mood(raw_mood);
        Self {
            mood: MoodBadge {
                label: raw_mood
                    .unwrap_or(presentation.sentiment.label())
                    .to_string(),
                presentation,
            },
            health: result.health_score.map(health_doughnut),
            percentages: percentage_cards(&result.sentiment_percentages),
            bars: bar_series(&result.sentiment_counts),
            negative_messages: negative_message_list(&result.top_negative_messages)
                .into_iter()
                .map(ToOwned::to_owned)
                .collect(),
            total_messages: result.total_messages,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub status: WorkflowStatus,
    pub upload_title: String,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    pub error: Option<ErrorView>,
    pub report: Option<ReportView>,
    pub dirty: bool,
}

impl AppViewModel {
    pub(crate) fn from_state(
        selected: Option<&AnalysisRequest>,
        workflow: &WorkflowState,
        dirty: bool,
    ) -> Self {
        let loading = workflow.is_loading();
        let status = match workflow {
            WorkflowState::Idle => WorkflowStatus::Idle,
            WorkflowState::Loading { .. } => WorkflowStatus::Loading,
            WorkflowState::Success(_) => WorkflowStatus::Success,
            WorkflowState::SoftError(_) => WorkflowStatus::SoftError,
            WorkflowState::HardError(_) => WorkflowStatus::HardError,
        };
        let error = match workflow {
            WorkflowState::SoftError(message) => Some(ErrorView {
                kind: ErrorKind::Server,
                message: message.clone(),
            }),
            WorkflowState::HardError(failure) => Some(ErrorView {
                kind: match failure {
                    HardFailure::NoFileSelected => ErrorKind::Validation,
                    HardFailure::AnalysisFailed => ErrorKind::Unavailable,
                },
                message: failure.message().to_string(),
            }),
            _ => None,
        };

        Self {
            status,
            upload_title: selected
                .map(|request| request.filename.clone())
                .unwrap_or_else(|| UPLOAD_PLACEHOLDER.to_string()),
            submit_label: if loading { SUBMIT_LABEL_BUSY } else { SUBMIT_LABEL },
            submit_enabled: !loading,
            error,
            report: workflow.result().map(ReportView::from_result),
            dirty,
        }
    }
}
