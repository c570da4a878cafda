//! Chatmood core: pure analyze-workflow state machine and chart adapters.
mod charts;
mod effect;
mod model;
mod mood;
mod msg;
mod state;
mod update;
mod view_model;

pub use charts::{
    bar_series, health_doughnut, negative_message_list, percentage_cards, BarPoint,
    DoughnutSlice, HealthDoughnut, PercentageCard, HEALTH_MAX,
};
pub use effect::Effect;
pub use model::{
    AnalysisOutcome, AnalysisRequest, AnalysisResult, AttemptId, NegativeMessage, Sentiment,
    SentimentCounts, SentimentPercentages, ANALYSIS_FAILED_MESSAGE,
};
pub use mood::{
    classify_mood, presentation, sentiment_color, sentiment_icon, MoodPresentation,
    NEGATIVE_COLOR, NEUTRAL_COLOR, POSITIVE_COLOR,
};
pub use msg::Msg;
pub use state::{AppState, HardFailure, WorkflowState, NO_FILE_MESSAGE};
pub use update::update;
pub use view_model::{
    AppViewModel, ErrorKind, ErrorView, MoodBadge, ReportView, WorkflowStatus, SUBMIT_LABEL,
    SUBMIT_LABEL_BUSY, UPLOAD_PLACEHOLDER,
};
