use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FileSelected(request) => {
            state.select_file(request);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // Single flight: a second submit must not race the first one's result.
            if state.workflow().is_loading() {
                return (state, Vec::new());
            }
            match state.selected_file().cloned() {
                Some(request) => {
                    let attempt = state.begin_attempt();
                    vec![Effect::StartAnalysis { attempt, request }]
                }
                None => {
                    state.fail_validation();
                    Vec::new()
                }
            }
        }
        Msg::CancelClicked => match state.abandon_in_flight() {
            Some(attempt) => vec![Effect::CancelAnalysis { attempt }],
            None => Vec::new(),
        },
        Msg::AnalysisSettled { attempt, outcome } => {
            // Stale attempts are dropped inside `settle`.
            state.settle(attempt, outcome);
            Vec::new()
        }
    };

    (state, effects)
}
