use std::io::Write;

use anyhow::{bail, Context};
use chatmood_core::{update, AnalysisRequest, AppState, AppViewModel, Msg};
use chatmood_engine::{read_chat_export, EngineHandle};
use chatmood_logging::mood_debug;

use crate::cli::Cli;
use crate::config::{load_file_config, resolve_settings};
use crate::effects::EffectRunner;
use crate::render::render;

pub fn run(cli: &Cli) -> anyhow::Result<AppViewModel> {
    let file_config = load_file_config(cli.config.as_deref())?;
    let settings = resolve_settings(&cli.overrides(), &file_config)?;
    let selection = cli
        .file
        .as_deref()
        .map(read_chat_export)
        .transpose()
        .context("failed to load chat export")?;

    let engine = EngineHandle::with_settings(settings).context("failed to start analysis engine")?;
    let runner = EffectRunner::new(engine);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_workflow(&runner, selection, &mut out)
}

/// Drives one select → submit → settle cycle, rendering after every change.
pub fn run_workflow(
    runner: &EffectRunner,
    selection: Option<AnalysisRequest>,
    out: &mut dyn Write,
) -> anyhow::Result<AppViewModel> {
    let mut state = AppState::new();
    if selection.is_some() {
        state = dispatch(state, Msg::FileSelected(selection), runner, out)?;
    }
    state = dispatch(state, Msg::SubmitClicked, runner, out)?;

    while state.workflow().is_loading() {
        let Some(msg) = runner.next_msg() else {
            bail!("analysis engine stopped before the request settled");
        };
        state = dispatch(state, msg, runner, out)?;
    }

    Ok(state.view())
}

fn dispatch(
    state: AppState,
    msg: Msg,
    runner: &EffectRunner,
    out: &mut dyn Write,
) -> anyhow::Result<AppState> {
    let (mut state, effects) = update(state, msg);
    runner.enqueue(effects);

    if state.consume_dirty() {
        let view = state.view();
        mood_debug!("Rendering status={:?}", view.status);
        writeln!(out, "{}", render(&view)).context("failed to write output")?;
        out.flush().context("failed to write output")?;
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use chatmood_core::{
        AnalysisOutcome, ErrorKind, WorkflowStatus, ANALYSIS_FAILED_MESSAGE, NO_FILE_MESSAGE,
    };
    use chatmood_engine::AnalysisClient;

    use super::*;

    struct FixedClient {
        body: &'static [u8],
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl AnalysisClient for FixedClient {
        async fn analyze(&self, _request: &AnalysisRequest) -> AnalysisOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            chatmood_engine::classify_response(200, self.body)
                .unwrap_or(AnalysisOutcome::HardError)
        }
    }

    fn runner_with(body: &'static [u8]) -> (EffectRunner, Arc<FixedClient>) {
        let client = Arc::new(FixedClient {
            body,
            calls: AtomicUsize::new(0),
        });
        let engine = EngineHandle::new(client.clone()).unwrap();
        (EffectRunner::new(engine), client)
    }

    fn chat() -> Option<AnalysisRequest> {
        Some(AnalysisRequest::new("chat.txt", b"[1/1/24, 9:00] Ann: hi".to_vec()))
    }

    #[test]
    fn full_cycle_renders_loading_then_report() {
        let body = br#"{"sentiment_counts": {"Positive": 10, "Neutral": 5, "Negative": 3},
                        "overall_mood": "Negative", "health_score": 42,
                        "top_negative_messages": [{"message": "a"}, {"message": "b"}]}"#;
        let (runner, client) = runner_with(body);
        let mut out = Vec::new();

        let view = run_workflow(&runner, chat(), &mut out).unwrap();

        assert_eq!(view.status, WorkflowStatus::Success);
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
        let text = String::from_utf8(out).unwrap();
        let loading = text.find("[ Analyzing... ]").unwrap();
        let report = text.find("Overall Mood: 😞 Negative").unwrap();
        assert!(loading < report);
    }

    #[test]
    fn missing_file_never_reaches_client() {
        let (runner, client) = runner_with(b"{}");
        let mut out = Vec::new();

        let view = run_workflow(&runner, None, &mut out).unwrap();

        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
        let error = view.error.unwrap();
        assert_eq!(error.kind, ErrorKind::Validation);
        assert_eq!(error.message, NO_FILE_MESSAGE);
    }

    #[test]
    fn unusable_answer_ends_in_generic_error() {
        let (runner, _client) = runner_with(b"<html>");
        let mut out = Vec::new();

        let view = run_workflow(&runner, chat(), &mut out).unwrap();

        assert_eq!(view.status, WorkflowStatus::HardError);
        assert_eq!(view.error.unwrap().message, ANALYSIS_FAILED_MESSAGE);
        assert!(view.report.is_none());
    }
}
