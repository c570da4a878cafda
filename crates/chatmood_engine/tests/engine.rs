use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chatmood_core::{AnalysisOutcome, AnalysisRequest};
use chatmood_engine::{AnalysisClient, EngineEvent, EngineHandle};
use pretty_assertions::assert_eq;

const WAIT: Duration = Duration::from_secs(5);

/// Answers with a soft error naming the file; `slow*` files take a long time.
#[derive(Default)]
struct ScriptedClient {
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl AnalysisClient for ScriptedClient {
    async fn analyze(&self, request: &AnalysisRequest) -> AnalysisOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if request.filename.starts_with("slow") {
            tokio::time::sleep(Duration::from_secs(30)).await;
        }
        AnalysisOutcome::SoftError(format!("done {}", request.filename))
    }
}

fn request(name: &str) -> AnalysisRequest {
    AnalysisRequest::new(name, b"hello".to_vec())
}

#[test]
fn settled_outcome_is_reported_with_attempt() {
    let client = Arc::new(ScriptedClient::default());
    let engine = EngineHandle::new(client.clone()).unwrap();

    engine.analyze(1, request("chat.txt"));

    assert_eq!(
        engine.recv_timeout(WAIT),
        Some(EngineEvent::AnalysisSettled {
            attempt: 1,
            outcome: AnalysisOutcome::SoftError("done chat.txt".to_string()),
        })
    );
    assert_eq!(client.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn cancel_stops_running_attempt() {
    let engine = EngineHandle::new(Arc::new(ScriptedClient::default())).unwrap();

    engine.analyze(3, request("slow.txt"));
    engine.cancel(3);

    assert_eq!(
        engine.recv_timeout(WAIT),
        Some(EngineEvent::AnalysisCancelled { attempt: 3 })
    );
}

#[test]
fn cancel_for_other_attempt_is_ignored() {
    let engine = EngineHandle::new(Arc::new(ScriptedClient::default())).unwrap();

    engine.analyze(4, request("chat.txt"));
    engine.cancel(99);

    let event = engine.recv_timeout(WAIT).expect("event");
    assert!(matches!(event, EngineEvent::AnalysisSettled { attempt: 4, .. }));
}

#[test]
fn new_attempt_supersedes_outstanding_one() {
    let engine = EngineHandle::new(Arc::new(ScriptedClient::default())).unwrap();

    engine.analyze(1, request("slow.txt"));
    engine.analyze(2, request("chat.txt"));

    let mut events = vec![
        engine.recv_timeout(WAIT).expect("first event"),
        engine.recv_timeout(WAIT).expect("second event"),
    ];
    events.sort_by_key(EngineEvent::attempt);

    assert_eq!(
        events,
        vec![
            EngineEvent::AnalysisCancelled { attempt: 1 },
            EngineEvent::AnalysisSettled {
                attempt: 2,
                outcome: AnalysisOutcome::SoftError("done chat.txt".to_string()),
            },
        ]
    );
    assert_eq!(engine.try_recv(), None);
}
