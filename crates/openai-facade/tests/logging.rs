//! Log records emitted around dispatched calls.
//!
//! The logger is process-global, so this file holds a single test.

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use openai_facade::{BodyCall, FacadeConfig, IdentifierCall, OpenAIService, dispatch::LOG_TARGET};
use openai_ox::completions::CompletionCreateParams;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Capture {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for Capture {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target() == LOG_TARGET
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut records) = self.records.lock() {
                records.push((record.level(), record.args().to_string()));
            }
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture {
    records: Mutex::new(Vec::new()),
};

fn drain() -> Vec<(Level, String)> {
    CAPTURE
        .records
        .lock()
        .map(|mut records| std::mem::take(&mut *records))
        .unwrap_or_default()
}

#[tokio::test]
async fn test_dispatch_log_records() {
    log::set_logger(&CAPTURE).expect("logger installed once");
    log::set_max_level(LevelFilter::Trace);

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "cmpl-1",
            "object": "text_completion",
            "created": 1_700_000_000u64,
            "model": "gpt-3.5-turbo-instruct",
            "choices": [{"text": "ok", "index": 0, "finish_reason": "stop"}]
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": {"message": "The server had an error", "type": "server_error"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/models/gpt-4o"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "gpt-4o",
            "object": "model",
            "created": 1_700_000_000u64,
            "owned_by": "system"
        })))
        .mount(&server)
        .await;

    let service = OpenAIService::new(
        FacadeConfig::builder()
            .api_key("sk-secret-logging")
            .base_url(server.uri())
            .build(),
    )
    .expect("valid config");
    let params = CompletionCreateParams::builder()
        .model("gpt-3.5-turbo-instruct")
        .prompt("secret prompt text")
        .build();
    drain();
    let mut seen: Vec<String> = Vec::new();

    // Enveloped success: attempt and outcome.
    service
        .create_completion(BodyCall::new(params.clone()))
        .await
        .expect("first completion succeeds");
    let records = drain();
    seen.extend(records.iter().map(|(_, message)| message.clone()));
    assert_eq!(records.len(), 2, "{records:?}");
    assert!(records.iter().all(|(level, _)| *level == Level::Info));
    assert!(records[0].1.contains("completions.create"));
    assert!(records[1].1.contains("Completion created successfully"));

    // Enveloped failure: the attempt, then exactly one error carrying the message.
    service
        .create_completion(BodyCall::new(params))
        .await
        .expect_err("second completion fails");
    let records = drain();
    seen.extend(records.iter().map(|(_, message)| message.clone()));
    let errors: Vec<_> = records.iter().filter(|(level, _)| *level == Level::Error).collect();
    assert_eq!(errors.len(), 1, "{records:?}");
    assert!(errors[0].1.contains("The server had an error"));
    assert_eq!(records.len(), 2);

    // Plain dispatch logs at debug.
    service
        .retrieve_model(IdentifierCall::new("gpt-4o"))
        .await
        .expect("model retrieved");
    let records = drain();
    seen.extend(records.iter().map(|(_, message)| message.clone()));
    assert_eq!(records.len(), 2, "{records:?}");
    assert!(records.iter().all(|(level, _)| *level == Level::Debug));
    assert!(records[0].1.contains("models.retrieve (identifier call)"));

    // Neither credentials nor payloads end up in the log.
    assert_eq!(seen.len(), 6);
    for message in &seen {
        assert!(!message.contains("sk-secret-logging"));
        assert!(!message.contains("secret prompt text"));
    }
}
