use std::time::Duration;

use openai_ox::{
    OpenAI, OpenAIRequestError,
    files::{FileStatus, WaitForProcessing},
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn file_with_status(status: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "id": "file-1",
        "object": "file",
        "bytes": 64,
        "created_at": 1_700_000_000u64,
        "filename": "train.jsonl",
        "purpose": "fine-tune",
        "status": status
    }))
}

fn fast_polling(max_wait: Duration) -> WaitForProcessing {
    WaitForProcessing::builder()
        .poll_interval(Duration::from_millis(10))
        .max_wait(max_wait)
        .build()
}

#[test]
fn test_default_polling_knobs() {
    let wait = WaitForProcessing::default();
    assert_eq!(wait.poll_interval, Duration::from_secs(5));
    assert_eq!(wait.max_wait, Duration::from_secs(30 * 60));
}

#[tokio::test]
async fn test_polls_until_processed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/file-1"))
        .respond_with(file_with_status("uploaded"))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/files/file-1"))
        .respond_with(file_with_status("processed"))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAI::builder()
        .api_key("sk-test")
        .base_url(server.uri())
        .build();

    let file = client
        .files()
        .wait_for_processing("file-1", fast_polling(Duration::from_secs(5)))
        .await
        .expect("file becomes processed");

    assert_eq!(file.status, Some(FileStatus::Processed));
}

#[tokio::test]
async fn test_error_status_is_terminal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/file-1"))
        .respond_with(file_with_status("error"))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAI::builder()
        .api_key("sk-test")
        .base_url(server.uri())
        .build();

    let file = client
        .files()
        .wait_for_processing("file-1", fast_polling(Duration::from_secs(5)))
        .await
        .expect("terminal status returns the file");

    assert_eq!(file.status, Some(FileStatus::Error));
}

#[tokio::test]
async fn test_gives_up_after_max_wait() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/file-1"))
        .respond_with(file_with_status("uploaded"))
        .mount(&server)
        .await;

    let client = OpenAI::builder()
        .api_key("sk-test")
        .base_url(server.uri())
        .build();

    let err = client
        .files()
        .wait_for_processing("file-1", fast_polling(Duration::from_millis(50)))
        .await
        .expect_err("never processed");

    match err {
        OpenAIRequestError::ProcessingTimeout { file_id, waited } => {
            assert_eq!(file_id, "file-1");
            assert!(waited >= Duration::from_millis(50));
        }
        other => panic!("expected ProcessingTimeout, got {other:?}"),
    }
}
