use std::time::Duration;

use facade_common::{
    CancellationToken, CommonRequestError, Endpoint, HttpMethod, MultipartForm, RequestBuilder,
    RequestConfig, RequestOptions,
};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn builder_for(server: &MockServer) -> RequestBuilder {
    let config = RequestConfig::new(server.uri())
        .with_bearer("sk-test")
        .with_header("x-default", "default")
        .with_user_agent("facade-common-tests/1.0");
    RequestBuilder::new(reqwest::Client::new(), config)
}

#[test]
fn test_endpoint_creation() {
    let endpoint = Endpoint::new("files", HttpMethod::Post);
    assert_eq!(endpoint.path, "files");
    assert!(endpoint.segments.is_empty());
    assert_eq!(endpoint.method, HttpMethod::Post);
    assert!(endpoint.extra_headers.is_none());
    assert!(endpoint.query_params.is_none());
}

#[test]
fn test_endpoint_with_header() {
    let endpoint = Endpoint::new("assistants", HttpMethod::Get).with_header("OpenAI-Beta", "assistants=v2");
    let headers = endpoint.extra_headers.expect("headers set");
    assert_eq!(headers["OpenAI-Beta"], "assistants=v2");
}

fn builder_at(base_url: &str) -> RequestBuilder {
    RequestBuilder::new(reqwest::Client::new(), RequestConfig::new(base_url))
}

#[test]
fn test_segments_are_encoded_into_one_path_segment() {
    let builder = builder_at("https://api.openai.com/v1");

    let url = builder
        .endpoint_url(&Endpoint::new("files", HttpMethod::Delete).with_segment("../models/gpt-4o"))
        .expect("url built");
    assert_eq!(url.as_str(), "https://api.openai.com/v1/files/..%2Fmodels%2Fgpt-4o");

    let url = builder
        .endpoint_url(&Endpoint::new("files", HttpMethod::Get).with_segment("file-1?purpose=x#frag"))
        .expect("url built");
    assert_eq!(url.path(), "/v1/files/file-1%3Fpurpose=x%23frag");
    assert_eq!(url.query(), None);
    assert_eq!(url.fragment(), None);
}

#[test]
fn test_static_path_and_trailing_slash_base() {
    let endpoint = Endpoint::new("fine_tuning/jobs", HttpMethod::Post)
        .with_segment("ftjob-1")
        .with_segment("cancel");

    let url = builder_at("http://localhost:8080/").endpoint_url(&endpoint).expect("url built");
    assert_eq!(url.as_str(), "http://localhost:8080/fine_tuning/jobs/ftjob-1/cancel");

    let url = builder_at("https://proxy.example/openai/v1/").endpoint_url(&endpoint).expect("url built");
    assert_eq!(url.path(), "/openai/v1/fine_tuning/jobs/ftjob-1/cancel");
}

#[test]
fn test_dot_and_empty_segments_are_rejected() {
    let builder = builder_at("https://api.openai.com/v1");
    for segment in ["", ".", ".."] {
        let err = builder
            .endpoint_url(&Endpoint::new("files", HttpMethod::Delete).with_segment(segment))
            .expect_err("segment rejected");
        assert!(
            matches!(err, CommonRequestError::InvalidPathSegment(ref s) if s == segment),
            "{err:?}"
        );
    }
}

#[test]
fn test_unparseable_base_url_is_reported() {
    let err = builder_at("not a url")
        .endpoint_url(&Endpoint::new("models", HttpMethod::Get))
        .expect_err("bad base url");
    assert!(matches!(err, CommonRequestError::UrlBuild(_)));
}

#[test]
fn test_request_config_builder() {
    let config = RequestConfig::new("https://api.example.com")
        .with_bearer("token123")
        .with_header("OpenAI-Organization", "org-1")
        .with_user_agent("test-client/1.0");

    assert_eq!(config.base_url, "https://api.example.com");
    assert_eq!(config.bearer_token.as_deref(), Some("token123"));
    assert_eq!(config.default_headers.len(), 1);
    assert_eq!(config.user_agent.as_deref(), Some("test-client/1.0"));
}

#[test]
fn test_multipart_rejects_bad_mime() {
    let res = MultipartForm::new().file_from_bytes_with_mime("file", "a.txt", vec![1], "not a mime");
    assert!(matches!(res, Err(CommonRequestError::InvalidMimeType(_))));
}

#[tokio::test]
async fn test_json_body_and_auth_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/embeddings"))
        .and(header("authorization", "Bearer sk-test"))
        .and(header("user-agent", "facade-common-tests/1.0"))
        .and(body_json(json!({"model": "text-embedding-3-small", "input": "hi"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let body = json!({"model": "text-embedding-3-small", "input": "hi"});
    let res: Value = builder_for(&server)
        .request_json(&Endpoint::new("embeddings", HttpMethod::Post), Some(&body), None)
        .await
        .expect("request succeeds");

    assert_eq!(res, json!({"ok": true}));
}

#[tokio::test]
async fn test_options_override_headers_and_extend_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/batches"))
        .and(query_param("limit", "10"))
        .and(query_param("trace", "1"))
        .and(header("x-default", "overridden"))
        .and(header("idempotency-key", "key-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let options = RequestOptions::builder()
        .idempotency_key("key-1")
        .timeout(Duration::from_secs(5))
        .build()
        .header("x-default", "overridden")
        .query_param("trace", "1");

    let endpoint = Endpoint::new("batches", HttpMethod::Get)
        .with_query(&json!({"limit": 10, "after": null}))
        .expect("query flattens");

    let _: Value = builder_for(&server)
        .request(&endpoint, Some(&options))
        .await
        .expect("request succeeds");
}

#[tokio::test]
async fn test_error_status_is_parsed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/file-missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"message": "No such File object: file-missing", "type": "invalid_request_error"}
        })))
        .mount(&server)
        .await;

    let err = builder_for(&server)
        .request::<Value>(&Endpoint::new("files/file-missing", HttpMethod::Get), None)
        .await
        .expect_err("404 surfaces as error");

    match err {
        CommonRequestError::Api { status, message, .. } => {
            assert_eq!(status, 404);
            assert!(message.contains("file-missing"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_timeout_option_applies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": []}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let options = RequestOptions::with_timeout(Duration::from_millis(50));
    let err = builder_for(&server)
        .request::<Value>(&Endpoint::new("models", HttpMethod::Get), Some(&options))
        .await
        .expect_err("times out");

    match err {
        CommonRequestError::Http(e) => assert!(e.is_timeout()),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_cancellation_token_aborts_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": []}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let token = CancellationToken::new();
    let options = RequestOptions::builder().cancellation(token.clone()).build();
    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        token.cancel();
    });

    let err = builder_for(&server)
        .request::<Value>(&Endpoint::new("models", HttpMethod::Get), Some(&options))
        .await
        .expect_err("cancelled");
    canceller.await.expect("canceller finished");

    assert!(matches!(err, CommonRequestError::Cancelled));
}

#[tokio::test]
async fn test_request_bytes_returns_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/file-1/content"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"line-1\nline-2".to_vec()))
        .mount(&server)
        .await;

    let bytes = builder_for(&server)
        .request_bytes(&Endpoint::new("files/file-1/content", HttpMethod::Get), None::<&()>, None)
        .await
        .expect("download succeeds");

    assert_eq!(&bytes[..], b"line-1\nline-2");
}
