//! Each façade method reaches its one remote route with the caller's body,
//! query and per-call options intact.

use openai_facade::{BodyCall, FacadeConfig, IdentifierCall, OpenAIService, QueryCall, RequestOptions};
use openai_ox::{
    FileUpload,
    audio::TranslationCreateParams,
    batches::BatchCreateParams,
    embeddings::EmbeddingCreateParams,
    fine_tuning::{CursorParams, JobCreateParams},
    images::{ImageCreateVariationParams, ImageEditParams, ImageGenerateParams},
    moderations::ModerationCreateParams,
    uploads::UploadCreateParams,
};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

const TRACE: &str = "x-trace-id";

fn service_for(server: &MockServer) -> OpenAIService {
    OpenAIService::new(
        FacadeConfig::builder()
            .api_key("sk-test")
            .base_url(server.uri())
            .build(),
    )
    .expect("valid config")
}

fn traced(id: &str) -> RequestOptions {
    RequestOptions::default().header(TRACE, id)
}

/// A route that only answers when the call carried its own trace header.
fn route(verb: &str, route_path: &str, trace: &str) -> MockBuilder {
    Mock::given(method(verb))
        .and(path(route_path))
        .and(header(TRACE, trace))
}

fn images_json() -> Value {
    json!({"created": 1_700_000_000u64, "data": [{"url": "https://images.example/1.png"}]})
}

fn batch_json() -> Value {
    json!({
        "id": "batch_1",
        "object": "batch",
        "endpoint": "/v1/chat/completions",
        "input_file_id": "file-abc",
        "completion_window": "24h",
        "status": "validating",
        "created_at": 1_700_000_000u64
    })
}

fn job_json() -> Value {
    json!({
        "id": "ftjob-1",
        "object": "fine_tuning.job",
        "created_at": 1_700_000_000u64,
        "model": "gpt-4o-mini",
        "organization_id": "org-1",
        "status": "queued",
        "training_file": "file-abc"
    })
}

fn deleted_json(id: &str, object: &str) -> Value {
    json!({"id": id, "object": object, "deleted": true})
}

#[tokio::test]
async fn test_json_body_calls_forward_body_and_options() {
    let server = MockServer::start().await;

    let routes = [
        (
            "/embeddings",
            "embed",
            json!({"model": "text-embedding-3-small", "input": "hello"}),
            json!({
                "object": "list",
                "data": [{"object": "embedding", "embedding": [0.1, 0.2], "index": 0}],
                "model": "text-embedding-3-small",
                "usage": {"prompt_tokens": 1, "total_tokens": 1}
            }),
        ),
        (
            "/moderations",
            "moderate",
            json!({"input": "some text", "model": "omni-moderation-latest"}),
            json!({
                "id": "modr-1",
                "model": "omni-moderation-latest",
                "results": [{
                    "flagged": false,
                    "categories": {"hate": false},
                    "category_scores": {"hate": 0.01}
                }]
            }),
        ),
        (
            "/images/generations",
            "generate",
            json!({"prompt": "a cat", "n": 1, "size": "256x256"}),
            images_json(),
        ),
        (
            "/batches",
            "batch",
            json!({
                "input_file_id": "file-abc",
                "endpoint": "/v1/chat/completions",
                "completion_window": "24h"
            }),
            batch_json(),
        ),
        (
            "/fine_tuning/jobs",
            "tune",
            json!({"model": "gpt-4o-mini", "training_file": "file-abc"}),
            job_json(),
        ),
        (
            "/uploads",
            "upload",
            json!({
                "bytes": 2048,
                "filename": "train.jsonl",
                "mime_type": "text/jsonl",
                "purpose": "fine-tune"
            }),
            json!({
                "id": "upload_1",
                "object": "upload",
                "bytes": 2048,
                "created_at": 1_700_000_000u64,
                "filename": "train.jsonl",
                "purpose": "fine-tune",
                "status": "pending",
                "expires_at": 1_700_003_600u64
            }),
        ),
    ];
    for (route_path, trace, body, response) in routes {
        route("POST", route_path, trace)
            .and(body_json(body))
            .respond_with(ResponseTemplate::new(200).set_body_json(response))
            .expect(1)
            .mount(&server)
            .await;
    }

    let service = service_for(&server);

    let embedding = service
        .create_embedding(
            BodyCall::new(
                EmbeddingCreateParams::builder()
                    .model("text-embedding-3-small")
                    .input("hello")
                    .build(),
            )
            .with_options(traced("embed")),
        )
        .await
        .expect("embedding created");
    assert_eq!(embedding.data[0].embedding, vec![0.1, 0.2]);

    let moderation = service
        .create_moderation(
            BodyCall::new(
                ModerationCreateParams::builder()
                    .input("some text")
                    .model("omni-moderation-latest")
                    .build(),
            )
            .with_options(traced("moderate")),
        )
        .await
        .expect("moderation created");
    assert!(!moderation.results[0].flagged);

    let images = service
        .generate_image(
            BodyCall::new(
                ImageGenerateParams::builder()
                    .prompt("a cat")
                    .n(1)
                    .size("256x256")
                    .build(),
            )
            .with_options(traced("generate")),
        )
        .await
        .expect("image generated");
    assert_eq!(images.data[0].url.as_deref(), Some("https://images.example/1.png"));

    let batch = service
        .create_batch(
            BodyCall::new(
                BatchCreateParams::builder()
                    .input_file_id("file-abc")
                    .endpoint("/v1/chat/completions")
                    .build(),
            )
            .with_options(traced("batch")),
        )
        .await
        .expect("batch created");
    assert_eq!(batch.id, "batch_1");

    let job = service
        .create_fine_tuning_job(
            BodyCall::new(
                JobCreateParams::builder()
                    .model("gpt-4o-mini")
                    .training_file("file-abc")
                    .build(),
            )
            .with_options(traced("tune")),
        )
        .await
        .expect("job created");
    assert_eq!(job.id, "ftjob-1");

    let upload = service
        .create_upload(
            BodyCall::new(
                UploadCreateParams::builder()
                    .bytes(2048)
                    .filename("train.jsonl")
                    .mime_type("text/jsonl")
                    .purpose("fine-tune")
                    .build(),
            )
            .with_options(traced("upload")),
        )
        .await
        .expect("upload created");
    assert_eq!(upload.id, "upload_1");
}

#[tokio::test]
async fn test_multipart_body_calls_forward_parts_and_options() {
    let server = MockServer::start().await;

    route("POST", "/images/variations", "variation")
        .and(body_string_contains("name=\"image\""))
        .and(body_string_contains("filename=\"cat.png\""))
        .and(body_string_contains("name=\"n\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(images_json()))
        .expect(1)
        .mount(&server)
        .await;
    route("POST", "/images/edits", "edit")
        .and(body_string_contains("filename=\"cat.png\""))
        .and(body_string_contains("name=\"mask\""))
        .and(body_string_contains("filename=\"mask.png\""))
        .and(body_string_contains("add a hat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(images_json()))
        .expect(1)
        .mount(&server)
        .await;
    route("POST", "/audio/translations", "translate")
        .and(body_string_contains("whisper-1"))
        .and(body_string_contains("filename=\"speech.mp3\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"text": "Hello"})))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let image = || FileUpload::new("cat.png", b"fake-png".to_vec());

    let variation = service
        .create_image_variation(
            BodyCall::new(ImageCreateVariationParams::builder().image(image()).n(2).build())
                .with_options(traced("variation")),
        )
        .await
        .expect("variation created");
    assert_eq!(variation.data.len(), 1);

    let edit = service
        .edit_image(
            BodyCall::new(
                ImageEditParams::builder()
                    .image(image())
                    .mask(FileUpload::new("mask.png", b"fake-mask".to_vec()))
                    .prompt("add a hat")
                    .build(),
            )
            .with_options(traced("edit")),
        )
        .await
        .expect("image edited");
    assert_eq!(edit.created, 1_700_000_000);

    let translation = service
        .create_translation(
            BodyCall::new(
                TranslationCreateParams::builder()
                    .file(FileUpload::new("speech.mp3", b"fake-mp3".to_vec()))
                    .model("whisper-1")
                    .build(),
            )
            .with_options(traced("translate")),
        )
        .await
        .expect("translation created");
    assert_eq!(translation.text, "Hello");
}

#[tokio::test]
async fn test_edit_without_mask_sends_no_mask_part() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/images/edits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(images_json()))
        .expect(1)
        .mount(&server)
        .await;

    service_for(&server)
        .edit_image(BodyCall::new(
            ImageEditParams::builder()
                .image(FileUpload::new("cat.png", b"fake-png".to_vec()))
                .prompt("add a hat")
                .build(),
        ))
        .await
        .expect("image edited");

    let received = server.received_requests().await.unwrap_or_default();
    let body = String::from_utf8_lossy(&received[0].body);
    assert!(body.contains("name=\"image\""));
    assert!(!body.contains("name=\"mask\""));
}

#[tokio::test]
async fn test_query_calls_forward_query_and_options() {
    let server = MockServer::start().await;

    route("GET", "/fine_tuning/jobs", "jobs")
        .and(query_param("after", "ftjob-0"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [job_json()],
            "has_more": false
        })))
        .expect(1)
        .mount(&server)
        .await;
    route("GET", "/models", "models")
        .and(query_param("extra", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [{
                "id": "gpt-4o",
                "object": "model",
                "created": 1_700_000_000u64,
                "owned_by": "system"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);

    let jobs = service
        .list_fine_tuning_jobs(
            QueryCall::new(CursorParams::builder().after("ftjob-0").limit(5).build())
                .with_options(traced("jobs")),
        )
        .await
        .expect("jobs listed");
    assert_eq!(jobs.data[0].id, "ftjob-1");

    let models = service
        .list_models(QueryCall::new(()).with_options(traced("models").query_param("extra", "1")))
        .await
        .expect("models listed");
    assert_eq!(models.data[0].id, "gpt-4o");
}

#[tokio::test]
async fn test_delete_calls_forward_identifier_and_options() {
    let server = MockServer::start().await;

    let routes = [
        ("/files/file-abc", "delete-file", deleted_json("file-abc", "file")),
        ("/models/ft-model-1", "delete-model", deleted_json("ft-model-1", "model")),
        (
            "/assistants/asst_1",
            "delete-assistant",
            deleted_json("asst_1", "assistant.deleted"),
        ),
    ];
    for (route_path, trace, response) in routes {
        route("DELETE", route_path, trace)
            .respond_with(ResponseTemplate::new(200).set_body_json(response))
            .expect(1)
            .mount(&server)
            .await;
    }

    let service = service_for(&server);

    let file = service
        .delete_file(IdentifierCall::new("file-abc").with_options(traced("delete-file")))
        .await
        .expect("file deleted");
    assert!(file.deleted);

    let model = service
        .delete_model(("ft-model-1", traced("delete-model")))
        .await
        .expect("model deleted");
    assert_eq!(model.id, "ft-model-1");

    let assistant = service
        .delete_assistant(IdentifierCall::new("asst_1").with_options(traced("delete-assistant")))
        .await
        .expect("assistant deleted");
    assert!(assistant.deleted);

    let received = server.received_requests().await.unwrap_or_default();
    let beta: Vec<_> = received
        .iter()
        .filter(|request| request.headers.contains_key("openai-beta"))
        .map(|request| request.url.path().to_string())
        .collect();
    assert_eq!(beta, vec!["/assistants/asst_1"]);
}
