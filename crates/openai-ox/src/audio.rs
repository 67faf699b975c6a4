use bon::Builder;
use facade_common::{Endpoint, HttpMethod, MultipartForm, RequestOptions};
use serde::{Deserialize, Serialize};

use crate::{OpenAI, OpenAIRequestError, shared::FileUpload};

const TRANSCRIPTIONS_URL: &str = "audio/transcriptions";
const TRANSLATIONS_URL: &str = "audio/translations";
const SPEECH_URL: &str = "audio/speech";

/// Output format for transcriptions and translations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, strum::AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AudioResponseFormat {
    Json,
    Text,
    Srt,
    VerboseJson,
    Vtt,
}

impl AudioResponseFormat {
    /// Whether the API answers with a JSON document for this format.
    pub fn is_json(self) -> bool {
        matches!(self, Self::Json | Self::VerboseJson)
    }
}

/// Request body for `POST /audio/transcriptions`, sent as multipart form data.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct TranscriptionCreateParams {
    pub file: FileUpload,
    #[builder(into)]
    pub model: String,
    #[builder(into)]
    pub language: Option<String>,
    #[builder(into)]
    pub prompt: Option<String>,
    pub response_format: Option<AudioResponseFormat>,
    pub temperature: Option<f32>,
}

/// Request body for `POST /audio/translations`, sent as multipart form data.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct TranslationCreateParams {
    pub file: FileUpload,
    #[builder(into)]
    pub model: String,
    #[builder(into)]
    pub prompt: Option<String>,
    pub response_format: Option<AudioResponseFormat>,
    pub temperature: Option<f32>,
}

/// Request body for `POST /audio/speech`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Builder)]
pub struct SpeechCreateParams {
    #[builder(into)]
    pub model: String,

    #[builder(into)]
    pub input: String,

    #[builder(into)]
    pub voice: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub instructions: Option<String>,

    /// `mp3`, `opus`, `aac`, `flac`, `wav` or `pcm`
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub response_format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
}

/// Transcription or translation result.
///
/// For the `text`, `srt` and `vtt` formats only `text` is populated and holds
/// the raw response body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Transcription {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<TranscriptionSegment>>,
}

/// Audio segment (for detailed transcription)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranscriptionSegment {
    pub id: u32,
    pub seek: u32,
    pub start: f64,
    pub end: f64,
    pub text: String,
    pub tokens: Vec<u32>,
    pub temperature: f64,
    pub avg_logprob: f64,
    pub compression_ratio: f64,
    pub no_speech_prob: f64,
}

/// Handler for the audio resource, created via `openai.audio()`.
#[derive(Debug, Clone, Copy)]
pub struct Audio<'c> {
    client: &'c OpenAI,
}

impl<'c> Audio<'c> {
    pub(crate) fn new(client: &'c OpenAI) -> Self {
        Self { client }
    }

    pub fn transcriptions(&self) -> Transcriptions<'c> {
        Transcriptions {
            client: self.client,
        }
    }

    pub fn translations(&self) -> Translations<'c> {
        Translations {
            client: self.client,
        }
    }

    pub fn speech(&self) -> Speech<'c> {
        Speech {
            client: self.client,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Transcriptions<'c> {
    client: &'c OpenAI,
}

impl Transcriptions<'_> {
    pub async fn create(
        &self,
        body: &TranscriptionCreateParams,
        options: Option<&RequestOptions>,
    ) -> Result<Transcription, OpenAIRequestError> {
        let form = body
            .file
            .attach(MultipartForm::new().text("model", &body.model), "file")?
            .text_opt("language", body.language.as_deref())
            .text_opt("prompt", body.prompt.as_deref())
            .text_opt("response_format", body.response_format.as_ref().map(AsRef::<str>::as_ref))
            .text_opt("temperature", body.temperature);

        let endpoint = Endpoint::new(TRANSCRIPTIONS_URL, HttpMethod::Post);
        send_audio(self.client, endpoint, form, body.response_format, options).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Translations<'c> {
    client: &'c OpenAI,
}

impl Translations<'_> {
    pub async fn create(
        &self,
        body: &TranslationCreateParams,
        options: Option<&RequestOptions>,
    ) -> Result<Transcription, OpenAIRequestError> {
        let form = body
            .file
            .attach(MultipartForm::new().text("model", &body.model), "file")?
            .text_opt("prompt", body.prompt.as_deref())
            .text_opt("response_format", body.response_format.as_ref().map(AsRef::<str>::as_ref))
            .text_opt("temperature", body.temperature);

        let endpoint = Endpoint::new(TRANSLATIONS_URL, HttpMethod::Post);
        send_audio(self.client, endpoint, form, body.response_format, options).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Speech<'c> {
    client: &'c OpenAI,
}

impl Speech<'_> {
    /// Synthesize speech, returning the encoded audio bytes.
    pub async fn create(
        &self,
        body: &SpeechCreateParams,
        options: Option<&RequestOptions>,
    ) -> Result<bytes::Bytes, OpenAIRequestError> {
        let endpoint = Endpoint::new(SPEECH_URL, HttpMethod::Post);
        self.client
            .api_request_bytes(endpoint, Some(body), options)
            .await
    }
}

async fn send_audio(
    client: &OpenAI,
    endpoint: Endpoint,
    form: MultipartForm,
    format: Option<AudioResponseFormat>,
    options: Option<&RequestOptions>,
) -> Result<Transcription, OpenAIRequestError> {
    let raw = client
        .api_multipart_text(endpoint, form.build(), options)
        .await?;

    // JSON is the server default when no format is given
    if format.is_none_or(AudioResponseFormat::is_json) {
        Ok(serde_json::from_str(&raw)?)
    } else {
        Ok(Transcription {
            text: raw,
            ..Transcription::default()
        })
    }
}
