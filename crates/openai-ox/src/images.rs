use bon::Builder;
use facade_common::{Endpoint, HttpMethod, MultipartForm, RequestOptions};
use serde::{Deserialize, Serialize};

use crate::{OpenAI, OpenAIRequestError, shared::FileUpload};

const GENERATIONS_URL: &str = "images/generations";
const VARIATIONS_URL: &str = "images/variations";
const EDITS_URL: &str = "images/edits";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, strum::AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ImageResponseFormat {
    Url,
    B64Json,
}

/// Request body for `POST /images/generations`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Builder)]
pub struct ImageGenerateParams {
    #[builder(into)]
    pub prompt: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub model: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub quality: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ImageResponseFormat>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub size: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub style: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub user: Option<String>,
}

/// Request body for `POST /images/variations`, sent as multipart form data.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct ImageCreateVariationParams {
    pub image: FileUpload,
    #[builder(into)]
    pub model: Option<String>,
    pub n: Option<u32>,
    pub response_format: Option<ImageResponseFormat>,
    #[builder(into)]
    pub size: Option<String>,
    #[builder(into)]
    pub user: Option<String>,
}

/// Request body for `POST /images/edits`, sent as multipart form data.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct ImageEditParams {
    pub image: FileUpload,
    #[builder(into)]
    pub prompt: String,
    pub mask: Option<FileUpload>,
    #[builder(into)]
    pub model: Option<String>,
    pub n: Option<u32>,
    pub response_format: Option<ImageResponseFormat>,
    #[builder(into)]
    pub size: Option<String>,
    #[builder(into)]
    pub user: Option<String>,
}

/// Response from every images endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImagesResponse {
    pub created: u64,
    pub data: Vec<Image>,
}

/// Image data item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Image {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b64_json: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revised_prompt: Option<String>,
}

/// Handler for the images resource, created via `openai.images()`.
#[derive(Debug, Clone, Copy)]
pub struct Images<'c> {
    client: &'c OpenAI,
}

impl<'c> Images<'c> {
    pub(crate) fn new(client: &'c OpenAI) -> Self {
        Self { client }
    }

    pub async fn generate(
        &self,
        body: &ImageGenerateParams,
        options: Option<&RequestOptions>,
    ) -> Result<ImagesResponse, OpenAIRequestError> {
        let endpoint = Endpoint::new(GENERATIONS_URL, HttpMethod::Post);
        self.client.api_request_with_body(endpoint, body, options).await
    }

    pub async fn create_variation(
        &self,
        body: &ImageCreateVariationParams,
        options: Option<&RequestOptions>,
    ) -> Result<ImagesResponse, OpenAIRequestError> {
        let form = body
            .image
            .attach(MultipartForm::new(), "image")?
            .text_opt("model", body.model.as_deref())
            .text_opt("n", body.n)
            .text_opt("response_format", body.response_format.as_ref().map(AsRef::<str>::as_ref))
            .text_opt("size", body.size.as_deref())
            .text_opt("user", body.user.as_deref());

        let endpoint = Endpoint::new(VARIATIONS_URL, HttpMethod::Post);
        self.client
            .api_multipart(endpoint, form.build(), options)
            .await
    }

    pub async fn edit(
        &self,
        body: &ImageEditParams,
        options: Option<&RequestOptions>,
    ) -> Result<ImagesResponse, OpenAIRequestError> {
        let mut form = body
            .image
            .attach(MultipartForm::new(), "image")?
            .text("prompt", &body.prompt);
        if let Some(ref mask) = body.mask {
            form = mask.attach(form, "mask")?;
        }
        let form = form
            .text_opt("model", body.model.as_deref())
            .text_opt("n", body.n)
            .text_opt("response_format", body.response_format.as_ref().map(AsRef::<str>::as_ref))
            .text_opt("size", body.size.as_deref())
            .text_opt("user", body.user.as_deref());

        let endpoint = Endpoint::new(EDITS_URL, HttpMethod::Post);
        self.client
            .api_multipart(endpoint, form.build(), options)
            .await
    }
}
