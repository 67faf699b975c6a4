use serde::{Deserialize, Serialize};

use facade_common::{CommonRequestError, MultipartForm};

/// A cursor page as returned by every list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct List<T> {
    #[serde(default = "list_object")]
    pub object: String,
    pub data: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_id: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

fn list_object() -> String {
    "list".to_string()
}

impl<T> List<T> {
    /// Cursor to pass as `after` for the next page, if there is one.
    pub fn next_cursor(&self) -> Option<&str> {
        if self.has_more {
            self.last_id.as_deref()
        } else {
            None
        }
    }
}

/// Confirmation returned by delete endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deleted {
    pub id: String,
    pub object: String,
    pub deleted: bool,
}

/// Sort order for list endpoints that support it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Asc,
    Desc,
}

/// Raw file content for multipart uploads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    /// The name the file is uploaded under.
    pub filename: String,
    /// The raw byte content of the file.
    pub content: Vec<u8>,
    /// Explicit MIME type; guessed from the filename when absent.
    pub mime_type: Option<String>,
}

impl FileUpload {
    pub fn new(filename: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
            mime_type: None,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// The explicit MIME type, or a guess from the file extension.
    pub fn resolved_mime_type(&self) -> String {
        self.mime_type.clone().unwrap_or_else(|| {
            mime_guess::from_path(&self.filename)
                .first_or_octet_stream()
                .essence_str()
                .to_string()
        })
    }

    pub(crate) fn attach(
        &self,
        form: MultipartForm,
        field: &str,
    ) -> Result<MultipartForm, CommonRequestError> {
        form.file_from_bytes_with_mime(
            field.to_string(),
            self.filename.clone(),
            self.content.clone(),
            &self.resolved_mime_type(),
        )
    }
}
