//! Image uploads to the object storage bucket backing logos and site photos.

use crate::core::{EsgClient, EsgError, net, status_message};
use chrono::Utc;
use reqwest::header::CONTENT_TYPE;
use std::path::Path;

/// An image picked in a form, ready to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Reads a file from disk, guessing its content type from the extension.
    ///
    /// # Errors
    ///
    /// Returns [`EsgError::Io`] if the file cannot be read.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, EsgError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content_type = content_type_for(path).to_string();
        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }

    /// Only non-empty `image/*` files with a name are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`EsgError::Validation`] describing the problem.
    pub fn validate(&self) -> Result<(), EsgError> {
        if !self
            .content_type
            .trim()
            .to_ascii_lowercase()
            .starts_with("image/")
        {
            return Err(EsgError::Validation(format!(
                "Only image files can be uploaded (got {}).",
                self.content_type
            )));
        }
        if self.file_name.trim().is_empty() {
            return Err(EsgError::Validation("The image has no file name.".into()));
        }
        if self.bytes.is_empty() {
            return Err(EsgError::Validation("The image file is empty.".into()));
        }
        Ok(())
    }

    /// Storage key: upload time in epoch milliseconds, then the original name.
    pub(crate) fn object_key(&self, epoch_millis: i64) -> String {
        format!("{epoch_millis}_{}", self.file_name.trim())
    }
}

fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "avif" => "image/avif",
        _ => "application/octet-stream",
    }
}

impl EsgClient {
    /// Uploads an image to the configured bucket and returns its public URL.
    ///
    /// Uploads are sent once; a failure is reported, not retried.
    ///
    /// # Errors
    ///
    /// Returns [`EsgError::Validation`] for non-image input and [`EsgError::Storage`]
    /// with the provider's message when the bucket rejects the upload.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, upload), err, fields(file = %upload.file_name)))]
    pub async fn upload_image(&self, upload: ImageUpload) -> Result<String, EsgError> {
        upload.validate()?;

        let key = upload.object_key(Utc::now().timestamp_millis());
        let bucket = self.storage_bucket();
        let target = Self::join_segments(self.storage_url(), &["object", bucket, key.as_str()])?;
        let public = Self::join_segments(self.storage_url(), &["object", "public", bucket, key.as_str()])?;

        let resp = self
            .post(target)
            .header(CONTENT_TYPE, upload.content_type.trim())
            .body(upload.bytes)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = net::get_text(resp, "storage_upload").await.unwrap_or_default();
            let message = net::error_message(&body).unwrap_or_else(|| {
                format!("{} ({})", status_message(status.as_u16()), status.as_u16())
            });
            return Err(EsgError::Storage(message));
        }

        Ok(public.to_string())
    }
}
