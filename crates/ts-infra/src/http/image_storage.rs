//! Uploads picked images to the object storage bucket.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};
use ts_core::ports::{ImageUploadPort, UploadError};
use ts_core::AvatarSelection;
use uuid::Uuid;

use super::join_url;

const DEFAULT_EXTENSION: &str = "jpg";

pub struct HttpImageStorage {
    client: Client,
    base_url: String,
}

impl HttpImageStorage {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Object URL for a new image under `destination`.
    fn object_url(&self, destination: &str, extension: &str) -> String {
        let destination = destination.trim_matches('/');
        join_url(
            &self.base_url,
            &format!("{destination}/{}.{extension}", Uuid::new_v4()),
        )
    }
}

/// Filesystem path of a picked image; accepts plain paths and `file://` URIs.
fn local_path(image: &AvatarSelection) -> PathBuf {
    let raw = image.local_ref();
    PathBuf::from(raw.strip_prefix("file://").unwrap_or(raw))
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
}

fn content_type(extension: &str) -> &'static str {
    match extension {
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "heic" => "image/heic",
        _ => "image/jpeg",
    }
}

#[async_trait]
impl ImageUploadPort for HttpImageStorage {
    async fn upload_image(
        &self,
        image: &AvatarSelection,
        destination: &str,
    ) -> Result<String, UploadError> {
        let path = local_path(image);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| UploadError::Io(format!("{}: {e}", path.display())))?;

        let extension = extension_of(&path);
        let url = self.object_url(destination, &extension);
        debug!(%url, size = bytes.len(), "uploading image");

        let response = self
            .client
            .put(&url)
            .header(reqwest::header::CONTENT_TYPE, content_type(&extension))
            .body(bytes)
            .send()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UploadError::Rejected(format!("{status}: {body}")));
        }

        info!(%url, "image uploaded");
        Ok(url)
    }
}
