use async_trait::async_trait;

use crate::media::AvatarSelection;
use crate::ports::errors::UploadError;

/// Remote image storage.
#[async_trait]
pub trait ImageUploadPort: Send + Sync {
    /// Uploads the selected image under `destination` (e.g. `users/{id}`)
    /// and returns its public URL.
    async fn upload_image(
        &self,
        image: &AvatarSelection,
        destination: &str,
    ) -> Result<String, UploadError>;
}

/// User-driven single image picker. `None` when the user cancels.
#[async_trait]
pub trait ImagePickerPort: Send + Sync {
    async fn pick_single_image(&self) -> Option<AvatarSelection>;
}
