//! Optional profile-image step shared by account and school creation.
//!
//! Runs only after the owning record exists. Upload and attach failures are
//! logged and reported in the returned [`AvatarOutcome`]; they never fail the
//! caller and never roll back the record.

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, warn};
use ts_core::ports::{ImageUploadPort, RequestError};
use ts_core::{AvatarOutcome, AvatarSelection, ImageDestination};

pub struct UploadProfileImage {
    uploads: Arc<dyn ImageUploadPort>,
}

impl UploadProfileImage {
    pub fn new(uploads: Arc<dyn ImageUploadPort>) -> Self {
        Self { uploads }
    }

    /// Uploads `avatar` under `destination`, then hands the URL to `attach`.
    ///
    /// `attach` is not called when there is no avatar or the upload failed.
    pub async fn execute<F, Fut>(
        &self,
        avatar: Option<&AvatarSelection>,
        destination: ImageDestination,
        attach: F,
    ) -> AvatarOutcome
    where
        F: FnOnce(String) -> Fut + Send,
        Fut: Future<Output = Result<(), RequestError>> + Send,
    {
        let Some(avatar) = avatar else {
            debug!("no profile image selected, skipping upload");
            return AvatarOutcome::Skipped;
        };

        let path = destination.path();
        let url = match self.uploads.upload_image(avatar, &path).await {
            Ok(url) => url,
            Err(err) => {
                warn!(destination = %path, error = %err, "profile image upload failed");
                return AvatarOutcome::UploadFailed {
                    reason: err.to_string(),
                };
            }
        };

        match attach(url.clone()).await {
            Ok(()) => {
                debug!(destination = %path, url = %url, "profile image attached");
                AvatarOutcome::Attached { url }
            }
            Err(err) => {
                warn!(destination = %path, url = %url, error = %err, "profile image attach failed");
                AvatarOutcome::AttachFailed {
                    url,
                    reason: err.to_string(),
                }
            }
        }
    }
}
