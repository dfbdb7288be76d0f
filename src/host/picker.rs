use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;
use ts_core::ports::ImagePickerPort;
use ts_core::AvatarSelection;

/// "Picks" the image given on the command line; no path means cancelled.
#[derive(Debug, Default, Clone)]
pub struct PathImagePicker {
    path: Option<PathBuf>,
}

impl PathImagePicker {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

#[async_trait]
impl ImagePickerPort for PathImagePicker {
    async fn pick_single_image(&self) -> Option<AvatarSelection> {
        let path = self.path.as_ref()?;
        debug!(path = %path.display(), "image picked from command line");
        Some(AvatarSelection::new(path.display().to_string()))
    }
}
