//! Profile images: local selections and the result of uploading them.

use serde::{Deserialize, Serialize};

use crate::ids::{AccountId, SchoolId};

/// A locally referenced image picked by the user, not yet uploaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvatarSelection(String);

impl AvatarSelection {
    pub fn new(local_ref: impl Into<String>) -> Self {
        Self(local_ref.into())
    }

    /// Local URI or filesystem path of the picked image.
    pub fn local_ref(&self) -> &str {
        &self.0
    }
}

/// Remote folder an uploaded profile image is stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageDestination {
    User(AccountId),
    School(SchoolId),
}

impl ImageDestination {
    pub fn path(&self) -> String {
        match self {
            ImageDestination::User(id) => format!("users/{id}"),
            ImageDestination::School(id) => format!("schools/{id}"),
        }
    }
}

/// What happened to the optional profile image after the owning record was
/// created. Failures here never undo the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AvatarOutcome {
    /// No image was selected.
    Skipped,
    Attached { url: String },
    UploadFailed { reason: String },
    AttachFailed { url: String, reason: String },
}

impl AvatarOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            AvatarOutcome::UploadFailed { .. } | AvatarOutcome::AttachFailed { .. }
        )
    }
}
