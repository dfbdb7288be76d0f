//! Submission coordinator for the registration wizard.
//!
//! Creates the account, then runs the optional profile-image step. Only the
//! account creation can fail the submission.

use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info, info_span, Instrument};
use ts_core::ports::{AccountPort, ImageUploadPort, RequestError, UserProfileImagePort};
use ts_core::registration::{Account, NewAccount, RegistrationDraft, Role};
use ts_core::{AvatarOutcome, AvatarSelection, ImageDestination};

use crate::usecases::profile_image::UploadProfileImage;

#[derive(Debug, thiserror::Error)]
pub enum SubmitRegistrationError {
    #[error("create account failed: {0}")]
    CreateAccount(#[from] RequestError),
}

/// Result of a successful submission. The avatar step may still have failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionOutcome {
    pub account: Account,
    pub avatar: AvatarOutcome,
}

pub struct SubmitRegistration {
    accounts: Arc<dyn AccountPort>,
    profile_images: Arc<dyn UserProfileImagePort>,
    upload_profile_image: UploadProfileImage,
}

impl SubmitRegistration {
    pub fn new(
        accounts: Arc<dyn AccountPort>,
        uploads: Arc<dyn ImageUploadPort>,
        profile_images: Arc<dyn UserProfileImagePort>,
    ) -> Self {
        Self {
            accounts,
            profile_images,
            upload_profile_image: UploadProfileImage::new(uploads),
        }
    }

    pub async fn execute(
        &self,
        draft: &RegistrationDraft,
        role: Role,
        avatar: Option<&AvatarSelection>,
    ) -> Result<SubmissionOutcome, SubmitRegistrationError> {
        let span = info_span!("usecase.submit_registration.execute", role = %role);
        async {
            let request = NewAccount::from_draft(draft, role);
            let account = self.accounts.create_account(request).await.map_err(|err| {
                error!(error = %err, "account creation failed");
                err
            })?;
            info!(account_id = %account.id, "account created");

            let profile_images = Arc::clone(&self.profile_images);
            let account_id = account.id.clone();
            let avatar = self
                .upload_profile_image
                .execute(
                    avatar,
                    ImageDestination::User(account.id.clone()),
                    move |url| async move {
                        profile_images
                            .attach_profile_image(&account_id, &url)
                            .await
                    },
                )
                .await;

            Ok(SubmissionOutcome { account, avatar })
        }
        .instrument(span)
        .await
    }
}
