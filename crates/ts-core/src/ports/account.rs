use async_trait::async_trait;

use crate::ids::AccountId;
use crate::ports::errors::RequestError;
use crate::registration::{Account, NewAccount};

/// Account creation on the backend.
#[async_trait]
pub trait AccountPort: Send + Sync {
    async fn create_account(&self, request: NewAccount) -> Result<Account, RequestError>;
}

/// Links an uploaded image to a user profile.
#[async_trait]
pub trait UserProfileImagePort: Send + Sync {
    async fn attach_profile_image(
        &self,
        account_id: &AccountId,
        image_url: &str,
    ) -> Result<(), RequestError>;
}
