use async_trait::async_trait;

use crate::session::SessionUser;

/// Current authentication session.
#[async_trait]
pub trait SessionPort: Send + Sync {
    async fn current_user(&self) -> Option<SessionUser>;
}
