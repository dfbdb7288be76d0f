//! In-memory session holder.

use async_trait::async_trait;
use tokio::sync::RwLock;
use ts_core::ports::SessionPort;
use ts_core::SessionUser;

#[derive(Default)]
pub struct InMemorySessionStore {
    user: RwLock<Option<SessionUser>>,
}

impl InMemorySessionStore {
    pub fn new(user: Option<SessionUser>) -> Self {
        Self {
            user: RwLock::new(user),
        }
    }

    pub async fn sign_in(&self, user: SessionUser) {
        *self.user.write().await = Some(user);
    }

    pub async fn sign_out(&self) {
        self.user.write().await.take();
    }
}

#[async_trait]
impl SessionPort for InMemorySessionStore {
    async fn current_user(&self) -> Option<SessionUser> {
        self.user.read().await.clone()
    }
}
