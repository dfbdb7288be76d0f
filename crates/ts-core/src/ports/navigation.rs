use async_trait::async_trait;

use crate::navigation::Screen;

/// Host navigation.
#[async_trait]
pub trait NavigationPort: Send + Sync {
    async fn navigate_to(&self, screen: Screen) -> anyhow::Result<()>;
    async fn go_back(&self) -> anyhow::Result<()>;
}
