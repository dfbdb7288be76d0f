use async_trait::async_trait;
use tracing::info;
use ts_core::ports::NavigationPort;
use ts_core::Screen;

/// Navigation for a headless host: logs where the app would go.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNavigator;

#[async_trait]
impl NavigationPort for ConsoleNavigator {
    async fn navigate_to(&self, screen: Screen) -> anyhow::Result<()> {
        info!(screen = %screen, "navigate");
        Ok(())
    }

    async fn go_back(&self) -> anyhow::Result<()> {
        info!("navigate back");
        Ok(())
    }
}
