use std::time::Duration;

use async_trait::async_trait;

/// Pause strategy applied between two consecutive embedding batches
#[async_trait]
pub trait BatchPacer: Send + Sync {
    async fn pause(&self);
}

/// Sleeps for a fixed duration, regardless of how the last batch went
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

#[async_trait]
impl BatchPacer for FixedDelay {
    async fn pause(&self) {
        tokio::time::sleep(self.0).await;
    }
}

/// No pause at all
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl BatchPacer for NoDelay {
    async fn pause(&self) {}
}
