use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::task::TaskEvent;

use super::Result;

/// Destination for post-hoc operation notifications.
///
/// Publishing never blocks the operation that produced the event; callers log
/// and drop publish failures.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Publishes an event to every subscriber.
    async fn publish(&self, event: &TaskEvent) -> Result<()>;

    /// Subscribes to events published after this call.
    async fn subscribe(&self) -> Result<broadcast::Receiver<TaskEvent>>;
}
