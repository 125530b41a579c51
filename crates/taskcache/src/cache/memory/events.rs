//! In-process event sink backed by a tokio broadcast channel.

use async_trait::async_trait;
use tokio::sync::broadcast;

use taskcache_core::notify::{EventSink, Result};
use taskcache_core::task::TaskEvent;

/// Channel capacity for task events.
const CHANNEL_CAPACITY: usize = 256;

/// In-process event sink.
///
/// Events published with no subscribers are dropped. Slow subscribers that
/// fall more than [`CHANNEL_CAPACITY`] events behind observe `Lagged`.
#[derive(Debug, Clone)]
pub struct MemoryEventSink {
    sender: broadcast::Sender<TaskEvent>,
}

impl MemoryEventSink {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }
}

impl Default for MemoryEventSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventSink for MemoryEventSink {
    async fn publish(&self, event: &TaskEvent) -> Result<()> {
        // No receivers is not an error.
        let _ = self.sender.send(event.clone());
        Ok(())
    }

    async fn subscribe(&self) -> Result<broadcast::Receiver<TaskEvent>> {
        Ok(self.sender.subscribe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use taskcache_core::task::TaskAction;

    #[tokio::test]
    async fn test_publish_and_subscribe() {
        let sink = MemoryEventSink::new();
        let event = TaskEvent::new(TaskAction::CreateTask, Utc::now()).with_task_id(1);

        let mut receiver = sink.subscribe().await.unwrap();
        sink.publish(&event).await.unwrap();

        assert_eq!(receiver.recv().await.unwrap(), event);
    }

    #[tokio::test]
    async fn test_multiple_subscribers() {
        let sink = MemoryEventSink::new();
        let event = TaskEvent::new(TaskAction::ListTasks, Utc::now());

        let mut first = sink.subscribe().await.unwrap();
        let mut second = sink.subscribe().await.unwrap();
        sink.publish(&event).await.unwrap();

        assert_eq!(first.recv().await.unwrap().action, TaskAction::ListTasks);
        assert_eq!(second.recv().await.unwrap().action, TaskAction::ListTasks);
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_succeeds() {
        let sink = MemoryEventSink::new();
        let event = TaskEvent::new(TaskAction::DeleteTask, Utc::now()).with_task_id(9);

        assert!(sink.publish(&event).await.is_ok());
    }
}
