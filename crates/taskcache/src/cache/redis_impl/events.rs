//! Redis pub/sub event sink.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::StreamExt;
use redis::AsyncCommands;
use tokio::sync::{broadcast, RwLock};

use taskcache_core::notify::{EventSink, NotifyError, Result};
use taskcache_core::task::TaskEvent;

use super::error::map_redis_notify_error;

/// Channel capacity for locally fanned-out events.
const CHANNEL_CAPACITY: usize = 256;

type SharedSender = Arc<RwLock<Option<broadcast::Sender<TaskEvent>>>>;

/// Redis pub/sub backend publishing task events as JSON on a single channel.
pub struct RedisEventSink {
    client: redis::Client,
    conn: redis::aio::ConnectionManager,
    channel: String,
    subscription: SharedSender,
}

impl RedisEventSink {
    /// Creates a new Redis event sink publishing on `channel`.
    ///
    /// # Errors
    ///
    /// Returns `NotifyError::ConnectionFailed` if the connection cannot be established.
    pub async fn new(url: &str, channel: impl Into<String>) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_notify_error)?;
        let conn = redis::aio::ConnectionManager::new(client.clone())
            .await
            .map_err(map_redis_notify_error)?;

        Ok(Self {
            client,
            conn,
            channel: channel.into(),
            subscription: Arc::new(RwLock::new(None)),
        })
    }
}

#[async_trait]
impl EventSink for RedisEventSink {
    async fn publish(&self, event: &TaskEvent) -> Result<()> {
        let payload =
            serde_json::to_string(event).map_err(|e| NotifyError::Serialization(e.to_string()))?;

        let mut conn = self.conn.clone();
        conn.publish::<_, _, ()>(&self.channel, &payload)
            .await
            .map_err(map_redis_notify_error)?;

        Ok(())
    }

    async fn subscribe(&self) -> Result<broadcast::Receiver<TaskEvent>> {
        {
            let subscription = self.subscription.read().await;
            if let Some(sender) = subscription.as_ref() {
                return Ok(sender.subscribe());
            }
        }

        let (tx, rx) = broadcast::channel(CHANNEL_CAPACITY);
        {
            let mut subscription = self.subscription.write().await;
            // Double-check in case another task created it.
            if let Some(sender) = subscription.as_ref() {
                return Ok(sender.subscribe());
            }
            *subscription = Some(tx.clone());
        }

        let client = self.client.clone();
        let channel = self.channel.clone();
        let subscription = Arc::clone(&self.subscription);

        tokio::spawn(async move {
            if let Err(e) = run_subscription_loop(client, &channel, &tx).await {
                tracing::error!(%channel, error = %e, "Redis event subscription failed");
            }
            // Clear the slot before receivers see `Closed`, so a resubscribe
            // starts a fresh subscription instead of joining the dead one.
            subscription.write().await.take();
            drop(tx);
        });

        Ok(rx)
    }
}

/// Forwards messages from the Redis channel to the local broadcast channel
/// until the Redis stream ends.
async fn run_subscription_loop(
    client: redis::Client,
    channel: &str,
    tx: &broadcast::Sender<TaskEvent>,
) -> Result<()> {
    let mut pubsub = client
        .get_async_pubsub()
        .await
        .map_err(map_redis_notify_error)?;
    pubsub
        .subscribe(channel)
        .await
        .map_err(map_redis_notify_error)?;

    let mut stream = pubsub.on_message();
    while let Some(msg) = stream.next().await {
        let payload: String = msg.get_payload().map_err(map_redis_notify_error)?;

        match serde_json::from_str::<TaskEvent>(&payload) {
            Ok(event) => {
                // No receivers is fine.
                let _ = tx.send(event);
            }
            Err(e) => {
                tracing::warn!(%channel, error = %e, %payload, "Failed to deserialize task event");
            }
        }
    }

    tracing::info!(%channel, "Redis event subscription stream ended");
    Ok(())
}
