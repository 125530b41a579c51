//! Background consumer that logs every published task event.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use taskcache_core::notify::EventSink;
use taskcache_core::task::TaskEvent;

use crate::state::AppState;

/// Wait before subscribing again after the sink closed or refused a subscription.
const RESUBSCRIBE_DELAY: Duration = Duration::from_secs(1);

/// Spawns the event logger.
///
/// The task subscribes to the state's event sink and logs each event at
/// `info` until the shutdown signal fires. When the subscription closes (a
/// Redis restart, for instance) it subscribes again after a short delay.
pub fn spawn_event_logger(state: &AppState) -> JoinHandle<()> {
    spawn_with_retry_delay(state, RESUBSCRIBE_DELAY)
}

fn spawn_with_retry_delay(state: &AppState, retry_delay: Duration) -> JoinHandle<()> {
    let events = state.events.clone();
    let shutdown_rx = state.subscribe_shutdown();

    tokio::spawn(run_event_logger(events, shutdown_rx, retry_delay))
}

async fn run_event_logger(
    events: Arc<dyn EventSink>,
    mut shutdown_rx: broadcast::Receiver<()>,
    retry_delay: Duration,
) {
    tracing::debug!("Event logger started");

    'subscribe: loop {
        let subscription = tokio::select! {
            result = events.subscribe() => result,
            _ = shutdown_rx.recv() => break 'subscribe,
        };

        match subscription {
            Ok(mut receiver) => loop {
                tokio::select! {
                    result = receiver.recv() => match result {
                        Ok(event) => log_event(&event),
                        Err(broadcast::error::RecvError::Lagged(n)) => {
                            tracing::warn!(lagged = n, "Event logger lagged");
                        }
                        Err(broadcast::error::RecvError::Closed) => {
                            tracing::warn!("Event channel closed, resubscribing");
                            break;
                        }
                    },
                    _ = shutdown_rx.recv() => break 'subscribe,
                }
            },
            Err(err) => {
                tracing::error!(error = %err, "Failed to subscribe to task events");
            }
        }

        tokio::select! {
            _ = tokio::time::sleep(retry_delay) => {}
            _ = shutdown_rx.recv() => break 'subscribe,
        }
    }

    tracing::debug!("Event logger shutting down");
}

fn log_event(event: &TaskEvent) {
    tracing::info!(
        action = %event.action,
        task_id = event.task_id,
        db_request_time = %event.db_request_time,
        duration_ms = event.duration_ms,
        "Task event"
    );
}
