//! Periodic poll safety net.
//!
//! Fires the change signal on a fixed interval so views recompute even when
//! a broadcast was missed, and so writes from other processes sharing the
//! persisted store become visible. The signal is level-triggered; an extra
//! tick only causes an idempotent re-read.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use noor_core::sync::ChangeNotifier;

/// Matches the refresh interval of the status/analytics views.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Spawns a task that fires `notifier` every `interval`.
///
/// The first tick fires immediately. Abort the returned handle to stop
/// polling.
pub fn spawn_poll_refresher(notifier: ChangeNotifier, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            debug!("poll tick, firing change signal");
            notifier.notify();
        }
    })
}
