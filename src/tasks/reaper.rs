//! Expiry Reaper
//!
//! Background task that periodically removes expired string entries so that
//! values written once and never read again do not pile up. Reads already
//! drop expired entries on their own; this only bounds memory.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::store::Db;

/// Spawns the reaper loop.
///
/// Every `interval` the task snapshots the expired keys, then removes them
/// one at a time, taking the store lock once per key. Flipping `shutdown`
/// to `true` (or dropping its sender) stops the loop at the next key or
/// tick.
///
/// # Example
/// ```ignore
/// let db = Db::new();
/// let (shutdown_tx, shutdown_rx) = watch::channel(false);
/// let handle = spawn_reaper(db.clone(), Duration::from_millis(100), shutdown_rx);
/// // Later, during shutdown:
/// shutdown_tx.send(true).ok();
/// handle.await.ok();
/// ```
pub fn spawn_reaper(
    db: Db,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            "Starting expiry reaper with interval of {} ms",
            interval.as_millis()
        );

        loop {
            tokio::select! {
                _ = tokio::time::sleep(interval) => {}
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }

            if *shutdown.borrow() {
                break;
            }

            let removed = reap_expired(&db, &shutdown).await;
            if removed > 0 {
                info!("Expiry reaper: removed {} expired entries", removed);
            } else {
                debug!("Expiry reaper: no expired entries found");
            }
        }

        info!("Expiry reaper stopped");
    })
}

/// Runs one reaper pass and returns the number of entries removed.
///
/// A key that fails to be removed is logged and skipped.
pub async fn reap_expired(db: &Db, shutdown: &watch::Receiver<bool>) -> usize {
    let candidates = db.expired_keys().await;
    let mut removed = 0;

    for key in candidates {
        if *shutdown.borrow() {
            debug!("Expiry reaper: shutdown requested mid-pass");
            break;
        }

        match db.remove_if_expired(&key).await {
            Ok(true) => removed += 1,
            Ok(false) => debug!(key = %key, "Entry refreshed or removed before reaping"),
            Err(err) => warn!(key = %key, error = %err, "Failed to reap expired entry"),
        }
    }

    removed
}
