//! Timer-driven refresh task feeding the snapshot store.

use crate::snapshot::SnapshotStore;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info, warn};
use userdir_upstream::UpstreamClient;

/// Background refresher: one fetch per period, one in-flight fetch at a
/// time, runs for the process lifetime.
///
/// The period is counted from cycle start, so a slow fetch shortens the
/// idle gap before the next cycle but never overlaps it — the loop awaits
/// each cycle's outcome before selecting again.
pub struct Refresher {
    store: Arc<SnapshotStore>,
    client: Arc<dyn UpstreamClient>,
    period: Duration,
    shutdown_tx: broadcast::Sender<()>,
    running: AtomicBool,
}

impl Refresher {
    /// Creates a new refresher writing into `store`.
    pub fn new(store: Arc<SnapshotStore>, client: Arc<dyn UpstreamClient>, period: Duration) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);
        Self {
            store,
            client,
            period,
            shutdown_tx,
            running: AtomicBool::new(false),
        }
    }

    /// Runs the refresh loop until [`Refresher::stop`] is called.
    ///
    /// The first cycle fires immediately, so spawning this task eagerly
    /// populates the cache at process start.
    pub async fn run(&self) {
        if self.running.swap(true, Ordering::SeqCst) {
            warn!("Refresher already running");
            return;
        }

        info!(period_secs = self.period.as_secs(), "Starting snapshot refresher");

        let mut shutdown_rx = self.shutdown_tx.subscribe();
        let mut tick = interval(self.period);
        tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    info!("Refresher received shutdown signal");
                    break;
                }

                _ = tick.tick() => {
                    self.refresh_once().await;
                }
            }
        }

        self.running.store(false, Ordering::SeqCst);
        info!("Snapshot refresher stopped");
    }

    /// Executes one refresh cycle: fetch, then install on success or
    /// retain the previous snapshot on failure. Never propagates errors —
    /// the loop must survive indefinitely across upstream outages.
    pub async fn refresh_once(&self) {
        match self.client.fetch_users().await {
            Ok(users) => {
                let snapshot = self.store.install(users);
                info!(users = snapshot.len(), "Snapshot refreshed");
            }
            Err(e) => {
                self.store.record_failure();
                error!(error = %e, "Snapshot refresh failed; keeping previous snapshot");
            }
        }
    }

    /// Signals the refresh loop to stop.
    pub fn stop(&self) {
        info!("Stopping snapshot refresher...");
        let _ = self.shutdown_tx.send(());
    }

    /// Whether the loop is currently running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}
