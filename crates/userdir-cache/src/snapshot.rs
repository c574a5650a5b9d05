//! Snapshot store: two-slot holder for the cached user collection.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;
use userdir_core::{User, UserdirError, UserdirResult};

/// One complete, immutable user collection produced by a single successful
/// upstream fetch. Cheap to share; readers hold it across request handling
/// without pinning the writer.
pub type Snapshot = Arc<Vec<User>>;

/// Two-slot snapshot holder.
///
/// `current` lives in a watch channel: installing a new snapshot is an
/// atomic swap, readers see either the complete old value or the complete
/// new one, and visibility is monotonic. `last_good` is recorded separately
/// on every successful refresh and is never cleared by failures.
pub struct SnapshotStore {
    tx: watch::Sender<Option<Snapshot>>,
    last_good: RwLock<Option<Snapshot>>,
    installs: AtomicU64,
    failures: AtomicU64,
    last_refresh_at: RwLock<Option<DateTime<Utc>>>,
}

impl SnapshotStore {
    /// Creates an empty store.
    pub fn new() -> Arc<Self> {
        let (tx, _) = watch::channel(None);
        Arc::new(Self {
            tx,
            last_good: RwLock::new(None),
            installs: AtomicU64::new(0),
            failures: AtomicU64::new(0),
            last_refresh_at: RwLock::new(None),
        })
    }

    /// Returns a read handle onto this store.
    pub fn cache(self: &Arc<Self>) -> SnapshotCache {
        SnapshotCache {
            store: Arc::clone(self),
            rx: self.tx.subscribe(),
        }
    }

    /// Installs a freshly fetched collection as the current snapshot and
    /// records it as last known good.
    pub fn install(&self, users: Vec<User>) -> Snapshot {
        let snapshot: Snapshot = Arc::new(users);

        *self.last_good.write() = Some(Arc::clone(&snapshot));
        self.tx.send_replace(Some(Arc::clone(&snapshot)));

        self.installs.fetch_add(1, Ordering::Relaxed);
        *self.last_refresh_at.write() = Some(Utc::now());

        debug!(users = snapshot.len(), "Installed new snapshot");
        snapshot
    }

    /// Records a failed refresh cycle. Both slots are left untouched.
    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            installs: self.installs.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            last_refresh_at: *self.last_refresh_at.read(),
            ready: self.tx.borrow().is_some(),
        }
    }
}

/// Cloneable read handle onto a [`SnapshotStore`].
///
/// All methods are wait-free except [`SnapshotCache::snapshot`], which
/// awaits the first successful refresh.
#[derive(Clone)]
pub struct SnapshotCache {
    store: Arc<SnapshotStore>,
    rx: watch::Receiver<Option<Snapshot>>,
}

impl SnapshotCache {
    /// Returns the current snapshot, or `None` before the first successful
    /// refresh. Never blocks.
    pub fn current(&self) -> Option<Snapshot> {
        self.rx.borrow().clone()
    }

    /// Returns the current snapshot, waiting until the first successful
    /// refresh has populated the store.
    pub async fn snapshot(&self) -> UserdirResult<Snapshot> {
        if let Some(snapshot) = self.current() {
            return Ok(snapshot);
        }

        let mut rx = self.rx.clone();
        let value = rx
            .wait_for(Option::is_some)
            .await
            .map_err(|_| UserdirError::internal("Snapshot channel closed"))?;

        value
            .clone()
            .ok_or_else(|| UserdirError::internal("Snapshot slot empty after readiness"))
    }

    /// Returns the last known good snapshot, independent of `current`.
    ///
    /// Retained for a degraded-mode extension; today it always equals the
    /// current snapshot when one exists.
    pub fn last_good(&self) -> Option<Snapshot> {
        self.store.last_good.read().clone()
    }

    /// Whether the first successful refresh has completed.
    pub fn is_ready(&self) -> bool {
        self.rx.borrow().is_some()
    }

    /// Returns refresh statistics.
    pub fn stats(&self) -> CacheStats {
        self.store.stats()
    }
}

/// Refresh statistics.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Successful refresh cycles.
    pub installs: u64,

    /// Failed refresh cycles.
    pub failures: u64,

    /// Completion time of the last successful refresh.
    pub last_refresh_at: Option<DateTime<Utc>>,

    /// Whether a snapshot is populated.
    pub ready: bool,
}
