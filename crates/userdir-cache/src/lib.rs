//! # Userdir Cache
//!
//! Self-refreshing in-process cache holding one logical value: the current
//! user collection. A single background task pulls from upstream on a fixed
//! period and swaps a complete, immutable snapshot into place; readers take
//! the current snapshot without ever blocking on network I/O.
//!
//! Two slots are kept: `current`, published through a watch channel, and
//! `last_good`, recorded on every successful refresh so a failed cycle can
//! never erase a previously good value.

pub mod refresh;
pub mod snapshot;

pub use refresh::Refresher;
pub use snapshot::{CacheStats, Snapshot, SnapshotCache, SnapshotStore};
