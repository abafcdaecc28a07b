//! In-memory storage of the solutions handed out by `/solve` so that they can
//! be revealed and settled by later, independent requests.

use {
    crate::{
        domain::{auction, settlement::Settlement, solution},
        infra::observe,
    },
    chrono::Utc,
    std::{
        collections::HashMap,
        sync::{
            Arc,
            Mutex,
            MutexGuard,
            PoisonError,
            atomic::{AtomicU64, Ordering},
        },
        time::Duration,
    },
    tokio::time::MissedTickBehavior,
};

/// A solution kept around for revealing and settling.
#[derive(Debug, Clone)]
pub struct Entry {
    /// The auction the solution was produced for. `None` for auctions that
    /// came without an ID.
    pub auction_id: Option<auction::Id>,
    pub deadline: auction::Deadline,
    pub settlement: Settlement,
    /// Set once the driver announced that it executes this solution.
    pub settle: Option<Settle>,
}

/// The driver's intent to execute a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settle {
    pub auction_id: auction::Id,
    pub submission_deadline_latest_block: u64,
}

/// Hands out solution IDs and remembers solutions by ID until their auction
/// deadline passed.
///
/// IDs are taken from a counter which is strictly increasing for the lifetime
/// of the cache so an ID is never reused, even after its entry got evicted.
#[derive(Debug)]
pub struct SolutionCache {
    next_id: AtomicU64,
    entries: Mutex<HashMap<solution::Id, Entry>>,
    /// How long entries are kept after their deadline passed.
    retention: Duration,
}

impl SolutionCache {
    pub fn new(retention: Duration) -> Self {
        Self {
            next_id: AtomicU64::new(0),
            entries: Default::default(),
            retention,
        }
    }

    /// Returns a new, never used before, solution ID.
    pub fn next_id(&self) -> solution::Id {
        solution::Id(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    pub fn insert(&self, id: solution::Id, entry: Entry) {
        let len = {
            let mut entries = self.entries();
            entries.insert(id, entry);
            entries.len()
        };
        observe::cache_size(len);
    }

    /// Looks up the settlement of a solution produced for the specified
    /// auction. Expired entries are evicted instead of returned.
    pub fn settlement(
        &self,
        id: solution::Id,
        auction_id: auction::Id,
    ) -> Result<Settlement, LookupError> {
        let mut entries = self.entries();
        let entry = self.live_entry(&mut entries, id, auction_id)?;
        Ok(entry.settlement.clone())
    }

    /// Records the intent to settle a solution. Fails the same way as
    /// [`SolutionCache::settlement`] for solutions that can't be revealed.
    pub fn record_settle(&self, id: solution::Id, settle: Settle) -> Result<(), LookupError> {
        let mut entries = self.entries();
        let entry = self.live_entry(&mut entries, id, settle.auction_id)?;
        if let Some(previous) = entry.settle.replace(settle) {
            tracing::warn!(%id, ?previous, "solution settled more than once");
        }
        Ok(())
    }

    /// Evicts all expired entries and returns how many were removed.
    pub fn sweep(&self) -> usize {
        let now = Utc::now();
        let (removed, len) = {
            let mut entries = self.entries();
            let before = entries.len();
            entries.retain(|_, entry| !entry.deadline.expired(self.retention, now));
            (before - entries.len(), entries.len())
        };
        observe::cache_size(len);
        removed
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Periodically evicts expired entries until the returned handle or the
    /// cache gets dropped.
    pub fn spawn_sweeper(self: &Arc<Self>, interval: Duration) -> Sweeper {
        let cache = Arc::downgrade(self);
        Sweeper(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                let Some(cache) = cache.upgrade() else {
                    break;
                };
                let removed = cache.sweep();
                if removed > 0 {
                    tracing::debug!(removed, "evicted expired solutions");
                }
            }
        }))
    }

    fn live_entry<'a>(
        &self,
        entries: &'a mut HashMap<solution::Id, Entry>,
        id: solution::Id,
        auction_id: auction::Id,
    ) -> Result<&'a mut Entry, LookupError> {
        let entry = entries.get(&id).ok_or(LookupError::Unknown)?;
        if entry.deadline.expired(self.retention, Utc::now()) {
            entries.remove(&id);
            observe::cache_size(entries.len());
            return Err(LookupError::Expired);
        }
        if entry.auction_id.is_some_and(|expected| expected != auction_id) {
            return Err(LookupError::AuctionMismatch);
        }
        entries.get_mut(&id).ok_or(LookupError::Unknown)
    }

    // Every critical section is a single map operation which leaves the map
    // consistent even if it panics half way, so poisoning can be ignored.
    fn entries(&self) -> MutexGuard<'_, HashMap<solution::Id, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Handle of the background task evicting expired solutions. The task stops
/// when the handle is dropped.
#[derive(Debug)]
pub struct Sweeper(tokio::task::JoinHandle<()>);

impl Drop for Sweeper {
    fn drop(&mut self) {
        self.0.abort();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("solution was never produced")]
    Unknown,
    #[error("solution expired")]
    Expired,
    #[error("solution was produced for a different auction")]
    AuctionMismatch,
}
