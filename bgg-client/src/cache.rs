//! Time-expiring store for game details, keyed by game id.

use std::collections::HashMap;

use bgg_core::GameDetails;
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

/// Storage for detail lookups.
///
/// Implementations must be safe to share between concurrent operations.
/// The client never holds a cache lock across a network fetch.
#[allow(async_fn_in_trait)]
pub trait DetailCache {
    /// A stored record that has not yet expired.
    async fn get(&self, game_id: i32) -> Option<GameDetails>;

    /// Store `details`, replacing any previous entry, until `ttl` from now.
    async fn put(&self, game_id: i32, details: GameDetails, ttl: Duration);
}

struct CacheEntry {
    details: GameDetails,
    /// `None` when `now + ttl` is not representable.
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// In-process [`DetailCache`] behind a single lock.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<i32, CacheEntry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, expired or not.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Drop every expired entry, returning how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        before - entries.len()
    }
}

impl DetailCache for MemoryCache {
    async fn get(&self, game_id: i32) -> Option<GameDetails> {
        let mut entries = self.entries.lock().await;
        let entry = entries.get(&game_id)?;
        if entry.is_expired(Instant::now()) {
            entries.remove(&game_id);
            return None;
        }
        Some(entry.details.clone())
    }

    async fn put(&self, game_id: i32, details: GameDetails, ttl: Duration) {
        let expires_at = Instant::now().checked_add(ttl);
        self.entries
            .lock()
            .await
            .insert(game_id, CacheEntry { details, expires_at });
    }
}

/// A [`DetailCache`] that stores nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCache;

impl DetailCache for NoCache {
    async fn get(&self, _game_id: i32) -> Option<GameDetails> {
        None
    }

    async fn put(&self, _game_id: i32, _details: GameDetails, _ttl: Duration) {}
}

#[cfg(test)]
#[path = "tests/cache_tests.rs"]
mod tests;
