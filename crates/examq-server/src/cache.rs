//! Single-slot cache for the latest pushed roster snapshot.
//!
//! The webhook writes here; the polling endpoints read here and fall back to
//! the live roster source on a miss. There is exactly one slot. Concurrent
//! webhook deliveries race last-write-wins; `written_at` records which write
//! won. Expiry is evaluated lazily at read time, so a stale entry sits in the
//! slot until the next read or overwrite.

use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Default time-to-live for a pushed snapshot.
pub const DEFAULT_TTL: Duration = Duration::from_secs(600);

#[derive(Debug, Clone)]
struct CacheEntry {
    matrix: Vec<Vec<String>>,
    written_at: Instant,
}

#[derive(Debug)]
pub struct UpdateCache {
    slot: RwLock<Option<CacheEntry>>,
    ttl: Duration,
}

impl UpdateCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: RwLock::new(None),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Stores a snapshot, unconditionally replacing whatever is in the slot.
    pub fn put(&self, matrix: Vec<Vec<String>>) {
        self.put_at(matrix, Instant::now());
    }

    /// Returns the snapshot while it is within its TTL.
    pub fn get(&self) -> Option<Vec<Vec<String>>> {
        self.get_at(Instant::now())
    }

    pub fn put_at(&self, matrix: Vec<Vec<String>>, now: Instant) {
        let mut slot = self.slot.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some(CacheEntry {
            matrix,
            written_at: now,
        });
    }

    pub fn get_at(&self, now: Instant) -> Option<Vec<Vec<String>>> {
        let slot = self.slot.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        slot.as_ref().and_then(|entry| {
            if now.duration_since(entry.written_at) <= self.ttl {
                Some(entry.matrix.clone())
            } else {
                None
            }
        })
    }
}

impl Default for UpdateCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(tag: &str) -> Vec<Vec<String>> {
        vec![vec![tag.to_string()]]
    }

    #[test]
    fn empty_cache_misses() {
        let cache = UpdateCache::default();
        assert!(cache.get().is_none());
    }

    #[test]
    fn fresh_entry_hits_and_expired_entry_misses() {
        let cache = UpdateCache::new(Duration::from_secs(600));
        let t0 = Instant::now();
        cache.put_at(matrix("a"), t0);
        assert_eq!(cache.get_at(t0 + Duration::from_secs(599)), Some(matrix("a")));
        assert_eq!(cache.get_at(t0 + Duration::from_secs(600)), Some(matrix("a")));
        assert!(cache.get_at(t0 + Duration::from_secs(601)).is_none());
    }

    #[test]
    fn later_write_wins() {
        let cache = UpdateCache::default();
        let t0 = Instant::now();
        cache.put_at(matrix("old"), t0);
        cache.put_at(matrix("new"), t0 + Duration::from_secs(1));
        assert_eq!(cache.get_at(t0 + Duration::from_secs(2)), Some(matrix("new")));
    }

    #[test]
    fn overwrite_resets_expiry() {
        let cache = UpdateCache::new(Duration::from_secs(10));
        let t0 = Instant::now();
        cache.put_at(matrix("a"), t0);
        cache.put_at(matrix("b"), t0 + Duration::from_secs(9));
        assert_eq!(
            cache.get_at(t0 + Duration::from_secs(15)),
            Some(matrix("b"))
        );
    }
}
