//! Short-lived response cache keyed by request path
//!
//! GET responses are held for a configurable lifespan (10 seconds by
//! default). Entries never self-expire; staleness is detected lazily at
//! lookup time. Mutations invalidate by path relationship: every ancestor
//! list endpoint of the mutated path falls, and so does everything nested
//! under it.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use serde_json::Value;
use tracing::debug;

/// Default freshness window for cached responses
pub(crate) const DEFAULT_CACHE_LIFESPAN: Duration = Duration::from_millis(10_000);

/// Cache key: normalized request path plus canonical query string
///
/// The query participates in the key, so an expanded fetch and a plain
/// fetch of the same resource occupy distinct slots and can never serve
/// each other's payloads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct CacheKey {
    path: String,
    query: String,
}

impl CacheKey {
    pub fn new(path: impl Into<String>, query: &[(&str, &str)]) -> Self {
        let query = query
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        Self {
            path: path.into(),
            query,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

struct CacheEntry {
    expires_at: Instant,
    payload: Value,
}

/// Snapshot of cache performance counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from cache
    pub hits: u64,
    /// Lookups that went to the network
    pub misses: u64,
    /// Entries currently stored, fresh or stale
    pub size: u64,
}

impl CacheStats {
    /// Hit rate in `[0.0, 1.0]`; `0.0` before any lookup
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Response cache with hit/miss tracking
///
/// When constructed disabled, every operation is a no-op and all GETs go
/// to the network.
pub(crate) struct ResponseCache {
    entries: Mutex<HashMap<CacheKey, CacheEntry>>,
    lifespan: Duration,
    enabled: bool,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ResponseCache {
    pub fn new(lifespan: Duration, enabled: bool) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            lifespan,
            enabled,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Fresh payload for `key` at `now`, if any
    ///
    /// Expired entries are ignored, not removed; the next insert on the
    /// same key overwrites them.
    pub fn lookup(&self, key: &CacheKey, now: Instant) -> Option<Value> {
        if !self.enabled {
            return None;
        }

        let fresh = {
            let entries = self.entries.lock();
            entries
                .get(key)
                .filter(|entry| entry.expires_at > now)
                .map(|entry| entry.payload.clone())
        };

        if fresh.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!(path = %key.path(), "cache hit");
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        fresh
    }

    /// Store a payload under `key`, fresh until `now + lifespan`
    pub fn insert(&self, key: CacheKey, payload: Value, now: Instant) {
        if !self.enabled {
            return;
        }
        self.entries.lock().insert(
            key,
            CacheEntry {
                expires_at: now + self.lifespan,
                payload,
            },
        );
    }

    /// Drop every entry related to a mutated path
    ///
    /// Removes entries for each cumulative `/`-prefix of `path` (the
    /// ancestor list endpoints) and entries nested under `path`. The
    /// predicate never depends on key iteration order. Query-variant keys
    /// fall with their path.
    pub fn invalidate(&self, path: &str) {
        if !self.enabled {
            return;
        }

        let mut prefixes = Vec::new();
        let mut built = String::new();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            built.push('/');
            built.push_str(segment);
            prefixes.push(built.clone());
        }
        if prefixes.is_empty() {
            return;
        }
        let nested = format!("{built}/");

        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|key, _| {
            !(prefixes.iter().any(|prefix| prefix == key.path())
                || key.path().starts_with(&nested))
        });
        let removed = before - entries.len();
        drop(entries);

        if removed > 0 {
            debug!(path = %path, removed, "cache invalidated");
        }
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            size: self.entries.lock().len() as u64,
        }
    }
}
