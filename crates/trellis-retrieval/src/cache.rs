//! Query-result cache: bounded LRU with per-entry TTL, hit/miss counters,
//! and per-user invalidation. All state lives behind one mutex so expiry
//! checks, recency updates, and the counters stay consistent.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use tracing::debug;

use trellis_core::config::CacheConfig;
use trellis_core::models::{CachedQuery, Scope};

/// Snapshot of cache effectiveness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CacheStats {
    pub size: usize,
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
}

struct CacheEntry {
    value: CachedQuery,
    expires_at: Instant,
    /// Logical clock value of the most recent access.
    last_used: u64,
    user_id: String,
}

struct CacheInner {
    entries: HashMap<String, CacheEntry>,
    tick: u64,
    hits: u64,
    misses: u64,
}

/// Thread-safe LRU + TTL cache keyed by a content hash of the query and the
/// knobs that change its answer.
pub struct QueryCache {
    inner: Mutex<CacheInner>,
    capacity: usize,
    ttl: Duration,
}

impl QueryCache {
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            inner: Mutex::new(CacheInner {
                entries: HashMap::new(),
                tick: 0,
                hits: 0,
                misses: 0,
            }),
            capacity: config.capacity.max(1),
            ttl: config.ttl,
        }
    }

    /// Cache key: user scope, whitespace-normalized lowercase query, and the
    /// result-shaping knobs. Hashed so keys are fixed-size.
    pub fn key(
        scope: &Scope,
        query: &str,
        threshold: f64,
        max_results: usize,
        include_images: bool,
        include_graph: bool,
    ) -> String {
        let normalized = query.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
        let material = format!(
            "{}\u{1f}{}\u{1f}{:.4}\u{1f}{}\u{1f}{}\u{1f}{}",
            scope.user_id, normalized, threshold, max_results, include_images, include_graph
        );
        blake3::hash(material.as_bytes()).to_hex().to_string()
    }

    /// Look up a live entry. Expired entries are removed and counted as
    /// misses; hits refresh recency.
    pub fn get(&self, key: &str) -> Option<CachedQuery> {
        let mut inner = self.lock();
        inner.tick += 1;
        let tick = inner.tick;
        let now = Instant::now();

        match inner.entries.get_mut(key) {
            Some(entry) if entry.expires_at > now => {
                entry.last_used = tick;
                let value = entry.value.clone();
                inner.hits += 1;
                Some(value)
            }
            Some(_) => {
                inner.entries.remove(key);
                inner.misses += 1;
                None
            }
            None => {
                inner.misses += 1;
                None
            }
        }
    }

    /// Insert or replace an entry, evicting the least-recently-used one when
    /// at capacity.
    pub fn set(&self, key: String, user_id: &str, value: CachedQuery) {
        let mut inner = self.lock();
        inner.tick += 1;
        let tick = inner.tick;

        if !inner.entries.contains_key(&key) && inner.entries.len() >= self.capacity {
            if let Some(oldest) = inner
                .entries
                .iter()
                .min_by_key(|(_, e)| e.last_used)
                .map(|(k, _)| k.clone())
            {
                debug!(key = %oldest, "evicting least-recently-used cache entry");
                inner.entries.remove(&oldest);
            }
        }

        inner.entries.insert(
            key,
            CacheEntry {
                value,
                expires_at: Instant::now() + self.ttl,
                last_used: tick,
                user_id: user_id.to_string(),
            },
        );
    }

    /// Drop every entry belonging to `user_id`; returns the removed count.
    pub fn invalidate_user(&self, user_id: &str) -> usize {
        let mut inner = self.lock();
        let before = inner.entries.len();
        inner.entries.retain(|_, e| e.user_id != user_id);
        let removed = before - inner.entries.len();
        if removed > 0 {
            debug!(user = %user_id, removed, "invalidated cached queries");
        }
        removed
    }

    pub fn clear(&self) {
        self.lock().entries.clear();
    }

    pub fn stats(&self) -> CacheStats {
        let inner = self.lock();
        let total = inner.hits + inner.misses;
        CacheStats {
            size: inner.entries.len(),
            hits: inner.hits,
            misses: inner.misses,
            hit_rate: if total == 0 {
                0.0
            } else {
                inner.hits as f64 / total as f64
            },
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CacheInner> {
        // A poisoned lock means a panic mid-update; the entries map is still
        // structurally valid, so keep serving.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
