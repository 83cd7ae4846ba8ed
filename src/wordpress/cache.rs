//! Response caching for CMS reads.
//!
//! Payloads are kept per request signature. Fresh entries short-circuit the
//! network; stale entries are kept around and served when a refresh fails.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::future::Future;
use std::sync::{PoisonError, RwLock};
use std::time::{Duration, Instant};

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Default freshness window.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

/// Request options that take part in the cache key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FetchOptions {
    pub headers: BTreeMap<String, String>,
}

impl FetchOptions {
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// A cached response payload.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub payload: Value,
    pub fetched_at: Instant,
}

impl CacheEntry {
    /// Check if this cache entry is still fresh.
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }
}

/// Shared response cache with a fixed freshness window.
#[derive(Debug)]
pub struct FetchCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl FetchCache {
    /// Create a new cache with the given TTL.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Key for a request: the URL followed by its serialized options.
    #[must_use]
    pub fn cache_key(url: &str, options: &FetchOptions) -> String {
        let options = serde_json::to_string(options).unwrap_or_default();
        format!("{url}{options}")
    }

    /// Look up an entry regardless of its age.
    pub fn get(&self, key: &str) -> Option<CacheEntry> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).cloned()
    }

    /// Store a payload stamped with the current instant.
    pub fn store(&self, key: &str, payload: Value) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(
            key.to_string(),
            CacheEntry {
                payload,
                fetched_at: Instant::now(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Serve `key` from cache if fresh, otherwise run `fetch`.
    ///
    /// A successful fetch replaces the entry. A failed fetch falls back to
    /// the stale entry when one exists and only propagates otherwise. The
    /// lock is never held across the fetch, so concurrent misses on one key
    /// may both hit the network; the last store wins.
    ///
    /// # Errors
    ///
    /// Returns the fetch error when there is no entry to fall back to.
    pub async fn get_or_fetch<F, Fut, E>(&self, key: &str, fetch: F) -> Result<Value, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value, E>>,
        E: Display,
    {
        let cached = self.get(key);
        if let Some(entry) = &cached {
            if entry.is_fresh(self.ttl) {
                debug!(key = %key, "Cache hit");
                return Ok(entry.payload.clone());
            }
        }

        match fetch().await {
            Ok(payload) => {
                self.store(key, payload.clone());
                Ok(payload)
            }
            Err(e) => match cached {
                Some(entry) => {
                    warn!(
                        key = %key,
                        age_secs = entry.fetched_at.elapsed().as_secs(),
                        "Serving stale cache entry after fetch failure: {e}"
                    );
                    Ok(entry.payload)
                }
                None => Err(e),
            },
        }
    }
}

impl Default for FetchCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde_json::json;

    use super::*;

    #[test]
    fn test_entry_freshness() {
        let entry = CacheEntry {
            payload: json!([]),
            fetched_at: Instant::now(),
        };
        assert!(entry.is_fresh(Duration::from_secs(60)));

        let old_entry = CacheEntry {
            payload: json!([]),
            fetched_at: Instant::now() - Duration::from_secs(120),
        };
        assert!(!old_entry.is_fresh(Duration::from_secs(60)));
    }

    #[test]
    fn test_cache_key_includes_options() {
        let plain = FetchCache::cache_key("https://cms/posts", &FetchOptions::default());
        let with_header = FetchCache::cache_key(
            "https://cms/posts",
            &FetchOptions::default().with_header("Accept-Language", "fr"),
        );
        assert_ne!(plain, with_header);
        assert!(plain.starts_with("https://cms/posts"));
    }

    #[tokio::test]
    async fn test_fresh_entry_skips_fetch() {
        let cache = FetchCache::new(Duration::from_secs(60));
        let calls = AtomicUsize::new(0);

        for _ in 0..2 {
            let value = cache
                .get_or_fetch("k", || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, String>(json!({"n": 1}))
                })
                .await
                .unwrap();
            assert_eq!(value, json!({"n": 1}));
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_expired_entry_refetches_and_restamps() {
        let cache = FetchCache::new(Duration::ZERO);
        cache.store("k", json!("old"));
        let first_stamp = cache.get("k").unwrap().fetched_at;

        let value = cache
            .get_or_fetch("k", || async { Ok::<_, String>(json!("new")) })
            .await
            .unwrap();

        assert_eq!(value, json!("new"));
        let entry = cache.get("k").unwrap();
        assert_eq!(entry.payload, json!("new"));
        assert!(entry.fetched_at >= first_stamp);
    }

    #[tokio::test]
    async fn test_failure_serves_stale_entry() {
        let cache = FetchCache::new(Duration::ZERO);
        cache.store("k", json!({"stale": true}));

        let value = cache
            .get_or_fetch("k", || async { Err::<Value, _>("boom".to_string()) })
            .await
            .unwrap();

        assert_eq!(value, json!({"stale": true}));
    }

    #[tokio::test]
    async fn test_failure_without_entry_propagates() {
        let cache = FetchCache::default();

        let result = cache
            .get_or_fetch("k", || async { Err::<Value, _>("boom".to_string()) })
            .await;

        assert_eq!(result.unwrap_err(), "boom");
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear() {
        let cache = FetchCache::default();
        cache.store("a", json!(1));
        cache.store("b", json!(2));
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
    }
}
