//! Process-wide memoization.
//!
//! Three LRU caches live here: converted dates, compiled format patterns and
//! compiled parse matchers. Every cached value is a pure function of its
//! key, so eviction and [`clear_caches`] only cost recomputation.

use lru::LruCache;
use std::borrow::Borrow;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::convert::Direction;
use crate::error::Result;
use crate::pattern::Pattern;
use crate::scanner::Matcher;

const DATE_CACHE_SIZE: NonZeroUsize = match NonZeroUsize::new(4096) {
    Some(n) => n,
    None => panic!("cache size must be non-zero"),
};

const PATTERN_CACHE_SIZE: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(n) => n,
    None => panic!("cache size must be non-zero"),
};

/// Converted dates, keyed by direction and input triple.
pub(crate) static DATES: MemoCache<(Direction, i32, u8, u8), (i32, u8, u8)> =
    MemoCache::new("dates", DATE_CACHE_SIZE);

/// Compiled format patterns, keyed by pattern text.
pub(crate) static PATTERNS: MemoCache<String, Pattern> =
    MemoCache::new("patterns", PATTERN_CACHE_SIZE);

/// Compiled parse matchers, keyed by pattern text.
pub(crate) static MATCHERS: MemoCache<String, Matcher> =
    MemoCache::new("matchers", PATTERN_CACHE_SIZE);

/// A lazily allocated, mutex-guarded LRU map.
pub(crate) struct MemoCache<K, V> {
    #[cfg_attr(not(feature = "log"), allow(dead_code))]
    name: &'static str,
    capacity: NonZeroUsize,
    inner: Mutex<Option<LruCache<K, V>>>,
}

impl<K: Hash + Eq, V: Clone> MemoCache<K, V> {
    pub(crate) const fn new(name: &'static str, capacity: NonZeroUsize) -> Self {
        MemoCache {
            name,
            capacity,
            inner: Mutex::new(None),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<LruCache<K, V>>> {
        // Entries are plain values; a panic elsewhere cannot leave one half-written.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the cached value for `key`, computing and storing it on a miss.
    ///
    /// The lock is not held while `compute` runs. Errors are returned to the
    /// caller and never stored.
    pub(crate) fn get_or_try_insert_with<Q, F>(&self, key: &Q, compute: F) -> Result<V>
    where
        K: Borrow<Q>,
        Q: ToOwned<Owned = K> + Hash + Eq + ?Sized,
        F: FnOnce() -> Result<V>,
    {
        if let Some(hit) = self.get(key) {
            return Ok(hit);
        }

        #[cfg(feature = "log")]
        log::trace!("{} cache miss", self.name);

        let value = compute()?;
        let mut guard = self.lock();
        let cache = guard.get_or_insert_with(|| LruCache::new(self.capacity));
        cache.put(key.to_owned(), value.clone());
        Ok(value)
    }

    /// Looks up a value without inserting.
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lock().as_mut()?.get(key).cloned()
    }

    pub(crate) fn len(&self) -> usize {
        self.lock().as_ref().map_or(0, LruCache::len)
    }

    pub(crate) fn clear(&self) {
        *self.lock() = None;
    }
}

/// Number of entries currently held by each cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub dates: usize,
    pub patterns: usize,
    pub matchers: usize,
}

/// Reports how many entries each process-wide cache holds.
pub fn cache_stats() -> CacheStats {
    CacheStats {
        dates: DATES.len(),
        patterns: PATTERNS.len(),
        matchers: MATCHERS.len(),
    }
}

/// Empties every process-wide cache.
pub fn clear_caches() {
    DATES.clear();
    PATTERNS.clear();
    MATCHERS.clear();

    #[cfg(feature = "log")]
    log::debug!(
        "cleared {}, {} and {} caches",
        DATES.name,
        PATTERNS.name,
        MATCHERS.name
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn scratch() -> MemoCache<String, u32> {
        MemoCache::new("scratch", NonZeroUsize::MIN.saturating_add(1))
    }

    #[test]
    fn test_hit_skips_compute() {
        let cache = scratch();
        assert_eq!(cache.get_or_try_insert_with("a", || Ok(1)), Ok(1));
        assert_eq!(
            cache.get_or_try_insert_with("a", || panic!("recomputed")),
            Ok(1)
        );
        assert_eq!(cache.get("a"), Some(1));
    }

    #[test]
    fn test_errors_are_not_stored() {
        let cache = scratch();
        let err = cache.get_or_try_insert_with("bad", || Err(Error::TypeMismatch));
        assert_eq!(err, Err(Error::TypeMismatch));
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_lru_eviction_and_clear() {
        let cache = scratch();
        for (i, key) in ["a", "b", "c"].iter().enumerate() {
            cache
                .get_or_try_insert_with(*key, || Ok(i as u32))
                .unwrap();
        }
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a"), None);
        cache.clear();
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_recovers_from_poisoned_lock() {
        let cache = std::sync::Arc::new(scratch());
        let poisoner = std::sync::Arc::clone(&cache);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.inner.lock().unwrap();
            panic!("poison the lock");
        })
        .join();
        assert_eq!(cache.get_or_try_insert_with("k", || Ok(7)), Ok(7));
    }
}
