// SPDX-License-Identifier: MPL-2.0
//! In-memory LRU cache of decoded assets for the current session.

use super::MediaData;
use crate::config::defaults::DECODED_CACHE_CAPACITY;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Decoded assets keyed by their server path.
pub struct DecodedCache {
    entries: LruCache<String, MediaData>,
}

impl std::fmt::Debug for DecodedCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodedCache")
            .field("len", &self.entries.len())
            .field("capacity", &self.entries.cap())
            .finish()
    }
}

impl Default for DecodedCache {
    fn default() -> Self {
        Self::new(DECODED_CACHE_CAPACITY)
    }
}

impl DecodedCache {
    /// Creates a cache holding at most `capacity` assets (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    pub fn insert(&mut self, path: String, media: MediaData) {
        if let Some((evicted, _)) = self.entries.push(path, media) {
            tracing::trace!(path = %evicted, "evicted decoded asset");
        }
    }

    /// Looks up `path` and marks it as recently used.
    pub fn get(&mut self, path: &str) -> Option<&MediaData> {
        self.entries.get(path)
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ImageData;

    fn media() -> MediaData {
        MediaData::Image(ImageData::from_rgba(1, 1, vec![0, 0, 0, 255]))
    }

    #[test]
    fn evicts_least_recently_used() {
        let mut cache = DecodedCache::new(2);
        cache.insert("a/1.png".into(), media());
        cache.insert("a/2.png".into(), media());
        assert!(cache.get("a/1.png").is_some());
        cache.insert("a/3.png".into(), media());

        assert!(cache.contains("a/1.png"));
        assert!(!cache.contains("a/2.png"));
        assert!(cache.contains("a/3.png"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn zero_capacity_still_holds_one() {
        let mut cache = DecodedCache::new(0);
        cache.insert("x.png".into(), media());
        assert_eq!(cache.len(), 1);
    }
}
