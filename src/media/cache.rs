// SPDX-License-Identifier: MPL-2.0
//! Picture cache for cards and the carousel.
//!
//! # Design
//!
//! - **LRU eviction**: least recently shown pictures are dropped first
//! - **Single flight**: a reference is requested at most once at a time
//! - **Sticky failures**: a picture that failed stays a placeholder for the
//!   session instead of being retried every frame

use crate::error::Result;
use iced::widget::image::Handle;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// What the view should draw for a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStatus {
    Ready,
    Loading,
    Failed,
    Unrequested,
}

/// Statistics about cache usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub cached: usize,
    pub pending: usize,
    pub failed: usize,
    pub evictions: u64,
}

#[derive(Debug)]
pub struct ImageCache {
    entries: LruCache<String, Handle>,
    pending: HashSet<String>,
    failed: HashSet<String>,
    evictions: u64,
}

impl ImageCache {
    /// Creates a cache holding at most `capacity` handles (minimum one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            pending: HashSet::new(),
            failed: HashSet::new(),
            evictions: 0,
        }
    }

    /// Handle for `reference` without touching recency. Used by `view`.
    pub fn peek(&self, reference: &str) -> Option<&Handle> {
        self.entries.peek(reference)
    }

    /// Handle for `reference`, marking it recently used.
    pub fn get(&mut self, reference: &str) -> Option<&Handle> {
        self.entries.get(reference)
    }

    pub fn status(&self, reference: &str) -> ImageStatus {
        if self.entries.contains(reference) {
            ImageStatus::Ready
        } else if self.pending.contains(reference) {
            ImageStatus::Loading
        } else if self.failed.contains(reference) {
            ImageStatus::Failed
        } else {
            ImageStatus::Unrequested
        }
    }

    /// Filters `references` down to the ones that need fetching and marks
    /// them in flight. Cached references are promoted on the way.
    pub fn claim<'a, I>(&mut self, references: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut claimed = Vec::new();
        for reference in references {
            if reference.trim().is_empty() {
                continue;
            }
            match self.status(reference) {
                ImageStatus::Ready => {
                    self.entries.promote(reference);
                }
                ImageStatus::Unrequested => {
                    self.pending.insert(reference.to_string());
                    claimed.push(reference.to_string());
                }
                ImageStatus::Loading | ImageStatus::Failed => {}
            }
        }
        claimed
    }

    /// Records the outcome of a fetch started by [`Self::claim`].
    pub fn finish(&mut self, reference: String, result: Result<Handle>) {
        self.pending.remove(&reference);
        match result {
            Ok(handle) => {
                self.failed.remove(&reference);
                let evicted = self.entries.push(reference.clone(), handle);
                if evicted.is_some_and(|(key, _)| key != reference) {
                    self.evictions += 1;
                }
            }
            Err(err) => {
                tracing::warn!(reference = %reference, error = %err, "image failed to load");
                self.failed.insert(reference);
            }
        }
    }

    /// Marks a reference that cannot be fetched at all as failed.
    pub fn mark_failed(&mut self, reference: &str) {
        self.pending.remove(reference);
        self.failed.insert(reference.to_string());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            cached: self.entries.len(),
            pending: self.pending.len(),
            failed: self.failed.len(),
            evictions: self.evictions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn handle() -> Handle {
        Handle::from_bytes(vec![1_u8, 2, 3])
    }

    #[test]
    fn claim_marks_references_in_flight_once() {
        let mut cache = ImageCache::new(4);
        let claimed = cache.claim(["a.jpg", "b.jpg", "a.jpg"]);
        assert_eq!(claimed, vec!["a.jpg".to_string(), "b.jpg".to_string()]);
        assert_eq!(cache.status("a.jpg"), ImageStatus::Loading);

        assert!(cache.claim(["a.jpg"]).is_empty());
    }

    #[test]
    fn claim_skips_blank_references() {
        let mut cache = ImageCache::new(4);
        assert!(cache.claim(["", "  "]).is_empty());
    }

    #[test]
    fn finish_success_caches_handle() {
        let mut cache = ImageCache::new(4);
        cache.claim(["a.jpg"]);
        cache.finish("a.jpg".into(), Ok(handle()));

        assert_eq!(cache.status("a.jpg"), ImageStatus::Ready);
        assert!(cache.peek("a.jpg").is_some());
        assert_eq!(cache.len(), 1);
        assert!(cache.claim(["a.jpg"]).is_empty());
    }

    #[test]
    fn failures_are_not_retried() {
        let mut cache = ImageCache::new(4);
        cache.claim(["bad.jpg"]);
        cache.finish("bad.jpg".into(), Err(Error::Http("404".into())));

        assert_eq!(cache.status("bad.jpg"), ImageStatus::Failed);
        assert!(cache.claim(["bad.jpg"]).is_empty());
        assert_eq!(cache.stats().failed, 1);
    }

    #[test]
    fn least_recently_used_is_evicted() {
        let mut cache = ImageCache::new(2);
        for name in ["a", "b"] {
            cache.claim([name]);
            cache.finish(name.into(), Ok(handle()));
        }
        // Touch "a" so "b" becomes the eviction candidate.
        assert!(cache.get("a").is_some());

        cache.claim(["c"]);
        cache.finish("c".into(), Ok(handle()));

        assert_eq!(cache.status("b"), ImageStatus::Unrequested);
        assert_eq!(cache.status("a"), ImageStatus::Ready);
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn zero_capacity_holds_one() {
        let cache = ImageCache::new(0);
        assert_eq!(cache.capacity(), 1);
        assert!(cache.is_empty());
    }
}
