//! Read-through cache with bulk invalidation by tag.

use std::collections::HashSet;
use std::future::Future;
use std::time::{Duration, Instant};

use dashmap::DashMap;

use crate::tag::Tag;

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    tags: HashSet<Tag>,
    stored_at: Instant,
}

/// Concurrency-safe key/value cache where every entry carries the tag that
/// governs its eviction family.
///
/// Backed by a sharded concurrent map; no single global lock, and no guard is
/// held across an await. Concurrent misses on the same key may each run their
/// compute; the results are equivalent for idempotent reads, so the last
/// writer wins and every caller gets a valid value.
#[derive(Debug)]
pub struct TaggedCache<V> {
    entries: DashMap<String, Entry<V>>,
    ttl: Option<Duration>,
}

impl<V: Clone> TaggedCache<V> {
    /// Cache whose entries live until explicitly invalidated.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            ttl: None,
        }
    }

    /// Cache whose entries are additionally treated as absent once older
    /// than `ttl`. Invalidation remains the primary eviction path.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl: Some(ttl),
        }
    }

    /// Return the fresh value under `key`, or run `compute`, store its Ok
    /// result under `tag`, and return it.
    ///
    /// An Err from `compute` is propagated and never cached. Empty collections
    /// are values like any other and do get cached.
    pub async fn get_or_compute<F, Fut, E>(&self, key: &str, tag: Tag, compute: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(key) {
            return Ok(value);
        }

        tracing::debug!(key, "cache miss");
        let value = compute().await?;
        self.entries.insert(
            key.to_string(),
            Entry {
                value: value.clone(),
                tags: HashSet::from([tag]),
                stored_at: Instant::now(),
            },
        );
        Ok(value)
    }

    /// Fresh value under `key`, if any.
    pub fn get(&self, key: &str) -> Option<V> {
        let entry = self.entries.get(key)?;
        if let Some(ttl) = self.ttl {
            if entry.stored_at.elapsed() > ttl {
                return None;
            }
        }
        Some(entry.value.clone())
    }

    /// Remove every entry carrying any tag in `tags`.
    ///
    /// Entries sharing no tag with the set are untouched; an empty or
    /// no-match set is a no-op.
    pub fn invalidate(&self, tags: &[Tag]) {
        if tags.is_empty() {
            return;
        }
        self.entries
            .retain(|_, entry| !tags.iter().any(|tag| entry.tags.contains(tag)));
        tracing::debug!(?tags, remaining = self.entries.len(), "invalidated tag family");
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> Default for TaggedCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
