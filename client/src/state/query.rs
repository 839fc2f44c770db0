//! Client-side query cache keyed by resource name and filter parameters.
//!
//! DESIGN
//! ======
//! Results are stored as `serde_json::Value` so one cache can hold every
//! response type. An entry is served while it is younger than the staleness
//! window and has not been invalidated. In-flight fetches are tracked per key
//! with a caller-chosen handle `P` (a shared future in the browser) so that
//! identical concurrent reads await one request.
//!
//! Invalidation is prefix-based: invalidating `["posts"]` also invalidates
//! `["posts", "feed", "1"]` and `["posts", "detail", "p1"]`. Each invalidation
//! bumps the key's generation; a fetch that started before the bump is not
//! allowed to write its (possibly pre-mutation) result back.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::collections::HashMap;
use std::fmt;

/// Default time a fetched result is served without re-fetching.
pub const DEFAULT_STALE_AFTER_MS: f64 = 30_000.0;

/// Ordered cache key: resource name followed by filter parameters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new(resource: &str) -> Self {
        Self(vec![resource.to_owned()])
    }

    /// Append a filter parameter.
    #[must_use]
    pub fn with(mut self, param: impl ToString) -> Self {
        self.0.push(param.to_string());
        self
    }

    pub fn resource(&self) -> &str {
        self.0.first().map_or("", String::as_str)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Whether `prefix`'s segments lead this key's segments.
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Every post-derived query.
    pub fn posts() -> Self {
        Self::new("posts")
    }

    /// One page of the public feed.
    pub fn posts_feed(page: u32) -> Self {
        Self::posts().with("feed").with(page)
    }

    /// One page of the dashboard's manage-posts table.
    pub fn posts_manage(page: u32) -> Self {
        Self::posts().with("manage").with(page)
    }

    pub fn post(id: &str) -> Self {
        Self::posts().with("detail").with(id)
    }

    pub fn categories() -> Self {
        Self::new("categories")
    }

    pub fn tags() -> Self {
        Self::new("tags")
    }

    pub fn users() -> Self {
        Self::new("users")
    }

    pub fn comments(post_id: &str) -> Self {
        Self::new("comments").with(post_id)
    }

    pub fn likes(post_id: &str) -> Self {
        Self::new("likes").with(post_id)
    }

    pub fn analytics() -> Self {
        Self::new("analytics")
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(":"))
    }
}

#[derive(Clone, Debug)]
struct CacheEntry {
    data: serde_json::Value,
    fetched_at_ms: f64,
    invalidated: bool,
}

/// Result of looking a key up.
#[derive(Debug)]
pub enum Lookup<'a, P> {
    /// A fresh cached value; no request needed.
    Fresh(&'a serde_json::Value),
    /// A request for this key is already running.
    Pending(&'a P),
    /// Nothing usable; the caller should start a fetch.
    Miss,
}

#[derive(Debug)]
struct InFlight<P> {
    generation: u64,
    handle: P,
}

/// Query result cache with in-flight tracking.
#[derive(Debug)]
pub struct QueryCache<P> {
    entries: HashMap<QueryKey, CacheEntry>,
    in_flight: HashMap<QueryKey, InFlight<P>>,
    generations: HashMap<QueryKey, u64>,
    stale_after_ms: f64,
}

impl<P> Default for QueryCache<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> QueryCache<P> {
    pub fn new() -> Self {
        Self::with_stale_after(DEFAULT_STALE_AFTER_MS)
    }

    pub fn with_stale_after(stale_after_ms: f64) -> Self {
        Self {
            entries: HashMap::new(),
            in_flight: HashMap::new(),
            generations: HashMap::new(),
            stale_after_ms: stale_after_ms.max(0.0),
        }
    }

    pub fn stale_after_ms(&self) -> f64 {
        self.stale_after_ms
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current invalidation generation of `key`. A fetch started now must
    /// complete with this value for its result to be stored.
    pub fn generation(&self, key: &QueryKey) -> u64 {
        self.generations.get(key).copied().unwrap_or(0)
    }

    /// Whether `key` has a cached value that may be served at `now_ms`.
    pub fn is_fresh(&self, key: &QueryKey, now_ms: f64) -> bool {
        self.entries
            .get(key)
            .is_some_and(|e| !e.invalidated && now_ms - e.fetched_at_ms < self.stale_after_ms)
    }

    pub fn lookup(&self, key: &QueryKey, now_ms: f64) -> Lookup<'_, P> {
        if self.is_fresh(key, now_ms) {
            if let Some(entry) = self.entries.get(key) {
                return Lookup::Fresh(&entry.data);
            }
        }
        match self.in_flight.get(key) {
            Some(flight) => Lookup::Pending(&flight.handle),
            None => Lookup::Miss,
        }
    }

    /// Last stored value regardless of freshness, for showing previous data
    /// while a re-fetch runs.
    pub fn cached(&self, key: &QueryKey) -> Option<&serde_json::Value> {
        self.entries.get(key).map(|e| &e.data)
    }

    /// Record that a fetch for `key` has started. Returns the generation the
    /// result must be completed with.
    pub fn begin(&mut self, key: QueryKey, handle: P) -> u64 {
        let generation = self.generation(&key);
        self.in_flight.insert(key, InFlight { generation, handle });
        generation
    }

    /// Store a fetch result. Returns `false` (and stores nothing) when the key
    /// was invalidated after the fetch began.
    pub fn complete(&mut self, key: &QueryKey, generation: u64, data: serde_json::Value, now_ms: f64) -> bool {
        self.finish_flight(key, generation);
        if generation != self.generation(key) {
            return false;
        }
        self.entries.insert(key.clone(), CacheEntry { data, fetched_at_ms: now_ms, invalidated: false });
        true
    }

    /// Forget a failed fetch. Errors are never cached.
    pub fn abandon(&mut self, key: &QueryKey, generation: u64) {
        self.finish_flight(key, generation);
    }

    fn finish_flight(&mut self, key: &QueryKey, generation: u64) {
        if self.in_flight.get(key).is_some_and(|f| f.generation == generation) {
            self.in_flight.remove(key);
        }
    }

    /// Mark every key under `prefix` stale and detach running fetches for
    /// them, so the next read issues a new request. Returns how many cached
    /// entries were affected.
    pub fn invalidate(&mut self, prefix: &QueryKey) -> usize {
        let mut touched: Vec<QueryKey> = self
            .entries
            .keys()
            .chain(self.in_flight.keys())
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect();
        touched.sort();
        touched.dedup();

        let mut affected = 0;
        for key in touched {
            *self.generations.entry(key.clone()).or_insert(0) += 1;
            self.in_flight.remove(&key);
            if let Some(entry) = self.entries.get_mut(&key) {
                entry.invalidated = true;
                affected += 1;
            }
        }
        affected
    }

    /// Drop a key entirely.
    pub fn remove(&mut self, key: &QueryKey) {
        self.entries.remove(key);
        self.in_flight.remove(key);
    }
}
