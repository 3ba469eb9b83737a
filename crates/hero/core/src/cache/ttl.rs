//! Keyed store whose entries go stale after a per-entry time-to-live.
//!
//! An entry is fresh while `now < expires_at`. A TTL too large to add to
//! `now` never expires. Stale entries are kept until
//! overwritten, removed, or purged; reading one through [`TtlCache::get`] is
//! allowed and returns the old value.
//!
//! With a capacity set, inserting a new key into a full store first purges
//! stale entries and then, if still full, evicts the entry closest to expiry.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
struct CacheEntry<V> {
    value: V,
    /// `None` never expires.
    expires_at: Option<Instant>,
}

impl<V> CacheEntry<V> {
    fn is_fresh(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|at| now < at)
    }
}

#[derive(Clone, Debug)]
pub struct TtlCache<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
    capacity: Option<usize>,
}

impl<K, V> TtlCache<K, V>
where
    K: Copy + Eq + Hash,
{
    /// Creates an unbounded store.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            capacity: None,
        }
    }

    /// Creates a store holding at most `capacity` keys (at least one).
    ///
    /// The bound only limits growth; nothing is allocated up front.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: Some(capacity.max(1)),
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if `key` holds a value that has not yet expired at `now`.
    pub fn is_fresh(&self, key: &K, now: Instant) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| entry.is_fresh(now))
    }

    /// Returns the stored value whether or not it is still fresh.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key).map(|entry| &entry.value)
    }

    /// Returns the stored value only while it is fresh.
    pub fn get_fresh(&self, key: &K, now: Instant) -> Option<&V> {
        self.entries
            .get(key)
            .filter(|entry| entry.is_fresh(now))
            .map(|entry| &entry.value)
    }

    /// Expiry of `key`; `None` when absent or never expiring.
    pub fn expires_at(&self, key: &K) -> Option<Instant> {
        self.entries.get(key).and_then(|entry| entry.expires_at)
    }

    /// Inserts or overwrites `key`, fresh until `now + ttl`.
    ///
    /// A `ttl` too large to represent is stored as never expiring.
    pub fn put(&mut self, key: K, value: V, ttl: Duration, now: Instant) {
        let expires_at = now.checked_add(ttl);

        if let Some(entry) = self.entries.get_mut(&key) {
            entry.value = value;
            entry.expires_at = expires_at;
            return;
        }

        if self
            .capacity
            .is_some_and(|capacity| self.entries.len() >= capacity)
        {
            self.make_room(now);
        }

        self.entries.insert(key, CacheEntry { value, expires_at });
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key).map(|entry| entry.value)
    }

    /// Keeps only the entries for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&K, &V) -> bool) {
        self.entries.retain(|key, entry| keep(key, &entry.value));
    }

    /// Drops every entry that is stale at `now`, returning how many went.
    pub fn purge_expired(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.is_fresh(now));
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn make_room(&mut self, now: Instant) {
        let purged = self.purge_expired(now);
        if purged > 0 {
            tracing::trace!("ttl cache full, purged {} stale entries", purged);
            return;
        }

        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| (entry.expires_at.is_none(), entry.expires_at))
            .map(|(key, _)| *key);
        if let Some(key) = oldest {
            tracing::trace!("ttl cache full, evicting entry closest to expiry");
            self.entries.remove(&key);
        }
    }
}

impl<K, V> Default for TtlCache<K, V>
where
    K: Copy + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_millis(150);

    #[test]
    fn entry_is_fresh_until_exactly_ttl() {
        let t0 = Instant::now();
        let mut cache = TtlCache::new();
        cache.put(1u32, true, TTL, t0);

        assert!(cache.is_fresh(&1, t0));
        assert!(cache.is_fresh(&1, t0 + Duration::from_millis(149)));
        assert!(!cache.is_fresh(&1, t0 + TTL));
        assert!(!cache.is_fresh(&2, t0));
    }

    #[test]
    fn stale_value_is_still_readable() {
        let t0 = Instant::now();
        let mut cache = TtlCache::new();
        cache.put(1u32, 42.5f32, TTL, t0);

        let later = t0 + Duration::from_secs(1);
        assert_eq!(cache.get(&1), Some(&42.5));
        assert_eq!(cache.get_fresh(&1, later), None);
    }

    #[test]
    fn put_overwrites_value_and_expiry() {
        let t0 = Instant::now();
        let mut cache = TtlCache::new();
        cache.put(1u32, 1, TTL, t0);

        let t1 = t0 + Duration::from_millis(200);
        cache.put(1u32, 2, TTL, t1);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&1), Some(&2));
        assert_eq!(cache.expires_at(&1), Some(t1 + TTL));
    }

    #[test]
    fn bounded_store_purges_stale_entries_first() {
        let t0 = Instant::now();
        let mut cache = TtlCache::bounded(2);
        cache.put(1u32, "a", TTL, t0);
        cache.put(2u32, "b", Duration::from_secs(5), t0);

        // key 1 is stale by now, so it goes and key 2 survives
        let t1 = t0 + Duration::from_millis(300);
        cache.put(3u32, "c", TTL, t1);

        assert_eq!(cache.len(), 2);
        assert!(cache.get(&1).is_none());
        assert_eq!(cache.get(&2), Some(&"b"));
        assert_eq!(cache.get(&3), Some(&"c"));
    }

    #[test]
    fn bounded_store_evicts_entry_closest_to_expiry() {
        let t0 = Instant::now();
        let mut cache = TtlCache::bounded(2);
        cache.put(1u32, "long", Duration::from_secs(5), t0);
        cache.put(2u32, "short", Duration::from_secs(1), t0);
        cache.put(3u32, "new", Duration::from_secs(5), t0);

        assert_eq!(cache.len(), 2);
        assert!(cache.get(&2).is_none());
        assert!(cache.get(&1).is_some());
        assert!(cache.get(&3).is_some());
    }

    #[test]
    fn overwriting_in_full_store_evicts_nothing() {
        let t0 = Instant::now();
        let mut cache = TtlCache::bounded(1);
        cache.put(1u32, 1, TTL, t0);
        cache.put(1u32, 2, TTL, t0);

        assert_eq!(cache.get(&1), Some(&2));
    }

    #[test]
    fn huge_capacity_allocates_nothing_up_front() {
        let t0 = Instant::now();
        let mut cache = TtlCache::bounded(usize::MAX);
        assert_eq!(cache.capacity(), Some(usize::MAX));
        assert!(cache.is_empty());

        cache.put(1u32, true, TTL, t0);
        assert_eq!(cache.get_fresh(&1, t0), Some(&true));
    }

    #[test]
    fn unrepresentable_ttl_never_expires() {
        let t0 = Instant::now();
        let mut cache = TtlCache::new();
        cache.put(1u32, "forever", Duration::MAX, t0);

        let much_later = t0 + Duration::from_secs(86_400 * 365);
        assert!(cache.is_fresh(&1, much_later));
        assert_eq!(cache.expires_at(&1), None);
        assert_eq!(cache.purge_expired(much_later), 0);
    }

    #[test]
    fn eviction_prefers_expiring_entries_over_permanent_ones() {
        let t0 = Instant::now();
        let mut cache = TtlCache::bounded(2);
        cache.put(1u32, "forever", Duration::MAX, t0);
        cache.put(2u32, "late", Duration::from_secs(60), t0);
        cache.put(3u32, "new", TTL, t0);

        assert!(cache.get(&1).is_some());
        assert!(cache.get(&2).is_none());
        assert!(cache.get(&3).is_some());
    }

    #[test]
    fn retain_and_remove_drop_entries() {
        let t0 = Instant::now();
        let mut cache = TtlCache::new();
        for key in 0u32..4 {
            cache.put(key, key * 10, TTL, t0);
        }

        assert_eq!(cache.remove(&0), Some(0));
        cache.retain(|key, _| key % 2 == 1);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.purge_expired(t0 + TTL), 2);
        assert!(cache.is_empty());
    }
}
