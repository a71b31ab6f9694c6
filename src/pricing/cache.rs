use crate::metrics;
use crate::pricing::models::{PricingKey, PricingResult};
use crate::pricing::resolver::PriceResolver;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};

/// Default time-to-live for resolved prices
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

/// Longest TTL an entry can carry; larger values are clamped
pub const MAX_TTL: Duration = Duration::from_secs(10 * 365 * 24 * 60 * 60);

#[derive(Clone)]
struct CacheEntry {
    result: PricingResult,
    expires_at: Instant,
    expires_at_utc: DateTime<Utc>,
}

impl CacheEntry {
    fn is_valid(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Diagnostics view of one cache entry
#[derive(Debug, Clone, Serialize)]
pub struct CacheEntryStatus {
    pub key: String,
    pub expires_at: DateTime<Utc>,
    pub expires_in_minutes: u64,
    pub is_valid: bool,
}

/// Price cache with a single fixed TTL.
///
/// Entries accumulate until `clear()`; expired entries are only replaced on
/// the next lookup of the same key. No lock is held while resolving, so two
/// concurrent misses for one key both resolve and the last insert wins.
pub struct PriceCache {
    entries: DashMap<PricingKey, CacheEntry>,
    resolver: Arc<dyn PriceResolver>,
    ttl: Duration,
    wall_ttl: chrono::Duration,
}

impl PriceCache {
    pub fn new(resolver: Arc<dyn PriceResolver>, ttl: Duration) -> Self {
        let ttl = ttl.min(MAX_TTL);
        Self {
            entries: DashMap::new(),
            resolver,
            ttl,
            wall_ttl: chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the cached result for `key` while valid, otherwise resolve and
    /// store a fresh one
    pub fn get_or_resolve(&self, key: &PricingKey) -> PricingResult {
        let now = Instant::now();
        if let Some(entry) = self.entries.get(key) {
            if entry.is_valid(now) {
                metrics::record_cache_lookup("hit");
                return entry.result.clone();
            }
        }

        metrics::record_cache_lookup("miss");
        self.resolve_and_store(key)
    }

    /// Resolve `key` and overwrite whatever is cached for it
    pub fn resolve_and_store(&self, key: &PricingKey) -> PricingResult {
        let result = self.resolver.resolve(key);
        let now = Instant::now();
        let entry = CacheEntry {
            result: result.clone(),
            expires_at: now.checked_add(self.ttl).unwrap_or(now),
            expires_at_utc: result
                .resolved_at
                .checked_add_signed(self.wall_ttl)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        };
        self.entries.insert(key.clone(), entry);
        metrics::set_cache_entries(self.entries.len());
        debug!(key = %key, "Cached pricing result");
        result
    }

    /// Drop every entry, returning how many were removed
    pub fn clear(&self) -> usize {
        let cleared = self.entries.len();
        self.entries.clear();
        metrics::set_cache_entries(0);
        info!(cleared_entries = cleared, "Price cache cleared");
        cleared
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of all entries sorted by key
    pub fn status(&self) -> Vec<CacheEntryStatus> {
        let now = Instant::now();
        let mut statuses: Vec<CacheEntryStatus> = self
            .entries
            .iter()
            .map(|item| {
                let entry = item.value();
                let remaining = entry.expires_at.saturating_duration_since(now);
                CacheEntryStatus {
                    key: item.key().to_string(),
                    expires_at: entry.expires_at_utc,
                    expires_in_minutes: remaining.as_secs() / 60,
                    is_valid: entry.is_valid(now),
                }
            })
            .collect();
        statuses.sort_by(|a, b| a.key.cmp(&b.key));
        statuses
    }
}
