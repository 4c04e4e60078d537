//! Caching layer for planning responses.
//!
//! Planning is pure over immutable network data, so a response for a
//! given (strategy, origin, destination, day, time) query never goes
//! stale; the TTL and capacity bounds exist to keep memory in check, not
//! for freshness.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveTime;
use moka::future::Cache as MokaCache;
use tokio::sync::Mutex;

use crate::domain::{Itinerary, StopId, Weekday};
use crate::network::NetworkData;
use crate::planner::{PlanError, PlanRequest, StrategyKind, TripPlanner};

/// Cache key: the full plan query.
type PlanKey = (StrategyKind, StopId, StopId, Weekday, NaiveTime);

/// Cached candidate list.
type PlanEntry = Arc<Vec<Itinerary>>;

/// Configuration for the plan cache.
#[derive(Debug, Clone)]
pub struct PlanCacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for PlanCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 10_000,
        }
    }
}

/// Planning context with response caching.
///
/// Wraps the `TripPlanner` context behind a mutex so the strategy can be
/// swapped per call, and memoizes candidate lists per exact query.
/// Errors are never cached.
pub struct CachedPlanner {
    planner: Mutex<TripPlanner>,
    network: Arc<NetworkData>,
    cache: MokaCache<PlanKey, PlanEntry>,
}

impl CachedPlanner {
    /// Create a cached planner over the given network.
    pub fn new(network: Arc<NetworkData>, config: &PlanCacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            planner: Mutex::new(TripPlanner::new(StrategyKind::default().strategy())),
            network,
            cache,
        }
    }

    /// Plan with the requested strategy, using the cache if possible.
    pub async fn plan(
        &self,
        kind: StrategyKind,
        request: PlanRequest,
    ) -> Result<PlanEntry, PlanError> {
        let key = (
            kind,
            request.origin,
            request.destination,
            request.day,
            request.ready_time,
        );

        if let Some(cached) = self.cache.get(&key).await {
            return Ok(cached);
        }

        let candidates = {
            let mut planner = self.planner.lock().await;
            planner.set_strategy(kind.strategy());
            planner.plan(&request, &self.network)?
        };

        let entry = Arc::new(candidates);
        self.cache.insert(key, entry.clone()).await;
        Ok(entry)
    }

    /// Number of cached entries (eventually consistent).
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Drop all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}
