use super::{Collector, GameDataEntry, GameDataResponse, ResponseCache, ensure_entries_match, remove_duplicates};
use core::fmt;
use core::time::Duration;
use futures_util::StreamExt;
use futures_util::stream::FuturesUnordered;
use std::sync::Arc;
use std::time::Instant;

const LOG_TARGET: &str = "aggregator";

/// Maximum time a single collector may spend on one query.
pub const DEFAULT_COLLECTOR_TIMEOUT: Duration = Duration::from_secs(30);

/// Runs every registered collector for a game and merges their results.
///
/// A query never fails as a whole. A collector that errors, times out, or produces entries
/// tagged with a foreign content type is logged once and contributes nothing.
pub struct Aggregator {
    collectors: Vec<Arc<dyn Collector>>,
    collector_timeout: Duration,
    cache: Option<ResponseCache>,
}

impl fmt::Debug for Aggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aggregator")
            .field("collectors", &self.collectors.iter().map(|c| c.name()).collect::<Vec<_>>())
            .field("collector_timeout", &self.collector_timeout)
            .field("cache", &self.cache)
            .finish()
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            collectors: Vec::new(),
            collector_timeout: DEFAULT_COLLECTOR_TIMEOUT,
            cache: None,
        }
    }

    #[must_use]
    pub const fn with_collector_timeout(mut self, timeout: Duration) -> Self {
        self.collector_timeout = timeout;
        self
    }

    /// Reuse responses for the same normalized game name for up to `ttl`.
    #[must_use]
    pub fn with_response_cache(mut self, ttl: Duration) -> Self {
        self.cache = Some(ResponseCache::new(ttl));
        self
    }

    pub fn register_collector(&mut self, collector: impl Collector + 'static) {
        self.register_shared_collector(Arc::new(collector));
    }

    /// Register a collector that is also used elsewhere.
    ///
    /// Registering the same instance twice makes it run twice per query.
    pub fn register_shared_collector(&mut self, collector: Arc<dyn Collector>) {
        log::debug!(target: LOG_TARGET, "Registered collector {}", collector.name());
        self.collectors.push(collector);
    }

    #[must_use]
    pub fn collector_count(&self) -> usize {
        self.collectors.len()
    }

    #[must_use]
    pub const fn collector_timeout(&self) -> Duration {
        self.collector_timeout
    }

    /// Collect, deduplicate, and summarize everything the registered collectors know
    /// about `game_name`.
    ///
    /// With no collectors registered this returns an empty response.
    pub async fn collect_game_information(&self, game_name: &str) -> GameDataResponse {
        if let Some(cache) = &self.cache
            && let Some(mut response) = cache.get(game_name)
        {
            response.game_name = game_name.to_string();
            return response;
        }

        let start = Instant::now();
        log::info!(target: LOG_TARGET, "Collecting information about '{game_name}' from {} sources", self.collectors.len());

        let mut pending: FuturesUnordered<_> = self
            .collectors
            .iter()
            .map(|collector| self.run_collector(collector.as_ref(), game_name))
            .collect();

        let mut entries = Vec::new();
        while let Some(collected) = pending.next().await {
            entries.extend(collected);
        }

        let collected_count = entries.len();
        let entries = remove_duplicates(entries);
        log::debug!(
            target: LOG_TARGET,
            "Kept {} of {collected_count} entries for '{game_name}' after removing duplicates",
            entries.len()
        );

        let response = GameDataResponse::new(game_name, entries, start.elapsed());
        log::info!(
            target: LOG_TARGET,
            "Collected {} entries about '{game_name}' in {:.2}s",
            response.stats.total_entries,
            response.stats.collection_duration
        );

        if let Some(cache) = &self.cache {
            cache.insert(game_name, response.clone());
        }

        response
    }

    async fn run_collector(&self, collector: &dyn Collector, game_name: &str) -> Vec<GameDataEntry> {
        let name = collector.name();

        let entries = match tokio::time::timeout(self.collector_timeout, collector.collect(game_name)).await {
            Ok(Ok(entries)) => entries,
            Ok(Err(e)) => {
                log::error!(target: LOG_TARGET, "Could not collect data from {name} for '{game_name}': {e:#}");
                return Vec::new();
            }
            Err(_) => {
                log::error!(
                    target: LOG_TARGET,
                    "Collector {name} timed out after {}s for '{game_name}'",
                    self.collector_timeout.as_secs_f64()
                );
                return Vec::new();
            }
        };

        if let Err(e) = ensure_entries_match(collector.content_type(), &entries) {
            log::error!(target: LOG_TARGET, "Discarding results from {name} for '{game_name}': {e:#}");
            return Vec::new();
        }

        log::debug!(target: LOG_TARGET, "{name} produced {} entries for '{game_name}'", entries.len());
        entries
    }
}
