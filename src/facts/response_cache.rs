use super::GameDataResponse;
use core::time::Duration;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Instant;

const LOG_TARGET: &str = "     cache";

/// In-memory cache of complete responses, keyed by normalized game name.
///
/// Nothing is persisted. Entries older than the TTL are discarded on lookup, and every
/// insert sweeps out all stale entries.
#[derive(Debug)]
pub struct ResponseCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, (Instant, GameDataResponse)>>,
}

impl ResponseCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return a cached response for `game_name` if one is still fresh.
    #[must_use]
    pub fn get(&self, game_name: &str) -> Option<GameDataResponse> {
        let key = normalize_game_name(game_name);
        let mut entries = self.entries.lock().expect("lock not poisoned");

        match entries.get(&key) {
            Some((stored_at, response)) if stored_at.elapsed() < self.ttl => {
                log::debug!(target: LOG_TARGET, "Using cached response for '{key}'");
                Some(response.clone())
            }
            Some(_) => {
                log::debug!(target: LOG_TARGET, "Cached response for '{key}' has expired");
                let _ = entries.remove(&key);
                None
            }
            None => None,
        }
    }

    pub fn insert(&self, game_name: &str, response: GameDataResponse) {
        let key = normalize_game_name(game_name);
        let mut entries = self.entries.lock().expect("lock not poisoned");

        let before = entries.len();
        entries.retain(|_, (stored_at, _)| stored_at.elapsed() < self.ttl);
        let evicted = before - entries.len();
        if evicted > 0 {
            log::debug!(target: LOG_TARGET, "Evicted {evicted} expired responses");
        }

        let _ = entries.insert(key, (Instant::now(), response));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().expect("lock not poisoned").len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Case-fold a game name and collapse its whitespace so equivalent queries share a key.
#[must_use]
pub fn normalize_game_name(game_name: &str) -> String {
    game_name.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}
