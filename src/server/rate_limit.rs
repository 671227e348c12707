//! Fixed-window, in-process request limits keyed by client and endpoint.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::config::Config;

/// A rate-limited endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Search,
    Filter,
}

impl Endpoint {
    /// Limited endpoint a request path belongs to, if any.
    pub fn from_path(path: &str) -> Option<Self> {
        if path.contains("/search") {
            Some(Endpoint::Search)
        } else if path.contains("/filter") {
            Some(Endpoint::Filter)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Endpoint::Search => "search",
            Endpoint::Filter => "filter",
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Window {
    count: u32,
    reset_at: Instant,
}

/// Outcome of one rate-limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateDecision {
    pub allowed: bool,
    /// Requests left in the current window.
    pub remaining: u32,
}

#[derive(Debug)]
pub struct RateLimiter {
    search_max: u32,
    filter_max: u32,
    window: Duration,
    windows: RwLock<HashMap<String, Window>>,
}

impl RateLimiter {
    pub fn new(search_max: u32, filter_max: u32, window: Duration) -> Self {
        Self {
            search_max,
            filter_max,
            window,
            windows: RwLock::new(HashMap::new()),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.search_rate_limit,
            config.filter_rate_limit,
            Duration::from_secs(config.rate_limit_window_secs),
        )
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    fn max(&self, endpoint: Endpoint) -> u32 {
        match endpoint {
            Endpoint::Search => self.search_max,
            Endpoint::Filter => self.filter_max,
        }
    }

    /// Counts a request from `client` to `endpoint`.
    pub async fn check(&self, client: &str, endpoint: Endpoint) -> RateDecision {
        self.check_at(client, endpoint, Instant::now()).await
    }

    async fn check_at(&self, client: &str, endpoint: Endpoint, now: Instant) -> RateDecision {
        let max = self.max(endpoint);
        let key = format!("{client}:{}", endpoint.as_str());
        let mut windows = self.windows.write().await;

        match windows.get_mut(&key) {
            Some(window) if now <= window.reset_at => {
                window.count += 1;
                let allowed = window.count <= max;
                if !allowed {
                    warn!("Rate limit exceeded for {key}");
                }
                RateDecision {
                    allowed,
                    remaining: max.saturating_sub(window.count),
                }
            }
            _ => {
                windows.insert(
                    key,
                    Window {
                        count: 1,
                        reset_at: now + self.window,
                    },
                );
                RateDecision {
                    allowed: true,
                    remaining: max.saturating_sub(1),
                }
            }
        }
    }

    /// Drops windows that have already expired.
    pub async fn prune(&self) {
        self.prune_at(Instant::now()).await;
    }

    async fn prune_at(&self, now: Instant) {
        let mut windows = self.windows.write().await;
        let before = windows.len();
        windows.retain(|_, w| now <= w.reset_at);
        debug!("Pruned {} rate limit windows", before - windows.len());
    }

    #[cfg(test)]
    async fn tracked(&self) -> usize {
        self.windows.read().await.len()
    }
}
