//! Keyed fetch binding for impact analyses.
//!
//! - One in-flight request per [`ImpactKey`]; concurrent callers share its result.
//! - Successful payloads are cached for a TTL. A failed refresh is reported and drops the expired entry.
//! - [`QueryState`] is what views observe; it never exposes a result for a superseded key.

use std::{
    collections::HashMap,
    fmt::Display,
    sync::Arc,
    time::{Duration, SystemTime},
};

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::domain::{AnalyticsPayload, ImpactKey};
use crate::util::config::AppConfig;

/// Anything that can produce an analysis for a key.
#[async_trait]
pub trait AnalyticsSource: Send + Sync + 'static {
    type Error: Display + Send;

    async fn analyze(&self, key: &ImpactKey) -> Result<AnalyticsPayload, Self::Error>;
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("analytics request failed: {0}")]
    Source(String),
}

/// Outcome of a finished fetch, tagged with the key it was issued for.
pub type Settled<T> = (ImpactKey, Result<T, QueryError>);

#[derive(Clone, Debug, PartialEq)]
pub enum QueryState<T> {
    Disabled,
    Pending,
    Failed,
    Resolved(T),
}

impl<T: Clone> QueryState<T> {
    /// Reconciles the latest settled fetch against the key the view currently wants.
    pub fn settle(current: Option<&ImpactKey>, settled: Option<&Settled<T>>) -> Self {
        let Some(current) = current else {
            return QueryState::Disabled;
        };
        match settled {
            Some((key, result)) if key == current => match result {
                Ok(data) => QueryState::Resolved(data.clone()),
                Err(_) => QueryState::Failed,
            },
            _ => QueryState::Pending,
        }
    }
}

#[derive(Clone, Debug)]
struct Cached {
    payload: AnalyticsPayload,
    fetched_at: SystemTime,
}

impl Cached {
    fn new(payload: AnalyticsPayload) -> Self {
        Self {
            payload,
            fetched_at: SystemTime::now(),
        }
    }

    fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at
            .elapsed()
            .map(|age| age < ttl)
            .unwrap_or(false)
    }
}

type Slot = Arc<Mutex<Option<Cached>>>;

pub struct QueryClient<S> {
    source: Arc<S>,
    slots: Arc<Mutex<HashMap<ImpactKey, Slot>>>,
    ttl: Duration,
    retry_attempts: u32,
    retry_backoff: Duration,
}

impl<S> Clone for QueryClient<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            slots: Arc::clone(&self.slots),
            ttl: self.ttl,
            retry_attempts: self.retry_attempts,
            retry_backoff: self.retry_backoff,
        }
    }
}

impl<S: AnalyticsSource> QueryClient<S> {
    pub fn new(source: S) -> Self {
        let defaults = AppConfig::default();
        Self {
            source: Arc::new(source),
            slots: Arc::new(Mutex::new(HashMap::new())),
            ttl: defaults.cache_ttl,
            retry_attempts: defaults.retry_attempts,
            retry_backoff: defaults.retry_backoff,
        }
    }

    pub fn from_config(source: S, config: &AppConfig) -> Self {
        Self::new(source)
            .with_ttl(config.cache_ttl)
            .with_retry(config.retry_attempts, config.retry_backoff)
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// `attempts` extra tries after the first failure; the n-th retry waits `backoff * n`.
    pub fn with_retry(mut self, attempts: u32, backoff: Duration) -> Self {
        self.retry_attempts = attempts;
        self.retry_backoff = backoff;
        self
    }

    #[cfg(test)]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolves the analysis for `key`, serving the cache when it is fresh.
    pub async fn fetch(&self, key: &ImpactKey) -> Result<AnalyticsPayload, QueryError> {
        let slot = self.slot(key).await;
        // Held for the whole request so a second caller for this key waits instead of refetching.
        let mut cached = slot.lock().await;

        if let Some(entry) = cached.as_ref().filter(|entry| entry.is_fresh(self.ttl)) {
            debug!("[query] serving cached analysis for {key}");
            return Ok(entry.payload.clone());
        }

        match self.fetch_with_retry(key).await {
            Ok(payload) => {
                *cached = Some(Cached::new(payload.clone()));
                Ok(payload)
            }
            Err(error) => {
                if cached.take().is_some() {
                    debug!("[query] dropped expired analysis for {key}");
                }
                Err(error)
            }
        }
    }

    /// Convenience for views: `None` when the key is disabled.
    pub async fn fetch_settled(&self, key: Option<ImpactKey>) -> Option<Settled<AnalyticsPayload>> {
        let key = key?;
        let result = self.fetch(&key).await;
        if let Err(error) = &result {
            warn!("[query] {key}: {error}");
        }
        Some((key, result))
    }

    /// Empties every slot. Slots stay registered so an in-flight fetch keeps its lock.
    pub async fn clear(&self) {
        let slots: Vec<Slot> = self.slots.lock().await.values().cloned().collect();
        for slot in slots {
            *slot.lock().await = None;
        }
        prune_idle(&mut *self.slots.lock().await);
    }

    /// Keys with a stored payload and when it was fetched. In-flight keys are skipped.
    pub async fn cached_entries(&self) -> Vec<(ImpactKey, SystemTime)> {
        let mut slots = self.slots.lock().await;
        prune_idle(&mut slots);
        let mut entries: Vec<_> = slots
            .iter()
            .filter_map(|(key, slot)| {
                let cached = slot.try_lock().ok()?;
                let fetched_at = cached.as_ref().map(|entry| entry.fetched_at);
                fetched_at.map(|time| (key.clone(), time))
            })
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    async fn slot(&self, key: &ImpactKey) -> Slot {
        let mut slots = self.slots.lock().await;
        prune_idle(&mut slots);
        Arc::clone(slots.entry(key.clone()).or_default())
    }

    async fn fetch_with_retry(&self, key: &ImpactKey) -> Result<AnalyticsPayload, QueryError> {
        let mut attempt = 0;
        loop {
            match self.source.analyze(key).await {
                Ok(payload) => return Ok(payload),
                Err(error) if attempt < self.retry_attempts => {
                    attempt += 1;
                    warn!(
                        "[query] attempt {attempt} for {key} failed: {error}; retrying ({} left)",
                        self.retry_attempts - attempt
                    );
                    tokio::time::sleep(backoff_for(self.retry_backoff, attempt)).await;
                }
                Err(error) => return Err(QueryError::Source(error.to_string())),
            }
        }
    }
}

/// Drops slots nobody holds that have nothing cached. Callers must hold the map lock.
fn prune_idle(slots: &mut HashMap<ImpactKey, Slot>) {
    slots.retain(|_, slot| {
        Arc::strong_count(slot) > 1 || slot.try_lock().map_or(true, |cached| cached.is_some())
    });
}

fn backoff_for(backoff: Duration, attempt: u32) -> Duration {
    backoff.checked_mul(attempt).unwrap_or(Duration::MAX)
}
