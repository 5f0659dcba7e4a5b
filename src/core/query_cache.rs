//! Process-wide query cache keyed by query name.
//!
//! Each key owns a slot with a fetch lock. A caller that finds the value stale takes the lock,
//! and a caller that had to wait for it first checks whether the fetch it waited on settled after
//! its own request began. If so it shares that outcome instead of issuing another request, so a
//! key never has more than one request in flight.

use crate::domain::ports::ConfigProvider;
use crate::utils::error::ContentError;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tokio::sync::Mutex as FetchLock;

pub const CONTENT_STALE_TIME: Duration = Duration::from_secs(5 * 60);
pub const SETTINGS_STALE_TIME: Duration = Duration::from_secs(10 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    SiteSettings,
    Hero,
    Services,
    Portfolio,
    Contact,
}

impl QueryKey {
    pub const ALL: [QueryKey; 5] = [
        QueryKey::SiteSettings,
        QueryKey::Hero,
        QueryKey::Services,
        QueryKey::Portfolio,
        QueryKey::Contact,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            QueryKey::SiteSettings => "siteSettings",
            QueryKey::Hero => "heroData",
            QueryKey::Services => "servicesData",
            QueryKey::Portfolio => "portfolioData",
            QueryKey::Contact => "contactData",
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub content_stale_time: Duration,
    pub settings_stale_time: Duration,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            content_stale_time: CONTENT_STALE_TIME,
            settings_stale_time: SETTINGS_STALE_TIME,
        }
    }
}

impl CachePolicy {
    pub fn from_config(config: &dyn ConfigProvider) -> Self {
        Self {
            content_stale_time: config.content_stale_time(),
            settings_stale_time: config.settings_stale_time(),
        }
    }

    pub fn stale_time(&self, key: QueryKey) -> Duration {
        match key {
            QueryKey::SiteSettings => self.settings_stale_time,
            _ => self.content_stale_time,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// Serve the cached value while it is inside the staleness window.
    IfStale,
    /// Ignore staleness (`refetch`).
    Force,
}

/// Snapshot of one query as a consumer sees it.
#[derive(Debug)]
pub struct QueryState<T> {
    pub data: Option<Arc<T>>,
    /// True only while no value and no error exist yet.
    pub is_loading: bool,
    pub is_fetching: bool,
    /// Outcome of the most recent attempt, cleared by the next success.
    pub error: Option<Arc<ContentError>>,
}

impl<T> Clone for QueryState<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            is_loading: self.is_loading,
            is_fetching: self.is_fetching,
            error: self.error.clone(),
        }
    }
}

impl<T> QueryState<T> {
    pub fn is_success(&self) -> bool {
        self.data.is_some() && self.error.is_none()
    }
}

type AnyValue = Arc<dyn Any + Send + Sync>;

#[derive(Default)]
struct Entry {
    value: Option<AnyValue>,
    fetched_at: Option<Instant>,
    error: Option<Arc<ContentError>>,
    settled_at: Option<Instant>,
    in_flight: bool,
}

#[derive(Default)]
struct Slot {
    fetch_lock: FetchLock<()>,
    entry: Mutex<Entry>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

struct InFlight<'a>(&'a Slot);

impl<'a> InFlight<'a> {
    fn enter(slot: &'a Slot) -> Self {
        lock(&slot.entry).in_flight = true;
        Self(slot)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        lock(&self.0.entry).in_flight = false;
    }
}

pub struct QueryClient {
    policy: CachePolicy,
    slots: Mutex<HashMap<QueryKey, Arc<Slot>>>,
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new(CachePolicy::default())
    }
}

impl QueryClient {
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            policy,
            slots: Mutex::new(HashMap::new()),
        }
    }

    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    fn slot(&self, key: QueryKey) -> Arc<Slot> {
        let mut slots = lock(&self.slots);
        Arc::clone(slots.entry(key).or_default())
    }

    fn is_fresh(&self, slot: &Slot, key: QueryKey) -> bool {
        let entry = lock(&slot.entry);
        match (&entry.value, entry.fetched_at) {
            (Some(_), Some(fetched_at)) => fetched_at.elapsed() < self.policy.stale_time(key),
            _ => false,
        }
    }

    fn settled_since(slot: &Slot, requested_at: Instant) -> bool {
        lock(&slot.entry)
            .settled_at
            .is_some_and(|settled_at| settled_at >= requested_at)
    }

    fn snapshot<T: Send + Sync + 'static>(slot: &Slot) -> QueryState<T> {
        let entry = lock(&slot.entry);
        let data = entry
            .value
            .clone()
            .and_then(|value| value.downcast::<T>().ok());

        QueryState {
            is_loading: data.is_none() && entry.error.is_none(),
            is_fetching: entry.in_flight,
            error: entry.error.clone(),
            data,
        }
    }

    /// Current state without triggering a request.
    pub fn peek<T: Send + Sync + 'static>(&self, key: QueryKey) -> QueryState<T> {
        Self::snapshot(&self.slot(key))
    }

    pub async fn fetch<T, F, Fut>(&self, key: QueryKey, mode: FetchMode, fetcher: F) -> QueryState<T>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ContentError>>,
    {
        let slot = self.slot(key);
        let requested_at = Instant::now();

        if mode == FetchMode::IfStale && self.is_fresh(&slot, key) {
            tracing::debug!("Cache hit for {}", key);
            return Self::snapshot(&slot);
        }

        let _fetch_guard = slot.fetch_lock.lock().await;

        if Self::settled_since(&slot, requested_at)
            || (mode == FetchMode::IfStale && self.is_fresh(&slot, key))
        {
            tracing::debug!("Sharing in-flight result for {}", key);
            return Self::snapshot(&slot);
        }

        tracing::debug!("Fetching {} ({:?})", key, mode);
        let outcome = {
            let _in_flight = InFlight::enter(&slot);
            fetcher().await
        };

        {
            let mut entry = lock(&slot.entry);
            let now = Instant::now();
            entry.settled_at = Some(now);
            match outcome {
                Ok(value) => {
                    entry.value = Some(Arc::new(value));
                    entry.fetched_at = Some(now);
                    entry.error = None;
                }
                Err(err) => {
                    tracing::warn!("Query {} failed: {}", key, err);
                    entry.error = Some(Arc::new(err));
                }
            }
        }

        Self::snapshot(&slot)
    }

    /// Seed a value as if it had just been fetched.
    pub fn set_query_data<T: Send + Sync + 'static>(&self, key: QueryKey, value: T) {
        let slot = self.slot(key);
        let mut entry = lock(&slot.entry);
        let now = Instant::now();
        entry.value = Some(Arc::new(value));
        entry.fetched_at = Some(now);
        entry.settled_at = Some(now);
        entry.error = None;
    }

    /// Marks the cached value stale; it is still served to `peek` until replaced.
    pub fn invalidate(&self, key: QueryKey) {
        let slot = self.slot(key);
        lock(&slot.entry).fetched_at = None;
    }

    /// Forgets every value and error. Slots survive so a fetch already in flight keeps
    /// its lock and later callers still wait on it.
    pub fn clear(&self) {
        for slot in lock(&self.slots).values() {
            let mut entry = lock(&slot.entry);
            entry.value = None;
            entry.fetched_at = None;
            entry.error = None;
            entry.settled_at = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_fetch(
        calls: &AtomicUsize,
        value: u32,
    ) -> impl Future<Output = Result<u32, ContentError>> + '_ {
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            Ok(value)
        }
    }

    async fn slow_counting_fetch(calls: &AtomicUsize, value: u32) -> Result<u32, ContentError> {
        calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(50)).await;
        Ok(value)
    }

    #[test]
    fn test_stale_time_per_key() {
        let policy = CachePolicy::default();
        assert_eq!(policy.stale_time(QueryKey::Hero), Duration::from_secs(300));
        assert_eq!(policy.stale_time(QueryKey::Portfolio), Duration::from_secs(300));
        assert_eq!(policy.stale_time(QueryKey::SiteSettings), Duration::from_secs(600));
    }

    #[tokio::test]
    async fn test_peek_before_first_fetch_is_loading() {
        let client = QueryClient::default();
        let state: QueryState<u32> = client.peek(QueryKey::Hero);
        assert!(state.is_loading);
        assert!(state.data.is_none());
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_fresh_value_is_served_from_cache() {
        let client = QueryClient::default();
        let calls = AtomicUsize::new(0);

        let first = client
            .fetch(QueryKey::Hero, FetchMode::IfStale, || counting_fetch(&calls, 1))
            .await;
        let second = client
            .fetch(QueryKey::Hero, FetchMode::IfStale, || counting_fetch(&calls, 2))
            .await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(first.data.as_ref().unwrap(), second.data.as_ref().unwrap()));
        assert_eq!(*second.data.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_fetches_share_one_request() {
        let client = QueryClient::default();
        let calls = AtomicUsize::new(0);

        let (a, b) = tokio::join!(
            client.fetch(QueryKey::Contact, FetchMode::IfStale, || counting_fetch(&calls, 7)),
            client.fetch(QueryKey::Contact, FetchMode::IfStale, || counting_fetch(&calls, 8)),
        );

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(a.data.as_ref().unwrap(), b.data.as_ref().unwrap()));
    }

    #[tokio::test]
    async fn test_force_fetch_while_in_flight_is_not_duplicated() {
        let client = QueryClient::default();
        let calls = AtomicUsize::new(0);

        let (a, b) = tokio::join!(
            client.fetch(QueryKey::Hero, FetchMode::IfStale, || counting_fetch(&calls, 1)),
            client.fetch(QueryKey::Hero, FetchMode::Force, || counting_fetch(&calls, 2)),
        );

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(a.data, b.data);
    }

    #[tokio::test]
    async fn test_force_fetch_ignores_staleness() {
        let client = QueryClient::default();
        let calls = AtomicUsize::new(0);

        client
            .fetch(QueryKey::Hero, FetchMode::IfStale, || counting_fetch(&calls, 1))
            .await;
        let refreshed = client
            .fetch(QueryKey::Hero, FetchMode::Force, || counting_fetch(&calls, 2))
            .await;

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(*refreshed.data.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_zero_stale_time_always_refetches() {
        let client = QueryClient::new(CachePolicy {
            content_stale_time: Duration::ZERO,
            settings_stale_time: SETTINGS_STALE_TIME,
        });
        let calls = AtomicUsize::new(0);

        for value in 0..3 {
            client
                .fetch(QueryKey::Services, FetchMode::IfStale, || counting_fetch(&calls, value))
                .await;
        }
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        for value in 0..3 {
            client
                .fetch(QueryKey::SiteSettings, FetchMode::IfStale, || counting_fetch(&calls, value))
                .await;
        }
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_value() {
        let client = QueryClient::default();
        client.set_query_data(QueryKey::Portfolio, 10u32);

        let state = client
            .fetch(QueryKey::Portfolio, FetchMode::Force, || async {
                Err::<u32, _>(ContentError::Network {
                    endpoint: "/wp-json/wp/v2/portfolio".to_string(),
                    status: Some(503),
                    message: "HTTP error! status: 503".to_string(),
                })
            })
            .await;

        assert_eq!(state.data.as_deref(), Some(&10));
        assert!(state.error.is_some());
        assert!(!state.is_loading);
        assert!(!state.is_success());
    }

    #[tokio::test]
    async fn test_invalidate_and_clear() {
        let client = QueryClient::default();
        let calls = AtomicUsize::new(0);

        client.set_query_data(QueryKey::Hero, 1u32);
        client.invalidate(QueryKey::Hero);
        assert_eq!(client.peek::<u32>(QueryKey::Hero).data.as_deref(), Some(&1));

        let state = client
            .fetch(QueryKey::Hero, FetchMode::IfStale, || counting_fetch(&calls, 5))
            .await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(state.data.as_deref(), Some(&5));

        client.clear();
        assert!(client.peek::<u32>(QueryKey::Hero).is_loading);
    }

    #[tokio::test]
    async fn test_clear_during_fetch_keeps_single_request() {
        let client = QueryClient::default();
        let calls = AtomicUsize::new(0);
        let first = client.fetch(QueryKey::Hero, FetchMode::IfStale, || {
            slow_counting_fetch(&calls, 3)
        });
        let second = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            client.clear();
            client
                .fetch(QueryKey::Hero, FetchMode::IfStale, || {
                    slow_counting_fetch(&calls, 4)
                })
                .await
        };
        let (a, b) = tokio::join!(first, second);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(a.data.as_deref(), Some(&3));
        assert!(Arc::ptr_eq(a.data.as_ref().unwrap(), b.data.as_ref().unwrap()));
    }
}
