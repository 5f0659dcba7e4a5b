//! Per-section query handles on top of [`QueryClient`], plus the contact-form mutation.

use crate::core::query_cache::{FetchMode, QueryClient, QueryKey, QueryState};
use crate::domain::model::{
    ContactContent, HeroContent, PortfolioCatalog, ServiceCatalog, SiteSettings,
    SubmissionPayload, SubmissionResult,
};
use crate::domain::ports::ContentSource;
use crate::utils::error::{ContentError, Result};
use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub type ContentFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// A view-model that can be loaded through the query cache.
pub trait SectionQuery: Sized + Send + Sync + 'static {
    const KEY: QueryKey;

    fn fetch_from(source: &dyn ContentSource) -> ContentFuture<'_, Self>;
}

impl SectionQuery for SiteSettings {
    const KEY: QueryKey = QueryKey::SiteSettings;

    fn fetch_from(source: &dyn ContentSource) -> ContentFuture<'_, Self> {
        source.fetch_site_settings()
    }
}

impl SectionQuery for HeroContent {
    const KEY: QueryKey = QueryKey::Hero;

    fn fetch_from(source: &dyn ContentSource) -> ContentFuture<'_, Self> {
        source.fetch_hero()
    }
}

impl SectionQuery for ServiceCatalog {
    const KEY: QueryKey = QueryKey::Services;

    fn fetch_from(source: &dyn ContentSource) -> ContentFuture<'_, Self> {
        source.fetch_services()
    }
}

impl SectionQuery for PortfolioCatalog {
    const KEY: QueryKey = QueryKey::Portfolio;

    fn fetch_from(source: &dyn ContentSource) -> ContentFuture<'_, Self> {
        source.fetch_portfolio()
    }
}

impl SectionQuery for ContactContent {
    const KEY: QueryKey = QueryKey::Contact;

    fn fetch_from(source: &dyn ContentSource) -> ContentFuture<'_, Self> {
        source.fetch_contact()
    }
}

/// Handle for one section's data: `load`, `refetch` and a non-blocking `state`.
pub struct Query<T> {
    source: Arc<dyn ContentSource>,
    cache: Arc<QueryClient>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Query<T> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            cache: Arc::clone(&self.cache),
            _marker: PhantomData,
        }
    }
}

impl<T: SectionQuery> Query<T> {
    pub fn key(&self) -> QueryKey {
        T::KEY
    }

    pub fn state(&self) -> QueryState<T> {
        self.cache.peek(T::KEY)
    }

    /// Cached value inside the staleness window, otherwise one shared request.
    pub async fn load(&self) -> QueryState<T> {
        self.run(FetchMode::IfStale).await
    }

    pub async fn refetch(&self) -> QueryState<T> {
        self.run(FetchMode::Force).await
    }

    async fn run(&self, mode: FetchMode) -> QueryState<T> {
        let source = Arc::clone(&self.source);
        self.cache
            .fetch(T::KEY, mode, move || async move {
                T::fetch_from(source.as_ref()).await
            })
            .await
    }
}

#[derive(Clone)]
pub struct ContentQueries {
    source: Arc<dyn ContentSource>,
    cache: Arc<QueryClient>,
}

impl ContentQueries {
    pub fn new(source: Arc<dyn ContentSource>, cache: Arc<QueryClient>) -> Self {
        Self { source, cache }
    }

    pub fn cache(&self) -> &Arc<QueryClient> {
        &self.cache
    }

    fn query<T: SectionQuery>(&self) -> Query<T> {
        Query {
            source: Arc::clone(&self.source),
            cache: Arc::clone(&self.cache),
            _marker: PhantomData,
        }
    }

    pub fn site_settings(&self) -> Query<SiteSettings> {
        self.query()
    }

    pub fn hero(&self) -> Query<HeroContent> {
        self.query()
    }

    pub fn services(&self) -> Query<ServiceCatalog> {
        self.query()
    }

    pub fn portfolio(&self) -> Query<PortfolioCatalog> {
        self.query()
    }

    pub fn contact(&self) -> Query<ContactContent> {
        self.query()
    }

    pub fn contact_form(&self) -> ContactFormMutation {
        ContactFormMutation::new(Arc::clone(&self.source))
    }

    /// Loads every section concurrently.
    pub async fn prefetch_all(&self) {
        let (site, hero, services, portfolio, contact) = (
            self.site_settings(),
            self.hero(),
            self.services(),
            self.portfolio(),
            self.contact(),
        );
        tokio::join!(
            site.load(),
            hero.load(),
            services.load(),
            portfolio.load(),
            contact.load(),
        );
    }

    pub fn any_loading(&self) -> bool {
        self.site_settings().state().is_loading
            || self.hero().state().is_loading
            || self.services().state().is_loading
            || self.portfolio().state().is_loading
            || self.contact().state().is_loading
    }

    pub fn any_errors(&self) -> Option<Vec<Arc<ContentError>>> {
        let errors: Vec<Arc<ContentError>> = [
            self.site_settings().state().error,
            self.hero().state().error,
            self.services().state().error,
            self.portfolio().state().error,
            self.contact().state().error,
        ]
        .into_iter()
        .flatten()
        .collect();

        if errors.is_empty() {
            None
        } else {
            Some(errors)
        }
    }
}

struct Pending<'a>(&'a AtomicUsize);

impl<'a> Pending<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for Pending<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Contact form submission. Calls are never de-duplicated; each one is a separate POST.
#[derive(Clone)]
pub struct ContactFormMutation {
    source: Arc<dyn ContentSource>,
    pending: Arc<AtomicUsize>,
}

impl ContactFormMutation {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self {
            source,
            pending: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst) > 0
    }

    pub async fn mutate_async(&self, payload: SubmissionPayload) -> Result<SubmissionResult> {
        let _pending = Pending::enter(&self.pending);
        self.source.submit_submission(&payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query_cache::{CachePolicy, SETTINGS_STALE_TIME};
    use crate::core::test_support::{FakeSource, SubmitReply};
    use crate::domain::model::{ContactSubmission, SubmissionStatus};
    use std::time::Duration;

    fn queries(source: &Arc<FakeSource>) -> ContentQueries {
        ContentQueries::new(source.clone(), Arc::new(QueryClient::default()))
    }

    fn payload() -> SubmissionPayload {
        ContactSubmission {
            name: "John Smith".to_string(),
            email: "john@business.com".to_string(),
            project: "New website".to_string(),
            ..Default::default()
        }
        .freeze()
        .unwrap()
    }

    #[tokio::test]
    async fn test_two_consumers_mounting_together_share_one_request() {
        let source = Arc::new(FakeSource::new());
        let queries = queries(&source);
        let (first, second) = (queries.hero(), queries.hero());

        let (a, b) = tokio::join!(first.load(), second.load());

        assert_eq!(source.calls("hero"), 1);
        assert!(Arc::ptr_eq(a.data.as_ref().unwrap(), b.data.as_ref().unwrap()));
    }

    #[tokio::test]
    async fn test_portfolio_is_cached_inside_staleness_window() {
        let source = Arc::new(FakeSource::new());
        let queries = queries(&source);

        let first = queries.portfolio().load().await;
        let second = queries.portfolio().load().await;

        assert_eq!(source.calls("portfolio"), 1);
        assert!(Arc::ptr_eq(
            first.data.as_ref().unwrap(),
            second.data.as_ref().unwrap()
        ));
    }

    #[tokio::test]
    async fn test_site_settings_has_its_own_window() {
        let source = Arc::new(FakeSource::new());
        let cache = Arc::new(QueryClient::new(CachePolicy {
            content_stale_time: Duration::ZERO,
            settings_stale_time: SETTINGS_STALE_TIME,
        }));
        let queries = ContentQueries::new(source.clone(), cache);

        queries.hero().load().await;
        queries.hero().load().await;
        queries.site_settings().load().await;
        queries.site_settings().load().await;

        assert_eq!(source.calls("hero"), 2);
        assert_eq!(source.calls("settings"), 1);
    }

    #[tokio::test]
    async fn test_failed_load_exposes_error_and_refetch_retries() {
        let source = Arc::new(FakeSource::new());
        source.set_failing(true);
        let queries = queries(&source);
        let hero = queries.hero();

        let state = hero.load().await;
        assert!(state.error.is_some());
        assert!(!state.is_loading);
        assert!(state.data.is_none());
        assert!(state.error.unwrap().is_network());

        source.set_failing(false);
        let state = hero.refetch().await;
        assert_eq!(source.calls("hero"), 2);
        assert!(state.error.is_none());
        assert!(state.is_success());
        assert_eq!(state.data.unwrap().headline, HeroContent::default().headline);
    }

    #[tokio::test]
    async fn test_state_snapshot_does_not_fetch() {
        let source = Arc::new(FakeSource::new());
        let queries = queries(&source);

        let state = queries.contact().state();
        assert!(state.is_loading);
        assert_eq!(source.calls("contact"), 0);
    }

    #[tokio::test]
    async fn test_aggregate_loading_and_errors() {
        let source = Arc::new(FakeSource::new());
        let queries = queries(&source);

        assert!(queries.any_loading());
        assert!(queries.any_errors().is_none());

        queries.prefetch_all().await;
        assert!(!queries.any_loading());
        assert!(queries.any_errors().is_none());

        source.set_failing(true);
        queries.services().refetch().await;
        queries.contact().refetch().await;

        let errors = queries.any_errors().unwrap();
        assert_eq!(errors.len(), 2);
        assert!(!queries.any_loading());
    }

    #[tokio::test]
    async fn test_mutation_is_pending_only_while_in_flight() {
        let (source, gate) = FakeSource::new().with_submit_gate();
        let source = Arc::new(source);
        let mutation = queries(&source).contact_form();
        assert!(!mutation.is_pending());

        let task = {
            let mutation = mutation.clone();
            tokio::spawn(async move { mutation.mutate_async(payload()).await })
        };

        for _ in 0..10 {
            if mutation.is_pending() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(mutation.is_pending());

        gate.add_permits(1);
        let result = task.await.unwrap().unwrap();
        assert_eq!(result.status, SubmissionStatus::Success);
        assert!(!mutation.is_pending());
    }

    #[tokio::test]
    async fn test_mutation_calls_are_not_deduplicated() {
        let source = Arc::new(FakeSource::new());
        let mutation = queries(&source).contact_form();

        let (a, b) = tokio::join!(
            mutation.mutate_async(payload()),
            mutation.mutate_async(payload())
        );

        assert!(a.is_ok());
        assert!(b.is_ok());
        assert_eq!(source.calls("submit"), 2);
    }

    #[tokio::test]
    async fn test_mutation_rejects_with_transport_error() {
        let source = Arc::new(FakeSource::new());
        source.reply_with(SubmitReply::TransportFailure);
        let mutation = queries(&source).contact_form();

        let err = mutation.mutate_async(payload()).await.unwrap_err();
        assert!(err.is_network());
        assert!(!mutation.is_pending());
    }
}
