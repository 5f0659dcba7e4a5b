//! Three-state rendering contract shared by every section.

use crate::core::hooks::{ContentQueries, Query, SectionQuery};
use crate::core::query_cache::{QueryKey, QueryState};
use crate::domain::model::Rating;
use std::fmt;

/// Retry action carried by the error view. Running it calls `refetch` on the failed query.
pub struct Retry<T> {
    query: Query<T>,
}

impl<T: SectionQuery> Retry<T> {
    pub fn key(&self) -> QueryKey {
        T::KEY
    }

    pub async fn run(&self) -> QueryState<T> {
        tracing::info!("🔄 Retrying {}", T::KEY);
        self.query.refetch().await
    }
}

impl<T> fmt::Debug for Retry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Retry")
            .field("query", &std::any::type_name::<T>())
            .finish()
    }
}

/// What a section shows for a given query state.
///
/// Precedence: loading, then error, then content. `Empty` only happens when the query settled
/// without data, which the mapping layer normally prevents by substituting fallbacks.
#[derive(Debug)]
pub enum SectionView<'a, T> {
    Loading,
    Error { message: String, retry: Retry<T> },
    Content(&'a T),
    Empty,
}

pub fn section_view<'a, T: SectionQuery>(
    query: &Query<T>,
    state: &'a QueryState<T>,
) -> SectionView<'a, T> {
    if state.is_loading {
        return SectionView::Loading;
    }
    if let Some(error) = &state.error {
        return SectionView::Error {
            message: error.user_friendly_message(),
            retry: Retry {
                query: query.clone(),
            },
        };
    }
    match &state.data {
        Some(data) => SectionView::Content(data.as_ref()),
        None => SectionView::Empty,
    }
}

async fn retry_if_failed<T: SectionQuery>(query: Query<T>) -> bool {
    let state = query.state();
    match section_view(&query, &state) {
        SectionView::Error { retry, .. } => retry.run().await.error.is_none(),
        _ => false,
    }
}

/// Runs the retry action of every section currently showing its error view.
/// Returns how many of them recovered.
pub async fn retry_failed_sections(queries: &ContentQueries) -> usize {
    let recovered = tokio::join!(
        retry_if_failed(queries.site_settings()),
        retry_if_failed(queries.hero()),
        retry_if_failed(queries.services()),
        retry_if_failed(queries.portfolio()),
        retry_if_failed(queries.contact()),
    );
    [recovered.0, recovered.1, recovered.2, recovered.3, recovered.4]
        .into_iter()
        .filter(|ok| *ok)
        .count()
}

/// Closed icon set for service cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ServiceIcon {
    #[default]
    Globe,
    Search,
    TrendingUp,
    Smartphone,
    Users,
    Zap,
}

impl ServiceIcon {
    /// 未知名稱一律顯示 Globe
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "Search" => ServiceIcon::Search,
            "TrendingUp" => ServiceIcon::TrendingUp,
            "Smartphone" => ServiceIcon::Smartphone,
            "Users" => ServiceIcon::Users,
            "Zap" => ServiceIcon::Zap,
            _ => ServiceIcon::Globe,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ServiceIcon::Globe => "Globe",
            ServiceIcon::Search => "Search",
            ServiceIcon::TrendingUp => "TrendingUp",
            ServiceIcon::Smartphone => "Smartphone",
            ServiceIcon::Users => "Users",
            ServiceIcon::Zap => "Zap",
        }
    }

    pub fn glyph(self) -> char {
        match self {
            ServiceIcon::Globe => '🌐',
            ServiceIcon::Search => '🔍',
            ServiceIcon::TrendingUp => '📈',
            ServiceIcon::Smartphone => '📱',
            ServiceIcon::Users => '👥',
            ServiceIcon::Zap => '⚡',
        }
    }
}

impl fmt::Display for ServiceIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub const STAR: char = '★';

/// Exactly `rating` stars.
pub fn star_glyphs(rating: Rating) -> String {
    std::iter::repeat(STAR)
        .take(usize::from(rating.value()))
        .collect()
}
