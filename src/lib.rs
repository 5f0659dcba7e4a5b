pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::app::{
    render_page, retry_failed_sections, section_view, Retry, SectionView, ServiceIcon,
    TextRenderer,
};
pub use crate::core::api_client::WordPressClient;
pub use crate::core::contact_form::{ContactForm, FormField, Notification, SubmitOutcome};
pub use crate::core::hooks::{ContactFormMutation, ContentQueries, Query};
pub use crate::core::query_cache::{CachePolicy, QueryClient, QueryKey, QueryState};
pub use crate::domain::model::*;
pub use crate::domain::ports::{ConfigProvider, ContentSource};
pub use crate::utils::error::{ContentError, Result};
