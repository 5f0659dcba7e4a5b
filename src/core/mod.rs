pub mod api_client;
pub mod contact_form;
pub mod fallback;
pub mod hooks;
pub mod mapping;
pub mod query_cache;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::domain::model::{SubmissionPayload, SubmissionResult};
pub use crate::domain::ports::{ConfigProvider, ContentSource};
pub use crate::utils::error::Result;
