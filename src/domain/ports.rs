use crate::domain::model::{
    ContactContent, HeroContent, PortfolioCatalog, ServiceCatalog, SiteSettings, SubmissionPayload,
    SubmissionResult,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Backend that produces fully-resolved view-models and accepts contact submissions.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch_site_settings(&self) -> Result<SiteSettings>;
    async fn fetch_hero(&self) -> Result<HeroContent>;
    async fn fetch_services(&self) -> Result<ServiceCatalog>;
    async fn fetch_portfolio(&self) -> Result<PortfolioCatalog>;
    async fn fetch_contact(&self) -> Result<ContactContent>;

    /// `Ok` for any well-formed backend answer, including rejections.
    async fn submit_submission(&self, payload: &SubmissionPayload) -> Result<SubmissionResult>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn form_id(&self) -> u32;
    fn request_timeout(&self) -> Duration;
    fn content_stale_time(&self) -> Duration;
    fn settings_stale_time(&self) -> Duration;
}
