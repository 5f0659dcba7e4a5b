use crate::core::mapping;
use crate::domain::model::{
    ContactContent, HeroContent, PortfolioCatalog, ServiceCatalog, SiteSettings,
    SubmissionPayload, SubmissionResult,
};
use crate::domain::ports::{ConfigProvider, ContentSource};
use crate::domain::raw::{
    RawFeedbackResponse, RawHomeFields, RawPage, RawPortfolioPost, RawSiteOptions,
    RawTestimonialPost,
};
use crate::utils::error::{ContentError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::multipart::Form;
use reqwest::Client;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    SiteOptions,
    HomePage,
    Portfolio,
    Testimonials,
    Feedback(u32),
}

impl Endpoint {
    pub fn path(&self) -> String {
        match self {
            Endpoint::SiteOptions => "/wp-json/acf/v3/options".to_string(),
            Endpoint::HomePage => "/wp-json/wp/v2/pages?slug=home&_embed".to_string(),
            Endpoint::Portfolio => "/wp-json/wp/v2/portfolio?_embed".to_string(),
            Endpoint::Testimonials => "/wp-json/wp/v2/testimonials?_embed".to_string(),
            Endpoint::Feedback(form_id) => format!(
                "/wp-json/contact-form-7/v1/contact-forms/{}/feedback",
                form_id
            ),
        }
    }
}

/// WordPress REST client: ACF fields for content, Contact Form 7 for submissions.
#[derive(Debug, Clone)]
pub struct WordPressClient {
    client: Client,
    base_url: String,
    form_id: u32,
}

impl WordPressClient {
    pub fn new(config: &dyn ConfigProvider) -> Result<Self> {
        validate_url("base_url", config.base_url())?;

        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ContentError::Config {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self::with_client(client, config.base_url(), config.form_id()))
    }

    pub fn with_client(client: Client, base_url: &str, form_id: u32) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            form_id,
        }
    }

    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    pub fn form_id(&self) -> u32 {
        self.form_id
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T> {
        let url = self.endpoint_url(endpoint);
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("❌ Request to {} failed: {}", url, e);
            ContentError::network(&url, e)
        })?;

        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            tracing::error!("❌ {} answered with HTTP {}", url, response.status());
            return Err(ContentError::http_status(&url, response.status()));
        }

        response.json::<T>().await.map_err(|e| {
            tracing::error!("❌ Could not parse response from {}: {}", url, e);
            ContentError::network(&url, e)
        })
    }

    async fn fetch_home_fields(&self) -> Result<RawHomeFields> {
        let pages: Vec<RawPage> = self.get_json(Endpoint::HomePage).await?;

        match pages.into_iter().next() {
            Some(page) => {
                if page.acf.is_none() {
                    tracing::debug!("Home page {:?} has no custom fields", page.id);
                }
                Ok(page.acf.unwrap_or_default())
            }
            None => {
                tracing::warn!("Home page not found, using fallback content");
                Ok(RawHomeFields::default())
            }
        }
    }

    fn feedback_form(&self, payload: &SubmissionPayload) -> Form {
        Form::new()
            .text("your-name", payload.name().to_string())
            .text("your-email", payload.email().to_string())
            .text("your-phone", payload.phone().unwrap_or_default().to_string())
            .text(
                "business-name",
                payload.business().unwrap_or_default().to_string(),
            )
            .text(
                "current-website",
                payload.website().unwrap_or_default().to_string(),
            )
            .text("project-description", payload.project().to_string())
            .text("timeline", payload.timeline().label().to_string())
            .text("_wpcf7_unit_tag", format!("contact-form-7-{}", self.form_id))
    }
}

#[async_trait]
impl ContentSource for WordPressClient {
    async fn fetch_site_settings(&self) -> Result<SiteSettings> {
        let options: RawSiteOptions = self.get_json(Endpoint::SiteOptions).await?;
        Ok(mapping::map_site_settings(&options))
    }

    async fn fetch_hero(&self) -> Result<HeroContent> {
        let fields = self.fetch_home_fields().await?;
        Ok(mapping::map_hero(&fields))
    }

    async fn fetch_services(&self) -> Result<ServiceCatalog> {
        let fields = self.fetch_home_fields().await?;
        Ok(mapping::map_services(&fields))
    }

    async fn fetch_portfolio(&self) -> Result<PortfolioCatalog> {
        let (posts, testimonials, fields) = tokio::try_join!(
            self.get_json::<Vec<RawPortfolioPost>>(Endpoint::Portfolio),
            self.get_json::<Vec<RawTestimonialPost>>(Endpoint::Testimonials),
            self.fetch_home_fields(),
        )?;

        tracing::debug!(
            "Fetched {} portfolio items and {} testimonials",
            posts.len(),
            testimonials.len()
        );
        Ok(mapping::map_portfolio(&fields, &posts, &testimonials))
    }

    async fn fetch_contact(&self) -> Result<ContactContent> {
        let fields = self.fetch_home_fields().await?;
        Ok(mapping::map_contact(&fields))
    }

    async fn submit_submission(&self, payload: &SubmissionPayload) -> Result<SubmissionResult> {
        let url = self.endpoint_url(Endpoint::Feedback(self.form_id));
        tracing::debug!("Submitting contact form to: {}", url);

        let response = self
            .client
            .post(&url)
            .multipart(self.feedback_form(payload))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("❌ Form submission to {} failed: {}", url, e);
                ContentError::network(&url, e)
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ContentError::network(&url, e))?;

        let raw: RawFeedbackResponse =
            serde_json::from_str(&body).map_err(|e| ContentError::Submission {
                message: format!(
                    "Unexpected response from form backend (HTTP {}): {}",
                    status.as_u16(),
                    e
                ),
            })?;

        let result = mapping::map_feedback(&raw);
        if result.is_success() {
            tracing::info!("✅ Contact form accepted: {}", result.message);
        } else {
            tracing::warn!(
                "Contact form rejected with status {:?} ({} invalid fields)",
                raw.status,
                result.invalid_fields.len()
            );
        }
        Ok(result)
    }
}
