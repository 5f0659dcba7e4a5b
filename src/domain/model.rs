use crate::utils::error::{ContentError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub id: u64,
    pub url: String,
    pub alt: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCard {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroContent {
    /// 可能含有 HTML 標記 (rich text)
    pub headline: String,
    pub subheadline: String,
    pub description: String,
    pub background_image: ImageRef,
    pub cta_primary_text: String,
    pub cta_secondary_text: String,
    pub trust_indicators: [String; 3],
    pub social_proof_text: String,
    pub client_rating: f64,
    pub businesses_served: u32,
    pub card: FeatureCard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CtaBlock {
    pub title: String,
    pub description: String,
    pub primary_text: String,
    pub secondary_text: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// 圖示名稱，由 renderer 解析 (見 `app::sections::ServiceIcon`)
    pub icon: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCatalog {
    pub section_title: String,
    pub section_description: String,
    pub services: Vec<ServiceItem>,
    pub cta: CtaBlock,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub description: String,
    pub image: ImageRef,
    pub results: String,
    pub live_url: Option<String>,
}

/// Integer star rating, always within 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(ContentError::validation(
                "rating",
                format!(
                    "rating must be between {} and {}, got {}",
                    Self::MIN,
                    Self::MAX,
                    value
                ),
            ));
        }
        Ok(Rating(value as u8))
    }

    /// Backend values are clamped instead of rejected so a bad CMS entry never hides a testimonial.
    pub fn clamped(value: i64) -> Self {
        Rating(value.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Rating(Self::MAX)
    }
}

impl TryFrom<i64> for Rating {
    type Error = ContentError;

    fn try_from(value: i64) -> Result<Self> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u64,
    pub content: String,
    pub author: String,
    pub rating: Rating,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioCatalog {
    pub section_title: String,
    pub section_description: String,
    pub projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
    pub cta: CtaBlock,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub location: String,
    pub phone_description: String,
    pub email_description: String,
    pub location_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactContent {
    pub section_title: String,
    pub section_description: String,
    pub contact_info: ContactInfo,
    pub trust_indicators: Vec<String>,
    pub form_title: String,
    pub form_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub site_title: String,
    pub site_description: String,
    pub logo: ImageRef,
    pub contact_phone: String,
    pub contact_email: String,
}

/// 「何時需要完成？」下拉選單。空選項一律視為未設定，送出時為空字串。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeline {
    #[default]
    Unset,
    Asap,
    WithinTwoWeeks,
    WithinMonth,
    NoDeadline,
}

impl Timeline {
    pub const OPTIONS: [Timeline; 4] = [
        Timeline::Asap,
        Timeline::WithinTwoWeeks,
        Timeline::WithinMonth,
        Timeline::NoDeadline,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Timeline::Unset => "",
            Timeline::Asap => "ASAP (Rush job)",
            Timeline::WithinTwoWeeks => "Within 2 weeks",
            Timeline::WithinMonth => "Within a month",
            Timeline::NoDeadline => "No specific deadline",
        }
    }

    /// Unknown or blank labels map to `Unset`.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        Self::OPTIONS
            .into_iter()
            .find(|option| option.label().eq_ignore_ascii_case(label))
            .unwrap_or(Timeline::Unset)
    }
}

/// Form input while the user is still editing it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub business: String,
    pub website: String,
    pub project: String,
    pub timeline: Timeline,
}

impl ContactSubmission {
    pub fn is_empty(&self) -> bool {
        *self == ContactSubmission::default()
    }
}

/// A validated submission, frozen at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) phone: Option<String>,
    pub(crate) business: Option<String>,
    pub(crate) website: Option<String>,
    pub(crate) project: String,
    pub(crate) timeline: Timeline,
}

impl SubmissionPayload {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn business(&self) -> Option<&str> {
        self.business.as_deref()
    }

    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn timeline(&self) -> Timeline {
        self.timeline
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidField {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub status: SubmissionStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub invalid_fields: Vec<InvalidField>,
}

impl SubmissionResult {
    pub fn is_success(&self) -> bool {
        self.status == SubmissionStatus::Success
    }
}
