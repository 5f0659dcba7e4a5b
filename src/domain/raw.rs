//! Raw WordPress / ACF / Contact Form 7 payload shapes.
//!
//! Every field is optional. ACF sends `false` for unset fields and numbers sometimes arrive as
//! strings, so each field is deserialized leniently: a value of the wrong shape becomes `None`
//! instead of failing the whole document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// 只接受 JSON 物件。ACF 以 `[]` 表示沒有欄位，不能被當成全預設值的結構。
fn lenient_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match serde_json::Value::deserialize(deserializer)? {
        value @ serde_json::Value::Object(_) => Ok(serde_json::from_value(value).ok()),
        _ => Ok(None),
    }
}

/// Decodes a list element by element; malformed entries are skipped, the rest are kept.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        )),
        _ => Ok(None),
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LenientNumber {
    Number(f64),
    Text(String),
}

impl LenientNumber {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            LenientNumber::Number(n) => Some(*n),
            LenientNumber::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawImage {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<LenientNumber>,
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub alt: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawService {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<LenientNumber>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub features: Option<Vec<String>>,
}

/// Custom fields of the `home` page. One object carries hero, services, portfolio CTA and
/// contact copy.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawHomeFields {
    #[serde(default, deserialize_with = "lenient")]
    pub hero_headline: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub hero_subheadline: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub hero_description: Option<String>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub hero_image: Option<RawImage>,
    #[serde(default, deserialize_with = "lenient")]
    pub cta_primary_text: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub cta_secondary_text: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub trust_indicator_1: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub trust_indicator_2: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub trust_indicator_3: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub social_proof_text: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub client_rating: Option<LenientNumber>,
    #[serde(default, deserialize_with = "lenient")]
    pub businesses_served: Option<LenientNumber>,
    #[serde(default, deserialize_with = "lenient")]
    pub hero_card_title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub hero_card_description: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub hero_card_features: Option<Vec<String>>,

    #[serde(default, deserialize_with = "lenient")]
    pub services_title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub services_description: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub services: Option<Vec<RawService>>,
    #[serde(default, deserialize_with = "lenient")]
    pub services_cta_title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub services_cta_description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub services_cta_primary: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub services_cta_secondary: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub services_cta_phone: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub portfolio_title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub portfolio_description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub portfolio_cta_title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub portfolio_cta_description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub portfolio_cta_primary: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub portfolio_cta_secondary: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub portfolio_cta_phone: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub contact_title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub contact_description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub contact_phone: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub contact_email: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub contact_location: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub phone_description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub email_description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub location_description: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub trust_indicators: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub form_title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub form_description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPage {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub acf: Option<RawHomeFields>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRendered {
    #[serde(default, deserialize_with = "lenient")]
    pub rendered: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPortfolioFields {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub featured_image: Option<RawImage>,
    #[serde(default, deserialize_with = "lenient")]
    pub results: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub live_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPortfolioPost {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub title: Option<RawRendered>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub acf: Option<RawPortfolioFields>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTestimonialFields {
    #[serde(default, deserialize_with = "lenient")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub rating: Option<LenientNumber>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTestimonialPost {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub content: Option<RawRendered>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub acf: Option<RawTestimonialFields>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSiteFields {
    #[serde(default, deserialize_with = "lenient")]
    pub site_title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub site_description: Option<String>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub logo: Option<RawImage>,
    #[serde(default, deserialize_with = "lenient")]
    pub contact_phone: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub contact_email: Option<String>,
}

/// `/acf/v3/options` answers either with the fields at the top level or wrapped in `acf`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSiteOptions {
    #[serde(flatten)]
    pub fields: RawSiteFields,
    #[serde(default, deserialize_with = "lenient_object")]
    pub acf: Option<RawSiteFields>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawInvalidField {
    #[serde(default, alias = "into", deserialize_with = "lenient")]
    pub field: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFeedbackResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub invalid_fields: Option<Vec<RawInvalidField>>,
}
