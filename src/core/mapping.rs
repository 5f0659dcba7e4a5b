//! Raw payload → view-model mapping. This is the only place fallback substitution happens.

use crate::core::fallback;
use crate::domain::model::{
    ContactContent, ContactInfo, CtaBlock, FeatureCard, HeroContent, ImageRef, InvalidField,
    PortfolioCatalog, Project, Rating, ServiceCatalog, ServiceItem, SiteSettings,
    SubmissionResult, SubmissionStatus, Testimonial,
};
use crate::domain::raw::{
    LenientNumber, RawFeedbackResponse, RawHomeFields, RawImage, RawPortfolioPost, RawService,
    RawSiteOptions, RawTestimonialPost,
};

pub const MAIL_SENT: &str = "mail_sent";

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn text(value: Option<&str>, fallback: &str) -> String {
    non_blank(value).unwrap_or(fallback).to_string()
}

fn list(value: Option<&Vec<String>>, fallback: &[&str]) -> Vec<String> {
    let items: Vec<String> = value
        .map(|items| {
            items
                .iter()
                .filter(|item| !item.trim().is_empty())
                .cloned()
                .collect()
        })
        .unwrap_or_default();

    if items.is_empty() {
        fallback::strings(fallback)
    } else {
        items
    }
}

/// 0 與非有限數值等同於未填
fn number(value: Option<&LenientNumber>) -> Option<f64> {
    value
        .and_then(LenientNumber::as_f64)
        .filter(|n| n.is_finite() && *n != 0.0)
}

fn id(value: Option<&LenientNumber>, position: usize) -> u64 {
    number(value)
        .filter(|n| *n > 0.0)
        .map(|n| n as u64)
        .unwrap_or(position as u64 + 1)
}

fn image(raw: Option<&RawImage>, fallback: ImageRef) -> ImageRef {
    let Some(raw) = raw else {
        return fallback;
    };

    ImageRef {
        id: number(raw.id.as_ref())
            .filter(|n| *n > 0.0)
            .map(|n| n as u64)
            .unwrap_or(fallback.id),
        url: text(raw.url.as_deref(), &fallback.url),
        alt: text(raw.alt.as_deref(), &fallback.alt),
        title: text(raw.title.as_deref(), &fallback.title),
    }
}

pub fn map_hero(fields: &RawHomeFields) -> HeroContent {
    let [trust_1, trust_2, trust_3] = fallback::HERO_TRUST_INDICATORS;

    HeroContent {
        headline: text(fields.hero_headline.as_deref(), fallback::HERO_HEADLINE),
        subheadline: text(fields.hero_subheadline.as_deref(), fallback::HERO_SUBHEADLINE),
        description: text(fields.hero_description.as_deref(), fallback::HERO_DESCRIPTION),
        background_image: image(
            fields.hero_image.as_ref(),
            ImageRef {
                id: 0,
                url: fallback::HERO_IMAGE_URL.to_string(),
                alt: fallback::HERO_IMAGE_ALT.to_string(),
                title: fallback::HERO_IMAGE_TITLE.to_string(),
            },
        ),
        cta_primary_text: text(fields.cta_primary_text.as_deref(), fallback::HERO_CTA_PRIMARY),
        cta_secondary_text: text(
            fields.cta_secondary_text.as_deref(),
            fallback::HERO_CTA_SECONDARY,
        ),
        trust_indicators: [
            text(fields.trust_indicator_1.as_deref(), trust_1),
            text(fields.trust_indicator_2.as_deref(), trust_2),
            text(fields.trust_indicator_3.as_deref(), trust_3),
        ],
        social_proof_text: text(fields.social_proof_text.as_deref(), fallback::HERO_SOCIAL_PROOF),
        client_rating: number(fields.client_rating.as_ref())
            .unwrap_or(fallback::HERO_CLIENT_RATING),
        businesses_served: number(fields.businesses_served.as_ref())
            .filter(|n| *n > 0.0)
            .map(|n| n.round().min(f64::from(u32::MAX)) as u32)
            .unwrap_or(fallback::HERO_BUSINESSES_SERVED),
        card: FeatureCard {
            title: text(fields.hero_card_title.as_deref(), fallback::HERO_CARD_TITLE),
            description: text(
                fields.hero_card_description.as_deref(),
                fallback::HERO_CARD_DESCRIPTION,
            ),
            features: list(
                fields.hero_card_features.as_ref(),
                &fallback::HERO_CARD_FEATURES,
            ),
        },
    }
}

fn map_service(position: usize, raw: &RawService) -> ServiceItem {
    ServiceItem {
        id: id(raw.id.as_ref(), position),
        title: text(raw.title.as_deref(), fallback::SERVICE_TITLE),
        description: text(raw.description.as_deref(), ""),
        icon: text(raw.icon.as_deref(), fallback::SERVICE_ICON),
        features: list(raw.features.as_ref(), &[]),
    }
}

pub fn map_services(fields: &RawHomeFields) -> ServiceCatalog {
    let services = match fields.services.as_deref() {
        Some(raw) if !raw.is_empty() => raw
            .iter()
            .enumerate()
            .map(|(position, service)| map_service(position, service))
            .collect(),
        _ => fallback::services(),
    };

    ServiceCatalog {
        section_title: text(fields.services_title.as_deref(), fallback::SERVICES_TITLE),
        section_description: text(
            fields.services_description.as_deref(),
            fallback::SERVICES_DESCRIPTION,
        ),
        services,
        cta: CtaBlock {
            title: text(fields.services_cta_title.as_deref(), fallback::SERVICES_CTA_TITLE),
            description: text(
                fields.services_cta_description.as_deref(),
                fallback::SERVICES_CTA_DESCRIPTION,
            ),
            primary_text: text(
                fields.services_cta_primary.as_deref(),
                fallback::SERVICES_CTA_PRIMARY,
            ),
            secondary_text: text(
                fields.services_cta_secondary.as_deref(),
                fallback::SERVICES_CTA_SECONDARY,
            ),
            phone: text(fields.services_cta_phone.as_deref(), fallback::PHONE),
        },
    }
}

fn map_project(position: usize, post: &RawPortfolioPost) -> Project {
    let acf = post.acf.clone().unwrap_or_default();
    let rendered_title = post.title.as_ref().and_then(|t| t.rendered.as_deref());
    let title = text(
        non_blank(rendered_title).or(acf.title.as_deref()),
        fallback::PROJECT_TITLE,
    );

    Project {
        id: post.id.unwrap_or(position as u64 + 1),
        category: text(acf.category.as_deref(), fallback::PROJECT_CATEGORY),
        description: text(acf.description.as_deref(), ""),
        image: image(acf.featured_image.as_ref(), fallback::project_image(&title)),
        results: text(acf.results.as_deref(), ""),
        live_url: non_blank(acf.live_url.as_deref()).map(str::to_string),
        title,
    }
}

fn map_testimonial(position: usize, post: &RawTestimonialPost) -> Testimonial {
    let acf = post.acf.clone().unwrap_or_default();
    let rendered = post.content.as_ref().and_then(|c| c.rendered.as_deref());

    Testimonial {
        id: post.id.unwrap_or(position as u64 + 1),
        content: text(non_blank(rendered).or(acf.content.as_deref()), ""),
        author: text(acf.author.as_deref(), fallback::TESTIMONIAL_AUTHOR),
        rating: number(acf.rating.as_ref())
            .map(|n| Rating::clamped(n.round() as i64))
            .unwrap_or_default(),
    }
}

pub fn map_portfolio(
    fields: &RawHomeFields,
    posts: &[RawPortfolioPost],
    testimonials: &[RawTestimonialPost],
) -> PortfolioCatalog {
    let projects = if posts.is_empty() {
        tracing::warn!("No portfolio items from backend, using example projects");
        fallback::projects()
    } else {
        posts
            .iter()
            .enumerate()
            .map(|(position, post)| map_project(position, post))
            .collect()
    };

    let testimonials = if testimonials.is_empty() {
        tracing::warn!("No testimonials from backend, using example testimonials");
        fallback::testimonials()
    } else {
        testimonials
            .iter()
            .enumerate()
            .map(|(position, post)| map_testimonial(position, post))
            .collect()
    };

    PortfolioCatalog {
        section_title: text(fields.portfolio_title.as_deref(), fallback::PORTFOLIO_TITLE),
        section_description: text(
            fields.portfolio_description.as_deref(),
            fallback::PORTFOLIO_DESCRIPTION,
        ),
        projects,
        testimonials,
        cta: CtaBlock {
            title: text(
                fields.portfolio_cta_title.as_deref(),
                fallback::PORTFOLIO_CTA_TITLE,
            ),
            description: text(
                fields.portfolio_cta_description.as_deref(),
                fallback::PORTFOLIO_CTA_DESCRIPTION,
            ),
            primary_text: text(
                fields.portfolio_cta_primary.as_deref(),
                fallback::PORTFOLIO_CTA_PRIMARY,
            ),
            secondary_text: text(
                fields.portfolio_cta_secondary.as_deref(),
                fallback::PORTFOLIO_CTA_SECONDARY,
            ),
            phone: text(fields.portfolio_cta_phone.as_deref(), fallback::PHONE),
        },
    }
}

pub fn map_contact(fields: &RawHomeFields) -> ContactContent {
    ContactContent {
        section_title: text(fields.contact_title.as_deref(), fallback::CONTACT_TITLE),
        section_description: text(
            fields.contact_description.as_deref(),
            fallback::CONTACT_DESCRIPTION,
        ),
        contact_info: ContactInfo {
            phone: text(fields.contact_phone.as_deref(), fallback::PHONE),
            email: text(fields.contact_email.as_deref(), fallback::EMAIL),
            location: text(fields.contact_location.as_deref(), fallback::CONTACT_LOCATION),
            phone_description: text(
                fields.phone_description.as_deref(),
                fallback::CONTACT_PHONE_DESCRIPTION,
            ),
            email_description: text(
                fields.email_description.as_deref(),
                fallback::CONTACT_EMAIL_DESCRIPTION,
            ),
            location_description: text(
                fields.location_description.as_deref(),
                fallback::CONTACT_LOCATION_DESCRIPTION,
            ),
        },
        trust_indicators: list(
            fields.trust_indicators.as_ref(),
            &fallback::CONTACT_TRUST_INDICATORS,
        ),
        form_title: text(fields.form_title.as_deref(), fallback::CONTACT_FORM_TITLE),
        form_description: text(
            fields.form_description.as_deref(),
            fallback::CONTACT_FORM_DESCRIPTION,
        ),
    }
}

pub fn map_site_settings(options: &RawSiteOptions) -> SiteSettings {
    let flat = &options.fields;
    let nested = options.acf.clone().unwrap_or_default();

    let pick = |top: &Option<String>, wrapped: &Option<String>, fallback: &str| {
        text(non_blank(top.as_deref()).or(wrapped.as_deref()), fallback)
    };

    SiteSettings {
        site_title: pick(&flat.site_title, &nested.site_title, fallback::SITE_TITLE),
        site_description: pick(
            &flat.site_description,
            &nested.site_description,
            fallback::SITE_DESCRIPTION,
        ),
        logo: image(
            flat.logo.as_ref().or(nested.logo.as_ref()),
            ImageRef {
                id: 0,
                url: fallback::SITE_LOGO_URL.to_string(),
                alt: fallback::SITE_TITLE.to_string(),
                title: fallback::SITE_TITLE.to_string(),
            },
        ),
        contact_phone: pick(&flat.contact_phone, &nested.contact_phone, fallback::PHONE),
        contact_email: pick(&flat.contact_email, &nested.contact_email, fallback::EMAIL),
    }
}

/// Contact Form 7 只有 `mail_sent` 代表成功，其他狀態一律視為失敗
pub fn map_feedback(raw: &RawFeedbackResponse) -> SubmissionResult {
    let status = if raw.status.as_deref() == Some(MAIL_SENT) {
        SubmissionStatus::Success
    } else {
        SubmissionStatus::Error
    };

    let default_message = match status {
        SubmissionStatus::Success => fallback::SUBMISSION_SUCCESS_MESSAGE,
        SubmissionStatus::Error => fallback::SUBMISSION_ERROR_MESSAGE,
    };

    SubmissionResult {
        status,
        message: text(raw.message.as_deref(), default_message),
        invalid_fields: raw
            .invalid_fields
            .iter()
            .flatten()
            .map(|field| InvalidField {
                field: text(field.field.as_deref(), ""),
                message: text(field.message.as_deref(), ""),
            })
            .collect(),
    }
}

impl Default for HeroContent {
    fn default() -> Self {
        map_hero(&RawHomeFields::default())
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        map_services(&RawHomeFields::default())
    }
}

impl Default for PortfolioCatalog {
    fn default() -> Self {
        map_portfolio(&RawHomeFields::default(), &[], &[])
    }
}

impl Default for ContactContent {
    fn default() -> Self {
        map_contact(&RawHomeFields::default())
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        map_site_settings(&RawSiteOptions::default())
    }
}
