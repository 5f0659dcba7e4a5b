use crate::utils::error::{ContentError, Result};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields.";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ContentError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ContentError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ContentError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(ContentError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ContentError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 表單必填欄位：空白字串視為未填
pub fn validate_required_text(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ContentError::validation(field_name, REQUIRED_FIELDS_MESSAGE));
    }
    Ok(())
}

pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    if !email_pattern().is_match(value.trim()) {
        return Err(ContentError::validation(field_name, INVALID_EMAIL_MESSAGE));
    }
    Ok(())
}
