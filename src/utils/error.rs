use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Request to {endpoint} failed: {message}")]
    Network {
        endpoint: String,
        status: Option<u16>,
        message: String,
    },

    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Form submission failed: {message}")]
    Submission { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfig { field: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ContentError>;

impl ContentError {
    pub fn network(endpoint: impl Into<String>, err: reqwest::Error) -> Self {
        ContentError::Network {
            endpoint: endpoint.into(),
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }

    pub fn http_status(endpoint: impl Into<String>, status: reqwest::StatusCode) -> Self {
        ContentError::Network {
            endpoint: endpoint.into(),
            status: Some(status.as_u16()),
            message: format!("HTTP error! status: {}", status.as_u16()),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ContentError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ContentError::Network { .. })
    }

    /// 網路錯誤可以透過 refetch 重試，其餘錯誤需要使用者修正輸入或設定
    pub fn is_retryable(&self) -> bool {
        match self {
            ContentError::Network { status, .. } => match status {
                Some(code) => *code >= 500 || *code == 408 || *code == 429,
                None => true,
            },
            ContentError::Submission { .. } => true,
            _ => false,
        }
    }

    /// CLI 結束碼：1 設定或輸入錯誤，2 網路或可重試錯誤
    pub fn exit_code(&self) -> i32 {
        if self.is_network() || self.is_retryable() {
            2
        } else {
            1
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ContentError::Network { .. } => {
                "Unable to load content. Please check your connection and try again.".to_string()
            }
            ContentError::Validation { message, .. } => message.clone(),
            ContentError::Submission { .. } => {
                "An error occurred while submitting the form. Please try again.".to_string()
            }
            ContentError::Config { message } => format!("Configuration problem: {}", message),
            ContentError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            ContentError::MissingConfig { field } => {
                format!("Configuration value '{}' is required", field)
            }
            ContentError::Io(e) => format!("File could not be read: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ContentError::Network { status: Some(404), .. } => {
                "Check that the WordPress base URL is correct and the REST API is enabled"
            }
            ContentError::Network { .. } => "Retry the request; the content backend may be unreachable",
            ContentError::Validation { .. } => "Correct the highlighted field and submit again",
            ContentError::Submission { .. } => {
                "Your entries were kept; try submitting again or call (701) 840-9830"
            }
            ContentError::Config { .. }
            | ContentError::InvalidConfigValue { .. }
            | ContentError::MissingConfig { .. } => "Fix the configuration file or command-line flags",
            ContentError::Io(_) => "Check that the file exists and is readable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_retryability() {
        let refused = ContentError::Network {
            endpoint: "/wp-json/wp/v2/pages".to_string(),
            status: None,
            message: "connection refused".to_string(),
        };
        assert!(refused.is_network());
        assert!(refused.is_retryable());

        let not_found = ContentError::Network {
            endpoint: "/wp-json/wp/v2/pages".to_string(),
            status: Some(404),
            message: "HTTP error! status: 404".to_string(),
        };
        assert!(!not_found.is_retryable());
        assert!(not_found.recovery_suggestion().contains("base URL"));
    }

    #[test]
    fn test_validation_error_uses_its_own_message() {
        let err = ContentError::validation("email", "Please enter a valid email address.");
        assert!(!err.is_network());
        assert!(!err.is_retryable());
        assert_eq!(err.user_friendly_message(), "Please enter a valid email address.");
        assert_eq!(
            err.to_string(),
            "Invalid email: Please enter a valid email address."
        );
    }

    #[test]
    fn test_exit_codes() {
        let network = ContentError::Network {
            endpoint: "/wp-json/acf/v3/options".to_string(),
            status: Some(404),
            message: "HTTP error! status: 404".to_string(),
        };
        assert_eq!(network.exit_code(), 2);
        assert_eq!(ContentError::validation("your-name", "required").exit_code(), 1);
        assert_eq!(
            ContentError::MissingConfig {
                field: "wordpress.base_url".to_string()
            }
            .exit_code(),
            1
        );
    }
}
