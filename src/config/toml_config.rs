use crate::config::{DEFAULT_BASE_URL, DEFAULT_FORM_ID, DEFAULT_TIMEOUT_SECONDS};
use crate::core::query_cache::{CONTENT_STALE_TIME, SETTINGS_STALE_TIME};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ContentError, Result};
use crate::utils::validation::{validate_positive_number, validate_range, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

/// 快取時間上限 (24 小時)
pub const MAX_STALE_SECONDS: u64 = 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    pub wordpress: WordPressConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordPressConfig {
    pub base_url: String,
    pub form_id: Option<u32>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    pub content_stale_seconds: Option<u64>,
    pub settings_stale_seconds: Option<u64>,
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            wordpress: WordPressConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                form_id: None,
                timeout_seconds: None,
            },
            cache: CacheConfig::default(),
        }
    }
}

fn env_placeholder() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ContentError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${WORDPRESS_URL})，找不到的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        env_placeholder()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 命令列參數優先於檔案設定
    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        form_id: Option<u32>,
        timeout_seconds: Option<u64>,
    ) -> Self {
        if let Some(base_url) = base_url {
            self.wordpress.base_url = base_url;
        }
        if form_id.is_some() {
            self.wordpress.form_id = form_id;
        }
        if timeout_seconds.is_some() {
            self.wordpress.timeout_seconds = timeout_seconds;
        }
        self
    }

    fn content_stale_seconds(&self) -> u64 {
        self.cache
            .content_stale_seconds
            .unwrap_or(CONTENT_STALE_TIME.as_secs())
    }

    fn settings_stale_seconds(&self) -> u64 {
        self.cache
            .settings_stale_seconds
            .unwrap_or(SETTINGS_STALE_TIME.as_secs())
    }

    fn timeout_seconds(&self) -> u64 {
        self.wordpress
            .timeout_seconds
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        &self.wordpress.base_url
    }

    fn form_id(&self) -> u32 {
        self.wordpress.form_id.unwrap_or(DEFAULT_FORM_ID)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds())
    }

    fn content_stale_time(&self) -> Duration {
        Duration::from_secs(self.content_stale_seconds())
    }

    fn settings_stale_time(&self) -> Duration {
        Duration::from_secs(self.settings_stale_seconds())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("wordpress.base_url", &self.wordpress.base_url)?;
        validate_positive_number("wordpress.form_id", u64::from(self.form_id()), 1)?;
        validate_positive_number("wordpress.timeout_seconds", self.timeout_seconds(), 1)?;
        validate_range(
            "cache.content_stale_seconds",
            self.content_stale_seconds(),
            0,
            MAX_STALE_SECONDS,
        )?;
        validate_range(
            "cache.settings_stale_seconds",
            self.settings_stale_seconds(),
            0,
            MAX_STALE_SECONDS,
        )?;
        Ok(())
    }
}
