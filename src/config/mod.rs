#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, Section, SubmitArgs};
pub use toml_config::TomlConfig;

/// WordPress origin used until a real one is configured.
pub const DEFAULT_BASE_URL: &str = "https://your-wordpress-site.com";
pub const DEFAULT_FORM_ID: u32 = 1;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
