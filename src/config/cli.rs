use crate::config::toml_config::TomlConfig;
use crate::domain::model::{ContactSubmission, Timeline};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "dakota-content")]
#[command(about = "Fetch, render and submit Dakota Digital Design site content from WordPress")]
pub struct CliConfig {
    /// TOML 設定檔
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, env = "WORDPRESS_URL", global = true)]
    pub base_url: Option<String>,

    /// Contact Form 7 form id (default 1)
    #[arg(long, global = true)]
    pub form_id: Option<u32>,

    /// Request timeout in seconds (default 10)
    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print one section's view-model as JSON
    Fetch {
        #[arg(value_enum)]
        section: Section,

        #[arg(long)]
        pretty: bool,
    },
    /// Render every section as plain text
    Page {
        /// Retry failed sections this many times before giving up
        #[arg(long, default_value_t = 0)]
        retries: u32,
    },
    /// Validate and post a contact form submission
    Submit(SubmitArgs),
    /// Validate the effective configuration
    CheckConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Hero,
    Services,
    Portfolio,
    Contact,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TimelineChoice {
    Asap,
    TwoWeeks,
    Month,
    NoDeadline,
}

impl From<TimelineChoice> for Timeline {
    fn from(choice: TimelineChoice) -> Self {
        match choice {
            TimelineChoice::Asap => Timeline::Asap,
            TimelineChoice::TwoWeeks => Timeline::WithinTwoWeeks,
            TimelineChoice::Month => Timeline::WithinMonth,
            TimelineChoice::NoDeadline => Timeline::NoDeadline,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct SubmitArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub business: String,

    #[arg(long, default_value = "")]
    pub website: String,

    #[arg(long, default_value = "")]
    pub project: String,

    #[arg(long, value_enum)]
    pub timeline: Option<TimelineChoice>,
}

impl SubmitArgs {
    pub fn to_submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            business: self.business.clone(),
            website: self.website.clone(),
            project: self.project.clone(),
            timeline: self.timeline.map(Timeline::from).unwrap_or_default(),
        }
    }
}

impl CliConfig {
    /// 合併設定檔與命令列參數，並驗證結果
    pub fn resolve(&self) -> Result<TomlConfig> {
        let base = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        let config = base.with_overrides(self.base_url.clone(), self.form_id, self.timeout_seconds);
        config.validate()?;
        Ok(config)
    }
}
