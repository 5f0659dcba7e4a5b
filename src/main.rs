use clap::Parser;
use dakota_content::app::render_sections;
use dakota_content::config::{Command, Section};
use dakota_content::core::contact_form::NotificationKind;
use dakota_content::utils::logger;
use dakota_content::{
    render_page, retry_failed_sections, CachePolicy, CliConfig, ConfigProvider, ContactForm, ContentError,
    ContentQueries, FormField, QueryClient, QueryState, SubmitOutcome, TomlConfig, WordPressClient,
};
use serde::Serialize;
use std::sync::Arc;

fn fail(e: &ContentError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn print_state<T: Serialize>(state: QueryState<T>, pretty: bool) -> Result<(), ContentError> {
    if let Some(error) = state.error {
        fail(&error);
    }
    let Some(data) = state.data else {
        return Err(ContentError::Config {
            message: "query settled without data".to_string(),
        });
    };

    let json = if pretty {
        serde_json::to_string_pretty(data.as_ref())
    } else {
        serde_json::to_string(data.as_ref())
    }
    .map_err(|e| ContentError::Config {
        message: format!("Could not serialize output: {}", e),
    })?;
    println!("{}", json);
    Ok(())
}

async fn run(cli: CliConfig, config: TomlConfig) -> Result<i32, ContentError> {
    let client = WordPressClient::new(&config)?;
    let cache = Arc::new(QueryClient::new(CachePolicy::from_config(&config)));
    let queries = ContentQueries::new(Arc::new(client), cache);

    match cli.command {
        Command::Fetch { section, pretty } => {
            match section {
                Section::Hero => print_state(queries.hero().load().await, pretty)?,
                Section::Services => print_state(queries.services().load().await, pretty)?,
                Section::Portfolio => print_state(queries.portfolio().load().await, pretty)?,
                Section::Contact => print_state(queries.contact().load().await, pretty)?,
                Section::Settings => print_state(queries.site_settings().load().await, pretty)?,
            }
            Ok(0)
        }
        Command::Page { retries } => {
            let mut page = render_page(&queries).await;
            for attempt in 1..=retries {
                if queries.any_errors().is_none() {
                    break;
                }
                let recovered = retry_failed_sections(&queries).await;
                tracing::info!(
                    "🔄 Retry {}/{}: {} section(s) recovered",
                    attempt,
                    retries,
                    recovered
                );
                page = render_sections(&queries);
            }
            println!("{}", page);
            if let Some(errors) = queries.any_errors() {
                tracing::warn!("{} section(s) failed to load", errors.len());
                return Ok(2);
            }
            Ok(0)
        }
        Command::Submit(args) => {
            let mutation = queries.contact_form();
            let mut form = ContactForm::new();
            let submission = args.to_submission();
            form.set_timeline(submission.timeline);
            for (field, value) in [
                (FormField::Name, submission.name),
                (FormField::Email, submission.email),
                (FormField::Phone, submission.phone),
                (FormField::Business, submission.business),
                (FormField::Website, submission.website),
                (FormField::Project, submission.project),
            ] {
                form.set_field(field, value);
            }

            let outcome = form.submit(&mutation).await;
            if let Some(notification) = form.notification() {
                let icon = match notification.kind {
                    NotificationKind::Success => "✅",
                    NotificationKind::Error => "❌",
                };
                println!("{} {}: {}", icon, notification.title, notification.message);
            }
            for error in form.errors() {
                eprintln!("   {}: {}", error.field, error.message);
            }

            Ok(match outcome {
                SubmitOutcome::Submitted(result) if result.is_success() => 0,
                SubmitOutcome::Submitted(_) => 3,
                SubmitOutcome::Invalid(_) | SubmitOutcome::AlreadyPending => 1,
            })
        }
        Command::CheckConfig => {
            println!("✅ Configuration is valid");
            println!("   base_url:       {}", config.base_url());
            println!("   form_id:        {}", config.form_id());
            println!("   timeout:        {:?}", config.request_timeout());
            println!("   content stale:  {:?}", config.content_stale_time());
            println!("   settings stale: {:?}", config.settings_stale_time());
            Ok(0)
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting dakota-content CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證配置
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            fail(&e);
        }
    };

    match run(cli, config).await {
        Ok(code) => std::process::exit(code),
        Err(e) => fail(&e),
    }
}
