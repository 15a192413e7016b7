use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use firebase_apps::config::Config;
use firebase_apps::gcp::auth::GcpCredentials;
use firebase_apps::gcp::http::format_gcp_error;
use firebase_apps::project_management::{
    HttpRequestHandler, ProjectManagement, ProjectManagementError,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Inspect and manage Firebase apps
#[derive(Parser, Debug)]
#[command(name = "fbapps", version, about, long_about = None)]
struct Args {
    /// App platform
    #[arg(short, long, value_enum, default_value = "web")]
    platform: Platform,

    /// Access token to use instead of Application Default Credentials
    #[arg(long, env = "FIREBASE_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    /// Firebase Management API endpoint
    #[arg(long)]
    api_url: Option<String>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print app metadata as JSON
    Metadata { app_id: String },
    /// Set the app's display name
    Rename { app_id: String, display_name: String },
    /// Print the app's config file
    Config { app_id: String },
}

impl Command {
    fn app_id(&self) -> &str {
        match self {
            Command::Metadata { app_id }
            | Command::Rename { app_id, .. }
            | Command::Config { app_id } => app_id,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Platform {
    Web,
    Ios,
    Android,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return Ok(None);
    };

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {:?}", parent))?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("fbapps started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Ok(Some(guard))
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = Config::config_dir() {
        return config_dir.join("fbapps.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".fbapps").join("fbapps.log");
    }
    PathBuf::from("fbapps.log")
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(err) = run(args).await {
        let message = match err.downcast_ref::<ProjectManagementError>() {
            Some(ProjectManagementError::Transport(inner)) => format_gcp_error(inner),
            Some(pm_err) => format!("{} ({})", pm_err, pm_err.code()),
            None => format_gcp_error(&err),
        };
        eprintln!("Error: {message}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let _log_guard = setup_logging(args.log_level)?;

    let config = Config::load();
    let base_url = config.effective_api_base_url(args.api_url.as_deref());
    tracing::info!("Using API endpoint: {}", base_url);

    let credentials = match args.access_token.as_deref() {
        Some(token) => GcpCredentials::from_static_token(token),
        None => GcpCredentials::new().await?,
    };
    let handler = HttpRequestHandler::with_base_url(credentials, &base_url)?;
    let pm = ProjectManagement::new(Arc::new(handler));

    let app_id = args.command.app_id().to_string();
    match (&args.command, args.platform) {
        (Command::Metadata { .. }, Platform::Web) => {
            let metadata = pm.web_app(&app_id)?.get_metadata().await?;
            println!("{}", serde_json::to_string_pretty(&metadata)?);
        }
        (Command::Metadata { .. }, Platform::Ios) => {
            let metadata = pm.ios_app(&app_id)?.get_metadata().await?;
            println!("{}", serde_json::to_string_pretty(&metadata)?);
        }
        (Command::Metadata { .. }, Platform::Android) => {
            let metadata = pm.android_app(&app_id)?.get_metadata().await?;
            println!("{}", serde_json::to_string_pretty(&metadata)?);
        }
        (Command::Rename { display_name, .. }, platform) => {
            match platform {
                Platform::Web => pm.web_app(&app_id)?.set_display_name(display_name).await?,
                Platform::Ios => pm.ios_app(&app_id)?.set_display_name(display_name).await?,
                Platform::Android => {
                    pm.android_app(&app_id)?
                        .set_display_name(display_name)
                        .await?
                }
            }
            println!("Renamed {} to {:?}", app_id, display_name);
        }
        (Command::Config { .. }, platform) => {
            let contents = match platform {
                Platform::Web => pm.web_app(&app_id)?.get_config().await?,
                Platform::Ios => pm.ios_app(&app_id)?.get_config().await?,
                Platform::Android => pm.android_app(&app_id)?.get_config().await?,
            };
            print!("{contents}");
        }
    }

    Ok(())
}
