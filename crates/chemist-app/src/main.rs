mod banner;
mod cli;
mod commands;
mod dotenv;
mod repl;
mod wrap;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use chemist_ai::{ChatSession, GeminiClient, GeminiConfig, Persona};
use chemist_common::ChemistError;
use chemist_config::schema::LogLevel;
use chemist_config::ChemistConfig;
use console::style;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Pick the startup filter. `--log-level` beats `RUST_LOG`; with neither,
/// the default level applies until the config is read.
///
/// Returns the filter and whether it came from an explicit override.
fn startup_filter(cli_level: Option<&str>, env_filter: Option<EnvFilter>) -> (EnvFilter, bool) {
    let explicit = match cli_level {
        Some(level) => EnvFilter::try_new(level).ok(),
        None => env_filter,
    };
    match explicit {
        Some(filter) => (filter, true),
        None => (EnvFilter::new(LogLevel::default().as_directive()), false),
    }
}

/// Stderr logging, started before the config is loaded so loader warnings
/// are visible. Returns a reload handle when the config level may still
/// apply.
fn init_logging(cli_level: Option<&str>) -> Option<FilterHandle> {
    let (filter, overridden) =
        startup_filter(cli_level, EnvFilter::try_from_default_env().ok());
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    (!overridden).then_some(handle)
}

fn apply_config_level(handle: &FilterHandle, level: LogLevel) {
    if let Err(e) = handle.reload(EnvFilter::new(level.as_directive())) {
        tracing::warn!("could not apply configured log level: {e}");
    }
}

/// Resolve the credential and wire up client and session.
fn build_session(args: &cli::Args, config: &ChemistConfig) -> chemist_common::Result<ChatSession> {
    let api_key = chemist_config::resolve_api_key(args.api_key.as_deref(), &config.api)?;
    let model = args.model.clone().unwrap_or_else(|| config.api.model.clone());
    let timeout = (config.api.timeout_secs > 0).then(|| Duration::from_secs(config.api.timeout_secs));

    let gemini = GeminiConfig::new(api_key)
        .with_base_url(config.api.base_url.clone())
        .with_model(model)
        .with_timeout(timeout);
    tracing::info!(config = ?gemini, "Creating Gemini client");
    let client = GeminiClient::new(gemini).map_err(|e| ChemistError::Ai(e.to_string()))?;

    let persona = Persona::default().with_overrides(
        config.persona.greeting.clone(),
        config.persona.instructions.clone(),
    );

    Ok(ChatSession::new(Arc::new(client), persona)
        .with_rollback_failed_turns(config.session.rollback_failed_turns))
}

async fn run(args: cli::Args) -> chemist_common::Result<()> {
    let log_handle = init_logging(args.log_level.as_deref());
    let config = chemist_config::load_config(args.config.as_deref())?;
    if let Some(handle) = &log_handle {
        apply_config_level(handle, config.logging.level);
    }
    tracing::info!("chemist v{} starting", env!("CARGO_PKG_VERSION"));

    if args.no_color || !config.display.color {
        console::set_colors_enabled(false);
    }

    let session = build_session(&args, &config)?;
    let model = args.model.as_deref().unwrap_or(&config.api.model);
    banner::print_welcome_banner(model);

    let width = match config.display.wrap_width {
        0 => None,
        w => Some(w as usize),
    };

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    tokio::select! {
        result = repl::run(&session, stdin, &mut stdout, width) => result,
        _ = tokio::signal::ctrl_c() => {
            println!("\nExiting...");
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    // Load .env before anything reads the environment
    dotenv::load_dotenv();

    let args = cli::parse();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("{}", style(format!("Error: {e}")).red());
            return ExitCode::FAILURE;
        }
    };

    let result = runtime.block_on(run(args));
    // The stdin reader may still be parked in a blocking read.
    runtime.shutdown_background();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", style(format!("Error: {e}")).red());
            ExitCode::FAILURE
        }
    }
}
