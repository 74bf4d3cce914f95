mod cli;
mod commands;
mod controls;
mod output;
mod preview;
mod repl;

use std::path::{Path, PathBuf};

use phyllo_common::PhylloError;
use phyllo_config::PhylloConfig;
use tracing_subscriber::EnvFilter;

use cli::Command;
use controls::ViewState;

const FALLBACK_DIRECTIVE: &str = "phyllo=info";

/// Parse `KEY=VALUE` lines, skipping blanks and `#` comments. Values may be
/// wrapped in single or double quotes.
fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let key = key.trim().trim_start_matches("export ").trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            (key.to_string(), value.to_string())
        })
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

/// Load environment variables from the first readable file in `candidates`
/// without overriding ones already set. Returns the file used.
///
/// Mutates the process environment, so it must run before any other thread
/// exists (in particular before the tokio runtime is built).
fn load_dotenv_from(candidates: &[PathBuf]) -> Option<&Path> {
    for path in candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for (key, value) in parse_dotenv(&contents) {
                if std::env::var(&key).is_err() {
                    std::env::set_var(key, value);
                }
            }
            return Some(path.as_path());
        }
    }
    None
}

fn load_dotenv() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    load_dotenv_from(&[
        PathBuf::from(".env"),
        // Workspace root, two levels up from crates/phyllo-app/
        manifest_dir.join("..").join("..").join(".env"),
    ]);
}

fn init_logging(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("phyllo: invalid log directive '{directive}': {e}");
        EnvFilter::new(FALLBACK_DIRECTIVE)
    });
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn main() {
    // Still single-threaded: the environment is only touched here.
    load_dotenv();

    let args = cli::parse();

    // The subscriber is not up yet, so a load failure is reported after init.
    let loaded = phyllo_config::load_config(args.config.as_deref());
    let directive = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.directive(),
        (None, Err(_)) => FALLBACK_DIRECTIVE.to_string(),
    };
    init_logging(&directive);

    tracing::info!("Phyllo v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        PhylloConfig::default()
    });

    let result = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(PhylloError::from)
        .and_then(|runtime| runtime.block_on(run(args, config)));

    if let Err(e) = result {
        tracing::error!("{e}");
        eprintln!("phyllo: {e}");
        std::process::exit(1);
    }
}

async fn run(args: cli::Args, config: PhylloConfig) -> Result<(), PhylloError> {
    let theme = args.theme.unwrap_or(config.theme.mode);
    let view = ViewState::new(config.sphere, theme);
    tracing::debug!(points = view.config.points, theme = %theme, "view initialized");

    match args.command {
        Command::Generate { sphere, format } => commands::generate(&config, view, &sphere, format),
        Command::Preview {
            sphere,
            frames,
            width,
            height,
            color,
        } => commands::preview(&config, view, &sphere, frames, width, height, color).await,
        Command::Insight { topic, points } => {
            commands::insight(&config, view, topic, points).await;
            Ok(())
        }
        Command::Chat { color } => commands::chat(&config, view, color).await,
        Command::Config { init } => commands::config(&config, args.config.as_deref(), init),
    }
}
