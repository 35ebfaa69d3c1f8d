use std::path::PathBuf;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use worte_config::{ConfigStore, default_config_path};
use worte_core::Session;

pub mod controller;
pub mod events;

#[cfg(test)]
mod tests;

use self::controller::AppController;

/// Flashcards: word, pronunciation, translation
#[derive(Parser, Debug)]
#[command(name = "worte", version)]
struct Args {
    /// Config document [env: WORTE_CONFIG, default: config.json]
    #[arg(long)]
    config: Option<PathBuf>,
    /// Word list to open instead of the last used one
    #[arg(long)]
    file: Option<PathBuf>,
    /// Speech language code (ru, de, en)
    #[arg(long)]
    lang: Option<String>,
    /// Disable speech for this run
    #[arg(long)]
    mute: bool,
    /// Log as JSON lines
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.log_json);

    let store = ConfigStore::new(args.config.clone().unwrap_or_else(default_config_path));
    let config = store.load();

    // Env overrides apply to this run only and never reach the stored config
    let mut speech = config.speech.clone();
    speech.apply_env();

    let (mut session, startup) = Session::start(config, store);
    session.set_muted(args.mute);

    let mut initial = vec![startup];
    if let Some(lang) = &args.lang {
        initial.push(session.select_language(lang));
    }
    if let Some(file) = &args.file {
        initial.push(session.load_words(file));
    }

    let controller = AppController::new();
    let mut tasks = controller.spawn_tasks(session, initial, &speech);

    tokio::select! {
        result = signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!("failed to listen for ctrl+c: {e}");
            }
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::info!("task finished, shutting down"),
                Ok(Err(e)) => tracing::error!("task failed: {e:#}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!("task exited with error: {e:#}"),
            Err(e) => tracing::error!("task panicked: {e}"),
        }
    }

    Ok(())
}

const DEFAULT_LOG_FILTER: &str = "info";

/// `RUST_LOG` when it parses, otherwise [`DEFAULT_LOG_FILTER`]
fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Logs go to stderr; stdout belongs to the shell
fn init_tracing(json: bool) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = env_filter(rust_log.as_deref());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.with_ansi(atty::is(atty::Stream::Stderr)).init();
    }
}
