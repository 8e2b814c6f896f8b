use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use clap::Parser;
use lingo_backend::{GeminiBackend, GenerativeBackend};
use lingo_config::{Config, FileStore, KeyValueStore};
use lingo_core::LingoClient;
use lingo_core::locale::{failure_message, t};
use lingo_types::Language;
use tokio::signal;
use tokio::task::JoinSet;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod audio;
mod cli;
mod command;
mod controller;
mod events;
mod io;
mod profile;
mod render;
mod state;

#[cfg(test)]
mod tests;

use cli::Cli;
use controller::AppController;
use events::Client;
use profile::{Profiles, default_profiles_dir};
use state::AppState;

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lingo=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        }))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}

/// `<data_dir>/LingoPop/store`
fn default_data_dir() -> anyhow::Result<PathBuf> {
    let base = dirs::data_dir().context("no data directory for this platform")?;
    Ok(base.join("LingoPop").join("store"))
}

fn parse_language(flag: &str, value: &str) -> anyhow::Result<Language> {
    value
        .parse::<Language>()
        .with_context(|| format!("invalid --{flag}"))
}

/// Apply language flags; they count as completing onboarding
async fn onboard(state: &AppState, cli: &Cli) -> anyhow::Result<()> {
    let native = cli
        .native
        .as_deref()
        .map(|v| parse_language("native", v))
        .transpose()?;
    let target = cli
        .target
        .as_deref()
        .map(|v| parse_language("target", v))
        .transpose()?;

    if native.is_some() || target.is_some() {
        state
            .update_settings(|s| {
                if let Some(native) = native {
                    s.native_lang = native;
                }
                if let Some(target) = target {
                    s.target_lang = target;
                }
                s.has_onboarded = true;
            })
            .await?;
    }

    let settings = state.settings().await;
    if !settings.has_onboarded {
        let lang = settings.native_lang;
        println!(
            "{}: {}  (/native <lang>)\n{}: {}  (/target <lang>)\n{}\n",
            t(lang, "iSpeak"),
            settings.native_lang,
            t(lang, "iWantToLearn"),
            settings.target_lang,
            t(lang, "letsGo"),
        );
    }

    Ok(())
}

fn build_client(config: &Config) -> anyhow::Result<Client> {
    let backend = &config.backend;
    if backend.api_key.is_empty() {
        tracing::warn!("No API key set (GEMINI_API_KEY); every request will fail");
    }

    let gemini = GeminiBackend::with_timeout(
        backend.api_key.clone(),
        backend.base_url.clone(),
        Duration::from_secs(backend.timeout_seconds),
    )
    .context("building HTTP client")?;
    let gemini: Arc<dyn GenerativeBackend> = Arc::new(gemini);

    Ok(LingoClient::from_config(gemini, backend))
}

/// Look up `query`, print the result and exit
async fn run_once(state: &AppState, client: &Client, query: &str) -> anyhow::Result<()> {
    let settings = state.settings().await;
    let with_image = state.config.read().await.ui.generate_images;

    match client
        .search_word(query, settings.native_lang, settings.target_lang, with_image)
        .await
    {
        Ok(entry) => {
            println!("{}", render::format_entry(&entry, settings.native_lang));
            Ok(())
        }
        Err(e) => {
            anyhow::bail!(failure_message(settings.native_lang, &e))
        }
    }
}

async fn drain(tasks: &mut JoinSet<anyhow::Result<()>>, controller: &AppController) {
    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                tracing::error!("task exited: {:#}", e);
                controller.shutdown();
            }
            Err(e) => {
                tracing::error!("task panicked: {}", e);
                controller.shutdown();
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    tracing::info!("Starting lingo v{}", env!("CARGO_PKG_VERSION"));

    let profiles = Profiles::new(default_profiles_dir()?);
    profiles.init()?;
    if let Some(name) = &cli.new_profile {
        let path = profiles.add_from_main(name)?;
        println!("Created profile {}", path.display());
        return Ok(());
    }

    let mut config = profiles.load(&cli.profile)?;
    config.apply_env();
    if cli.no_images {
        config.ui.generate_images = false;
    }

    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };
    tracing::debug!("Data directory: {}", data_dir.display());
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(data_dir));

    let client = Arc::new(build_client(&config)?);
    let sink = audio::sink_for(&config.audio);
    let state = Arc::new(AppState::new(config, store));

    onboard(&state, &cli).await?;

    if let Some(query) = cli.one_shot_query() {
        return run_once(&state, &client, &query).await;
    }

    println!("{}\n", t(state.settings().await.native_lang, "startTyping"));

    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(client, sink);

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    let interrupted = tokio::select! {
        _ = shutdown => true,
        _ = drain(&mut tasks, &controller) => false,
    };

    controller.shutdown();
    if interrupted {
        tracing::info!("Shutdown requested");
        // A pending stdin read cannot be cancelled; waiting on it would hang
        std::process::exit(130);
    }

    Ok(())
}
