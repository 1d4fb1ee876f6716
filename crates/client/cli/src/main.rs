//! Terminal driver for the fish tank.
//!
//! Each invocation opens the session's save, runs one command through the
//! session runtime, and shuts down cleanly so the final state is saved.
//!
//! ```bash
//! tank status
//! tank feed
//! tank play bubble_pop 420 --difficulty hard
//! TANK_SESSION_ID=alt tank buy plant_1
//! ```

mod commands;
mod config;
mod dirs;
mod logging;
mod output;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use tank_content::{ConfigLoader, DecorationLoader};
use tank_core::{DecorationCatalog, TuningConfig};
use tank_runtime::{
    DecorationCatalogImpl, FileHighScoreRepository, FileStateRepository, Runtime, RuntimeConfig,
};

use commands::Command;
use config::CliConfig;

/// Care for a pixel fish from the terminal
#[derive(Parser)]
#[command(name = "tank")]
#[command(about = "Pixel Fish Tank in your terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Session identifier [env: TANK_SESSION_ID]
    #[arg(long, global = true)]
    session: Option<String>,

    /// Save data directory [env: TANK_SAVE_DIR]
    #[arg(long, global = true)]
    save_dir: Option<PathBuf>,

    /// RON decoration catalog [env: TANK_CATALOG]
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// TOML tuning file [env: TANK_TUNING]
    #[arg(long, global = true)]
    tuning: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = CliConfig::from_env().merge(CliConfig {
        session_id: cli.session,
        save_data_dir: cli.save_dir,
        catalog_path: cli.catalog,
        tuning_path: cli.tuning,
    });

    let _log_guard = logging::setup_logging(&dirs::log_dir(), config.session_id())?;

    let runtime = build_runtime(&config).await?;
    let result = cli.command.execute(&runtime.handle()).await;

    runtime.shutdown().await?;
    result
}

async fn build_runtime(config: &CliConfig) -> Result<Runtime> {
    let session_dir = config.session_dir();
    tracing::info!(session_dir = %session_dir.display(), "Opening session");

    let tuning = match &config.tuning_path {
        Some(path) => ConfigLoader::load(path)?,
        None => TuningConfig::default(),
    };
    let catalog: Arc<dyn DecorationCatalog> = match &config.catalog_path {
        Some(path) => Arc::new(DecorationCatalogImpl::from_definitions(
            DecorationLoader::load(path)?,
        )),
        None => Arc::new(DecorationCatalogImpl::builtin()),
    };

    let saves = FileStateRepository::new(&session_dir)
        .with_context(|| format!("Failed to open save directory {}", session_dir.display()))?;
    let high_scores = FileHighScoreRepository::new(&session_dir)?;

    let runtime = Runtime::builder()
        .config(RuntimeConfig {
            tuning,
            ..RuntimeConfig::default()
        })
        .state_repository(Arc::new(saves))
        .high_scores(Arc::new(high_scores))
        .catalog(catalog)
        .build()
        .await?;

    Ok(runtime)
}
