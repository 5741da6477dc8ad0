mod bootstrap;
mod cli;
mod commands;

use anyhow::Context;
use clap::Parser;
use hc_core::ports::AppDirsPort;
use hc_platform::DirsAppDirsAdapter;
use tracing::info;

use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let app_dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .context("Failed to resolve application directories")?;
    let config = bootstrap::load_app_config(cli.config.as_deref(), &app_dirs)?;

    let logs_dir = config.logging.file.then(|| app_dirs.logs_dir());
    bootstrap::init_tracing_subscriber(logs_dir.as_deref())?;
    info!(
        config = %bootstrap::resolve_config_path(cli.config.as_deref(), &app_dirs).display(),
        data = %app_dirs.app_data_root.display(),
        "hotclip starting"
    );

    commands::execute(cli.command.unwrap_or_default(), &app_dirs, &config).await
}
