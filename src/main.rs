use anyhow::Context;
use clap::Parser;

use sunset_timer::cli::Cli;
use sunset_timer::{logging, ui};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli
        .load_config()
        .context("Failed to load configuration")?;

    let log_path = logging::init_tracing(&config.logging);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_path = ?log_path,
        "sunset-timer starting"
    );

    ui::runtime::run(config).await.context("Terminal UI failed")?;

    tracing::info!("sunset-timer exited");
    Ok(())
}
