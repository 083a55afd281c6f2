//! Entry point wiring CLI dispatch to the evaluator and HTTP server.

use anyhow::Result;
use paracetamol_risk::{cli::Cli, config::Settings, logging};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_tracing()?;
    let settings = Settings::load()?;
    let cli = Cli::parse();

    info!(command = cli.command_name(), unit = %settings.level_unit, "starting command");
    cli.dispatch(settings).await
}
