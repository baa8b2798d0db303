use anyhow::Context;
use dotenv::dotenv;
use holofolio::config::{initialize_config, log_dir};
use holofolio::logging::init_logging;
use holofolio::ui;
use log::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = initialize_config().context("failed to load configuration")?;
    let log_dir = log_dir().context("failed to locate log directory")?;
    let _logger = init_logging(&config.log_level, &log_dir).context("failed to start logging")?;
    info!(
        "starting {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    ui::run_ui().await.context("terminal UI exited with an error")?;

    info!("bye");
    Ok(())
}
