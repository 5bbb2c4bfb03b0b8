use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

use pipclock::adapters::DesktopSink;
use pipclock::cli::CliArgs;
use pipclock::config::Config;
use pipclock::domain::Signal;
use pipclock::handler::TickHandler;
use pipclock::ports::{NotificationSink, SystemClock};
use pipclock::ticker;

fn main() -> Result<()> {
    // Initialize tracing with env filter
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = CliArgs::parse();
    let once = args.once;
    let config_path = args.config.clone();
    let config = Config::from_cli_and_file(args, config_path)?;

    info!(channel = %config.channel, "Starting pipclock");

    let sink: Arc<dyn NotificationSink> = Arc::new(DesktopSink);
    let handler = TickHandler::from_config(Arc::new(SystemClock), Some(sink), &config);

    // Show the notification right away instead of waiting out the first
    // minute boundary.
    handler.on_tick(&Signal::time_tick());

    if once {
        return Ok(());
    }

    for signal in ticker::minute_ticks() {
        handler.on_tick(&signal);
    }

    info!("Tick channel closed, shutting down");
    Ok(())
}
