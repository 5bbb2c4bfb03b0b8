use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, PartialEq)]
#[command(name = "pipclock")]
#[command(about = "Keeps a persistent clock notification updated once per minute")]
pub struct CliArgs {
    /// Notification channel id (overrides config)
    #[arg(long)]
    pub channel: Option<String>,

    /// Title label shown before the time (overrides config)
    #[arg(long)]
    pub label: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Submit a single update and exit instead of running the tick loop
    #[arg(long)]
    pub once: bool,
}
