use clap::Parser;
use settle::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "settle", about = "Track who owes whom and split bills with friends")]
struct Args {
    /// Start without any seed friends
    #[arg(long)]
    empty: bool,

    /// Currency symbol shown after amounts
    #[arg(short, long)]
    currency: Option<String>,

    /// Read configuration from this file instead of ~/.settle/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to settle.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("settle.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Settle starting up");

    let file_config = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    }
    .map_err(std::io::Error::other)?;

    let cli = CliOverrides {
        currency: args.currency,
        empty: args.empty,
    };
    let resolved = config::resolve(&file_config, &cli);
    log::info!(
        "Resolved config: currency={} friends={}",
        resolved.currency,
        resolved.friends.len()
    );

    settle::tui::run(resolved)
}
