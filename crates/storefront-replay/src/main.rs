//! Replays a recorded action log through the storefront entity cache
//!
//! Usage: `storefront-replay [FILE]`, see `--help`.

mod args;
mod report;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;

use storefront_cache::middleware::LoggingMiddleware;
use storefront_cache::{wire, RootState, Store};
use storefront_config::AppConfig;

use args::Cli;
use report::Report;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let path = cli.replay_file(&config)?;
    log::info!("Replaying {}", path.display());

    let input = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read action log {}", path.display()))?;
    let actions = wire::decode_lines(&input)
        .with_context(|| format!("Failed to decode action log {}", path.display()))?;

    let mut store = Store::new(RootState::default());
    store.add_middleware(Box::new(LoggingMiddleware::new()));

    let count = actions.len();
    for action in actions {
        store.dispatch(action);
    }
    log::info!("Replayed {} actions", count);

    print!("{}", Report::build(store.state(), &config, Utc::now()));
    Ok(())
}
