mod config;
mod error;
mod insight;
mod ledger;
mod logging;
mod models;
mod run;
mod ui;

use anyhow::Result;
use tracing::info;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    match logging::data_dir().and_then(|dir| logging::init(&dir)) {
        Ok(path) => info!(log = %path.display(), "Fintrack starting"),
        Err(e) => eprintln!("Warning: logging disabled: {e:#}"),
    }

    let config = config::Config::from_env();

    match args.len() {
        1 => run::as_tui(&config),
        2.. => run::as_cli(&args, &config),
        _ => {
            eprintln!("Usage: fintrack [command]");
            Ok(())
        }
    }
}
