use clap::Parser;
use std::path::PathBuf;
use xing_core::storage::config::Config;

mod cli;
mod logging;

use cli::dispatcher::Dispatcher;
use cli::main_types::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    // Load Config
    let config_path = cli
        .config_dir
        .as_ref()
        .map(|dir| PathBuf::from(dir).join("config.toml"));

    let config = match Config::load(config_path.clone()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading config: {}", err);
            std::process::exit(1);
        }
    };

    if cli.verbose {
        eprintln!("Verbose mode is enabled");

        if let Some(config_dir) = &cli.config_dir {
            eprintln!("Using config directory: {}", config_dir);
        }
    }

    let dispatcher = Dispatcher::new(config, config_path, cli.verbose);

    // Execute the command
    if let Err(e) = dispatcher.dispatch(cli.command).await {
        eprintln!("{}: {}", e.severity().label(), e.display_friendly());
        if let Some(hint) = e.troubleshooting_hint() {
            eprintln!("Hint: {}", hint);
        }
        std::process::exit(1);
    }

    Ok(())
}
