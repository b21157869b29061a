use anyhow::Result;
use authlist::auth::{self, hash_password};
use authlist::config::Config;
use authlist::logger::Logger;
use authlist::ui;
use clap::Parser;
use std::path::PathBuf;

/// Sign in, then keep a short-lived list of items
#[derive(Parser, Debug)]
#[command(name = "authlist", version, about)]
struct Cli {
    /// Load configuration from this file instead of the default locations
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write a default configuration file to this path and exit
    #[arg(long, value_name = "PATH")]
    generate_config: Option<PathBuf>,

    /// Print the hash to store for a local account password and exit
    #[arg(long, value_name = "PASSWORD")]
    hash_password: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.generate_config {
        return Config::generate_default_config(path);
    }

    if let Some(password) = cli.hash_password {
        println!("{}", hash_password(&password));
        return Ok(());
    }

    let config = match cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    let logger = Logger::from_config(config.logging.enabled)?;
    logger.install(config.logging.level_filter())?;

    let provider = auth::create_provider(&config.auth)?;
    ui::run_app(config, provider, logger).await
}
