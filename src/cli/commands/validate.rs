//! Validate command implementation

use crate::cli::utils;
use anyhow::{anyhow, Result};
use clap::{ArgMatches, Command};
use tracing::info;

pub fn command() -> Command {
    utils::with_config_arg(Command::new("validate").about("Validate configuration file"))
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    info!("Validating configuration file");

    let path = utils::get_config_path(matches)?
        .ok_or_else(|| anyhow!("No configuration file found. Use --config to specify a file or create one with 'k8s-provider init'"))?;
    let config = crate::Config::from_file(&path)?;

    println!("Configuration file is valid!");
    println!("File: {}", path.display());
    println!("Version: {}", config.version);
    println!(
        "Kubeconfig: {}",
        config.provider.kubeconfig.as_deref().unwrap_or("(inferred)")
    );
    if let Some(context) = &config.provider.context {
        println!("Context: {}", context);
    }
    println!("Offline: {}", config.provider.offline);

    Ok(())
}
