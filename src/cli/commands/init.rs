//! Init command implementation

use crate::Config;
use anyhow::{anyhow, Result};
use clap::{ArgMatches, Command};
use std::path::PathBuf;
use tracing::info;

pub fn command() -> Command {
    Command::new("init")
        .about("Initialize a new configuration file")
        .arg(
            clap::Arg::new("file")
                .short('f')
                .long("file")
                .help("Configuration file path")
                .value_name("FILE")
                .default_value(".k8s-provider.yaml"),
        )
        .arg(
            clap::Arg::new("offline")
                .long("offline")
                .help("Create an offline configuration")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("force")
                .long("force")
                .help("Overwrite an existing file")
                .action(clap::ArgAction::SetTrue),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let output_path = PathBuf::from(
        matches
            .get_one::<String>("file")
            .map(String::as_str)
            .unwrap_or(".k8s-provider.yaml"),
    );

    if output_path.exists() && !matches.get_flag("force") {
        return Err(anyhow!(
            "Configuration file already exists: {:?} (use --force to overwrite)",
            output_path
        ));
    }

    info!("Initializing configuration file: {:?}", output_path);

    let mut config = Config::default();
    config.provider.offline = matches.get_flag("offline");
    config.save_to_file(&output_path)?;

    println!("Configuration file created: {}", output_path.display());

    Ok(())
}
