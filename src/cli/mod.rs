//! CLI command implementations

use anyhow::Result;
use clap::{ArgMatches, Command};

pub mod commands;

/// Main CLI application
pub struct CliApp;

impl CliApp {
    /// Create the CLI application
    pub fn app() -> Command {
        Command::new("k8s-provider")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Read Kubernetes custom resources through typed data sources")
            .subcommand_negates_reqs(true)
            .subcommand(commands::init::command())
            .subcommand(commands::validate::command())
            .subcommand(commands::data_sources::command())
            .subcommand(commands::schema::command())
            .subcommand(commands::read::command())
            .subcommand(commands::info::command())
    }

    /// Run the CLI application
    pub async fn run(matches: &ArgMatches) -> Result<()> {
        match matches.subcommand() {
            Some(("init", sub_matches)) => commands::init::run(sub_matches).await,
            Some(("validate", sub_matches)) => commands::validate::run(sub_matches).await,
            Some(("data-sources", sub_matches)) => commands::data_sources::run(sub_matches).await,
            Some(("schema", sub_matches)) => commands::schema::run(sub_matches).await,
            Some(("read", sub_matches)) => commands::read::run(sub_matches).await,
            Some(("info", sub_matches)) => commands::info::run(sub_matches).await,
            _ => {
                // No subcommand provided, show help
                let _ = Self::app().print_help();
                Ok(())
            }
        }
    }
}

/// Common CLI utilities
pub mod utils {
    use anyhow::{anyhow, Context, Result};
    use clap::{Arg, ArgAction, ArgMatches, Command};
    use std::path::PathBuf;
    use tracing::debug;

    use crate::config::OutputFormat;

    /// Add the `--config` argument
    pub fn with_config_arg(command: Command) -> Command {
        command.arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Configuration file path")
                .value_name("FILE"),
        )
    }

    /// Add the `--output` argument
    pub fn with_output_arg(command: Command) -> Command {
        command.arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output format (json or yaml)")
                .value_name("FORMAT"),
        )
    }

    /// Add the provider connection arguments
    pub fn with_provider_args(command: Command) -> Command {
        command
            .arg(
                Arg::new("kubeconfig")
                    .long("kubeconfig")
                    .help("Path to the kubeconfig file")
                    .value_name("FILE"),
            )
            .arg(
                Arg::new("context")
                    .long("context")
                    .help("Kubeconfig context to use")
                    .value_name("NAME"),
            )
            .arg(
                Arg::new("offline")
                    .long("offline")
                    .help("Run the provider without a cluster")
                    .action(ArgAction::SetTrue),
            )
    }

    /// Get configuration file path from arguments or the default locations
    pub fn get_config_path(matches: &ArgMatches) -> Result<Option<PathBuf>> {
        if let Some(config_path) = matches.get_one::<String>("config") {
            let path = PathBuf::from(config_path);
            if !path.exists() {
                return Err(anyhow!("Configuration file not found: {:?}", path));
            }
            return Ok(Some(path));
        }

        let working_dir = std::env::current_dir()?;
        Ok(crate::utils::default_config_paths(&working_dir)
            .into_iter()
            .find(|path| path.exists()))
    }

    /// Load configuration from file, falling back to defaults
    pub fn load_config(matches: &ArgMatches) -> Result<crate::Config> {
        match get_config_path(matches)? {
            Some(path) => {
                debug!("Loading configuration from {:?}", path);
                crate::Config::from_file(&path)
            }
            None => {
                debug!("No configuration file found, using defaults");
                Ok(crate::Config::default())
            }
        }
    }

    /// Apply command line overrides to a loaded configuration
    pub fn apply_overrides(config: &mut crate::Config, matches: &ArgMatches) -> Result<()> {
        if let Ok(Some(kubeconfig)) = matches.try_get_one::<String>("kubeconfig") {
            config.provider.kubeconfig = Some(kubeconfig.clone());
        }
        if let Ok(Some(context)) = matches.try_get_one::<String>("context") {
            config.provider.context = Some(context.clone());
        }
        if let Ok(Some(true)) = matches.try_get_one::<bool>("offline") {
            config.provider.offline = true;
        }
        if let Ok(Some(output)) = matches.try_get_one::<String>("output") {
            config.output.format = output
                .parse::<OutputFormat>()
                .context("Invalid --output value")?;
        }

        config.validate()
    }
}
