//! Schema command implementation

use crate::cli::utils;
use anyhow::Result;
use clap::{ArgMatches, Command};

use crate::K8sProvider;

pub fn command() -> Command {
    let command = Command::new("schema")
        .about("Print the schema of a data source")
        .arg(
            clap::Arg::new("type")
                .help("Data source type name")
                .value_name("TYPE")
                .required(true),
        );
    utils::with_output_arg(utils::with_config_arg(command))
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let type_name = matches
        .get_one::<String>("type")
        .map(String::as_str)
        .unwrap_or_default();

    let mut config = utils::load_config(matches)?;
    utils::apply_overrides(&mut config, matches)?;

    let provider = K8sProvider::new(config.provider.clone()).await;
    let schema = provider.schema(type_name).await?;

    println!("{}", config.output.render(&schema)?);

    Ok(())
}
