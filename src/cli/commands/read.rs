//! Read command implementation

use crate::cli::utils;
use anyhow::{anyhow, Result};
use clap::{ArgMatches, Command};
use serde_json::json;
use tracing::info;

use crate::K8sProvider;

pub fn command() -> Command {
    let command = Command::new("read")
        .about("Read a data source and print its state")
        .arg(
            clap::Arg::new("type")
                .help("Data source type name")
                .value_name("TYPE")
                .required(true),
        )
        .arg(
            clap::Arg::new("name")
                .short('n')
                .long("name")
                .help("Name of the object")
                .value_name("NAME")
                .required(true),
        )
        .arg(
            clap::Arg::new("namespace")
                .long("namespace")
                .help("Namespace of the object")
                .value_name("NAMESPACE")
                .default_value("default"),
        );
    utils::with_provider_args(utils::with_output_arg(utils::with_config_arg(command)))
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let type_name = required(matches, "type")?;
    let name = required(matches, "name")?;
    let namespace = required(matches, "namespace")?;

    let mut config = utils::load_config(matches)?;
    utils::apply_overrides(&mut config, matches)?;

    info!("Reading {} {}/{}", type_name, namespace, name);

    let provider = K8sProvider::new(config.provider.clone()).await;
    let outcome = provider
        .read_data_source(
            type_name,
            json!({"metadata": {"name": name, "namespace": namespace}}),
        )
        .await?;

    for diagnostic in outcome.diagnostics.iter() {
        eprintln!(
            "{}: {}\n\n{}\n",
            diagnostic.severity, diagnostic.summary, diagnostic.detail
        );
    }

    if outcome.diagnostics.has_error() {
        return Err(anyhow!(
            "Reading {} failed with {} error(s)",
            type_name,
            outcome.diagnostics.errors().count()
        ));
    }

    let state = outcome
        .state
        .ok_or_else(|| anyhow!("Data source {} returned no state", type_name))?;
    println!("{}", config.output.render(&state)?);

    Ok(())
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a str> {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("Missing argument: {}", id))
}
