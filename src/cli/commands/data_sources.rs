//! Data sources command implementation

use anyhow::Result;
use clap::{ArgMatches, Command};

use crate::{K8sProvider, ProviderConfig};

pub fn command() -> Command {
    Command::new("data-sources")
        .about("List available data sources")
        .arg(
            clap::Arg::new("detailed")
                .short('d')
                .long("detailed")
                .help("Show data source descriptions")
                .action(clap::ArgAction::SetTrue),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let detailed = matches.get_flag("detailed");
    let provider = K8sProvider::new(ProviderConfig::default()).await;

    println!("Available data sources:");
    for type_name in provider.registry().type_names().await {
        println!("  {}", type_name);
        if detailed {
            let schema = provider.schema(&type_name).await?;
            println!("    {}", schema.description);
        }
    }

    Ok(())
}
