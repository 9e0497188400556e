//! Info command implementation

use anyhow::Result;
use clap::{ArgMatches, Command};

use crate::PROVIDER_TYPE_NAME;

pub fn command() -> Command {
    Command::new("info").about("Show tool information").arg(
        clap::Arg::new("detailed")
            .short('d')
            .long("detailed")
            .help("Show detailed information")
            .action(clap::ArgAction::SetTrue),
    )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let detailed = matches.get_flag("detailed");

    println!("k8s-provider - Kubernetes custom resource data sources");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!("Provider type name: {}", PROVIDER_TYPE_NAME);

    if detailed {
        println!("\nDetailed Information:");
        println!("  - Read-only data sources, one GET per read");
        println!("  - Dynamic Kubernetes client (kubeconfig, context or in-cluster)");
        println!("  - Offline mode without cluster access");
        println!("  - Schemas printable as JSON or YAML");
    }

    Ok(())
}
