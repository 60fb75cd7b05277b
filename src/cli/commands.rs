// CLI command definitions

use super::topology::{CheckCommand, ClustersCommand, ServicesCommand};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "mesh-topology",
    version,
    about = "Load and validate multi-cluster service mesh topologies",
    long_about = "A CLI tool that loads global services and clusters from JSON files or flags and validates the resulting topology"
)]
pub struct CliArgs {
    /// Path to the CLI config file (TOML)
    /// If not specified, uses MESH_TOPOLOGY_CONF_FILE when set
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Dynamic configuration properties (-D key=value)
    ///
    /// Keys: topology.services-file, topology.clusters-file,
    /// topology.clusters (comma-separated name:address), topology.best-effort
    #[arg(short = 'D', global = true, value_name = "KEY=VALUE")]
    pub properties: Vec<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Load a global services file and list its services
    Services(ServicesCommand),

    /// Load clusters from a file or name:address flags and list them
    Clusters(ClustersCommand),

    /// Check that every service backend references a known cluster
    Check(CheckCommand),
}
