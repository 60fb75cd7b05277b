// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::Parser;
use mesh_topology::cli::{commands::Commands, CliArgs};
use mesh_topology::domain::config::{apply_to_topology_conf, parse_dynamic_configs, TopologyConf};
use tracing::Level;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Logs go to stderr so tables on stdout stay clean
    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // Priority: command line > config file > defaults
    let mut conf = TopologyConf::load(args.config.as_deref())?;
    if !args.properties.is_empty() {
        let dynamic_configs = parse_dynamic_configs(&args.properties)
            .map_err(|e| anyhow::anyhow!("Failed to parse dynamic configs: {}", e))?;
        apply_to_topology_conf(&dynamic_configs, &mut conf)?;
    }

    match args.command {
        Commands::Services(cmd) => cmd.execute(&conf),
        Commands::Clusters(cmd) => cmd.execute(&conf),
        Commands::Check(cmd) => cmd.execute(&conf),
    }
}
