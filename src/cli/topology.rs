//! Topology loading commands

use super::display::TableRenderer;
use crate::domain::config::TopologyConf;
use crate::domain::model::{Cluster, ClusterEntry, Infrastructure, MemInfrastructure};
use crate::domain::topology::{
    clusters_from_file, clusters_from_flags, services_from_file, unresolved_backends,
};
use crate::infrastructure::datamodel::{DataModel, MemDataModel};
use clap::Parser;
use colored::Colorize;

#[derive(Parser, Debug, Clone)]
pub struct ServicesCommand {
    /// Path to the global services file (JSON array)
    /// If not provided, uses services_file from the config file
    #[arg(long, short = 's', value_name = "PATH")]
    pub services_file: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ClustersCommand {
    /// Path to the clusters file (JSON array of {name, address, kubeconfig_path, kubeconfig_context})
    #[arg(long, value_name = "PATH", conflicts_with = "clusters")]
    pub clusters_file: Option<String>,

    /// Inline cluster as `name:address`, repeatable
    #[arg(long = "cluster", value_name = "NAME:ADDRESS")]
    pub clusters: Vec<String>,

    /// Keep well-formed --cluster entries when others are malformed
    #[arg(long)]
    pub best_effort: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CheckCommand {
    #[arg(long, short = 's', value_name = "PATH")]
    pub services_file: Option<String>,

    #[arg(long, value_name = "PATH", conflicts_with = "clusters")]
    pub clusters_file: Option<String>,

    #[arg(long = "cluster", value_name = "NAME:ADDRESS")]
    pub clusters: Vec<String>,

    #[arg(long)]
    pub best_effort: bool,
}

/// Clusters resolved from either a file or inline flags.
#[derive(Debug)]
pub struct ResolvedClusters {
    pub names: Vec<String>,
    /// File order for files, name order for flags
    pub entries: Vec<ClusterEntry>,
    pub infrastructure: MemInfrastructure,
}

impl ServicesCommand {
    pub fn execute(&self, conf: &TopologyConf) -> anyhow::Result<()> {
        let dm = load_services(self.services_file.as_deref(), conf)?;

        let renderer = TableRenderer::new();
        println!("{}", renderer.render_services(&dm.global_services()));
        Ok(())
    }
}

impl ClustersCommand {
    pub fn execute(&self, conf: &TopologyConf) -> anyhow::Result<()> {
        let resolved = resolve_clusters(
            self.clusters_file.as_deref(),
            &self.clusters,
            self.best_effort,
            conf,
        )?;

        let renderer = TableRenderer::new();
        println!("{}", renderer.render_clusters(&resolved.entries));
        Ok(())
    }
}

impl CheckCommand {
    pub fn execute(&self, conf: &TopologyConf) -> anyhow::Result<()> {
        let dm = load_services(self.services_file.as_deref(), conf)?;
        let resolved = resolve_clusters(
            self.clusters_file.as_deref(),
            &self.clusters,
            self.best_effort,
            conf,
        )?;

        let renderer = TableRenderer::new();
        println!(
            "{}",
            renderer.render_check_report(&dm.global_services(), &resolved.infrastructure)
        );

        let missing = unresolved_backends(&dm, &resolved.infrastructure);
        if !missing.is_empty() {
            let details = missing
                .iter()
                .map(|m| format!("  - service '{}' -> cluster '{}'", m.service, m.cluster))
                .collect::<Vec<_>>()
                .join("\n");
            anyhow::bail!(
                "❌ {} backend(s) reference unknown clusters\n\n{}\n\n  Known clusters: {}",
                missing.len(),
                details,
                resolved.infrastructure.cluster_names().join(", ")
            );
        }

        println!(
            "✓ {} services, {} clusters, all backends resolved",
            dm.len(),
            resolved.names.len()
        );
        Ok(())
    }
}

fn load_services(services_file: Option<&str>, conf: &TopologyConf) -> anyhow::Result<MemDataModel> {
    // Priority: command line > config file
    let path = services_file
        .map(str::to_string)
        .or_else(|| conf.services_file.clone())
        .ok_or_else(|| {
            anyhow::anyhow!("services file is required (use --services-file or set services_file)")
        })?;

    services_from_file(&path)
        .map_err(|e| anyhow::anyhow!("Failed to load global services from {}: {}", path, e))
}

/// Resolve clusters: command line file > command line flags > config file > config flags.
pub fn resolve_clusters(
    clusters_file: Option<&str>,
    cluster_flags: &[String],
    best_effort: bool,
    conf: &TopologyConf,
) -> anyhow::Result<ResolvedClusters> {
    let best_effort = best_effort || conf.best_effort;

    if let Some(path) = clusters_file {
        return load_cluster_file(path);
    }
    if !cluster_flags.is_empty() {
        return load_cluster_flags(cluster_flags, best_effort);
    }
    if let Some(ref path) = conf.clusters_file {
        return load_cluster_file(path);
    }
    if !conf.clusters.is_empty() {
        return load_cluster_flags(&conf.clusters, best_effort);
    }

    anyhow::bail!("no clusters given (use --clusters-file or --cluster name:address)")
}

fn load_cluster_file(path: &str) -> anyhow::Result<ResolvedClusters> {
    let view = clusters_from_file(path)
        .map_err(|e| anyhow::anyhow!("Failed to load clusters from {}: {}", path, e))?;
    Ok(ResolvedClusters {
        names: view.names,
        entries: view.clusters,
        infrastructure: view.infrastructure,
    })
}

fn load_cluster_flags(flags: &[String], best_effort: bool) -> anyhow::Result<ResolvedClusters> {
    let (names, infrastructure, errors) = clusters_from_flags(flags).partial();

    if let Some(err) = errors {
        if !best_effort {
            anyhow::bail!("Invalid --cluster flags: {}", err);
        }
        for e in err.errors() {
            eprintln!("{} {}", "⚠".yellow(), e);
        }
    }

    let entries = infrastructure
        .iter()
        .map(|(name, address)| ClusterEntry::from(Cluster::new(name, address)))
        .collect();

    Ok(ResolvedClusters {
        names,
        entries,
        infrastructure,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn flags(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_strict_flags_fail_on_malformed() {
        let err = resolve_clusters(None, &flags(&["a:1", "bad"]), false, &TopologyConf::default())
            .unwrap_err();
        assert!(err.to_string().contains("\"bad\""));
    }

    #[test]
    fn test_best_effort_flags_keep_partial() {
        let resolved =
            resolve_clusters(None, &flags(&["b:2", "bad", "a:1"]), true, &TopologyConf::default())
                .unwrap();
        assert_eq!(resolved.names, vec!["a", "b"]);
        assert_eq!(resolved.entries.len(), 2);
        assert_eq!(resolved.entries[0].name(), "a");
    }

    #[test]
    fn test_config_best_effort_applies() {
        let conf = TopologyConf {
            clusters: flags(&["a:1", "nope"]),
            best_effort: true,
            ..Default::default()
        };
        let resolved = resolve_clusters(None, &[], false, &conf).unwrap();
        assert_eq!(resolved.names, vec!["a"]);
    }

    #[test]
    fn test_command_line_wins_over_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"[{"name": "file", "address": "1"}]"#).unwrap();

        let conf = TopologyConf {
            clusters_file: Some(file.path().to_str().unwrap().to_string()),
            ..Default::default()
        };
        let resolved = resolve_clusters(None, &flags(&["flag:2"]), false, &conf).unwrap();
        assert_eq!(resolved.names, vec!["flag"]);

        let resolved = resolve_clusters(None, &[], false, &conf).unwrap();
        assert_eq!(resolved.names, vec!["file"]);
    }

    #[test]
    fn test_no_clusters_is_error() {
        assert!(resolve_clusters(None, &[], false, &TopologyConf::default()).is_err());
    }

    #[test]
    fn test_services_file_required() {
        let err = load_services(None, &TopologyConf::default()).unwrap_err();
        assert!(err.to_string().contains("services file is required"));
    }
}
