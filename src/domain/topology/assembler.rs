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

use super::decoder::read_records;
use super::ingestor::ingest_global_services;
use super::normalizer::{normalize_cluster_flags, normalize_cluster_records, FlagClusters};
use crate::domain::model::{ClusterEntry, GlobalService, MemInfrastructure};
use crate::infrastructure::datamodel::MemDataModel;
use crate::shared::error::TopologyError;
use std::path::Path;

/// Clusters loaded from a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterView {
    /// Distinct cluster names, ascending
    pub names: Vec<String>,
    /// Records exactly as they appear in the file, local fields included
    pub clusters: Vec<ClusterEntry>,
    pub infrastructure: MemInfrastructure,
}

/// Build a fresh in-memory store from a global services file.
pub fn services_from_file(path: impl AsRef<Path>) -> Result<MemDataModel, TopologyError> {
    let path = path.as_ref();
    let services: Vec<GlobalService> = read_records(path)?;

    let mut dm = MemDataModel::new();
    ingest_global_services(&mut dm, services)?;
    Ok(dm)
}

/// Build the cluster view from a clusters file.
pub fn clusters_from_file(path: impl AsRef<Path>) -> Result<ClusterView, TopologyError> {
    let clusters: Vec<ClusterEntry> = read_records(path.as_ref())?;
    let (names, infrastructure) = normalize_cluster_records(&clusters)?;

    tracing::info!(
        path = %path.as_ref().display(),
        clusters = names.len(),
        "loaded clusters"
    );

    Ok(ClusterView {
        names,
        clusters,
        infrastructure,
    })
}

/// Build the infrastructure from `name:address` flags.
///
/// Never fails outright: malformed entries come back aggregated in
/// `FlagClusters::errors` next to whatever could be parsed.
pub fn clusters_from_flags<S: AsRef<str>>(entries: &[S]) -> FlagClusters {
    let result = normalize_cluster_flags(entries);
    if let Some(ref err) = result.errors {
        tracing::warn!(
            rejected = err.errors().len(),
            accepted = result.names.len(),
            "some cluster flags were malformed"
        );
    }
    result
}
